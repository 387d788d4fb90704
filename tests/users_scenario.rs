//! End-to-end generation for the canonical `users` entity.
//!
//! Exercises the full pipeline - entity definition, classification, DDL and
//! DML builders - the way an external driver program would, including a
//! schema loaded from JSON instead of builder calls.

use entity_sql::{
    classify, DdlQueryBuilder, DmlQueryBuilder, EntityDef, FieldDef, FieldType, GeneratedValue,
    Record, SqlDialect, SqlValue,
};

fn users_entity() -> EntityDef {
    EntityDef::new("Users")
        .field(
            FieldDef::new("id", FieldType::BigInt)
                .id()
                .generated(GeneratedValue::Identity),
        )
        .field(FieldDef::new("name", FieldType::Text).column("nick_name"))
        .field(FieldDef::new("age", FieldType::Integer).column("old").length(3))
        .field(FieldDef::new("email", FieldType::Text).not_null())
        .field(FieldDef::new("index", FieldType::Integer).transient())
}

#[test]
fn generates_full_statement_set_for_users() {
    let meta = classify(&users_entity(), &SqlDialect::h2()).unwrap();

    assert_eq!(
        DdlQueryBuilder::new(&meta).build(),
        "create table users (id bigint auto_increment,nick_name varchar(255),\
         old integer,email varchar(255) not null, \
         constraint pk_users primary key (id));"
    );

    let dml = DmlQueryBuilder::new(&meta);
    let jeongwon = Record::new()
        .set("id", SqlValue::Null)
        .set("name", "정원")
        .set("age", 15)
        .set("email", "a@a.com")
        .set("index", 1);

    assert_eq!(
        dml.insert(&jeongwon).unwrap(),
        "insert into users (nick_name,old,email) values ('정원',15,'a@a.com')"
    );
    assert_eq!(dml.find_all(), "select id,nick_name,old,email from users");
    assert_eq!(
        dml.find_by_id(1),
        "select id,nick_name,old,email from users where id=1"
    );
    assert_eq!(
        dml.delete(&jeongwon.set("id", 1i64)).unwrap(),
        "delete from users where id=1"
    );
}

#[test]
fn json_described_schema_generates_identical_sql() {
    let json = r#"{
        "name": "Users",
        "fields": [
            {"name": "id", "field_type": "bigint", "id": true, "generated": "identity"},
            {"name": "name", "field_type": "text", "column": "nick_name"},
            {"name": "age", "field_type": "integer", "column": "old", "length": 3},
            {"name": "email", "field_type": "text", "nullable": false},
            {"name": "index", "field_type": "integer", "transient": true}
        ]
    }"#;

    let from_json: EntityDef = serde_json::from_str(json).unwrap();
    assert_eq!(from_json, users_entity());

    let dialect = SqlDialect::h2();
    let meta = classify(&from_json, &dialect).unwrap();
    let reference = classify(&users_entity(), &dialect).unwrap();
    assert_eq!(
        DdlQueryBuilder::new(&meta).build(),
        DdlQueryBuilder::new(&reference).build()
    );
}
