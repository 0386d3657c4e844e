use sqlbob::{
    AT_P, Arg, Bob, BobConfig, BobError, DOLLAR, Dialect, SqlStatement, create_table,
    drop_column, drop_table, drop_table_if_exists, has_column, has_table, rename_table, truncate,
    upsert,
};

fn users_upsert(dialect: Dialect) -> sqlbob::UpsertBuilder {
    upsert("users", dialect)
        .columns(["name", "email"])
        .values(["John Doe", "john@doe.com"])
        .replace("name", "John Does")
}

#[test]
fn create_table_with_typed_columns() {
    let sql = create_table("users")
        .string_column("name")
        .text_column("password")
        .date_column("date")
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        r#"CREATE TABLE "users" ("name" VARCHAR(255), "password" TEXT, "date" DATE);"#
    );
}

#[test]
fn create_table_mixed_column_styles_keep_order() {
    let sql = create_table("users")
        .columns(["id"])
        .types(["UUID"])
        .text_column("name")
        .to_sql()
        .unwrap();
    assert_eq!(sql, r#"CREATE TABLE "users" ("id" UUID, "name" TEXT);"#);
}

#[test]
fn drop_table_plain_and_if_exists() {
    assert_eq!(drop_table("users").to_sql().unwrap(), r#"DROP TABLE "users";"#);
    assert_eq!(
        drop_table_if_exists("users").to_sql().unwrap(),
        r#"DROP TABLE IF EXISTS "users";"#
    );
    assert_eq!(
        drop_table("users").if_exists().to_sql().unwrap(),
        r#"DROP TABLE IF EXISTS "users";"#
    );
}

#[test]
fn upsert_mysql() {
    let compiled = users_upsert(Dialect::MySql).compile().unwrap();
    assert_eq!(
        compiled.sql,
        r#"INSERT INTO "users" ("name", "email") VALUES (?, ?) ON DUPLICATE KEY UPDATE "name" = ?;"#
    );
    assert_eq!(
        compiled.args,
        vec![Arg::from("John Doe"), Arg::from("john@doe.com"), Arg::from("John Does")]
    );
}

#[test]
fn upsert_postgres_with_dollar_placeholders() {
    let compiled = users_upsert(Dialect::PostgreSql)
        .key("email")
        .placeholder_format(DOLLAR)
        .compile()
        .unwrap();
    assert_eq!(
        compiled.sql,
        r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2) ON CONFLICT ("email") DO UPDATE SET "name" = $3;"#
    );
}

#[test]
fn upsert_mssql_duplicates_key_value() {
    let compiled = users_upsert(Dialect::MsSql)
        .key_value("email", "john@doe.com")
        .placeholder_format(AT_P)
        .compile()
        .unwrap();

    assert_eq!(compiled.args.len(), 5);
    assert_eq!(compiled.args.first(), Some(&Arg::from("john@doe.com")));
    assert_eq!(compiled.args.last(), Some(&Arg::from("john@doe.com")));
    assert!(compiled.sql.starts_with("IF NOT EXISTS"));
    assert!(compiled.sql.contains("@p5"));
}

#[test]
fn upsert_mssql_requires_key_value() {
    let err = users_upsert(Dialect::MsSql).key("email").compile().unwrap_err();
    assert_eq!(err.to_string(), "unique key and value must be provided for MS SQL");

    let err = users_upsert(Dialect::MsSql).key_value("email", "").compile().unwrap_err();
    assert_eq!(err.to_string(), "unique key and value must be provided for MS SQL");
}

#[test]
fn upsert_postgres_and_sqlite_require_key() {
    for dialect in [Dialect::PostgreSql, Dialect::Sqlite] {
        let err = users_upsert(dialect).compile().unwrap_err();
        assert_eq!(err.to_string(), "unique key must be provided for PostgreSQL and SQLite");
    }
}

#[test]
fn has_table_and_column_in_either_order() {
    let expected = "SELECT * FROM information_schema.columns WHERE table_name = ? AND column_name = ? AND table_schema = current_schema();";

    let a = has_table("users").has_column("name").compile().unwrap();
    let b = has_column("name").has_table("users").compile().unwrap();

    assert_eq!(a.sql, expected);
    assert_eq!(a.args, vec![Arg::from("users"), Arg::from("name")]);
    assert_eq!(a, b);
}

#[test]
fn compile_twice_is_identical() {
    let builder = users_upsert(Dialect::PostgreSql).key("email").placeholder_format(DOLLAR);
    assert_eq!(builder.compile().unwrap(), builder.compile().unwrap());
}

#[test]
fn branches_do_not_share_values() {
    let b1 = upsert("t", Dialect::MySql).columns(["a", "b"]).replace("a", 0);
    let b2 = b1.clone().values([1, 2]);
    let b3 = b1.values([3, 4]);

    let b2 = b2.compile().unwrap();
    let b3 = b3.compile().unwrap();

    assert_eq!(b2.args, vec![Arg::Int(1), Arg::Int(2), Arg::Int(0)]);
    assert_eq!(b3.args, vec![Arg::Int(3), Arg::Int(4), Arg::Int(0)]);
}

#[test]
fn unknown_dialect_code_is_rejected() {
    let err = upsert("users", 42)
        .columns(["name"])
        .values(["x"])
        .replace("name", "y")
        .compile()
        .unwrap_err();
    assert_eq!(err, BobError::UnsupportedDialect);
    assert_eq!(err.to_string(), "provided database dialect is not supported");
}

#[test]
fn misc_ddl() {
    assert_eq!(
        rename_table("users", "people").to_sql().unwrap(),
        r#"RENAME TABLE "users" TO "people";"#
    );
    assert_eq!(truncate("users").to_sql().unwrap(), r#"TRUNCATE "users";"#);
    assert_eq!(
        drop_column("users", "name").suffix("CASCADE").to_sql().unwrap(),
        "ALTER TABLE users DROP COLUMN name CASCADE"
    );
}

#[test]
fn bob_from_toml_config() {
    let config = BobConfig::from_toml_str(
        r#"
        placeholder_format = "$"
        schema = "private"
        "#,
    )
    .unwrap();
    let bob = Bob::with_config(config);

    let compiled = bob.has_table("users").compile().unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT * FROM information_schema.tables WHERE table_name = $1 AND table_schema = $2;"
    );
    assert_eq!(compiled.args, vec![Arg::from("users"), Arg::from("private")]);

    let compiled = bob
        .upsert("users", Dialect::PostgreSql)
        .columns(["name"])
        .values(["a"])
        .key("name")
        .replace("name", "b")
        .compile()
        .unwrap();
    assert!(compiled.sql.contains("VALUES ($1)"));
}

#[cfg(feature = "postgres")]
#[test]
fn args_bind_as_tokio_postgres_params() {
    let compiled = users_upsert(Dialect::MySql).compile().unwrap();
    assert_eq!(compiled.params_ref().len(), compiled.args.len());
}
