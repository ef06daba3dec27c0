use sqlx::PgPool;

/// All `id` columns must be uuid: primary keys are generated by the
/// application, never by the database.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_uuid(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "expected at least one entity table");
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "uuid",
            "Table {table}.id should be uuid, got {data_type}"
        );
    }
}

/// Every entity table must carry the audit columns as timestamptz and the
/// soft-delete flag as boolean.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_audit_columns(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for (col, expected) in [
            ("created_at", "timestamp with time zone"),
            ("modified_at", "timestamp with time zone"),
            ("is_active", "boolean"),
        ] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, expected,
                "Table {table}.{col} should be {expected}, got {data_type}"
            );
        }
    }
}
