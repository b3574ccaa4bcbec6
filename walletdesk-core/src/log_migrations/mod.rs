//! SQL for logs.duckdb, embedded with include_str!

/// (file name, sql) pairs applied in order. The first entry creates
/// `sys_migrations` and must stay first; append new NNN_*.sql files at the end.
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    (
        "001_initial_schema.sql",
        include_str!("001_initial_schema.sql"),
    ),
];
