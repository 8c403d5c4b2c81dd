use crate::config::DatabaseConfig;
use crate::db::models::{NewStudent, Student};
use crate::db::schema::SQLITE_INIT;
use crate::error::RosterError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open the configured database (creating the file if needed) and make sure
/// the schema exists.
pub async fn connect(cfg: &DatabaseConfig) -> Result<StudentsStorage, RosterError> {
    let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
        .create_if_missing(true)
        .busy_timeout(cfg.busy_timeout());
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections.max(1))
        .acquire_timeout(cfg.acquire_timeout())
        .connect_with(connect_opts)
        .await?;
    let storage = StudentsStorage::new(pool);
    storage.init_schema().await?;
    debug!(url = %cfg.url, "student storage ready");
    Ok(storage)
}

/// Repository over the `students` table. Every call borrows one pooled
/// connection for a single bound statement.
#[derive(Clone)]
pub struct StudentsStorage {
    pool: SqlitePool,
}

impl StudentsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RosterError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Student>, RosterError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, grade FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Student>, RosterError> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, grade FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a new row. Returns the id SQLite assigned to it.
    pub async fn add(&self, student: &NewStudent) -> Result<i64, RosterError> {
        let result = sqlx::query("INSERT INTO students (name, age, grade) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.grade)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Replace every non-id field of the row. Returns `false` when no row has `id`.
    pub async fn update(&self, id: i64, student: &NewStudent) -> Result<bool, RosterError> {
        let result = sqlx::query("UPDATE students SET name = ?, age = ?, grade = ? WHERE id = ?")
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.grade)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when there was nothing to delete.
    pub async fn delete(&self, id: i64) -> Result<bool, RosterError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
