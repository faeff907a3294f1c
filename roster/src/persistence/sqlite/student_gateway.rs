//! SQLite-backed gateway for the `student` table.

use sqlx::SqlitePool;

use crate::persistence::traits::StudentGateway;
use crate::persistence::{PersistenceError, StudentRow};
use crate::query::SortKey;

type RawRow = (String, String, i64, i64, i64, i64);

fn into_row((sno, name, korean, english, math, science): RawRow) -> StudentRow {
    StudentRow {
        sno,
        name,
        korean,
        english,
        math,
        science,
    }
}

/// Listing query for each sort key. Ties fall back to storage order.
fn sorted_listing_sql(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => {
            "SELECT sno, name, korean, english, math, science FROM student \
             ORDER BY name ASC, rowid ASC"
        }
        SortKey::Id => {
            "SELECT sno, name, korean, english, math, science FROM student \
             ORDER BY sno ASC"
        }
        SortKey::TotalDesc => {
            "SELECT sno, name, korean, english, math, science FROM student \
             ORDER BY (korean + english + math + science) DESC, rowid ASC"
        }
    }
}

/// SQLite implementation of [`StudentGateway`].
pub struct SqliteStudentGateway {
    pool: SqlitePool,
}

impl SqliteStudentGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentGateway for SqliteStudentGateway {
    async fn fetch_all(&self) -> Result<Vec<StudentRow>, PersistenceError> {
        let mut conn = self.pool.acquire().await?;
        let rows: Vec<RawRow> = sqlx::query_as(
            "SELECT sno, name, korean, english, math, science FROM student ORDER BY rowid ASC",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(into_row).collect())
    }

    async fn fetch_sorted(&self, key: SortKey) -> Result<Vec<StudentRow>, PersistenceError> {
        let mut conn = self.pool.acquire().await?;
        let rows: Vec<RawRow> = sqlx::query_as(sorted_listing_sql(key))
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(into_row).collect())
    }

    async fn insert(&self, row: &StudentRow) -> Result<u64, PersistenceError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO student (sno, name, korean, english, math, science)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.sno)
        .bind(&row.name)
        .bind(row.korean)
        .bind(row.english)
        .bind(row.math)
        .bind(row.science)
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(PersistenceError::UniqueViolation(row.sno.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, row: &StudentRow) -> Result<u64, PersistenceError> {
        let mut conn = self.pool.acquire().await?;
        let done = sqlx::query(
            r#"
            UPDATE student
            SET name = ?, korean = ?, english = ?, math = ?, science = ?
            WHERE sno = ?
            "#,
        )
        .bind(&row.name)
        .bind(row.korean)
        .bind(row.english)
        .bind(row.math)
        .bind(row.science)
        .bind(&row.sno)
        .execute(&mut *conn)
        .await?;

        Ok(done.rows_affected())
    }

    async fn delete(&self, sno: &str) -> Result<u64, PersistenceError> {
        let mut conn = self.pool.acquire().await?;
        let done = sqlx::query("DELETE FROM student WHERE sno = ?")
            .bind(sno)
            .execute(&mut *conn)
            .await?;

        Ok(done.rows_affected())
    }
}
