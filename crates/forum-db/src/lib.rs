pub mod error;
pub mod models;
mod question_follows;
mod question_likes;
mod questions;
mod replies;
pub mod schema;
mod users;

#[cfg(test)]
mod test_support;

pub use error::{DbError, Result};
pub use models::{Question, QuestionFollow, QuestionLike, Reply, User};

use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// One result row keyed by column name, values translated to SQLite's native types.
pub type Record = BTreeMap<String, Value>;

/// The record store: a single read/write connection shared by every mapper.
///
/// Construct it once and pass `&Database` into mapper calls. There is no
/// pooling and no internal locking, so a `Database` belongs to one caller.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let db = Self::init(Connection::open(path)?)?;

        info!("Database opened at {}", path.display());
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;

        schema::run(&conn)?;

        Ok(Self { conn })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        f(&self.conn)
    }

    /// Run `sql` with positionally bound `params` and collect every produced row.
    /// Statements that yield no rows (INSERT, UPDATE) return an empty vec.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Record>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let columns: Vec<String> = stmt
                .column_names()
                .into_iter()
                .map(String::from)
                .collect();

            let mut rows = stmt.query(params)?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                let mut record = Record::new();
                for (idx, name) in columns.iter().enumerate() {
                    record.insert(name.clone(), row.get::<_, Value>(idx)?);
                }
                records.push(record);
            }

            Ok(records)
        })
    }

    pub fn last_insert_row_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Run an INSERT and return the rowid the store generated for it.
    pub(crate) fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(sql, params)?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub(crate) fn update<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute(sql, params)?))
    }

    /// First row decoded by `decode`, or `None` when nothing matches.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, decode: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.with_conn(|conn| Ok(conn.query_row(sql, params, decode).optional()?))
    }

    pub fn query_all<T, P, F>(&self, sql: &str, params: P, decode: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, decode)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}
