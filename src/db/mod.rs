//! Data access for the library database.
//!
//! Every call is a full round trip: open a connection, run one statement,
//! close the connection. Driver errors are returned untouched.

mod table;

pub use table::{Table, Value};

use log::{debug, error, info};
use rusqlite::{Connection, Result, ToSql};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const SELECT_ALL_BOOKS: &str = "SELECT * FROM Books";
pub const INSERT_BOOK: &str = "INSERT INTO Books (BookID, Title, Author) VALUES (?, ?, ?)";
pub const UPDATE_BOOK: &str = "UPDATE Books SET Title = ?, Author = ? WHERE BookID = ?";
pub const DELETE_BOOK: &str = "DELETE FROM Books WHERE BookID = ?";

#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path)
    }

    /// Runs a read query and loads the whole result set into memory.
    pub fn fetch(&self, query: &str) -> Result<Table> {
        let started_at = Instant::now();
        let conn = self.connect()?;

        let table = match Self::read_all(&conn, query) {
            Ok(table) => table,
            Err(err) => {
                error!(
                    "event=db_fetch module=db status=error duration_ms={} sql=\"{}\" error={}",
                    started_at.elapsed().as_millis(),
                    query,
                    err
                );
                return Err(err);
            }
        };
        conn.close().map_err(|(_, err)| err)?;

        debug!(
            "event=db_fetch module=db status=ok duration_ms={} sql=\"{}\" rows={}",
            started_at.elapsed().as_millis(),
            query,
            table.row_count()
        );
        Ok(table)
    }

    fn read_all(conn: &Connection, query: &str) -> Result<Table> {
        let mut stmt = conn.prepare(query)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let column_count = columns.len();
        let mut table = Table::new(columns);

        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(Value::from(row.get_ref(i)?));
            }
            table.rows.push(values);
        }
        Ok(table)
    }

    /// Runs a write statement with positional parameters and commits it.
    ///
    /// Returns the number of rows the statement touched. A failed statement
    /// leaves the transaction uncommitted and it is rolled back on drop.
    pub fn execute(&self, statement: &str, params: &[&dyn ToSql]) -> Result<usize> {
        let started_at = Instant::now();
        let mut conn = self.connect()?;

        let affected = match Self::write_one(&mut conn, statement, params) {
            Ok(affected) => affected,
            Err(err) => {
                error!(
                    "event=db_execute module=db status=error duration_ms={} sql=\"{}\" error={}",
                    started_at.elapsed().as_millis(),
                    statement,
                    err
                );
                return Err(err);
            }
        };
        conn.close().map_err(|(_, err)| err)?;

        info!(
            "event=db_execute module=db status=ok duration_ms={} sql=\"{}\" rows_affected={}",
            started_at.elapsed().as_millis(),
            statement,
            affected
        );
        Ok(affected)
    }

    fn write_one(conn: &mut Connection, statement: &str, params: &[&dyn ToSql]) -> Result<usize> {
        let tx = conn.transaction()?;
        let affected = tx.execute(statement, params)?;
        tx.commit()?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn books_db() -> (TempDir, Db) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LibraryDB.sql");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE Books (BookID TEXT PRIMARY KEY, Title TEXT NOT NULL, Author TEXT)",
        )
        .unwrap();
        (dir, Db::new(path))
    }

    #[test]
    fn fetch_empty_table_returns_columns_without_rows() {
        let (_dir, db) = books_db();
        let table = db.fetch(SELECT_ALL_BOOKS).unwrap();
        assert_eq!(table.columns, vec!["BookID", "Title", "Author"]);
        assert!(table.is_empty());
    }

    #[test]
    fn execute_commits_and_reports_rows_affected() {
        let (_dir, db) = books_db();
        let affected = db
            .execute(INSERT_BOOK, &[&"B1", &"Dune", &"Herbert"])
            .unwrap();
        assert_eq!(affected, 1);

        let table = db.fetch(SELECT_ALL_BOOKS).unwrap();
        assert_eq!(
            table.rows,
            vec![vec![
                Value::Text("B1".into()),
                Value::Text("Dune".into()),
                Value::Text("Herbert".into()),
            ]]
        );
    }

    #[test]
    fn fetch_missing_table_propagates_driver_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("empty.sql"));
        let err = db.fetch(SELECT_ALL_BOOKS).unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn malformed_sql_is_an_error() {
        let (_dir, db) = books_db();
        assert!(db.fetch("SELEC * FROM Books").is_err());
        assert!(db.execute("INSERT INTO Books VALUES", &[]).is_err());
    }

    #[test]
    fn constraint_violation_leaves_table_unchanged() {
        let (_dir, db) = books_db();
        db.execute(INSERT_BOOK, &[&"B1", &"Dune", &"Herbert"])
            .unwrap();

        let err = db
            .execute(INSERT_BOOK, &[&"B1", &"Emma", &"Austen"])
            .unwrap_err();
        assert!(matches!(err, rusqlite::Error::SqliteFailure(_, _)));

        let table = db.fetch(SELECT_ALL_BOOKS).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][1], Value::Text("Dune".into()));
    }

    #[test]
    fn fetch_preserves_sqlite_types() {
        let (_dir, db) = books_db();
        let table = db
            .fetch("SELECT 7 AS n, 1.5 AS r, NULL AS nothing, x'0102' AS b")
            .unwrap();
        assert_eq!(table.columns, vec!["n", "r", "nothing", "b"]);
        assert_eq!(
            table.rows[0],
            vec![
                Value::Integer(7),
                Value::Real(1.5),
                Value::Null,
                Value::Blob(vec![1, 2]),
            ]
        );
    }
}
