use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

use super::Roster;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("cannot open database {path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create 'STUDENTS' table: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("statement failed: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("query failed: {0}")]
    Read(#[source] rusqlite::Error),

    /// The statement ran but matched no row.
    #[error("ID {0} not found")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: f64,
}

impl Student {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            grade: row.get(2)?,
        })
    }
}

/// An open student database. The connection is released when this is
/// closed or dropped.
pub struct Db {
    conn: Connection,
    path: String,
}

impl Db {
    /// Opens the database file at `path`, creating it if missing.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DbError::Connection {
            path: path.to_owned(),
            source,
        })?;

        Ok(Self {
            conn,
            path: path.to_owned(),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| DbError::Connection {
            path: ":memory:".to_owned(),
            source,
        })?;

        Ok(Self {
            conn,
            path: ":memory:".to_owned(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Creates the `STUDENTS` table unless it already exists.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS STUDENTS (
                        ID      INTEGER PRIMARY KEY AUTOINCREMENT,
                        NAME    TEXT    NOT NULL,
                        GRADE   REAL    NOT NULL)",
            )
            .map_err(DbError::Schema)
    }

    /// Inserts a student and returns the id the engine assigned to it.
    pub fn insert_student(&self, name: &str, grade: f64) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare("INSERT INTO STUDENTS (NAME, GRADE) VALUES (?1, ?2)")
            .map_err(DbError::Write)?;
        stmt.insert(params![name, grade]).map_err(DbError::Write)
    }

    pub fn delete_student(&self, id: i64) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("DELETE FROM STUDENTS WHERE ID = ?1")
            .map_err(DbError::Write)?;
        let changed = stmt.execute(params![id]).map_err(DbError::Write)?;

        match changed {
            0 => Err(DbError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Sets the grade of an existing student. Name and id are left alone.
    pub fn update_grade(&self, id: i64, grade: f64) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("UPDATE STUDENTS SET GRADE = ?1 WHERE ID = ?2")
            .map_err(DbError::Write)?;
        let changed = stmt.execute(params![grade, id]).map_err(DbError::Write)?;

        match changed {
            0 => Err(DbError::NotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn query_student(&self, id: i64) -> Result<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT ID, NAME, GRADE FROM STUDENTS WHERE ID = ?1")
            .map_err(DbError::Read)?;

        stmt.query_row(params![id], Student::from_row)
            .optional()
            .map_err(DbError::Read)
    }

    /// Returns every student in the engine's scan order.
    pub fn query_students(&self) -> Result<Roster> {
        let mut stmt = self
            .conn
            .prepare("SELECT ID, NAME, GRADE FROM STUDENTS")
            .map_err(DbError::Read)?;

        let students = stmt
            .query_map([], Student::from_row)
            .map_err(DbError::Read)?
            .collect::<rusqlite::Result<Roster>>()
            .map_err(DbError::Read)?;

        Ok(students)
    }

    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, source)| DbError::Connection { path, source })
    }
}
