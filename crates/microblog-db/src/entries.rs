//! Entry store: the two queries against the `entries` table.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::StorageError;

/// A blog entry. Immutable once created; there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub text: String,
}

/// Entry store over a borrowed request connection.
pub struct Entries<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> Entries<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    /// List all entries, most recent first (descending id).
    ///
    /// Safe on an empty table; returns the full sequence, no limit.
    pub fn list(&self) -> Result<Vec<Entry>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, text FROM entries ORDER BY id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Entry {
                id: row.get("id")?,
                title: row.get("title")?,
                text: row.get("text")?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }

        Ok(entries)
    }

    /// Insert a new entry and commit.
    ///
    /// Parameter binding only; the values never touch the SQL text. The
    /// insert runs inside an explicit transaction and the operation succeeds
    /// only once the commit does.
    pub fn insert(&mut self, title: &str, text: &str) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO entries (title, text) VALUES (?1, ?2)",
            params![title, text],
        )?;
        tx.commit()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCHEMA;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn
    }

    #[test]
    fn test_list_empty() {
        let mut conn = test_conn();
        let entries = Entries::new(&mut conn).list().unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_insert_then_list() {
        let mut conn = test_conn();
        let mut entries = Entries::new(&mut conn);

        entries.insert("Hello", "World").unwrap();

        let all = entries.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Hello");
        assert_eq!(all[0].text, "World");
    }

    #[test]
    fn test_list_orders_most_recent_first() {
        let mut conn = test_conn();
        let mut entries = Entries::new(&mut conn);

        entries.insert("first", "a").unwrap();
        entries.insert("second", "b").unwrap();
        entries.insert("third", "c").unwrap();

        let all = entries.list().unwrap();
        let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);

        // Ids are monotonic by insertion, so descending order holds pairwise
        assert!(all.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn test_insert_binds_rather_than_interpolates() {
        let mut conn = test_conn();
        let mut entries = Entries::new(&mut conn);

        // A title that would break string-built SQL is stored verbatim
        entries
            .insert("Robert'); DROP TABLE entries;--", "body")
            .unwrap();

        let all = entries.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Robert'); DROP TABLE entries;--");
    }

    #[test]
    fn test_insert_without_table_is_an_error() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut entries = Entries::new(&mut conn);

        let result = entries.insert("Hello", "World");
        assert!(matches!(result, Err(StorageError::Sqlite(_))));
    }
}
