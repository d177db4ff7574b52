//! Integration with `rusqlite` crate.
//!
//! A UUID is bound as its canonical 36-character string. When read back, text is parsed, an
//! exact 16-byte blob is copied as-is, a blob of any other length is parsed as text, and `NULL`
//! maps to [`Uuid::NIL`]. Integer and real columns are rejected with [`UnsupportedInputError`].
//!
//! ```rust
//! use rusqlite::Connection;
//! use uuid4122::Uuid;
//!
//! let conn = Connection::open_in_memory()?;
//! conn.execute_batch("CREATE TABLE item (id TEXT)")?;
//! let id = uuid4122::uuid4();
//! conn.execute("INSERT INTO item (id) VALUES (?1)", [id])?;
//! let stored: Uuid = conn.query_row("SELECT id FROM item", [], |row| row.get(0))?;
//! assert_eq!(stored, id);
//! # Ok::<(), rusqlite::Error>(())
//! ```

#![cfg(feature = "rusqlite")]
#![cfg_attr(docsrs, doc(cfg(feature = "rusqlite")))]

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

use crate::{Error, FormatError, UnsupportedInputError, Uuid};

impl Uuid {
    /// Creates an object from a column value read through `rusqlite`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if text does not decode and [`Error::UnsupportedInput`] for
    /// integer and real values.
    pub fn from_value_ref(value: ValueRef<'_>) -> Result<Self, Error> {
        match value {
            ValueRef::Null => Ok(Self::NIL),
            ValueRef::Text(text) => Ok(parse_utf8(text)?),
            ValueRef::Blob(bytes) => match Self::from_slice(bytes) {
                Ok(e) => Ok(e),
                Err(_) => Ok(parse_utf8(bytes)?),
            },
            ValueRef::Integer(_) => Err(UnsupportedInputError("integer").into()),
            ValueRef::Real(_) => Err(UnsupportedInputError("real").into()),
        }
    }
}

fn parse_utf8(src: &[u8]) -> Result<Uuid, FormatError> {
    String::from_utf8_lossy(src).parse()
}

impl ToSql for Uuid {
    /// Binds the canonical string form for interoperability with text columns.
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(Value::Text(self.to_string())))
    }
}

impl FromSql for Uuid {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Self::from_value_ref(value).map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FormatError, Uuid, UnsupportedInputError};
    use rusqlite::{types::ValueRef, Connection};

    const TEXT: &str = "550e8400-e29b-41d4-a716-446655440000";
    const BYTES: [u8; 16] = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];

    /// Opens an in-memory database with an untyped column
    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE item (id)").unwrap();
        conn
    }

    /// Reads the first column of a single-row query as UUID
    fn select(conn: &Connection, sql: &str) -> rusqlite::Result<Uuid> {
        conn.query_row(sql, [], |row| row.get(0))
    }

    /// Unwraps the crate error carried by a conversion failure
    fn conversion_error(result: rusqlite::Result<Uuid>) -> Error {
        match result {
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, err)) => {
                *err.downcast::<Error>().unwrap()
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Stores canonical text
    #[test]
    fn stores_canonical_text() {
        let conn = open();
        conn.execute("INSERT INTO item (id) VALUES (?1)", [Uuid::from(BYTES)])
            .unwrap();
        let (text, kind): (String, String) = conn
            .query_row("SELECT id, typeof(id) FROM item", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(text, TEXT);
        assert_eq!(kind, "text");
    }

    /// Round-trips generated values through a table
    #[test]
    fn round_trips_generated_values_through_a_table() {
        let conn = open();
        let mut inserted = Vec::new();
        for _ in 0..100 {
            let e = if inserted.len() % 2 == 0 {
                crate::uuid4()
            } else {
                crate::uuid1()
            };
            conn.execute("INSERT INTO item (id) VALUES (?1)", [e]).unwrap();
            inserted.push(e);
        }

        let mut stmt = conn.prepare("SELECT id FROM item ORDER BY rowid").unwrap();
        let fetched = stmt
            .query_map([], |row| row.get::<_, Uuid>(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(fetched, inserted);
    }

    /// Reads text, exact-length blobs, and null
    #[test]
    fn reads_text_exact_length_blobs_and_null() {
        let conn = open();
        let e = Uuid::from(BYTES);
        assert_eq!(select(&conn, &format!("SELECT '{TEXT}'")).unwrap(), e);
        assert_eq!(
            select(&conn, "SELECT '{550E8400E29B41D4A716446655440000}'").unwrap(),
            e
        );
        assert_eq!(
            select(&conn, "SELECT x'550e8400e29b41d4a716446655440000'").unwrap(),
            e
        );
        assert_eq!(
            conn.query_row("SELECT ?1", [&BYTES[..]], |row| row.get::<_, Uuid>(0))
                .unwrap(),
            e
        );
        assert_eq!(select(&conn, "SELECT NULL").unwrap(), Uuid::NIL);
        assert_eq!(
            conn.query_row("SELECT NULL", [], |row| row.get::<_, Option<Uuid>>(0))
                .unwrap(),
            None
        );
    }

    /// Parses blobs of other lengths as text
    #[test]
    fn parses_blobs_of_other_lengths_as_text() {
        let conn = open();
        assert_eq!(
            select(&conn, &format!("SELECT CAST('{TEXT}' AS BLOB)")).unwrap(),
            Uuid::from(BYTES)
        );
        assert!(matches!(
            conversion_error(select(&conn, "SELECT x'00112233445566778899aabbccddee'")),
            Error::Format(FormatError::InvalidLength(15))
        ));
    }

    /// Surfaces parse errors unchanged
    #[test]
    fn surfaces_parse_errors_unchanged() {
        let conn = open();
        assert!(matches!(
            conversion_error(select(&conn, "SELECT '550e8400-e29b-41d4-a716'")),
            Error::Format(FormatError::InvalidLength(20))
        ));
        assert!(matches!(
            conversion_error(select(
                &conn,
                "SELECT '550e8400-e29b-41d4-a716-44665544000g'"
            )),
            Error::Format(FormatError::InvalidCharacter {
                found: 'g',
                index: 35
            })
        ));
    }

    /// Rejects values of unsupported types
    #[test]
    fn rejects_values_of_unsupported_types() {
        let conn = open();
        for (sql, name) in [("SELECT 42", "integer"), ("SELECT 0.5", "real")] {
            match conversion_error(select(&conn, sql)) {
                Error::UnsupportedInput(err) => {
                    assert_eq!(err, UnsupportedInputError(name));
                    assert_eq!(err.type_name(), name);
                    assert_eq!(err.to_string(), format!("cannot scan {name} into UUID"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        assert!(matches!(
            Uuid::from_value_ref(ValueRef::Integer(1)),
            Err(Error::UnsupportedInput(_))
        ));
    }
}
