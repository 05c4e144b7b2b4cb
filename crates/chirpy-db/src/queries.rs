use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::Database;
use crate::models::{ChirpRow, UserRow};

/// Fixed-width timestamps so lexical order matches time order.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl Database {
    // -- Users --

    /// Insert a user. Returns `None` when the email is already registered.
    pub fn create_user(&self, id: &str, email: &str, password_hash: &str) -> Result<Option<UserRow>> {
        let ts = now();
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (id, email, password, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
                (id, email, password_hash, &ts),
            );
            match inserted {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
            Ok(Some(UserRow {
                id: id.to_string(),
                email: email.to_string(),
                password: password_hash.to_string(),
                created_at: ts.clone(),
                updated_at: ts.clone(),
            }))
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    /// Delete every user. Their chirps go with them via ON DELETE CASCADE.
    /// Returns the number of users removed.
    pub fn delete_all_users(&self) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM users", [])?))
    }

    // -- Chirps --

    pub fn create_chirp(&self, id: &str, body: &str, user_id: &str) -> Result<ChirpRow> {
        let ts = now();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO chirps (id, body, user_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
                (id, body, user_id, &ts),
            )?;
            Ok(ChirpRow {
                id: id.to_string(),
                body: body.to_string(),
                user_id: user_id.to_string(),
                created_at: ts.clone(),
                updated_at: ts.clone(),
            })
        })
    }

    pub fn get_chirp_by_id(&self, id: &str) -> Result<Option<ChirpRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, body, user_id, created_at, updated_at FROM chirps WHERE id = ?1",
                    [id],
                    chirp_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// All chirps, oldest first.
    pub fn list_chirps(&self) -> Result<Vec<ChirpRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, body, user_id, created_at, updated_at
                 FROM chirps
                 ORDER BY created_at ASC, rowid ASC",
            )?;

            let rows = stmt
                .query_map([], chirp_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, password, created_at, updated_at FROM users WHERE email = ?1",
    )?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn chirp_from_row(row: &Row<'_>) -> rusqlite::Result<ChirpRow> {
    Ok(ChirpRow {
        id: row.get(0)?,
        body: row.get(1)?,
        user_id: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
