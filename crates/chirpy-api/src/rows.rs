//! Conversions from SQLite rows to API types.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use chirpy_db::models::{ChirpRow, UserRow};
use chirpy_types::api::{Chirp, User};

fn parse_id(value: &str, field: &str, row_id: &str) -> Uuid {
    value.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} '{}' on row '{}': {}", field, value, row_id, e);
        Uuid::default()
    })
}

fn parse_timestamp(value: &str, field: &str, row_id: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} '{}' on row '{}': {}", field, value, row_id, e);
        DateTime::default()
    })
}

pub fn user_from_row(row: UserRow) -> User {
    User {
        id: parse_id(&row.id, "id", &row.id),
        created_at: parse_timestamp(&row.created_at, "created_at", &row.id),
        updated_at: parse_timestamp(&row.updated_at, "updated_at", &row.id),
        email: row.email,
    }
}

pub fn chirp_from_row(row: ChirpRow) -> Chirp {
    Chirp {
        id: parse_id(&row.id, "id", &row.id),
        created_at: parse_timestamp(&row.created_at, "created_at", &row.id),
        updated_at: parse_timestamp(&row.updated_at, "updated_at", &row.id),
        user_id: parse_id(&row.user_id, "user_id", &row.id),
        body: row.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_fields_fall_back_to_defaults() {
        let chirp = chirp_from_row(ChirpRow {
            id: "not-a-uuid".into(),
            body: "hello".into(),
            user_id: "7f1e1b9a-4c2d-4d1e-9b8a-0c1d2e3f4a5b".into(),
            created_at: "yesterday".into(),
            updated_at: "2024-01-02T03:04:05.000000Z".into(),
        });
        assert_eq!(chirp.id, Uuid::default());
        assert_eq!(chirp.created_at, DateTime::<Utc>::default());
        assert_eq!(chirp.updated_at.to_rfc3339(), "2024-01-02T03:04:05+00:00");
        assert_eq!(chirp.body, "hello");
    }
}
