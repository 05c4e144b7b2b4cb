//! Database row types. These map directly to SQLite rows.
//! Ids are UUID strings, timestamps RFC 3339 strings in UTC.

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct ChirpRow {
    pub id: String,
    pub body: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}
