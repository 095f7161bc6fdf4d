use serde::{Deserialize, Serialize};

/// Staff account. Created out-of-band (there is no registration route);
/// `password` holds an argon2 hash, never plaintext.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub usertype: String,
}
