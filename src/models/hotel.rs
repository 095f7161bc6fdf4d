use serde::{Deserialize, Serialize};

/// A registered property with a guest-facing QR entry point. `name` doubles
/// as the lookup key for the guest form URL, so it should be unique and
/// URL-safe; neither is enforced. `qr_code` is a data-URL-encoded image.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub address: String,
    pub qr_code: String,
}
