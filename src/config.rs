use actix_web::cookie::Key;
use std::env;
use std::path::PathBuf;

/// Runtime settings, read once from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Prefix for the URL embedded in each hotel's QR code.
    pub public_base_url: String,
    pub upload_dir: PathBuf,
    /// Cookie signing secret, at least 32 bytes. Optional: when unset a
    /// random key is generated and sessions do not survive a restart.
    pub session_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "public/uploads".into())
                .into(),
            session_secret: env::var("SESSION_SECRET").ok(),
        }
    }

    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => Key::generate(),
        }
    }
}
