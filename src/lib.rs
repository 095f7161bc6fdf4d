pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod qr;
pub mod routes;
pub mod upload;

/// Load the HTML template set shipped with the crate.
pub fn templates() -> Result<tera::Tera, tera::Error> {
    tera::Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html"))
}
