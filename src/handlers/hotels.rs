use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use tera::{Context, Tera};

use super::{redirect, render};
use crate::config::Config;
use crate::error::AppError;
use crate::models::hotel::Hotel;
use crate::{qr, upload};

#[derive(MultipartForm)]
pub struct HotelForm {
    pub name: Text<String>,
    pub address: Text<String>,
    pub logo: Option<TempFile>,
}

/// GET `/` - hotel list for guests landing on the site without a QR scan.
pub async fn guest_landing(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, AppError> {
    let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels")
        .fetch_all(pool.get_ref())
        .await?;

    let mut ctx = Context::new();
    ctx.insert("hotels", &hotels);
    render(&tera, "guest_landing.html", &ctx)
}

/// GET `/admin/hotels` - the admin list, unfiltered and unpaginated.
pub async fn admin_hotels(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, AppError> {
    let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels")
        .fetch_all(pool.get_ref())
        .await?;

    let mut ctx = Context::new();
    ctx.insert("hotels", &hotels);
    render(&tera, "hotels.html", &ctx)
}

/// POST `/add-hotel` - multipart registration: optional logo upload, QR
/// generation, insert, redirect back to the list.
///
/// The QR payload is built from the hotel *name*, not its id, so the
/// printed code only resolves while the name round-trips exactly.
pub async fn add_hotel(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    form: MultipartForm<HotelForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let name = form.name.into_inner();
    let address = form.address.into_inner();

    if name.trim().is_empty() {
        return Err(AppError::Validation("hotel name is required".into()));
    }

    let logo = match form.logo.as_ref().filter(|file| file.size > 0) {
        Some(file) => Some(upload::store_logo(
            file.file.path(),
            file.file_name.as_deref(),
            &config.upload_dir,
        )?),
        None => None,
    };

    let qr_code = qr::data_url(&format!("{}/hotel/{}", config.public_base_url, name))?;

    sqlx::query("INSERT INTO hotels (name, logo, address, qr_code) VALUES (?, ?, ?, ?)")
        .bind(&name)
        .bind(&logo)
        .bind(&address)
        .bind(&qr_code)
        .execute(pool.get_ref())
        .await?;

    Ok(redirect("/admin/hotels"))
}

/// GET `/hotel/{name}` - the check-in form a scanned QR code lands on.
/// Exact-match lookup by name; unknown names get a plain 404.
pub async fn guest_form(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();

    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE name = ?")
        .bind(&name)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(AppError::NotFound("Hotel not found"))?;

    let mut ctx = Context::new();
    ctx.insert("hotel", &hotel);
    render(&tera, "guest_form.html", &ctx)
}
