use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use tera::{Context, Tera};
use validator::Validate;

use super::{redirect, render};
use crate::error::AppError;
use crate::models::guest::{Guest, GuestEditForm, GuestForm};
use crate::models::hotel::Hotel;

/// POST `/submit-guest` - the check-in form submission. Input is validated
/// at the boundary and the hotel reference is checked before the insert.
pub async fn submit_guest(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    form: web::Form<GuestForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    form.validate()?;

    if form.stay_from > form.stay_to {
        return Err(AppError::Validation(
            "stay end date must not precede the start date".into(),
        ));
    }

    let hotel_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels WHERE id = ?")
        .bind(form.hotel_id)
        .fetch_one(pool.get_ref())
        .await?;
    if hotel_count == 0 {
        return Err(AppError::NotFound("Hotel not found"));
    }

    sqlx::query(
        r#"
        INSERT INTO guests
            (hotel_id, full_name, mobile_number, address, purpose_of_visit,
             stay_from, stay_to, email_id, id_proof_number)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(form.hotel_id)
    .bind(&form.full_name)
    .bind(&form.mobile_number)
    .bind(&form.address)
    .bind(&form.purpose_of_visit)
    .bind(form.stay_from)
    .bind(form.stay_to)
    .bind(&form.email_id)
    .bind(&form.id_proof_number)
    .execute(pool.get_ref())
    .await?;

    render(&tera, "thankyou.html", &Context::new())
}

/// GET `/admin/guests` - hotel menu shown before picking a guest list.
pub async fn admin_guest_menu(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, AppError> {
    let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels")
        .fetch_all(pool.get_ref())
        .await?;

    let mut ctx = Context::new();
    ctx.insert("hotels", &hotels);
    render(&tera, "admin_guests.html", &ctx)
}

/// GET `/admin/guests/{hotel_id}` - guests filtered to one hotel.
pub async fn list_guests(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let hotel_id = path.into_inner();

    let guests = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE hotel_id = ?")
        .bind(hotel_id)
        .fetch_all(pool.get_ref())
        .await?;

    let mut ctx = Context::new();
    ctx.insert("hotel_id", &hotel_id);
    ctx.insert("guests", &guests);
    render(&tera, "guests.html", &ctx)
}

/// GET `/admin/guests/{hotel_id}/edit/{guest_id}` - load a guest for
/// editing; unknown ids get a plain 404.
pub async fn edit_guest_form(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (hotel_id, guest_id) = path.into_inner();

    let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = ?")
        .bind(guest_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(AppError::NotFound("Guest not found"))?;

    let mut ctx = Context::new();
    ctx.insert("hotel_id", &hotel_id);
    ctx.insert("guest", &guest);
    render(&tera, "edit_guest.html", &ctx)
}

/// POST `/admin/guests/{hotel_id}/edit/{guest_id}` - full overwrite of all
/// editable fields, last write wins. The update runs unconditionally: an
/// id that resolves to nothing updates zero rows and still redirects.
pub async fn update_guest(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
    form: web::Form<GuestEditForm>,
) -> Result<HttpResponse, AppError> {
    let (hotel_id, guest_id) = path.into_inner();
    let form = form.into_inner();
    form.validate()?;

    if form.stay_from > form.stay_to {
        return Err(AppError::Validation(
            "stay end date must not precede the start date".into(),
        ));
    }

    sqlx::query(
        r#"
        UPDATE guests
        SET full_name = ?, mobile_number = ?, address = ?, purpose_of_visit = ?,
            stay_from = ?, stay_to = ?, email_id = ?, id_proof_number = ?
        WHERE id = ?
        "#,
    )
    .bind(&form.full_name)
    .bind(&form.mobile_number)
    .bind(&form.address)
    .bind(&form.purpose_of_visit)
    .bind(form.stay_from)
    .bind(form.stay_to)
    .bind(&form.email_id)
    .bind(&form.id_proof_number)
    .bind(guest_id)
    .execute(pool.get_ref())
    .await?;

    Ok(redirect(&format!("/admin/guests/{hotel_id}")))
}

/// GET `/admin/guests/{hotel_id}/view/{guest_id}` - read-only detail view.
pub async fn view_guest(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (hotel_id, guest_id) = path.into_inner();

    let guest = sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = ?")
        .bind(guest_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(AppError::NotFound("Guest not found"))?;

    let mut ctx = Context::new();
    ctx.insert("hotel_id", &hotel_id);
    ctx.insert("guest", &guest);
    render(&tera, "view_guest.html", &ctx)
}
