pub mod auth;
pub mod guests;
pub mod hotels;

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::error::AppError;

pub(crate) fn render(tera: &Tera, template: &str, ctx: &Context) -> Result<HttpResponse, AppError> {
    let body = tera.render(template, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.to_owned()))
        .finish()
}
