use actix_web::web;

use crate::handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::hotels::guest_landing))
        .route("/admin/hotels", web::get().to(handlers::hotels::admin_hotels))
        .route("/add-hotel", web::post().to(handlers::hotels::add_hotel))
        .route("/hotel/{name}", web::get().to(handlers::hotels::guest_form))
        .route("/submit-guest", web::post().to(handlers::guests::submit_guest))
        .route("/admin/guests", web::get().to(handlers::guests::admin_guest_menu))
        .route(
            "/admin/guests/{hotel_id}",
            web::get().to(handlers::guests::list_guests),
        )
        .route(
            "/admin/guests/{hotel_id}/edit/{guest_id}",
            web::get().to(handlers::guests::edit_guest_form),
        )
        .route(
            "/admin/guests/{hotel_id}/edit/{guest_id}",
            web::post().to(handlers::guests::update_guest),
        )
        .route(
            "/admin/guests/{hotel_id}/view/{guest_id}",
            web::get().to(handlers::guests::view_guest),
        )
        .route("/login", web::get().to(handlers::auth::login_form))
        .route("/login", web::post().to(handlers::auth::login));
}
