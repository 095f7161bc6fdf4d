use actix_files::Files;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_checkin::config::Config;
use hotel_checkin::{db, routes, templates};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config.database_url).await;

    // Run migrations
    log::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let tera = templates().expect("Failed to load templates");
    let session_key = config.session_key();
    std::fs::create_dir_all(&config.upload_dir)?;

    log::info!("Starting server at http://{}", config.bind_addr);

    let pool_data = web::Data::new(pool);
    let tera_data = web::Data::new(tera);
    let upload_dir = config.upload_dir.clone();
    let bind_addr = config.bind_addr.clone();
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(tera_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::Logger::default())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .configure(routes::config)
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
