//! Inserts a staff user with a hashed password. Accounts are created
//! out-of-band; the service itself exposes no registration route.
//!
//! Usage: add_user <username> <password> <usertype>

use dotenv::dotenv;
use env_logger::Env;

use hotel_checkin::config::Config;
use hotel_checkin::{db, password};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(pass), Some(usertype)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: add_user <username> <password> <usertype>");
        std::process::exit(2);
    };

    let config = Config::from_env();
    let pool = db::get_db_pool(&config.database_url).await;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let hashed = password::hash(&pass).expect("Failed to hash password");
    sqlx::query("INSERT INTO users (username, password, usertype) VALUES (?, ?, ?)")
        .bind(&username)
        .bind(&hashed)
        .bind(&usertype)
        .execute(&pool)
        .await
        .expect("Failed to insert user");

    log::info!("created {usertype} user {username}");
    Ok(())
}
