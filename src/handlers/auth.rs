use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use tera::{Context, Tera};

use super::{redirect, render};
use crate::error::AppError;
use crate::models::user::User;
use crate::password;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub usertype: String,
}

/// GET `/login` - the form, with no prior error.
pub async fn login_form(tera: web::Data<Tera>) -> Result<HttpResponse, AppError> {
    let mut ctx = Context::new();
    ctx.insert("error", &None::<String>);
    render(&tera, "login.html", &ctx)
}

/// POST `/login` - authenticate and redirect by the *submitted* role
/// string. Every failure path re-renders the form: credential mismatches
/// get one generic message, unexpected errors are logged with their cause
/// and rendered as another, and nothing is ever propagated to the client.
pub async fn login(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match check_credentials(pool.get_ref(), &form).await {
        Ok(Some(user)) => {
            if let Err(err) = session.insert("user_id", user.id) {
                log::error!("failed to store session for {}: {err}", user.username);
                return login_error(&tera, "An unexpected error occurred. Please try again.");
            }
            match form.usertype.to_lowercase().as_str() {
                "admin" => Ok(redirect("/admin/hotels")),
                "guest" => Ok(redirect("/admin/guests")),
                _ => login_error(&tera, "Invalid user type."),
            }
        }
        Ok(None) => login_error(&tera, "Invalid username, password, or role."),
        Err(err) => {
            log::error!("login failed for {}: {err}", form.username);
            login_error(&tera, "An unexpected error occurred. Please try again.")
        }
    }
}

/// Exact username match, then the submitted role compared case-insensitively
/// against the stored `usertype` column, then hash verification. `Ok(None)`
/// covers all three mismatches indistinguishably.
async fn check_credentials(pool: &SqlitePool, form: &LoginForm) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(&form.username)
        .fetch_optional(pool)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };
    if !user.usertype.eq_ignore_ascii_case(&form.usertype) {
        return Ok(None);
    }

    let verified = password::verify(&form.password, &user.password)
        .map_err(|err| AppError::PasswordHash(err.to_string()))?;
    Ok(verified.then_some(user))
}

fn login_error(tera: &Tera, message: &str) -> Result<HttpResponse, AppError> {
    let mut ctx = Context::new();
    ctx.insert("error", &Some(message));
    render(tera, "login.html", &ctx)
}
