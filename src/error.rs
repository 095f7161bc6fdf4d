use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// Everything a handler can fail with, translated in one place to a
/// user-visible response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("upload failed: {0}")]
    Upload(#[from] std::io::Error),
    #[error("qr generation failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("password hash error: {0}")]
    PasswordHash(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("request failed: {self}");
        }
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound("Guest not found").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            AppError::Validation("bad input".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn database_errors_map_to_500() {
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
