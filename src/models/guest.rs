use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A visit record tied to one hotel. Updates are full overwrites,
/// last-write-wins; guests are never deleted.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: i64,
    pub hotel_id: i64,
    pub full_name: String,
    pub mobile_number: String,
    pub address: String,
    pub purpose_of_visit: String,
    pub stay_from: chrono::NaiveDate,
    pub stay_to: chrono::NaiveDate,
    pub email_id: String,
    pub id_proof_number: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GuestForm {
    pub hotel_id: i64,
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 20))]
    pub mobile_number: String,
    pub address: String,
    pub purpose_of_visit: String,
    pub stay_from: chrono::NaiveDate,
    pub stay_to: chrono::NaiveDate,
    #[validate(email)]
    pub email_id: String,
    pub id_proof_number: String,
}

/// Edit payload; `hotel_id` stays fixed and comes from the route, not the
/// form.
#[derive(Debug, Deserialize, Validate)]
pub struct GuestEditForm {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 20))]
    pub mobile_number: String,
    pub address: String,
    pub purpose_of_visit: String,
    pub stay_from: chrono::NaiveDate,
    pub stay_to: chrono::NaiveDate,
    #[validate(email)]
    pub email_id: String,
    pub id_proof_number: String,
}
