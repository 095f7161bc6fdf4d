pub mod guest;
pub mod hotel;
pub mod user;
