pub mod error;
pub mod health;
pub mod orders;

pub use error::AppError;
