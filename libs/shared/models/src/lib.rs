pub mod error;
pub mod patient;
pub mod settings;
pub mod vaccine;

pub use error::AppError;
pub use patient::Patient;
pub use settings::Settings;
pub use vaccine::{Vaccine, STATUS_COMPLETED, STATUS_OVERDUE, STATUS_PENDING, STATUS_UPCOMING};
