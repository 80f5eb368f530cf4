pub mod vaccine;
pub mod reminders;

pub use vaccine::VaccineService;
pub use reminders::ReminderService;
