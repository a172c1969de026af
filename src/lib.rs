// Holiday alignment service core: given a date and two country codes, find
// the soonest future date on which both countries observe a public holiday.

pub mod aligner;
pub mod client;
pub mod config;
pub mod error;
pub mod iso;
pub mod model;

// Re-export key types for convenience
pub use aligner::HolidayAligner;
pub use client::{HolidaySource, NagerClient};
pub use config::ClientConfig;
pub use error::{ClientError, ErrorClass, HolidayError};
pub use model::{HolidayAlignment, PublicHoliday};
