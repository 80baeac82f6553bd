//! Sample weather reports for table view demos
//!
//! The fixture is a `static` array of [`WeatherReport`] records, exposed through
//! [`get_reports`] and exportable as a `{ "reports": [ ... ] }` JSON document.

pub mod config;
pub mod errors;
pub mod fixture;
pub mod initialization;
pub mod logging;
pub mod models;
pub mod quality;

pub use errors::FixtureError;
pub use fixture::{export, get_reports, group_by_continent, to_owned_reports, write_reports, REPORTS};
pub use models::{WeatherReport, WeatherReports};
