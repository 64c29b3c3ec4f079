pub mod config;
pub mod drip_type;
pub mod filter;
pub mod message;

use chrono::{DateTime, Utc};
use coursedrip_core::dates;

/// Resolve the `--at` evaluation instant; defaults to now.
pub(crate) fn parse_at(at: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match at {
        Some(raw) => Ok(dates::parse_drip_date(raw)?),
        None => Ok(Utc::now()),
    }
}
