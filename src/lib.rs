pub use client::StatsClient;
pub use error::{Result, StatsError};
pub use model::*;

pub mod client;
pub mod error;
pub mod model;
pub(crate) mod scraper;
