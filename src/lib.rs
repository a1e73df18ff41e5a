pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::ReqwestTransport;
pub use core::fetcher::{fetch_get, Fetcher};
pub use domain::model::{Payload, RawResponse};
pub use domain::ports::HttpTransport;
pub use utils::error::{FetchError, Result};
