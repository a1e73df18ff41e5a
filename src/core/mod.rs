pub mod batch;
pub mod decode;
pub mod fetcher;

pub use crate::domain::model::{Payload, RawResponse};
pub use crate::domain::ports::{ConfigProvider, HttpTransport};
pub use crate::utils::error::Result;
