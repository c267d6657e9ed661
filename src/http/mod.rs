pub mod endpoints;
pub mod transport;

pub use endpoints::{AppSettings, Microservice};
pub use transport::{ApiHttp, API_KEY_HEADER};
