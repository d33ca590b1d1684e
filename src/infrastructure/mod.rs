pub mod audio;
pub mod emotion;
pub mod http_client;
pub mod observability;
pub mod translation;

pub use http_client::build_http_client;
