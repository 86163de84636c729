pub mod config;
pub mod geocoding;
pub mod http;
pub mod resolver;
pub mod spatial;
pub mod util;
