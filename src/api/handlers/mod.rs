//! HTTP request handlers for the host server.

pub mod health;
pub mod index;

pub use health::health_handler;
pub use index::index_handler;
