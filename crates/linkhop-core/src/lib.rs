//! Core types and traits for the linkhop URL shortener.
//!
//! This crate provides the types shared by the registry backend, the
//! redirect endpoint and the console registration loop.

pub mod error;
pub mod registry;
pub mod shortcode;
pub mod url;

pub use error::CoreError;
pub use registry::{ReadRegistry, Registry, UrlRecord};
pub use shortcode::ShortCode;
pub use url::normalize_long_url;
