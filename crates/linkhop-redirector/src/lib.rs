//! HTTP redirect endpoint for the linkhop registry.
//!
//! Every `GET /<code>` is answered with a `302 Found` pointing at the URL
//! registered under `<code>`, or a `404` when nothing is registered.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linkhop_redirector::{serve, AppState};
//! use linkhop_storage::InMemoryRegistry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(InMemoryRegistry::new());
//! serve("0.0.0.0:8080".parse()?, AppState::new(registry)).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use app::App;
pub use error::{AppError, ServeError};
pub use server::{serve, serve_on};
pub use state::AppState;
