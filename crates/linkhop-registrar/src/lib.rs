//! Interactive console registration for the linkhop registry.
//!
//! A [`Registrar`] prompts for a long URL and an optional short code,
//! stores the pair, prints the resulting short URL and repeats until its
//! input ends.

pub mod error;
pub mod input;
pub mod registrar;

pub use error::RegistrarError;
pub use registrar::{Registrar, RegistrarConfig};
