pub mod seq;

pub use seq::SeqGenerator;

use linkhop_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage:
/// the caller passes in how many codes are already registered.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates a code for the next registration, given the number of
    /// codes already occupied.
    fn generate(&self, occupied: usize) -> Self::Output;
}
