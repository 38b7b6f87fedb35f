use crate::Generator;
use linkhop_core::ShortCode;

/// A short code generator that numbers registrations from the table size.
///
/// The generated code is the decimal string of `occupied + 1`, so an empty
/// table yields `"1"`, then `"2"`, and so on. It keeps no counter of its
/// own: codes are unique only as long as the table never shrinks and no
/// custom code has taken a number that will later be generated.
#[derive(Debug, Clone, Default)]
pub struct SeqGenerator {
    prefix: String,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose codes start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self, occupied: usize) -> ShortCode {
        ShortCode::new(format!("{}{}", self.prefix, occupied + 1))
    }
}
