pub mod memory;

pub use linkhop_core::{ReadRegistry, Registry, UrlRecord};
pub use memory::InMemoryRegistry;
