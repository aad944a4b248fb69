//! Card system: definitions, instances, registry, and the dealt deck.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card face (unique name + image)
//! - `CardId`: Pair identity, index into the registry
//! - `CardInstance`: One card on the table (flipped, matched)
//! - `CardRegistry`: Validated definition set kept for restarts
//! - `Deck`: Two instances per definition, shuffled in place

pub mod deck;
pub mod definition;
pub mod instance;
pub mod loader;
pub mod registry;

pub use deck::{build_deck, Deck};
pub use definition::{CardDefinition, CardId};
pub use instance::{CardInstance, InstanceId};
pub use loader::parse_definitions;
pub use registry::CardRegistry;
