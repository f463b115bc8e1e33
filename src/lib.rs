pub mod export;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod sanitize;
pub mod tree;
pub mod validate;
pub mod weight;

pub use model::{
    ContainerEntry, ContainerNode, Cost, InventoryItem, InventoryNode, ItemDefinition,
    NestedInventory,
};
pub use pipeline::{InventoryPipeline, InventoryStats, ProcessOptions, ProcessOutcome};
pub use render::{DefaultXmlStrategy, RenderContext, RenderStrategy};
pub use sanitize::{BasicSanitizer, Sanitize};
pub use validate::{ValidationError, ValidationReport, validate};
pub use weight::{Encumbrance, encumbrance};
