pub mod item;
pub mod structure;

pub use item::{Cost, InventoryItem, ItemDefinition};
pub use structure::{ContainerEntry, ContainerNode, InventoryNode, NestedInventory};
