use std::collections::BTreeMap;

use serde::Serialize;

use super::item::InventoryItem;

/// A resolved inventory node: either a plain item or a container with its
/// contents attached. The split is a real variant so container handling is
/// exhaustive matching rather than flag probing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InventoryNode {
    Item(InventoryItem),
    Container(ContainerNode),
}

impl InventoryNode {
    /// The underlying record, container or not.
    pub fn item(&self) -> &InventoryItem {
        match self {
            InventoryNode::Item(item) => item,
            InventoryNode::Container(container) => &container.item,
        }
    }

    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            InventoryNode::Item(_) => None,
            InventoryNode::Container(container) => Some(container),
        }
    }

    pub fn id(&self) -> i64 {
        self.item().id
    }
}

/// A container item with its resolved contents and aggregate contents
/// weight. `current_weight` never includes the container's own base weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerNode {
    pub item: InventoryItem,
    pub contents: Vec<InventoryNode>,
    pub current_weight: f64,
}

/// Flat lookup view of one container: the record plus its direct children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerEntry {
    pub item: InventoryItem,
    pub contents: Vec<InventoryItem>,
}

/// The resolved inventory for one character: the ordered root-level nodes
/// and a by-id lookup of every container in the batch.
///
/// Built fresh on every pipeline call and discarded after rendering; nothing
/// is cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedInventory {
    pub character_id: i64,
    pub root_items: Vec<InventoryNode>,
    /// Keyed by item-id-as-string, the form parent pointers arrive in.
    pub containers: BTreeMap<String, ContainerEntry>,
}

impl NestedInventory {
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn container(&self, id: i64) -> Option<&ContainerEntry> {
        self.containers.get(&id.to_string())
    }
}
