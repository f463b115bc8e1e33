use serde::{Deserialize, Serialize};

/// Purchase cost of an item, e.g. `{ "quantity": 15, "unit": "gp" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    pub quantity: f64,
    pub unit: String,
}

fn default_bundle_size() -> u32 {
    1
}

/// Immutable catalog data for an item, as supplied by the upstream source.
///
/// Every field the upstream may omit carries a serde default so partially
/// populated records deserialize rather than fail; the validator reports the
/// gaps separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDefinition {
    pub id: i64,
    pub name: String,
    /// Listed weight in pounds. Absent means weightless (treated as 0).
    pub weight: Option<f64>,
    /// Number of units one listed weight covers (50 arrows / 1 lb ⇒ 50).
    /// Always at least 1; upstream zeroes are normalized at use sites.
    #[serde(default = "default_bundle_size")]
    pub bundle_size: u32,
    pub is_container: bool,
    /// Scalar applied to contained items' weight contribution. Only
    /// meaningful on containers: absent or 1 is a normal container, 0 is a
    /// weightless ("magic") one.
    pub weight_multiplier: Option<f64>,
    pub filter_type: String,
    pub sub_type: Option<String>,
    pub cost: Option<Cost>,
    pub description: Option<String>,
}

impl Default for ItemDefinition {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            weight: None,
            bundle_size: 1,
            is_container: false,
            weight_multiplier: None,
            filter_type: String::new(),
            sub_type: None,
            cost: None,
            description: None,
        }
    }
}

impl ItemDefinition {
    /// True for containers whose contents weigh nothing toward any ancestor.
    pub fn is_weightless(&self) -> bool {
        self.is_container && self.weight_multiplier == Some(0.0)
    }

    /// The type label shown to the consuming application: the more specific
    /// sub-type when present, the filter type otherwise.
    pub fn display_type(&self) -> &str {
        self.sub_type.as_deref().unwrap_or(&self.filter_type)
    }
}

/// One record of the flat inventory list fetched for a character.
///
/// `container_entity_id` is a parent pointer: the owning character's id for
/// root-level items, or the id of another record whose definition marks it a
/// container. Unresolvable pointers are tolerated: the tree builder places
/// such items at the character root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    pub id: i64,
    pub entity_type_id: i64,
    pub definition: ItemDefinition,
    /// May be zero or negative; such items are excluded from rendering
    /// unless `include_zero_quantity_items` is set.
    pub quantity: f64,
    pub is_attuned: bool,
    pub equipped: bool,
    pub container_entity_id: i64,
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self {
            id: 0,
            entity_type_id: 0,
            definition: ItemDefinition::default(),
            quantity: 0.0,
            is_attuned: false,
            equipped: false,
            container_entity_id: 0,
        }
    }
}
