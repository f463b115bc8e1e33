use serde_json::Value;

use crate::model::InventoryItem;

/// Convert raw upstream records into typed inventory items.
///
/// Lenient by construction: optional fields default, a record with no
/// `definition` gets an empty one, and a record that cannot be interpreted
/// at all is skipped; one malformed record never aborts the rest of the
/// batch. Tolerated gaps are logged at warn level.
pub fn items_from_records(records: &[Value]) -> Vec<InventoryItem> {
    let mut items = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.get("definition").is_none() {
            tracing::warn!("record {index}: no definition present, substituting an empty one");
        }
        match serde_json::from_value::<InventoryItem>(record.clone()) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!("record {index}: skipping malformed inventory record: {err}");
            }
        }
    }

    items
}

/// Parse a JSON document holding the flat item list.
///
/// Fails fast when the document is not an array: that is a caller error,
/// unlike malformed individual records, which are tolerated per
/// [`items_from_records`].
pub fn items_from_str(json: &str) -> Result<Vec<InventoryItem>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    Ok(items_from_records(&records))
}
