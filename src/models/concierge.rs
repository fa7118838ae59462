use serde::Serialize;

/// A concierge looks after a fixed group of VIP customers. The `vips` list
/// holds customer document keys; these are weak references, nothing cascades
/// if a customer document disappears.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concierge {
    pub name: String,
    pub cell_number: String,
    pub vips: Vec<String>,
}

pub fn concierge_key(id: u32) -> String {
    format!("concierge::{id}")
}
