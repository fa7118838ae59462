use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One simulated ticket-validation event. Written once under its own key,
/// never updated or read back. The key carries the id, so it is skipped in
/// the document body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketScan {
    #[serde(skip_serializing)]
    pub id: String,
    pub customer_id: String,
    pub timestamp: DateTime<Utc>,
    pub seat: String,
}

// Ключ документа: ticketscan::<uuid>
pub fn ticket_scan_key() -> String {
    format!("ticketscan::{}", Uuid::new_v4())
}
