pub mod concierge;
pub mod customer;
pub mod ticket_scan;

pub use concierge::Concierge;
pub use customer::Customer;
pub use ticket_scan::TicketScan;
