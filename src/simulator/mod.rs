use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::models::customer::customer_key;
use crate::models::ticket_scan::{ticket_scan_key, TicketScan};
use crate::store::{DocumentStore, StoreError};

/// The seeded VIP pool. Customer id 10 sits between the two pools and is
/// never produced; downstream consumers rely on the exact boundaries.
pub const VIP_CUSTOMER_IDS: RangeInclusive<u32> = 1..=9;
pub const REGULAR_CUSTOMER_IDS: RangeInclusive<u32> = 11..=44999;

pub const SECTIONS: RangeInclusive<u32> = 398..=448;
pub const SEATS_PER_ROW: RangeInclusive<u32> = 1..=18;

/// Capability: draw a uniform integer from an inclusive range. Injected into
/// the simulator so tests can script exact draws.
pub trait RandomSource: Send {
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Default source. Draws from the thread-local generator, so each thread
/// running a simulator advances its own state.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Generates ticket-scan documents and writes them through the store.
/// Each call is an independent unit: a failed write leaves nothing behind
/// and later scans are unaffected.
pub struct ScanSimulator {
    store: Arc<dyn DocumentStore>,
    rng: Box<dyn RandomSource>,
}

impl ScanSimulator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_source(store, ThreadRngSource)
    }

    pub fn with_source(store: Arc<dyn DocumentStore>, rng: impl RandomSource + 'static) -> Self {
        ScanSimulator {
            store,
            rng: Box::new(rng),
        }
    }

    pub async fn simulate_scan(&mut self, is_vip: bool) -> Result<TicketScan, StoreError> {
        let id = ticket_scan_key();
        // Timestamp is taken at scan time, before the write, and stored verbatim
        let timestamp = Utc::now();
        let seat = self.random_seat();
        let pool = if is_vip {
            VIP_CUSTOMER_IDS
        } else {
            REGULAR_CUSTOMER_IDS
        };
        let customer_id = customer_key(self.rng.uniform(pool));

        let scan = TicketScan {
            id,
            customer_id,
            timestamp,
            seat,
        };
        self.store
            .put(&scan.id, serde_json::to_value(&scan)?)
            .await?;
        Ok(scan)
    }

    fn random_seat(&mut self) -> String {
        let section = self.rng.uniform(SECTIONS);
        let row = (b'A' + self.rng.uniform(0..=25) as u8) as char;
        let seat = self.rng.uniform(SEATS_PER_ROW);
        seat_description(section, row, seat)
    }
}

pub fn seat_description(section: u32, row: char, seat: u32) -> String {
    format!("Section {section} Row {row} Seat {seat}")
}
