use std::sync::Arc;

use crate::models::concierge::{concierge_key, Concierge};
use crate::models::customer::{customer_key, Customer};
use crate::store::{DocumentStore, StoreError};

/// The fixed baseline documents: data, not logic. Kept as a plain structure
/// so tests and demos can swap in their own set.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub customers: Vec<CustomerSeed>,
    pub concierges: Vec<ConciergeSeed>,
}

#[derive(Debug, Clone)]
pub struct CustomerSeed {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ConciergeSeed {
    pub id: u32,
    pub name: String,
    pub cell_number: String,
    pub vip_ids: Vec<u32>,
}

impl SeedData {
    // 9 VIP-клиентов и 3 консьержа, каждый ведет свою тройку VIP-ов
    pub fn baseline() -> Self {
        let customer = |id: u32, name: &str| CustomerSeed {
            id,
            name: name.to_string(),
        };
        let concierge = |id: u32, name: &str, vip_ids: Vec<u32>| ConciergeSeed {
            id,
            name: name.to_string(),
            cell_number: "614-214-2474".to_string(),
            vip_ids,
        };
        SeedData {
            customers: vec![
                customer(1, "George Clooney"),
                customer(2, "Josh Hutcherson"),
                customer(3, "Darius Rucker"),
                customer(4, "Brooklyn Decker"),
                customer(5, "Eddie Vedder"),
                customer(6, "Nick Lachey"),
                customer(7, "Nick Goepper"),
                customer(8, "Johnny Bench"),
                customer(9, "Ryan Collins"),
            ],
            concierges: vec![
                concierge(1, "Matt Groves", vec![1, 2, 9]),
                concierge(2, "Mr. Redlegs", vec![3, 4, 5]),
                concierge(3, "Rosie Red", vec![6, 7, 8]),
            ],
        }
    }
}

/// Writes the seed baseline into the store. Every run overwrites the same 12
/// documents so repeated demos always start from known data.
pub struct SeedLoader {
    store: Arc<dyn DocumentStore>,
    data: SeedData,
}

impl SeedLoader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_data(store, SeedData::baseline())
    }

    pub fn with_data(store: Arc<dyn DocumentStore>, data: SeedData) -> Self {
        SeedLoader { store, data }
    }

    pub async fn run(&self) -> Result<(), StoreError> {
        self.ensure_customers().await?;
        self.ensure_concierges().await?;
        Ok(())
    }

    pub async fn ensure_customers(&self) -> Result<(), StoreError> {
        for seed in &self.data.customers {
            let doc = Customer {
                name: seed.name.clone(),
            };
            self.store
                .put(&customer_key(seed.id), serde_json::to_value(&doc)?)
                .await?;
        }
        Ok(())
    }

    pub async fn ensure_concierges(&self) -> Result<(), StoreError> {
        for seed in &self.data.concierges {
            let doc = Concierge {
                name: seed.name.clone(),
                cell_number: seed.cell_number.clone(),
                vips: seed.vip_ids.iter().map(|id| customer_key(*id)).collect(),
            };
            self.store
                .put(&concierge_key(seed.id), serde_json::to_value(&doc)?)
                .await?;
        }
        Ok(())
    }
}
