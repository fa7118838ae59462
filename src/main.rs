use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_sim::{
    cli::{Command, MENU},
    config::Config,
    models::TicketScan,
    store::RedisStore,
    ScanSimulator, SeedLoader,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ticket scan simulator");

    let store = Arc::new(
        RedisStore::new(&config.store.url, &config.store.bucket)
            .await
            .context("failed to connect to document store")?,
    );
    info!("Store connected");

    // The seed baseline must exist before simulation is meaningful
    SeedLoader::new(store.clone())
        .run()
        .await
        .context("seeding baseline data failed")?;
    info!("Seed baseline written");

    let mut simulator = ScanSimulator::new(store);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("{MENU}");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let is_vip = match Command::parse(&line) {
            Some(Command::VipScan) => true,
            Some(Command::RegularScan) => false,
            Some(Command::Quit) => break,
            None => continue,
        };
        // A failed scan is isolated: report it and go back to the menu
        match simulator.simulate_scan(is_vip).await {
            Ok(scan) => report(&scan, is_vip),
            Err(e) => error!("Ticket scan failed: {e}"),
        }
        println!();
    }
    Ok(())
}

fn report(scan: &TicketScan, is_vip: bool) {
    println!("Ticket id '{}' was scanned at '{}'.", scan.id, scan.timestamp);
    if is_vip {
        println!("\t(This is a VIP)");
    }
}
