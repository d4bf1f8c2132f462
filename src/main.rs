mod config;
mod error;
mod garden;
mod util;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, Level};

use crate::config::EngineConfig;
use crate::garden::population::Population;
use crate::garden::record::records_from_json;
use crate::garden::sim_loop::Integrator;

/// A small stand-in for the document store's live query result
const SAMPLE_RECORDS: &str = r#"[
    {"id": "bf-1", "gifter": "Alice", "message": "Rest easy, Grandpa", "color": "blue"},
    {"id": "bf-2", "from": "The Nguyens", "message": "Always with us", "color": "orange"},
    {"id": "bf-3", "gifter": "Sam", "message": "Fly free"},
    {"id": "bf-4", "message": "In loving memory", "color": "violet"},
    {"id": "bf-5", "gifter": "Maya", "message": "Until we meet again", "color": "white"}
]"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Spirit Garden Engine v{}", env!("CARGO_PKG_VERSION"));

    let config = EngineConfig::load_or_default();
    config.validate()?;
    info!(
        "Configuration loaded: tick={}Hz, notify={}Hz, viewport={}x{}",
        config.tick_rate,
        config.notify_rate,
        config.fallback_viewport.width,
        config.fallback_viewport.height
    );

    let records = records_from_json(SAMPLE_RECORDS)?;
    info!(count = records.len(), "sample records loaded");

    let population = Population::new(config.fallback_viewport).into_shared();
    let mut integrator = Integrator::new(population.clone(), config.clone());
    integrator.set_records(records);

    // Observer: log one pose line per second so the drift is visible
    let frames = Arc::new(AtomicU64::new(0));
    let frame_counter = frames.clone();
    let observed = population.clone();
    let frames_per_log = config.notify_rate as u64;
    integrator.start(move || {
        let frame = frame_counter.fetch_add(1, Ordering::Relaxed);
        if frame % frames_per_log != 0 {
            return;
        }
        let pop = observed.read();
        for b in pop.states().iter().take(3) {
            info!(
                "pose {} {:?} x={:.0} y={:.0} size={:.2}",
                b.record.id, b.phase, b.pos.x, b.pos.y, b.size
            );
        }
    })?;

    info!("Garden running; Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    integrator.stop();
    info!(
        frames = frames.load(Ordering::Relaxed),
        "engine stopped"
    );

    Ok(())
}
