//! RosterGraph - teammate graph query server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rostergraph_core::RosterGraphConfig;
use rostergraph_server::{build_router, AppState};
use rostergraph_store::GraphStore;

/// Load a snapshot and print what was accepted and skipped.
fn validate(path: &Path) -> bool {
    match GraphStore::load(path) {
        Ok(store) => {
            let report = store.load_report();
            let stats = store.stats();
            println!("Snapshot: {}", path.display());
            println!("  players:            {}", stats.players);
            println!("  clubs:              {}", stats.clubs);
            println!("  tenures:            {}", report.tenures);
            println!("  teammate edges:     {}", report.teammates);
            println!("  skipped tenures:    {}", report.skipped_tenures);
            println!("  skipped teammates:  {}", report.skipped_teammates);
            println!("  edges w/o tenure:   {}", report.teammates_without_tenure);
            true
        }
        Err(e) => {
            eprintln!("Snapshot {} is invalid: {}", path.display(), e);
            false
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RosterGraphConfig::from_env()?;
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--validate" | "validate" => {
                let path = args
                    .get(2)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| config.snapshot_path.clone());
                std::process::exit(if validate(&path) { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("RosterGraph - teammate graph query server");
                println!();
                println!("Usage: rostergraph [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  validate [snapshot]      Load a snapshot and report its contents");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'rostergraph help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Snapshot: {}", config.snapshot_path.display());
    let store = GraphStore::load(&config.snapshot_path)
        .map_err(|e| anyhow::anyhow!("Failed to load snapshot: {}", e))?;

    let port = config.port;
    let state = Arc::new(AppState::new(config, store));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("RosterGraph server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
