mod cli;

use crate::cli::CLI;
use clap::Parser;
use linkhop_generator::SeqGenerator;
use linkhop_redirector::{serve, AppState};
use linkhop_registrar::{Registrar, RegistrarConfig};
use linkhop_storage::InMemoryRegistry;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    linkhop_telemetry::init();

    let config = CLI::parse();

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        "starting linkhop"
    );

    let registry = Arc::new(InMemoryRegistry::new());

    let state = AppState::new(registry.clone());
    let listen_addr = config.listen_addr;
    let server = tokio::spawn(async move {
        // A dead listener leaves the console usable; only the redirects stop working.
        if let Err(err) = serve(listen_addr, state).await {
            error!(error = %err, "redirect server stopped");
            println!("Oops! Server didn't start: {err}");
        }
    });

    println!("Server is up and running at {}", config.base_url);

    let registrar = Registrar::new(
        registry,
        SeqGenerator::new(),
        RegistrarConfig::builder().base_url(config.base_url).build(),
    );
    if let Err(err) = registrar
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
    {
        error!(error = %err, "registration loop stopped");
    }

    // Console input is gone; keep serving redirects until terminated.
    server.await?;
    Ok(())
}
