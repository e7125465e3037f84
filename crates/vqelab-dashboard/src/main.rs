//! VQE Lab Dashboard binary entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vqelab_core::{Molecule, MoleculeConfig, Pacing};

use vqelab_dashboard::{AppState, DashboardConfig, create_router};

/// Local web dashboard for simulated VQE runs
#[derive(Parser, Debug)]
#[command(name = "vqelab-dashboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to serve the dashboard on
    #[arg(long, env = "VQELAB_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Delay before each convergence iteration, in milliseconds
    #[arg(long, env = "VQELAB_CONVERGENCE_STEP_MS", default_value = "100")]
    convergence_step_ms: u64,

    /// Delay before each dissociation point, in milliseconds
    #[arg(long, env = "VQELAB_DISSOCIATION_STEP_MS", default_value = "200")]
    dissociation_step_ms: u64,

    /// Fixed jitter seed for reproducible convergence traces
    #[arg(long, env = "VQELAB_SEED")]
    seed: Option<u64>,

    /// Initial molecule (h2, lih)
    #[arg(short, long, default_value = "h2")]
    molecule: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vqelab_dashboard=info,vqelab_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let molecule = Molecule::from_name(&args.molecule).ok_or_else(|| {
        anyhow::anyhow!("Unknown molecule '{}'. Available: h2, lih", args.molecule)
    })?;

    // Create configuration
    let config = DashboardConfig {
        bind_address: args.bind,
        pacing: Pacing {
            convergence_step: Duration::from_millis(args.convergence_step_ms),
            dissociation_step: Duration::from_millis(args.dissociation_step_ms),
        },
        seed: args.seed,
        ..DashboardConfig::default()
    };
    let bind_addr = config.bind_address;

    // Create application state
    let state = Arc::new(
        AppState::with_config(config).with_molecule_config(MoleculeConfig::for_molecule(molecule)),
    );
    tracing::info!("Initial molecule: {}", molecule.display_name());

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting VQE Lab Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
