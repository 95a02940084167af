use std::path::PathBuf;
use std::sync::Arc;

use crate::bootstrap;
use crate::cli::{GlobalFlags, ServeArgs};
use crate::server;

/// Handle `vitrina serve`. Runs until the process is stopped.
pub async fn handle(args: ServeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(public_dir) = args.public_dir {
        config.server.public_dir = public_dir;
    }

    let orchestrator = Arc::new(bootstrap::build_orchestrator(&config)?);
    let addr = config.server.bind_addr();
    let public_dir = PathBuf::from(&config.server.public_dir);

    if !flags.quiet {
        eprintln!("Serving on http://{addr} (static files from {})", public_dir.display());
    }
    server::serve(&addr, public_dir, orchestrator).await
}
