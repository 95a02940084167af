use crate::bootstrap;
use crate::cli::{AskArgs, GlobalFlags};
use crate::output;

/// Handle `vitrina ask`.
pub async fn handle(args: &AskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    let orchestrator = bootstrap::build_orchestrator(&config)?;

    let run = orchestrator.run(&args.message()).await;
    tracing::debug!(
        outcome = %run.outcome,
        sql = run.final_sql.as_deref().unwrap_or("-"),
        "ask finished"
    );

    println!("{}", output::render_chat(&run.response, flags.format)?);
    Ok(())
}
