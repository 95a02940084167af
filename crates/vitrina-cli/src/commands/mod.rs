use crate::cli::{Commands, GlobalFlags};

pub mod ask;
pub mod serve;
pub mod sql;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Ask(args) => ask::handle(&args, flags).await,
        Commands::Sql(args) => sql::handle(&args, flags),
        Commands::Serve(args) => serve::handle(args, flags).await,
    }
}
