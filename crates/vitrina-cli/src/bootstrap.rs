use anyhow::Context;
use vitrina_config::VitrinaConfig;
use vitrina_model::GeminiClient;
use vitrina_pipeline::Orchestrator;
use vitrina_store::SupabaseExecutor;

/// The orchestrator wired to the production clients.
pub type AppOrchestrator = Orchestrator<GeminiClient, SupabaseExecutor>;

pub fn load_config() -> anyhow::Result<VitrinaConfig> {
    VitrinaConfig::load_with_dotenv().context("failed to load configuration")
}

/// Build the model and datastore clients and wire them into an orchestrator.
///
/// Fails before any request is served when either remote is unconfigured.
pub fn build_orchestrator(config: &VitrinaConfig) -> anyhow::Result<AppOrchestrator> {
    config.require_clients()?;

    let model = GeminiClient::new(&config.gemini).context("failed to build model client")?;
    let executor =
        SupabaseExecutor::new(&config.supabase).context("failed to build datastore client")?;

    tracing::debug!(
        model = %config.gemini.model,
        rpc = %config.supabase.rpc_function,
        "clients ready"
    );
    Ok(Orchestrator::new(model, executor))
}
