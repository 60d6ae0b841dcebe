use advisor_service::config::AdvisorConfig;
use advisor_service::error::AppError;
use advisor_service::observability::init_tracing;
use advisor_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = AdvisorConfig::load()?;

    init_tracing(&config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.model.text_model,
        "Starting medical advisor service"
    );

    let app = Application::build(config).await?;
    tracing::info!("Listening on port {}", app.port());

    app.run_until_stopped().await?;

    Ok(())
}
