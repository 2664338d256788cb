use std::sync::Arc;
use storefront_chat_assistant::{
    api::{create_router, start_server},
    classifier::IntentClassifier,
    config::Settings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let settings = Settings::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    info!("🍕 Storefront Chat Assistant - API Server");
    info!("📍 Port: {}", settings.port);

    let catalog = settings.load_catalog()?;
    let classifier = Arc::new(IntentClassifier::new(&catalog));

    info!(
        buckets = classifier.bucket_count(),
        fingerprint = %classifier.catalog_fingerprint(),
        "✅ Classifier initialized"
    );
    info!("📡 Starting API server...");

    // Start API server
    let router = create_router(classifier, catalog.buckets().to_vec());
    start_server(router, settings.port).await?;

    Ok(())
}
