pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::pipeline::extractor::{EntityExtractor, ExtractionMode, ModelExtractor, PatternExtractor};
use crate::pipeline::nlp_client::NlpServiceClient;
use crate::pipeline::orchestrator::TriageService;
use crate::pipeline::summarize::{
    NeuralSummarizer, SentenceSummarizer, SummaryStrategy, Summarizer, TruncateSummarizer,
    DEFAULT_MAX_SENTENCES,
};

/// Assemble the triage service from configuration.
///
/// The sidecar client is constructed once here and shared by every
/// component that needs it; per-request code never builds providers.
pub fn build_service(config: &AppConfig) -> TriageService {
    let client = Arc::new(NlpServiceClient::new(
        &config.nlp_base_url,
        config.nlp_timeout_secs,
    ));

    if config.needs_nlp_service() {
        if client.is_available() {
            tracing::info!(url = %config.nlp_base_url, "NLP sidecar reachable");
        } else {
            tracing::warn!(
                url = %config.nlp_base_url,
                "NLP sidecar not reachable, analysis requests will fail until it is up"
            );
        }
    }

    let extractor: Arc<dyn EntityExtractor> = match config.extraction_mode {
        ExtractionMode::Pattern => Arc::new(PatternExtractor),
        ExtractionMode::Model => Arc::new(ModelExtractor::new(client.clone())),
    };

    let summarizer: Arc<dyn Summarizer> = match config.summary_strategy {
        SummaryStrategy::Truncate => Arc::new(TruncateSummarizer::default()),
        SummaryStrategy::Sentences => {
            Arc::new(SentenceSummarizer::new(client.clone(), DEFAULT_MAX_SENTENCES))
        }
        SummaryStrategy::Neural => Arc::new(NeuralSummarizer::new(client)),
    };

    TriageService::new(extractor, summarizer)
}

/// Process entry point: tracing, configuration, service assembly, serve.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Aurora starting v{}", config::APP_VERSION);

    let config = AppConfig::from_env();
    tracing::info!(
        mode = %config.extraction_mode,
        summary = %config.summary_strategy,
        "configured"
    );

    // Built outside the runtime: the blocking HTTP client must not be
    // created in an async context.
    let service = Arc::new(build_service(&config));
    let app = api::triage_router(service);

    let runtime = tokio::runtime::Runtime::new().expect("failed to start async runtime");
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(config.bind_addr)
            .await
            .expect("failed to bind listen address");
        tracing::info!(addr = %config.bind_addr, "Aurora listening");
        axum::serve(listener, app)
            .await
            .expect("error while running Aurora");
    });
}
