//! Telemetry setup for OpenTelemetry integration
//!
//! # Environment Variables
//!
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (e.g., http://localhost:4317)
//! - `OTEL_SERVICE_NAME`: Service name (default: taskboard)
//!
//! ```text
//! OTEL_EXPORTER_OTLP_ENDPOINT=http://localhost:4317 \
//! OTEL_SERVICE_NAME=taskboard-dev \
//!     ./taskboard
//! ```

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;

const ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

fn endpoint() -> Option<String> {
    std::env::var(ENDPOINT_ENV).ok().filter(|e| !e.is_empty())
}

/// OTLP export layer, present only when an endpoint is configured
#[cfg(feature = "telemetry")]
pub fn otel_layer<S>() -> Result<Option<impl tracing_subscriber::Layer<S>>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::Resource;

    let Some(endpoint) = endpoint() else {
        return Ok(None);
    };
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "taskboard".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;
    let provider = opentelemetry_sdk::trace::TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();
    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
}

#[cfg(not(feature = "telemetry"))]
pub fn otel_layer<S>() -> Result<Option<tracing_subscriber::layer::Identity>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    Ok(None)
}

/// Log the telemetry state once the subscriber is installed
pub fn report() {
    match endpoint() {
        None => tracing::debug!("OpenTelemetry not configured ({} not set)", ENDPOINT_ENV),
        Some(endpoint) if cfg!(feature = "telemetry") => {
            tracing::info!(endpoint = %endpoint, "OpenTelemetry export enabled")
        }
        Some(_) => {
            tracing::warn!("OpenTelemetry endpoint set but feature 'telemetry' not enabled");
            tracing::warn!("Rebuild with: cargo build --features telemetry");
        }
    }
}

/// Flush pending spans
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
