//! Internal logging and tracing configurations

use std::env;
use std::io;

use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::SpanExporter;
use opentelemetry_resource_detectors::{K8sResourceDetector, ProcessResourceDetector};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Flushes pending spans when dropped
#[must_use = "spans are only exported while the guard is alive"]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(err) = provider.shutdown()
        {
            eprintln!("failed to shut down tracer provider: {err}");
        }
    }
}

fn resource() -> Resource {
    Resource::builder()
        .with_detector(Box::new(K8sResourceDetector))
        .with_detector(Box::new(ProcessResourceDetector))
        .with_service_name(env!("CARGO_PKG_NAME"))
        .with_attribute(KeyValue::new("service.version", env!("CARGO_PKG_VERSION")))
        .build()
}

fn init_tracer_provider() -> anyhow::Result<SdkTracerProvider> {
    let exporter = SpanExporter::builder().with_tonic().build()?;

    Ok(SdkTracerProvider::builder()
        .with_resource(resource())
        .with_batch_exporter(exporter)
        .build())
}

fn is_otel_enabled() -> bool {
    env::var("OTEL_EXPORTER_OTLP_ENDPOINT").is_ok()
}

/// Initializes tracing with subscribers.
///
/// Logs go to stderr so stdout only carries command output.
/// # Errors
/// Will return `Err` if it wasn't able to intialize tracing
pub fn init() -> anyhow::Result<TelemetryGuard> {
    let logger = env::var("LOG_FORMAT").map_or(
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed(),
        |v| {
            if v == "json" {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
            }
        },
    );

    let env_filter = EnvFilter::from_env("LOG_LEVEL");

    let reg = Registry::default().with(env_filter).with(logger);

    if is_otel_enabled() {
        let provider = init_tracer_provider()?;
        let otel = OpenTelemetryLayer::new(provider.tracer("rook-provider"));
        reg.with(otel).try_init()?;
        Ok(TelemetryGuard {
            provider: Some(provider),
        })
    } else {
        reg.try_init()?;
        Ok(TelemetryGuard { provider: None })
    }
}
