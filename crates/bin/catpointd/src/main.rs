//! # catpointd — catpoint daemon
//!
//! Composition root that wires the adapters together and runs the camera loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the repository and classifier implementations (adapters)
//! - Construct the security service, injecting adapters via port traits
//! - Register status listeners (log output and the in-process event bus)
//! - Feed camera frames to the service until the frame budget is spent or
//!   Ctrl-C is received
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod listener;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use catpoint_adapter_memory::{FakeImageClassifier, InMemorySecurityRepository};
use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::image::CameraImage;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::listener::TracingStatusListener;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let repository = InMemorySecurityRepository::new();
    let classifier = FakeImageClassifier::new(config.camera.script.clone());

    // Service and listeners
    let mut service = SecurityService::new(repository, classifier);
    let event_bus = Arc::new(InProcessEventBus::new(64));
    service.add_status_listener(Arc::new(TracingStatusListener));
    service.add_status_listener(event_bus.clone());

    let mut events = event_bus.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => tracing::debug!(event = %json, "security event"),
                    Err(err) => tracing::warn!(error = %err, "unable to encode security event"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event subscriber lagging");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    for sensor in config.sensors {
        service.add_sensor(sensor).context("registering sensor")?;
    }
    service
        .set_arming_status(config.system.arming)
        .context("applying initial arming status")?;

    tracing::info!(
        arming = %service.arming_status()?,
        sensors = service.sensors()?.len(),
        interval_ms = config.camera.interval_ms,
        "catpointd started"
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(config.camera.interval_ms));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut frame: u64 = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                tracing::info!("shutdown requested");
                break;
            }
        }

        frame += 1;
        let image = CameraImage::new(frame.to_le_bytes());
        service
            .process_image(&image)
            .with_context(|| format!("processing frame {frame}"))?;

        if config.camera.frames != 0 && frame >= config.camera.frames {
            break;
        }
    }

    tracing::info!(
        frames = frame,
        alarm = %service.alarm_status()?,
        "catpointd stopped"
    );
    Ok(())
}
