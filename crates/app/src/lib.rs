//! # catpoint-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecurityRepository` — arming status, alarm status, and the sensor set
//!   - `ImageClassifier` — answers whether a camera frame contains a cat
//!   - `StatusListener` — observers told about alarm changes and cat sightings
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `SecurityService` — arming, sensor changes, image processing, listeners
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `catpoint-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
