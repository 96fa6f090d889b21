//! # catpoint-domain
//!
//! Pure domain model for the catpoint home security controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Sensors** (named door/window/motion detectors with a binary state)
//! - Define **Statuses** (arming profile and alarm escalation level)
//! - Define the **alarm state machine** (how triggers move the alarm status)
//! - Define **Camera images** (opaque frames handed to the cat classifier)
//! - Define **Events** (alarm-status and cat-detection notifications)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod alarm;
pub mod event;
pub mod image;
pub mod sensor;
pub mod status;
