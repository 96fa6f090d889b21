//! # catpoint-adapter-memory
//!
//! Process-local implementations of the outbound ports, used by the daemon's
//! simulation mode and by integration tests.
//!
//! ## Provided adapters
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`InMemorySecurityRepository`] | `SecurityRepository` | Holds statuses and sensors behind a mutex; starts disarmed with no alarm |
//! | [`FakeImageClassifier`] | `ImageClassifier` | Replays a scripted list of answers, cycling forever |
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

mod classifier;
mod error;
mod repository;

pub use classifier::FakeImageClassifier;
pub use error::MemoryStoreError;
pub use repository::InMemorySecurityRepository;
