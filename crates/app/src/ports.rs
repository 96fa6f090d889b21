//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! All ports are synchronous: the controller has no suspension points.

pub mod image_classifier;
pub mod listener;
pub mod repository;

pub use image_classifier::ImageClassifier;
pub use listener::StatusListener;
pub use repository::SecurityRepository;
