//! Scripted fake image classifier.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::{CatpointError, ValidationError};
use catpoint_domain::image::CameraImage;

/// Classifier that ignores image content and replays a fixed script of
/// answers, wrapping around at the end. An empty script always answers `false`.
#[derive(Debug, Default)]
pub struct FakeImageClassifier {
    script: Vec<bool>,
    cursor: AtomicUsize,
    last_threshold: Mutex<Option<f32>>,
}

impl FakeImageClassifier {
    /// Create a classifier replaying `script` cyclically.
    #[must_use]
    pub fn new(script: impl Into<Vec<bool>>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Create a classifier that always gives the same answer.
    #[must_use]
    pub fn always(answer: bool) -> Self {
        Self::new(vec![answer])
    }

    /// Number of frames classified so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Threshold passed on the most recent call.
    #[must_use]
    pub fn last_threshold(&self) -> Option<f32> {
        self.last_threshold.lock().ok().and_then(|guard| *guard)
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn image_contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        if !(0.0..=100.0).contains(&confidence_threshold) {
            return Err(ValidationError::InvalidConfidence(confidence_threshold).into());
        }
        if let Ok(mut last) = self.last_threshold.lock() {
            *last = Some(confidence_threshold);
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        let answer = if self.script.is_empty() {
            false
        } else {
            self.script[index % self.script.len()]
        };
        tracing::trace!(image = %image.id, bytes = image.len(), answer, "fake classification");
        Ok(answer)
    }
}
