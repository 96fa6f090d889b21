//! Image classifier port — external capability that spots cats in frames.

use std::sync::Arc;

use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;

/// Answers whether an image contains a cat.
pub trait ImageClassifier {
    /// Return `true` when a cat is present with at least
    /// `confidence_threshold` percent confidence (`0.0..=100.0`).
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Classifier`] when the classifier is
    /// unreachable, or [`CatpointError::Validation`] for a threshold out of range.
    fn image_contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError>;
}

impl<T: ImageClassifier + ?Sized> ImageClassifier for Arc<T> {
    fn image_contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        (**self).image_contains_cat(image, confidence_threshold)
    }
}
