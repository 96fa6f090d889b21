//! Camera image — an opaque frame handed to the cat classifier.

use chrono::Utc;

use crate::event::Timestamp;
use crate::id::ImageId;

/// A single camera frame. The controller never looks inside `data`.
#[derive(Debug, Clone)]
pub struct CameraImage {
    pub id: ImageId,
    pub captured_at: Timestamp,
    data: Vec<u8>,
}

impl CameraImage {
    /// Wrap raw encoded bytes captured now.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: ImageId::new(),
            captured_at: Utc::now(),
            data: data.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
