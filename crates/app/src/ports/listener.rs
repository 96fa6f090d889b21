//! Listener port — observers of alarm status changes and cat sightings.

use catpoint_domain::status::AlarmStatus;

/// Receives notifications synchronously from the
/// [`SecurityService`](crate::services::security_service::SecurityService).
///
/// Callbacks run on the caller's thread; a slow listener delays the
/// operation that triggered it.
pub trait StatusListener: Send + Sync {
    /// The alarm status was written.
    fn notify(&self, status: AlarmStatus);

    /// An image was classified; `present` is the raw classifier answer.
    fn cat_detected(&self, present: bool);
}
