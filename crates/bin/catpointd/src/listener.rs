//! Status listener that reports notifications through `tracing`.

use catpoint_app::ports::StatusListener;
use catpoint_domain::status::AlarmStatus;

/// Logs every alarm change and every cat sighting.
pub struct TracingStatusListener;

impl StatusListener for TracingStatusListener {
    fn notify(&self, status: AlarmStatus) {
        match status {
            AlarmStatus::Alarm => {
                tracing::warn!(%status, description = status.description(), "alarm raised");
            }
            AlarmStatus::PendingAlarm | AlarmStatus::NoAlarm => {
                tracing::info!(%status, description = status.description(), "alarm status");
            }
        }
    }

    fn cat_detected(&self, present: bool) {
        if present {
            tracing::info!("cat detected on camera");
        } else {
            tracing::debug!("no cat on camera");
        }
    }
}
