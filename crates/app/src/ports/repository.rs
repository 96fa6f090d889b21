//! Repository port — durable store for the system state.

use std::sync::Arc;

use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Stores exactly one [`ArmingStatus`], one [`AlarmStatus`], and a set of
/// [`Sensor`]s unique by identity.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait SecurityRepository {
    fn arming_status(&self) -> Result<ArmingStatus, CatpointError>;

    fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError>;

    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError>;

    fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError>;

    /// Snapshot of every tracked sensor. Order is unspecified.
    fn sensors(&self) -> Result<Vec<Sensor>, CatpointError>;

    /// Track a sensor, replacing any sensor with the same identity.
    fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError>;

    /// Stop tracking the sensor with the same identity, if any.
    fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError>;

    /// Store the new state of a sensor, tracking it if it was not tracked yet.
    fn update_sensor(&self, sensor: Sensor) -> Result<(), CatpointError>;
}

impl<T: SecurityRepository + ?Sized> SecurityRepository for Arc<T> {
    fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        (**self).arming_status()
    }

    fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        (**self).set_arming_status(status)
    }

    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        (**self).alarm_status()
    }

    fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        (**self).set_alarm_status(status)
    }

    fn sensors(&self) -> Result<Vec<Sensor>, CatpointError> {
        (**self).sensors()
    }

    fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        (**self).add_sensor(sensor)
    }

    fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError> {
        (**self).remove_sensor(sensor)
    }

    fn update_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        (**self).update_sensor(sensor)
    }
}
