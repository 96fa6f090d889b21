//! Security service — the alarm controller.
//!
//! Receives arming changes, sensor changes, and camera frames, decides the new
//! alarm status through [`AlarmStatus::next`], writes it back through the
//! repository, and fans the change out to every registered [`StatusListener`].
//!
//! The service holds no state besides its listeners. Read-modify-write
//! sequences against the repository are not locked here; hosts that call the
//! service from several tasks must serialise access themselves.

use std::sync::Arc;

use catpoint_domain::alarm::AlarmTrigger;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::ports::{ImageClassifier, SecurityRepository, StatusListener};

/// Minimum classifier confidence, in percent, for a frame to count as a cat.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Application service driving the alarm state machine.
pub struct SecurityService<R, C> {
    repository: R,
    classifier: C,
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl<R, C> SecurityService<R, C>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    /// Create a new service backed by the given repository and classifier.
    pub fn new(repository: R, classifier: C) -> Self {
        Self {
            repository,
            classifier,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Registering the same `Arc` twice is a no-op.
    pub fn add_status_listener(&mut self, listener: Arc<dyn StatusListener>) {
        if !self.listeners.iter().any(|known| same_listener(known, &listener)) {
            self.listeners.push(listener);
        }
    }

    /// Unregister a listener, returning whether it was registered.
    pub fn remove_status_listener(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|known| !same_listener(known, listener));
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Change the arming status.
    ///
    /// Disarming forces the alarm to [`AlarmStatus::NoAlarm`]. Both disarming
    /// and arming reset every tracked sensor to inactive without running the
    /// sensor-deactivation rules. Arming leaves the alarm status untouched.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        tracing::info!(arming = %status, "setting arming status");
        if status == ArmingStatus::Disarmed {
            let current = self.repository.alarm_status()?;
            self.set_alarm_status(current.next(status, AlarmTrigger::Disarmed))?;
        }
        self.reset_sensors()?;
        self.repository.set_arming_status(status)
    }

    /// Persist `status` and notify every listener, whether or not it changed.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure; listeners are not notified then.
    pub fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        tracing::info!(alarm = %status, "setting alarm status");
        self.repository.set_alarm_status(status)?;
        for listener in &self.listeners {
            listener.notify(status);
        }
        Ok(())
    }

    /// Set a sensor's active flag and update the alarm status accordingly.
    ///
    /// The current flag is read from the repository's copy of the sensor, or
    /// from `sensor` itself when it is not tracked yet.
    ///
    /// | current  | requested | rule                       |
    /// |----------|-----------|----------------------------|
    /// | inactive | active    | sensor activated           |
    /// | active   | inactive  | sensor deactivated         |
    /// | inactive | inactive  | sensor deactivated         |
    /// | active   | active    | none                       |
    ///
    /// The sensor is stored with the requested flag in every case.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn change_sensor_activation_status(
        &self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<Sensor, CatpointError> {
        let sensors = self.repository.sensors()?;
        let was_active = sensors
            .iter()
            .find(|tracked| tracked.same_identity(sensor))
            .map_or(sensor.active, |tracked| tracked.active);

        tracing::debug!(
            sensor = %sensor.key(),
            was_active,
            active,
            "changing sensor activation"
        );

        let trigger = match (was_active, active) {
            (false, true) => Some(AlarmTrigger::SensorActivated),
            // The inactive → inactive case still re-checks whether a pending
            // alarm can be resolved.
            (_, false) => Some(AlarmTrigger::SensorDeactivated {
                all_sensors_inactive: sensors
                    .iter()
                    .filter(|tracked| !tracked.same_identity(sensor))
                    .all(|tracked| !tracked.active),
            }),
            (true, true) => None,
        };
        if let Some(trigger) = trigger {
            self.apply(trigger)?;
        }

        let mut updated = sensor.clone();
        updated.active = active;
        self.repository.update_sensor(updated.clone())?;
        Ok(updated)
    }

    /// Classify a camera frame and apply the cat-detection rule.
    ///
    /// Listeners receive the raw classifier answer through
    /// [`StatusListener::cat_detected`] even when the alarm status is unchanged.
    ///
    /// # Errors
    ///
    /// Propagates classifier and repository failures.
    pub fn process_image(&self, image: &CameraImage) -> Result<bool, CatpointError> {
        let present = self
            .classifier
            .image_contains_cat(image, CAT_CONFIDENCE_THRESHOLD)?;

        tracing::debug!(
            image = %image.id,
            captured_at = %image.captured_at,
            cat = present,
            "image classified"
        );

        self.apply(AlarmTrigger::CatDetected { present })?;
        for listener in &self.listeners {
            listener.cat_detected(present);
        }
        Ok(present)
    }

    /// Current alarm status.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        self.repository.alarm_status()
    }

    /// Current arming status.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        self.repository.arming_status()
    }

    /// Detached snapshot of the tracked sensors; mutating it does not affect
    /// the repository.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn sensors(&self) -> Result<Vec<Sensor>, CatpointError> {
        self.repository.sensors()
    }

    /// Look up the tracked copy of a sensor by identity.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn sensor(
        &self,
        name: &str,
        sensor_type: SensorType,
    ) -> Result<Option<Sensor>, CatpointError> {
        Ok(self
            .repository
            .sensors()?
            .into_iter()
            .find(|s| s.has_identity(name, sensor_type)))
    }

    /// Start tracking a sensor.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor is invalid, or a
    /// repository failure.
    pub fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        sensor.validate()?;
        tracing::debug!(sensor = %sensor.key(), "adding sensor");
        self.repository.add_sensor(sensor)
    }

    /// Stop tracking a sensor.
    ///
    /// # Errors
    ///
    /// Propagates any repository failure.
    pub fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError> {
        tracing::debug!(sensor = %sensor.key(), "removing sensor");
        self.repository.remove_sensor(sensor)
    }

    /// Run one trigger through the state machine, writing only on change.
    fn apply(&self, trigger: AlarmTrigger) -> Result<(), CatpointError> {
        let current = self.repository.alarm_status()?;
        let arming = self.repository.arming_status()?;
        let next = current.next(arming, trigger);
        tracing::debug!(%arming, %current, %next, ?trigger, "alarm rule evaluated");
        if next != current {
            tracing::info!(from = %current, to = %next, ?trigger, "alarm status changed");
            self.set_alarm_status(next)?;
        }
        Ok(())
    }

    /// Mark every tracked sensor inactive without touching the alarm status.
    fn reset_sensors(&self) -> Result<(), CatpointError> {
        for mut sensor in self.repository.sensors()? {
            if sensor.active {
                sensor.active = false;
                self.repository.update_sensor(sensor)?;
            }
        }
        Ok(())
    }
}

fn same_listener(a: &Arc<dyn StatusListener>, b: &Arc<dyn StatusListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
