//! In-memory security repository.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::error::MemoryStoreError;

#[derive(Debug, Default)]
struct Store {
    arming: ArmingStatus,
    alarm: AlarmStatus,
    sensors: HashSet<Sensor>,
}

/// Repository keeping the whole system state in process memory.
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    store: Mutex<Store>,
}

impl InMemorySecurityRepository {
    /// Create an empty repository: disarmed, no alarm, no sensors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the arming status.
    #[must_use]
    pub fn with_arming_status(self, status: ArmingStatus) -> Self {
        let mut store = self.into_store();
        store.arming = status;
        Self::from_store(store)
    }

    /// Seed the alarm status.
    #[must_use]
    pub fn with_alarm_status(self, status: AlarmStatus) -> Self {
        let mut store = self.into_store();
        store.alarm = status;
        Self::from_store(store)
    }

    /// Seed a sensor, replacing any with the same identity.
    #[must_use]
    pub fn with_sensor(self, sensor: Sensor) -> Self {
        let mut store = self.into_store();
        store.sensors.replace(sensor);
        Self::from_store(store)
    }

    fn from_store(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn into_store(self) -> Store {
        self.store
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, MemoryStoreError> {
        self.store.lock().map_err(|_| MemoryStoreError::Poisoned)
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        Ok(self.lock()?.arming)
    }

    fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        self.lock()?.arming = status;
        Ok(())
    }

    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        Ok(self.lock()?.alarm)
    }

    fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.lock()?.alarm = status;
        Ok(())
    }

    fn sensors(&self) -> Result<Vec<Sensor>, CatpointError> {
        Ok(self.lock()?.sensors.iter().cloned().collect())
    }

    fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        tracing::trace!(sensor = %sensor.key(), "storing sensor");
        self.lock()?.sensors.replace(sensor);
        Ok(())
    }

    fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError> {
        if !self.lock()?.sensors.remove(sensor) {
            tracing::trace!(sensor = %sensor.key(), "sensor was not tracked");
        }
        Ok(())
    }

    fn update_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        self.lock()?.sensors.replace(sensor);
        Ok(())
    }
}
