//! Alarm state machine — how triggers move the [`AlarmStatus`].
//!
//! The escalation ladder is `NoAlarm → PendingAlarm → Alarm`. Disarming is an
//! absorbing reset to `NoAlarm`. Everything that can change the alarm status
//! goes through [`AlarmStatus::next`], so the whole machine can be tested
//! without any IO.

use crate::status::{AlarmStatus, ArmingStatus};

/// Something that happened which may change the alarm status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmTrigger {
    /// A sensor went from inactive to active.
    SensorActivated,
    /// A sensor was set inactive. `all_sensors_inactive` is evaluated with
    /// that sensor already at its new value.
    SensorDeactivated { all_sensors_inactive: bool },
    /// The camera classifier produced a result.
    CatDetected { present: bool },
    /// The operator disarmed the system.
    Disarmed,
}

impl AlarmStatus {
    /// Compute the status that follows `self` under `trigger`.
    #[must_use]
    pub fn next(self, arming: ArmingStatus, trigger: AlarmTrigger) -> AlarmStatus {
        match trigger {
            AlarmTrigger::Disarmed => AlarmStatus::NoAlarm,
            AlarmTrigger::SensorActivated => {
                if !arming.is_armed() {
                    return self;
                }
                match self {
                    AlarmStatus::NoAlarm => AlarmStatus::PendingAlarm,
                    AlarmStatus::PendingAlarm | AlarmStatus::Alarm => AlarmStatus::Alarm,
                }
            }
            AlarmTrigger::SensorDeactivated {
                all_sensors_inactive,
            } => match self {
                AlarmStatus::PendingAlarm if all_sensors_inactive => AlarmStatus::NoAlarm,
                other => other,
            },
            AlarmTrigger::CatDetected { present } => {
                if present && arming == ArmingStatus::ArmedHome {
                    AlarmStatus::Alarm
                } else {
                    AlarmStatus::NoAlarm
                }
            }
        }
    }
}
