//! End-to-end tests for the wired catpoint stack.
//!
//! Each test builds the real in-memory repository, the scripted classifier,
//! the security service, and the in-process event bus, then drives the
//! service the way the daemon does.

use std::sync::Arc;

use catpoint_adapter_memory::{FakeImageClassifier, InMemorySecurityRepository};
use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::ports::SecurityRepository;
use catpoint_app::services::security_service::{CAT_CONFIDENCE_THRESHOLD, SecurityService};
use catpoint_domain::event::SecurityEventKind;
use catpoint_domain::image::CameraImage;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

type Service = SecurityService<Arc<InMemorySecurityRepository>, Arc<FakeImageClassifier>>;

struct Harness {
    service: Service,
    repository: Arc<InMemorySecurityRepository>,
    classifier: Arc<FakeImageClassifier>,
    bus: Arc<InProcessEventBus>,
}

fn sensor(name: &str, sensor_type: SensorType) -> Sensor {
    Sensor::builder()
        .name(name)
        .sensor_type(sensor_type)
        .build()
        .expect("sensor should be valid")
}

fn harness(repository: InMemorySecurityRepository, script: Vec<bool>) -> Harness {
    let repository = Arc::new(repository);
    let classifier = Arc::new(FakeImageClassifier::new(script));
    let bus = Arc::new(InProcessEventBus::new(64));
    let mut service = SecurityService::new(repository.clone(), classifier.clone());
    service.add_status_listener(bus.clone());
    Harness {
        service,
        repository,
        classifier,
        bus,
    }
}

fn frame() -> CameraImage {
    CameraImage::new(vec![0_u8; 16])
}

// ---------------------------------------------------------------------------
// Sensor scenarios
// ---------------------------------------------------------------------------

#[test]
fn should_go_pending_then_clear_when_front_door_opens_and_closes() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedHome)
            .with_sensor(sensor("FrontDoor", SensorType::Door)),
        Vec::new(),
    );
    let door = h
        .service
        .sensor("FrontDoor", SensorType::Door)
        .unwrap()
        .expect("front door is tracked");

    let door = h.service.change_sensor_activation_status(&door, true).unwrap();
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::PendingAlarm);

    h.service.change_sensor_activation_status(&door, false).unwrap();
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::NoAlarm);
}

#[test]
fn should_raise_alarm_when_window_opens_during_pending_while_away() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedAway)
            .with_alarm_status(AlarmStatus::PendingAlarm)
            .with_sensor(sensor("Window", SensorType::Window)),
        Vec::new(),
    );
    let window = sensor("Window", SensorType::Window);

    h.service.change_sensor_activation_status(&window, true).unwrap();

    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::Alarm);
}

#[test]
fn should_escalate_through_two_sensors_and_stay_in_alarm() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedAway)
            .with_sensor(sensor("Front Door", SensorType::Door))
            .with_sensor(sensor("Hallway", SensorType::Motion)),
        Vec::new(),
    );
    let door = sensor("Front Door", SensorType::Door);
    let hall = sensor("Hallway", SensorType::Motion);

    let door = h.service.change_sensor_activation_status(&door, true).unwrap();
    let hall = h.service.change_sensor_activation_status(&hall, true).unwrap();
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::Alarm);

    h.service.change_sensor_activation_status(&door, false).unwrap();
    h.service.change_sensor_activation_status(&hall, false).unwrap();
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::Alarm);
}

// ---------------------------------------------------------------------------
// Arming
// ---------------------------------------------------------------------------

#[test]
fn should_reset_everything_when_disarmed() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedAway)
            .with_alarm_status(AlarmStatus::Alarm),
        Vec::new(),
    );
    h.service
        .add_sensor(sensor("Front Door", SensorType::Door))
        .unwrap();
    let door = sensor("Front Door", SensorType::Door);
    h.service.change_sensor_activation_status(&door, true).unwrap();

    h.service.set_arming_status(ArmingStatus::Disarmed).unwrap();

    assert_eq!(h.service.arming_status().unwrap(), ArmingStatus::Disarmed);
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::NoAlarm);
    assert!(h.service.sensors().unwrap().iter().all(|s| !s.active));
}

#[test]
fn should_keep_pending_alarm_when_rearmed() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedHome)
            .with_alarm_status(AlarmStatus::PendingAlarm),
        Vec::new(),
    );

    h.service.set_arming_status(ArmingStatus::ArmedAway).unwrap();

    assert_eq!(h.service.arming_status().unwrap(), ArmingStatus::ArmedAway);
    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::PendingAlarm);
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[test]
fn should_follow_camera_script_while_armed_home() {
    let h = harness(
        InMemorySecurityRepository::new().with_arming_status(ArmingStatus::ArmedHome),
        vec![true, true, false],
    );

    let mut observed = Vec::new();
    for _ in 0..3 {
        h.service.process_image(&frame()).unwrap();
        observed.push(h.service.alarm_status().unwrap());
    }

    assert_eq!(
        observed,
        vec![AlarmStatus::Alarm, AlarmStatus::Alarm, AlarmStatus::NoAlarm]
    );
    assert_eq!(h.classifier.calls(), 3);
    assert_eq!(h.classifier.last_threshold(), Some(CAT_CONFIDENCE_THRESHOLD));
}

#[test]
fn should_ignore_cat_while_armed_away() {
    let h = harness(
        InMemorySecurityRepository::new()
            .with_arming_status(ArmingStatus::ArmedAway)
            .with_alarm_status(AlarmStatus::PendingAlarm),
        vec![true],
    );

    h.service.process_image(&frame()).unwrap();

    assert_eq!(h.service.alarm_status().unwrap(), AlarmStatus::NoAlarm);
}

#[tokio::test]
async fn should_publish_status_and_cat_events_on_bus() {
    let h = harness(
        InMemorySecurityRepository::new().with_arming_status(ArmingStatus::ArmedHome),
        vec![true],
    );
    let mut rx = h.bus.subscribe();

    h.service.process_image(&frame()).unwrap();

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(
        first.kind,
        SecurityEventKind::AlarmStatusChanged {
            status: AlarmStatus::Alarm
        }
    );
    assert_eq!(second.kind, SecurityEventKind::CatDetected { present: true });
}

#[test]
fn should_share_state_with_repository_handle() {
    let h = harness(InMemorySecurityRepository::new(), Vec::new());

    h.service.set_arming_status(ArmingStatus::ArmedHome).unwrap();
    h.service
        .add_sensor(sensor("Back Window", SensorType::Window))
        .unwrap();

    assert_eq!(
        h.repository.arming_status().unwrap(),
        ArmingStatus::ArmedHome
    );
    assert_eq!(h.repository.sensors().unwrap().len(), 1);
}
