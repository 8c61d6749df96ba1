//! # Thermostat cluster
//!
//! Standard thermostat attributes fed by datapoint events.

use tuya_data::cluster_library::thermostat::*;
use tuya_data::cluster_library::{AttributeValue, ClusterLibraryStatus};
use tuya_data::{DeviceProfile, Quirks};

use super::{known, push_report, AttributeReports, Cluster};
use crate::event::{Event, ProgramMode, TemperatureTarget, Topics};
use crate::reconcile::derive_running_state;
use crate::router::EventListener;

/// Thermostat attribute cache
#[derive(Clone, Debug)]
pub struct ThermostatModel {
    native_running_state: bool,
    native_heating_value: i32,
    system_mode: Option<SystemMode>,
    local_temperature: Option<i16>,
    occupied_heating_setpoint: Option<i16>,
    running_state: Option<RunningState>,
    running_mode: Option<RunningMode>,
    programming_operation_mode: Option<ProgrammingOperationMode>,
}

impl ThermostatModel {
    /// Create a empty model for a device profile
    pub fn new(profile: &DeviceProfile) -> Self {
        Self {
            native_running_state: !profile.has_quirk(Quirks::UNRELIABLE_RUNNING_STATE),
            native_heating_value: profile.native_heating_value,
            system_mode: None,
            local_temperature: None,
            occupied_heating_setpoint: None,
            running_state: None,
            running_mode: None,
            programming_operation_mode: None,
        }
    }

    pub fn system_mode(&self) -> Option<SystemMode> {
        self.system_mode
    }

    pub fn local_temperature(&self) -> Option<i16> {
        self.local_temperature
    }

    pub fn occupied_heating_setpoint(&self) -> Option<i16> {
        self.occupied_heating_setpoint
    }

    pub fn running_state(&self) -> Option<RunningState> {
        self.running_state
    }

    pub fn running_mode(&self) -> Option<RunningMode> {
        self.running_mode
    }

    pub fn programming_operation_mode(&self) -> Option<ProgrammingOperationMode> {
        self.programming_operation_mode
    }

    /// A temperature changed, recalculates the running state. Values that do
    /// not fit the attribute are dropped and the previous value is kept.
    pub fn temperature_change(
        &mut self,
        target: TemperatureTarget,
        value: i32,
        reports: &mut AttributeReports,
    ) {
        let (slot, attribute) = match target {
            TemperatureTarget::LocalTemperature => {
                (&mut self.local_temperature, ATTR_LOCAL_TEMPERATURE)
            }
            TemperatureTarget::OccupiedHeatingSetpoint => (
                &mut self.occupied_heating_setpoint,
                ATTR_OCCUPIED_HEATING_SETPOINT,
            ),
        };
        let value = match i16::try_from(value) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Temperature {} out of range for {:04x}", value, attribute);
                return;
            }
        };
        if slot.replace(value) != Some(value) {
            push_report(reports, CLUSTER, attribute, AttributeValue::Signed16(value));
        }
        self.recalculate_running_state(reports);
    }

    /// The on/off state changed, zero is off
    pub fn enabled_change(&mut self, value: i32, reports: &mut AttributeReports) {
        let mode = if value == 0 {
            SystemMode::Off
        } else {
            SystemMode::Heat
        };
        if self.system_mode.replace(mode) != Some(mode) {
            log::info!("System mode {:?}", mode);
            push_report(
                reports,
                CLUSTER,
                ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(mode.into()),
            );
        }
        self.recalculate_running_state(reports);
    }

    /// The program mode changed
    pub fn program_change(&mut self, mode: ProgramMode, reports: &mut AttributeReports) {
        let value = match mode {
            ProgramMode::Manual => ProgrammingOperationMode::Simple,
            ProgramMode::Scheduled => ProgrammingOperationMode::ScheduleProgramming,
        };
        if self.programming_operation_mode.replace(value) != Some(value) {
            push_report(
                reports,
                CLUSTER,
                ATTR_PROGRAMMING_OPERATION_MODE,
                AttributeValue::Bitmap8(value.into()),
            );
        }
    }

    /// The device reported its running state. Ignored unless the profile
    /// trusts the native report.
    pub fn running_state_report(&mut self, value: i32, reports: &mut AttributeReports) {
        if !self.native_running_state {
            log::debug!("Ignoring native running state {}", value);
            return;
        }
        if value == self.native_heating_value {
            self.set_running(RunningState::HeatOn, RunningMode::Heat, reports);
        } else {
            self.set_running(RunningState::Idle, RunningMode::Off, reports);
        }
    }

    fn recalculate_running_state(&mut self, reports: &mut AttributeReports) {
        if self.native_running_state {
            return;
        }
        if let Some((state, mode)) = derive_running_state(
            self.local_temperature.map(i32::from),
            self.occupied_heating_setpoint.map(i32::from),
            self.system_mode,
        ) {
            self.set_running(state, mode, reports);
        }
    }

    fn set_running(
        &mut self,
        state: RunningState,
        mode: RunningMode,
        reports: &mut AttributeReports,
    ) {
        let previous_state = self.running_state.replace(state);
        let previous_mode = self.running_mode.replace(mode);
        if previous_state != Some(state) {
            push_report(
                reports,
                CLUSTER,
                ATTR_RUNNING_STATE,
                AttributeValue::Bitmap16(state.into()),
            );
        }
        if previous_mode != Some(mode) {
            push_report(
                reports,
                CLUSTER,
                ATTR_RUNNING_MODE,
                AttributeValue::Enumeration8(mode.into()),
            );
        }
    }
}

impl EventListener for ThermostatModel {
    fn interests(&self) -> Topics {
        Topics::THERMOSTAT
    }

    fn on_event(&mut self, event: &Event, reports: &mut AttributeReports) {
        match *event {
            Event::TemperatureChanged { target, value } => {
                self.temperature_change(target, value, reports)
            }
            Event::EnabledChanged(value) => self.enabled_change(value, reports),
            Event::ProgramChanged(mode) => self.program_change(mode, reports),
            Event::RunningStateReported(value) => self.running_state_report(value, reports),
            Event::ChildLockChanged(_) => (),
        }
    }
}

impl Cluster for ThermostatModel {
    fn cluster_identifier(&self) -> u16 {
        CLUSTER
    }

    fn read_attribute(&self, attribute: u16) -> Result<AttributeValue, ClusterLibraryStatus> {
        match attribute {
            ATTR_LOCAL_TEMPERATURE => {
                known(self.local_temperature).map(AttributeValue::Signed16)
            }
            ATTR_OCCUPIED_HEATING_SETPOINT => {
                known(self.occupied_heating_setpoint).map(AttributeValue::Signed16)
            }
            ATTR_SYSTEM_MODE => {
                known(self.system_mode).map(|v| AttributeValue::Enumeration8(v.into()))
            }
            ATTR_RUNNING_MODE => {
                known(self.running_mode).map(|v| AttributeValue::Enumeration8(v.into()))
            }
            ATTR_PROGRAMMING_OPERATION_MODE => known(self.programming_operation_mode)
                .map(|v| AttributeValue::Bitmap8(v.into())),
            ATTR_RUNNING_STATE => {
                known(self.running_state).map(|v| AttributeValue::Bitmap16(v.into()))
            }
            _ => Err(ClusterLibraryStatus::UnsupportedAttribute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuya_data::profile::moes_bht;

    const TRUSTED: DeviceProfile = DeviceProfile {
        manufacturer: "_TZE200_trusted",
        model: "TS0601",
        datapoints: &[],
        enabled_on_bind: &[],
        temperature_scale: 10,
        native_heating_value: 0,
        quirks: Quirks::empty(),
    };

    fn temperatures(model: &mut ThermostatModel, local: i32, setpoint: i32) -> AttributeReports {
        let mut reports = AttributeReports::new();
        model.temperature_change(TemperatureTarget::LocalTemperature, local, &mut reports);
        model.temperature_change(
            TemperatureTarget::OccupiedHeatingSetpoint,
            setpoint,
            &mut reports,
        );
        reports
    }

    #[test]
    fn heat_on_below_setpoint() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        let mut reports = AttributeReports::new();
        model.enabled_change(1, &mut reports);
        temperatures(&mut model, 210, 220);
        assert_eq!(model.system_mode(), Some(SystemMode::Heat));
        assert_eq!(model.running_state(), Some(RunningState::HeatOn));
        assert_eq!(model.running_mode(), Some(RunningMode::Heat));
    }

    #[test]
    fn idle_above_setpoint() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        let mut reports = AttributeReports::new();
        model.enabled_change(1, &mut reports);
        temperatures(&mut model, 230, 220);
        assert_eq!(model.running_state(), Some(RunningState::Idle));
        assert_eq!(model.running_mode(), Some(RunningMode::Off));
    }

    #[test]
    fn off_is_idle() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        temperatures(&mut model, 180, 220);
        assert_eq!(model.running_state(), Some(RunningState::HeatOn));

        let mut reports = AttributeReports::new();
        model.enabled_change(0, &mut reports);
        assert_eq!(model.system_mode(), Some(SystemMode::Off));
        assert_eq!(model.running_state(), Some(RunningState::Idle));
        assert_eq!(model.running_mode(), Some(RunningMode::Off));
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].attribute, ATTR_SYSTEM_MODE);
        assert_eq!(reports[1].attribute, ATTR_RUNNING_STATE);
        assert_eq!(reports[2].attribute, ATTR_RUNNING_MODE);
    }

    #[test]
    fn no_running_state_without_temperatures() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        let mut reports = AttributeReports::new();
        model.enabled_change(1, &mut reports);
        model.temperature_change(TemperatureTarget::LocalTemperature, 210, &mut reports);
        assert_eq!(model.running_state(), None);
        assert_eq!(model.running_mode(), None);
        assert_eq!(
            model.read_attribute(ATTR_RUNNING_STATE),
            Err(ClusterLibraryStatus::NotFound)
        );
    }

    #[test]
    fn unreliable_native_report_is_ignored() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        temperatures(&mut model, 230, 220);
        for value in [0, 1, 7] {
            let mut reports = AttributeReports::new();
            model.running_state_report(value, &mut reports);
            assert!(reports.is_empty());
            assert_eq!(model.running_state(), Some(RunningState::Idle));
            assert_eq!(model.running_mode(), Some(RunningMode::Off));
        }
    }

    #[test]
    fn trusted_native_report() {
        let mut model = ThermostatModel::new(&TRUSTED);
        temperatures(&mut model, 230, 220);
        assert_eq!(model.running_state(), None);

        let mut reports = AttributeReports::new();
        model.running_state_report(0, &mut reports);
        assert_eq!(model.running_state(), Some(RunningState::HeatOn));
        assert_eq!(model.running_mode(), Some(RunningMode::Heat));

        model.running_state_report(1, &mut reports);
        assert_eq!(model.running_state(), Some(RunningState::Idle));
        assert_eq!(model.running_mode(), Some(RunningMode::Off));
    }

    #[test]
    fn program_mode() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        let mut reports = AttributeReports::new();
        model.program_change(ProgramMode::Scheduled, &mut reports);
        assert_eq!(
            model.programming_operation_mode(),
            Some(ProgrammingOperationMode::ScheduleProgramming)
        );
        model.program_change(ProgramMode::Manual, &mut reports);
        assert_eq!(
            model.read_attribute(ATTR_PROGRAMMING_OPERATION_MODE),
            Ok(AttributeValue::Bitmap8(0x00))
        );
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn repeated_values_are_not_reported() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        let reports = temperatures(&mut model, 210, 220);
        // local, setpoint, running state, running mode
        assert_eq!(reports.len(), 4);
        let reports = temperatures(&mut model, 210, 220);
        assert!(reports.is_empty());
    }

    #[test]
    fn read_attributes() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        assert_eq!(
            model.read_attribute(ATTR_LOCAL_TEMPERATURE),
            Err(ClusterLibraryStatus::NotFound)
        );
        temperatures(&mut model, 215, 220);
        assert_eq!(
            model.read_attribute(ATTR_LOCAL_TEMPERATURE),
            Ok(AttributeValue::Signed16(215))
        );
        assert_eq!(
            model.read_attribute(ATTR_RUNNING_STATE),
            Ok(AttributeValue::Bitmap16(0x0001))
        );
        assert_eq!(
            model.read_attribute(0x4000),
            Err(ClusterLibraryStatus::UnsupportedAttribute)
        );
    }

    #[test]
    fn out_of_range_temperature_keeps_previous() {
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        temperatures(&mut model, 215, 220);
        assert_eq!(model.running_state(), Some(RunningState::HeatOn));

        let reports = temperatures(&mut model, 215, 40_000);
        assert!(reports.is_empty());
        assert_eq!(model.occupied_heating_setpoint(), Some(220));
        assert_eq!(
            model.read_attribute(ATTR_OCCUPIED_HEATING_SETPOINT),
            Ok(AttributeValue::Signed16(220))
        );
        assert_eq!(model.running_state(), Some(RunningState::HeatOn));

        // Never known, stays unknown
        let mut model = ThermostatModel::new(&moes_bht::PROFILE);
        temperatures(&mut model, -40_000, 220);
        assert_eq!(model.local_temperature(), None);
        assert_eq!(model.running_state(), None);
        assert_eq!(
            model.read_attribute(ATTR_LOCAL_TEMPERATURE),
            Err(ClusterLibraryStatus::NotFound)
        );
    }
}
