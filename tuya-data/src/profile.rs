//! # Device profiles
//!
//! A device profile describes how a particular Tuya device model encodes
//! its thermostat state into datapoints, and which of its reports can be
//! trusted.

use bitflags::bitflags;

use crate::datapoint::DatapointIdentifier;

bitflags! {
    /// Known deviations from the expected device behaviour
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Quirks: u8 {
        /// The native running state datapoint can not be trusted, running
        /// state is derived from the temperatures and system mode instead
        const UNRELIABLE_RUNNING_STATE = 0x01;
        /// The device answers a request to report all datapoints on bind
        const QUERY_ON_BIND = 0x02;
    }
}

/// What a datapoint means to the thermostat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatapointRole {
    /// Target temperature, in device units
    TargetTemperature,
    /// Ambient temperature, in device units
    AmbientTemperature,
    /// On/off state, primary encoding
    Enabled,
    /// On/off state, alternate encoding
    EnabledAlternate,
    /// Schedule mode flag, zero for manual
    ScheduleMode,
    /// Manual mode flag, also reflects on/off
    ManualMode,
    /// Native running mode report
    RunningMode,
    /// Child lock flag
    ChildLock,
}

/// Device profile
#[derive(Debug)]
pub struct DeviceProfile {
    /// Manufacturer name as reported by the basic cluster
    pub manufacturer: &'static str,
    /// Model identifier as reported by the basic cluster
    pub model: &'static str,
    /// Datapoints and their role
    pub datapoints: &'static [(DatapointIdentifier, DatapointRole)],
    /// On/off sources replayed on bind, in priority order
    pub enabled_on_bind: &'static [DatapointRole],
    /// Factor from device temperature units to attribute units
    pub temperature_scale: i32,
    /// Native running mode value meaning heating, used when the native
    /// report is trusted
    pub native_heating_value: i32,
    /// Device quirks
    pub quirks: Quirks,
}

impl DeviceProfile {
    /// Find a known profile from the device identity
    pub fn lookup(manufacturer: &str, model: &str) -> Option<&'static DeviceProfile> {
        KNOWN_PROFILES
            .iter()
            .find(|profile| profile.manufacturer == manufacturer && profile.model == model)
    }

    /// Role of a datapoint, `None` for datapoints unknown to this profile
    pub fn role(&self, identifier: DatapointIdentifier) -> Option<DatapointRole> {
        self.datapoints
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, role)| *role)
    }

    /// Datapoint carrying a role
    pub fn datapoint(&self, role: DatapointRole) -> Option<DatapointIdentifier> {
        self.datapoints
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(id, _)| *id)
    }

    /// Check if the profile has all the given quirks
    pub fn has_quirk(&self, quirk: Quirks) -> bool {
        self.quirks.contains(quirk)
    }
}

/// MOES BHT series wall thermostat, `_TZE284_4dqtqloc`
pub mod moes_bht {
    use super::*;

    /// DP 1, on/off as boolean
    pub const ENABLED: DatapointIdentifier = DatapointIdentifier::from_raw(0x0101);
    /// DP 1, on/off as enumeration
    pub const ENABLED_ENUM: DatapointIdentifier = DatapointIdentifier::from_raw(0x0401);
    /// DP 50, target temperature
    pub const TARGET_TEMPERATURE: DatapointIdentifier = DatapointIdentifier::from_raw(0x0232);
    /// DP 16, ambient temperature
    pub const TEMPERATURE: DatapointIdentifier = DatapointIdentifier::from_raw(0x0210);
    /// DP 125, 1 for program mode, 0 for manual
    pub const SCHEDULE_MODE: DatapointIdentifier = DatapointIdentifier::from_raw(0x017d);
    /// DP 102, manual mode, follows DP 125 and is the actual on/off control
    pub const MANUAL_MODE: DatapointIdentifier = DatapointIdentifier::from_raw(0x0166);
    /// DP 128, circulator state, always 0 on this device
    pub const RUNNING_MODE: DatapointIdentifier = DatapointIdentifier::from_raw(0x0480);
    /// DP 40, child lock
    pub const CHILD_LOCK: DatapointIdentifier = DatapointIdentifier::from_raw(0x0128);

    /// Profile
    pub const PROFILE: DeviceProfile = DeviceProfile {
        manufacturer: "_TZE284_4dqtqloc",
        model: "TS0601",
        datapoints: &[
            (ENABLED, DatapointRole::Enabled),
            (ENABLED_ENUM, DatapointRole::EnabledAlternate),
            (TARGET_TEMPERATURE, DatapointRole::TargetTemperature),
            (TEMPERATURE, DatapointRole::AmbientTemperature),
            (SCHEDULE_MODE, DatapointRole::ScheduleMode),
            (MANUAL_MODE, DatapointRole::ManualMode),
            (RUNNING_MODE, DatapointRole::RunningMode),
            (CHILD_LOCK, DatapointRole::ChildLock),
        ],
        enabled_on_bind: &[
            DatapointRole::ManualMode,
            DatapointRole::Enabled,
            DatapointRole::EnabledAlternate,
        ],
        temperature_scale: 10,
        native_heating_value: 0,
        quirks: Quirks::UNRELIABLE_RUNNING_STATE.union(Quirks::QUERY_ON_BIND),
    };
}

/// Profiles of all supported devices
pub static KNOWN_PROFILES: [DeviceProfile; 1] = [moes_bht::PROFILE];
