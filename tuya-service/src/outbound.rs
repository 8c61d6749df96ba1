//! # Outbound translation
//!
//! Writes to standard attributes to datapoint writes.

use heapless::Vec;

use tuya_data::cluster_library::{
    thermostat, user_interface, AttributeIdentifier, AttributeValue, ClusterIdentifier,
    ClusterLibraryStatus,
};
use tuya_data::{DatapointRole, DatapointWrite, DeviceProfile};

/// Max number of datapoint writes for a single attribute write
pub const DATAPOINT_WRITES_MAX: usize = 4;

/// Datapoint writes for a single attribute write
pub type DatapointWrites = Vec<DatapointWrite, DATAPOINT_WRITES_MAX>;

/// Mapping for attributes the device profile does not translate
pub trait FallbackMapping {
    fn map_attribute(
        &self,
        _cluster: ClusterIdentifier,
        _attribute: AttributeIdentifier,
        _value: AttributeValue,
    ) -> Result<DatapointWrites, ClusterLibraryStatus> {
        Err(ClusterLibraryStatus::UnsupportedAttribute)
    }
}

/// Fallback without any mapping
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFallback;

impl FallbackMapping for NoFallback {}

/// Integer division rounding halves to the even neighbour
fn divide_round_even(value: i32, divisor: i32) -> i32 {
    let quotient = value.div_euclid(divisor);
    let twice_remainder = 2 * value.rem_euclid(divisor);
    if twice_remainder > divisor || (twice_remainder == divisor && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Translates attribute writes according to a device profile
#[derive(Clone, Copy, Debug)]
pub struct OutboundTranslator<'a> {
    profile: &'a DeviceProfile,
}

impl<'a> OutboundTranslator<'a> {
    pub fn new(profile: &'a DeviceProfile) -> Self {
        Self { profile }
    }

    /// Map a attribute write to datapoint writes.
    ///
    /// `Ok(None)` means the profile has no mapping and the write should be
    /// passed to the fallback.
    pub fn map_attribute(
        &self,
        cluster: ClusterIdentifier,
        attribute: AttributeIdentifier,
        value: AttributeValue,
    ) -> Result<Option<DatapointWrites>, ClusterLibraryStatus> {
        match (cluster, attribute) {
            (thermostat::CLUSTER, thermostat::ATTR_OCCUPIED_HEATING_SETPOINT) => {
                let setpoint = match value {
                    AttributeValue::Signed16(v) => i32::from(v),
                    _ => return Err(ClusterLibraryStatus::InvalidDataType),
                };
                let target = divide_round_even(setpoint, self.profile.temperature_scale);
                Ok(self.writes(&[(DatapointRole::TargetTemperature, target)]))
            }
            (thermostat::CLUSTER, thermostat::ATTR_SYSTEM_MODE) => {
                let mode = match value {
                    AttributeValue::Enumeration8(v) => {
                        thermostat::SystemMode::try_from(v).map_err(ClusterLibraryStatus::from)?
                    }
                    _ => return Err(ClusterLibraryStatus::InvalidDataType),
                };
                let flag = match mode {
                    thermostat::SystemMode::Off => 0,
                    thermostat::SystemMode::Heat => 1,
                    _ => return Ok(None),
                };
                Ok(self.writes(&[
                    (DatapointRole::ManualMode, flag),
                    (DatapointRole::ScheduleMode, flag),
                ]))
            }
            (user_interface::CLUSTER, user_interface::ATTR_KEYPAD_LOCKOUT) => {
                let lockout = match value {
                    AttributeValue::Enumeration8(v) => user_interface::KeypadLockout::try_from(v)
                        .map_err(ClusterLibraryStatus::from)?,
                    _ => return Err(ClusterLibraryStatus::InvalidDataType),
                };
                let flag = if lockout.is_locked() { 1 } else { 0 };
                Ok(self.writes(&[(DatapointRole::ChildLock, flag)]))
            }
            _ => Ok(None),
        }
    }

    /// Writes for datapoint roles, `None` if the profile lacks any of them
    fn writes(&self, values: &[(DatapointRole, i32)]) -> Option<DatapointWrites> {
        let mut writes = DatapointWrites::new();
        for (role, value) in values.iter() {
            let identifier = self.profile.datapoint(*role)?;
            writes.push(DatapointWrite::new(identifier, *value)).ok()?;
        }
        Some(writes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuya_data::profile::moes_bht;

    #[test]
    fn round_half_even() {
        assert_eq!(divide_round_even(215, 10), 22);
        assert_eq!(divide_round_even(225, 10), 22);
        assert_eq!(divide_round_even(224, 10), 22);
        assert_eq!(divide_round_even(226, 10), 23);
        assert_eq!(divide_round_even(220, 10), 22);
        assert_eq!(divide_round_even(-215, 10), -22);
        assert_eq!(divide_round_even(-225, 10), -22);
        assert_eq!(divide_round_even(-226, 10), -23);
    }

    #[test]
    fn setpoint() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        let writes = translator
            .map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_OCCUPIED_HEATING_SETPOINT,
                AttributeValue::Signed16(215),
            )
            .unwrap()
            .unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0], DatapointWrite::new(moes_bht::TARGET_TEMPERATURE, 22));
    }

    #[test]
    fn setpoint_wrong_type() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        assert_eq!(
            translator.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_OCCUPIED_HEATING_SETPOINT,
                AttributeValue::Unsigned8(21),
            ),
            Err(ClusterLibraryStatus::InvalidDataType)
        );
    }

    #[test]
    fn system_mode() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        let writes = translator
            .map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(0x00),
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            writes.as_slice(),
            &[
                DatapointWrite::new(moes_bht::MANUAL_MODE, 0),
                DatapointWrite::new(moes_bht::SCHEDULE_MODE, 0),
            ]
        );

        let writes = translator
            .map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(0x04),
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            writes.as_slice(),
            &[
                DatapointWrite::new(moes_bht::MANUAL_MODE, 1),
                DatapointWrite::new(moes_bht::SCHEDULE_MODE, 1),
            ]
        );
    }

    #[test]
    fn other_system_modes_fall_back() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        assert_eq!(
            translator.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(0x03),
            ),
            Ok(None)
        );
        assert_eq!(
            translator.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(0x02),
            ),
            Err(ClusterLibraryStatus::InvalidValue)
        );
    }

    #[test]
    fn keypad_lockout() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        let writes = translator
            .map_attribute(
                user_interface::CLUSTER,
                user_interface::ATTR_KEYPAD_LOCKOUT,
                AttributeValue::Enumeration8(0x02),
            )
            .unwrap()
            .unwrap();
        assert_eq!(writes[0], DatapointWrite::new(moes_bht::CHILD_LOCK, 1));
        let writes = translator
            .map_attribute(
                user_interface::CLUSTER,
                user_interface::ATTR_KEYPAD_LOCKOUT,
                AttributeValue::Enumeration8(0x00),
            )
            .unwrap()
            .unwrap();
        assert_eq!(writes[0], DatapointWrite::new(moes_bht::CHILD_LOCK, 0));
        assert_eq!(
            translator.map_attribute(
                user_interface::CLUSTER,
                user_interface::ATTR_KEYPAD_LOCKOUT,
                AttributeValue::Enumeration8(0x09),
            ),
            Err(ClusterLibraryStatus::InvalidValue)
        );
    }

    #[test]
    fn unmapped_attributes() {
        let translator = OutboundTranslator::new(&moes_bht::PROFILE);
        assert_eq!(
            translator.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_PROGRAMMING_OPERATION_MODE,
                AttributeValue::Bitmap8(0x01),
            ),
            Ok(None)
        );
        assert_eq!(
            NoFallback.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_PROGRAMMING_OPERATION_MODE,
                AttributeValue::Bitmap8(0x01),
            ),
            Err(ClusterLibraryStatus::UnsupportedAttribute)
        );
    }

    #[test]
    fn profile_without_datapoint() {
        let profile = DeviceProfile {
            manufacturer: "_TZE200_partial",
            model: "TS0601",
            datapoints: &[(moes_bht::TARGET_TEMPERATURE, DatapointRole::TargetTemperature)],
            enabled_on_bind: &[],
            temperature_scale: 10,
            native_heating_value: 0,
            quirks: tuya_data::Quirks::empty(),
        };
        let translator = OutboundTranslator::new(&profile);
        assert_eq!(
            translator.map_attribute(
                thermostat::CLUSTER,
                thermostat::ATTR_SYSTEM_MODE,
                AttributeValue::Enumeration8(0x04),
            ),
            Ok(None)
        );
    }
}
