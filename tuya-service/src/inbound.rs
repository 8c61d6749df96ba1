//! # Inbound translation
//!
//! Datapoint reports to semantic events.

use tuya_data::{DatapointIdentifier, DatapointRole, DeviceProfile};

use crate::datapoint_cache::{DatapointCache, DATAPOINT_CACHE_SIZE};
use crate::event::{Event, ProgramMode, TemperatureTarget};

/// Translates datapoint reports according to a device profile
#[derive(Clone, Copy, Debug)]
pub struct InboundTranslator<'a> {
    profile: &'a DeviceProfile,
}

impl<'a> InboundTranslator<'a> {
    pub fn new(profile: &'a DeviceProfile) -> Self {
        Self { profile }
    }

    /// Event for a datapoint value, `None` for datapoints without meaning
    /// to the thermostat
    pub fn translate(&self, identifier: DatapointIdentifier, value: i32) -> Option<Event> {
        let role = self.profile.role(identifier)?;
        let scale = self.profile.temperature_scale;
        let event = match role {
            DatapointRole::TargetTemperature => Event::TemperatureChanged {
                target: TemperatureTarget::OccupiedHeatingSetpoint,
                value: value.saturating_mul(scale),
            },
            DatapointRole::AmbientTemperature => Event::TemperatureChanged {
                target: TemperatureTarget::LocalTemperature,
                value: value.saturating_mul(scale),
            },
            DatapointRole::Enabled
            | DatapointRole::EnabledAlternate
            | DatapointRole::ManualMode => Event::EnabledChanged(value),
            DatapointRole::ScheduleMode => {
                if value == 0 {
                    Event::ProgramChanged(ProgramMode::Manual)
                } else {
                    Event::ProgramChanged(ProgramMode::Scheduled)
                }
            }
            DatapointRole::RunningMode => Event::RunningStateReported(value),
            DatapointRole::ChildLock => Event::ChildLockChanged(value),
        };
        Some(event)
    }

    /// Check if a datapoint may take a cache slot. Datapoints of the profile
    /// always may, other datapoints only while slots remain beyond those
    /// held back for the profile datapoints not yet reported.
    fn may_cache(&self, cache: &DatapointCache, identifier: DatapointIdentifier) -> bool {
        if cache.contains(identifier) || self.profile.role(identifier).is_some() {
            return true;
        }
        let reserved = self
            .profile
            .datapoints
            .iter()
            .filter(|(id, _)| !cache.contains(*id))
            .count();
        cache.len() + reserved < DATAPOINT_CACHE_SIZE
    }

    /// Store a reported value in the cache and translate it. The value is
    /// translated even when the cache has no room for it.
    pub fn report(
        &self,
        cache: &mut DatapointCache,
        identifier: DatapointIdentifier,
        value: i32,
    ) -> Option<Event> {
        if self.may_cache(cache, identifier) {
            if let Err(e) = cache.set(identifier, value) {
                log::warn!("{} = {} not cached, {:?}", identifier, value, e);
            }
        } else {
            log::debug!("{} = {} not cached, no room", identifier, value);
        }
        let event = self.translate(identifier, value);
        match event {
            Some(ref event) => log::debug!("{} = {} -> {:?}", identifier, value, event),
            None => log::debug!("{} = {}, not mapped", identifier, value),
        }
        event
    }
}
