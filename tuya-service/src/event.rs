//! # Semantic events
//!
//! Datapoint reports translated into what they mean for the standard
//! clusters. Events are dispatched once and then dropped.

use bitflags::bitflags;

bitflags! {
    /// Event topics a listener can subscribe to
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Topics: u8 {
        /// Thermostat cluster events
        const THERMOSTAT = 0x01;
        /// User interface configuration cluster events
        const USER_INTERFACE = 0x02;
    }
}

/// Temperature attribute targeted by a temperature event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemperatureTarget {
    /// Local (ambient) temperature
    LocalTemperature,
    /// Occupied heating setpoint
    OccupiedHeatingSetpoint,
}

/// Program mode of the device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramMode {
    /// Setpoint set by hand
    Manual,
    /// Device follows its schedule
    Scheduled,
}

/// Semantic event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A temperature changed, value in attribute units
    TemperatureChanged {
        /// The temperature attribute
        target: TemperatureTarget,
        /// New value
        value: i32,
    },
    /// The on/off state changed, zero is off
    EnabledChanged(i32),
    /// The program mode changed
    ProgramChanged(ProgramMode),
    /// The device reported its running state natively
    RunningStateReported(i32),
    /// The child lock changed, zero is unlocked
    ChildLockChanged(i32),
}

impl Event {
    /// Topic the event is published on
    pub fn topic(&self) -> Topics {
        match self {
            Event::TemperatureChanged { .. }
            | Event::EnabledChanged(_)
            | Event::ProgramChanged(_)
            | Event::RunningStateReported(_) => Topics::THERMOSTAT,
            Event::ChildLockChanged(_) => Topics::USER_INTERFACE,
        }
    }
}
