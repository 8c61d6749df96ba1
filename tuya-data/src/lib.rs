//! # Tuya datapoint data
//!
//! Definitions shared by the datapoint translation layer: Tuya datapoint
//! identifiers, the Zigbee cluster library (ZCL) thermostat and user
//! interface clusters, and the device profiles describing how a particular
//! device encodes its state.
//!

#![warn(missing_docs)]
#![no_std]

#[macro_use]
mod utils;

pub mod cluster_library; // ZCL
pub mod datapoint;
pub mod error;
pub mod profile;

pub use datapoint::{DatapointIdentifier, DatapointType, DatapointWrite};
pub use error::Error;
pub use profile::{DatapointRole, DeviceProfile, Quirks};
