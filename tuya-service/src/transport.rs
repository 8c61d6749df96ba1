//! # Device transport
//!
//! The protocol stack below the translation layer. Implementations own
//! framing, addressing and retries.

use core::fmt::Debug;

use tuya_data::DatapointWrite;

/// Access to a bound device
pub trait DeviceTransport {
    /// Transport error
    type Error: Debug;

    /// Ask the device to report all of its datapoints
    fn request_all_datapoints(&mut self) -> Result<(), Self::Error>;

    /// Send datapoint writes to the device
    fn write_datapoints(&mut self, writes: &[DatapointWrite]) -> Result<(), Self::Error>;
}
