//! Transport recording the datapoint writes instead of sending them

use std::convert::Infallible;

use tuya_data::DatapointWrite;
use tuya_service::DeviceTransport;

#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub queries: usize,
    writes: Vec<DatapointWrite>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes recorded since the last call
    pub fn take_writes(&mut self) -> Vec<DatapointWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl DeviceTransport for RecordingTransport {
    type Error = Infallible;

    fn request_all_datapoints(&mut self) -> Result<(), Infallible> {
        self.queries += 1;
        Ok(())
    }

    fn write_datapoints(&mut self, writes: &[DatapointWrite]) -> Result<(), Infallible> {
        self.writes.extend_from_slice(writes);
        Ok(())
    }
}
