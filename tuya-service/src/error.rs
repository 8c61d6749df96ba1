/// Errors
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    /// The datapoint cache has no room for another datapoint
    DatapointCacheFull,
}
