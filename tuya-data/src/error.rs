//! # Error handling

/// Errors
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    /// The value provided is invalid
    InvalidValue,
    /// The datapoint type is unknown
    UnknownDatapointType,
    /// The attribute value has the wrong type for the attribute
    UnsupportedAttributeValue,
    /// The value does not fit the attribute
    ValueOutOfRange,
}
