//! # Cluster Library (ZCL)

use crate::Error;

mod attribute;
pub mod thermostat;
pub mod user_interface;

pub use attribute::{AttributeDataType, AttributeValue};

/// 16-bit cluster identifier
pub type ClusterIdentifier = u16;

/// 16-bit attribute identifier
pub type AttributeIdentifier = u16;

extended_enum!(
    /// Cluster library status codes
    ClusterLibraryStatus, u8,
    /// Operation was successful.
    Success => 0x00,
    /// Operation was not successful.
    Failure => 0x01,
    /// The specified attribute does not exist on the device.
    UnsupportedAttribute => 0x86,
    /// Out of range error, or set to a reserved value. Attribute keeps its old value.
    InvalidValue => 0x87,
    /// Attempt to write a read only attribute.
    ReadOnly => 0x88,
    /// An operation failed due to an insufficient amount of free space available.
    InsufficientSpace => 0x89,
    /// The requested information (e.g., table entry) could not be found.
    NotFound => 0x8b,
    /// The data type given for an attribute is incorrect. Command not carried out.
    InvalidDataType => 0x8d,
    /// The cluster is not supported.
    UnsupportedCluster => 0xc3,
);

impl From<Error> for ClusterLibraryStatus {
    fn from(error: Error) -> Self {
        match error {
            Error::UnsupportedAttributeValue => ClusterLibraryStatus::InvalidDataType,
            Error::InvalidValue | Error::ValueOutOfRange => ClusterLibraryStatus::InvalidValue,
            Error::UnknownDatapointType => ClusterLibraryStatus::Failure,
        }
    }
}

/// A change of a standard attribute, to be reported to the host
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeReport {
    /// Cluster holding the attribute
    pub cluster: ClusterIdentifier,
    /// The attribute that changed
    pub attribute: AttributeIdentifier,
    /// The new value
    pub value: AttributeValue,
}

impl AttributeReport {
    /// Create a attribute report
    pub fn new(
        cluster: ClusterIdentifier,
        attribute: AttributeIdentifier,
        value: AttributeValue,
    ) -> Self {
        Self {
            cluster,
            attribute,
            value,
        }
    }
}
