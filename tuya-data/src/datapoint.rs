//! # Tuya datapoints
//!
//! A Tuya device exposes its state as numbered datapoints. The datapoint
//! type and number are combined into a 16-bit identifier,
//! `type * 256 + number`, so the same datapoint number reported with two
//! different types gives two distinct identifiers.

use core::fmt;

use crate::Error;

extended_enum!(
    /// Datapoint type
    DatapointType, u8,
    /// Raw bytes
    Raw => 0x00,
    /// Boolean, one octet
    Boolean => 0x01,
    /// Value, four octet signed integer
    Value => 0x02,
    /// String
    String => 0x03,
    /// Enumeration, one octet
    Enumeration => 0x04,
    /// Bitmap, one to four octets
    Bitmap => 0x05,
);

/// Datapoint identifier, type in the high octet and number in the low octet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatapointIdentifier(u16);

impl DatapointIdentifier {
    /// Create a identifier from its 16-bit encoding
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// The datapoint number
    pub fn number(self) -> u8 {
        (self.0 & 0x00ff) as u8
    }

    /// The datapoint type
    pub fn kind(self) -> Result<DatapointType, Error> {
        DatapointType::try_from((self.0 >> 8) as u8).map_err(|_| Error::UnknownDatapointType)
    }
}

impl From<u16> for DatapointIdentifier {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<DatapointIdentifier> for u16 {
    fn from(value: DatapointIdentifier) -> Self {
        value.0
    }
}

impl fmt::Display for DatapointIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Ok(kind) => write!(f, "DP {} ({:?})", self.number(), kind),
            Err(_) => write!(f, "DP {} (type {:02x})", self.number(), self.0 >> 8),
        }
    }
}

/// A value to be written to a datapoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatapointWrite {
    /// Destination datapoint
    pub identifier: DatapointIdentifier,
    /// Raw value
    pub value: i32,
}

impl DatapointWrite {
    /// Create a datapoint write
    pub fn new(identifier: DatapointIdentifier, value: i32) -> Self {
        Self { identifier, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_type_and_number() {
        let id = DatapointIdentifier::from_raw(0x0232);
        assert_eq!(u16::from(id), 0x0232);
        assert_eq!(id.number(), 50);
        assert_eq!(id.kind(), Ok(DatapointType::Value));

        let id = DatapointIdentifier::from(0x0480);
        assert_eq!(id.number(), 128);
        assert_eq!(id.kind(), Ok(DatapointType::Enumeration));
    }

    #[test]
    fn same_number_different_type() {
        let boolean = DatapointIdentifier::from_raw(0x0101);
        let enumeration = DatapointIdentifier::from_raw(0x0401);
        assert_eq!(boolean.number(), enumeration.number());
        assert_ne!(boolean, enumeration);
        assert_eq!(boolean.kind(), Ok(DatapointType::Boolean));
        assert_eq!(enumeration.kind(), Ok(DatapointType::Enumeration));
    }

    #[test]
    fn unknown_type() {
        let id = DatapointIdentifier::from_raw(0x0901);
        assert_eq!(id.kind(), Err(Error::UnknownDatapointType));
    }
}
