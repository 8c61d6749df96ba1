use core::fmt;

use crate::Error;

extended_enum!(
    /// Attribute data type
    AttributeDataType, u8,
    None => 0x00,
    Boolean => 0x10,
    Bitmap8 => 0x18,
    Bitmap16 => 0x19,
    Unsigned8 => 0x20,
    Unsigned16 => 0x21,
    Signed8 => 0x28,
    Signed16 => 0x29,
    Enumeration8 => 0x30,
    Enumeration16 => 0x31,
    Unknown => 0xff,
);

/// Attribute value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeValue {
    None,
    Boolean(u8),
    Bitmap8(u8),
    Bitmap16(u16),
    Unsigned8(u8),
    Unsigned16(u16),
    Signed8(i8),
    Signed16(i16),
    Enumeration8(u8),
    Enumeration16(u16),
}

impl AttributeValue {
    /// Create a value of the given type from a integer
    pub fn from_integer(data_type: AttributeDataType, value: i64) -> Result<Self, Error> {
        let out_of_range = |_| Error::ValueOutOfRange;
        match data_type {
            AttributeDataType::Boolean => match value {
                0 | 1 => Ok(AttributeValue::Boolean(value as u8)),
                _ => Err(Error::ValueOutOfRange),
            },
            AttributeDataType::Bitmap8 => {
                u8::try_from(value).map(AttributeValue::Bitmap8).map_err(out_of_range)
            }
            AttributeDataType::Bitmap16 => u16::try_from(value)
                .map(AttributeValue::Bitmap16)
                .map_err(out_of_range),
            AttributeDataType::Unsigned8 => u8::try_from(value)
                .map(AttributeValue::Unsigned8)
                .map_err(out_of_range),
            AttributeDataType::Unsigned16 => u16::try_from(value)
                .map(AttributeValue::Unsigned16)
                .map_err(out_of_range),
            AttributeDataType::Signed8 => {
                i8::try_from(value).map(AttributeValue::Signed8).map_err(out_of_range)
            }
            AttributeDataType::Signed16 => i16::try_from(value)
                .map(AttributeValue::Signed16)
                .map_err(out_of_range),
            AttributeDataType::Enumeration8 => u8::try_from(value)
                .map(AttributeValue::Enumeration8)
                .map_err(out_of_range),
            AttributeDataType::Enumeration16 => u16::try_from(value)
                .map(AttributeValue::Enumeration16)
                .map_err(out_of_range),
            AttributeDataType::None | AttributeDataType::Unknown => {
                Err(Error::UnsupportedAttributeValue)
            }
        }
    }

    /// The value as a integer, `None` for `AttributeValue::None`
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            AttributeValue::None => None,
            AttributeValue::Boolean(v)
            | AttributeValue::Bitmap8(v)
            | AttributeValue::Unsigned8(v)
            | AttributeValue::Enumeration8(v) => Some(i64::from(v)),
            AttributeValue::Bitmap16(v)
            | AttributeValue::Unsigned16(v)
            | AttributeValue::Enumeration16(v) => Some(i64::from(v)),
            AttributeValue::Signed8(v) => Some(i64::from(v)),
            AttributeValue::Signed16(v) => Some(i64::from(v)),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AttributeValue::None => write!(f, "None"),
            AttributeValue::Boolean(v) => write!(f, "Boolean {}", v != 0),
            AttributeValue::Bitmap8(v) => write!(f, "Bitmap8 {:08b}", v),
            AttributeValue::Bitmap16(v) => write!(f, "Bitmap16 {:016b}", v),
            AttributeValue::Unsigned8(v) => write!(f, "Unsigned8 {}", v),
            AttributeValue::Unsigned16(v) => write!(f, "Unsigned16 {}", v),
            AttributeValue::Signed8(v) => write!(f, "Signed8 {}", v),
            AttributeValue::Signed16(v) => write!(f, "Signed16 {}", v),
            AttributeValue::Enumeration8(v) => write!(f, "Enumeration8 {:02x}", v),
            AttributeValue::Enumeration16(v) => write!(f, "Enumeration16 {:04x}", v),
        }
    }
}
