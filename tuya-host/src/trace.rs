//! Configuration and trace files

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;

use serde_derive::Deserialize;

use tuya_data::cluster_library::{
    thermostat, user_interface, AttributeDataType, AttributeIdentifier, AttributeValue,
    ClusterIdentifier,
};
use tuya_data::profile::moes_bht;
use tuya_data::DatapointIdentifier;
use tuya_service::DatapointCache;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Toml(toml::de::Error),
    InvalidDatapoint(String),
    InvalidStep(usize),
    UnknownAttribute(ClusterIdentifier, AttributeIdentifier),
    InvalidValue(i64, tuya_data::Error),
    Service(tuya_service::Error),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml(error)
    }
}

impl From<tuya_service::Error> for Error {
    fn from(error: tuya_service::Error) -> Self {
        Error::Service(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Toml(e) => write!(f, "{}", e),
            Error::InvalidDatapoint(key) => write!(f, "Invalid datapoint \"{}\"", key),
            Error::InvalidStep(n) => write!(f, "Step {} needs exactly one action", n),
            Error::UnknownAttribute(cluster, attribute) => {
                write!(f, "Unknown attribute {:04x}:{:04x}", cluster, attribute)
            }
            Error::InvalidValue(value, e) => {
                write!(f, "Invalid attribute value {}, {:?}", value, e)
            }
            Error::Service(e) => write!(f, "{:?}", e),
        }
    }
}

fn default_manufacturer() -> String {
    moes_bht::PROFILE.manufacturer.to_string()
}

fn default_model() -> String {
    moes_bht::PROFILE.model.to_string()
}

/// Parse a datapoint identifier, `0x` prefixed hex or decimal
pub fn parse_datapoint(text: &str) -> Result<DatapointIdentifier, Error> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse::<u16>(),
    };
    parsed
        .map(DatapointIdentifier::from_raw)
        .map_err(|_| Error::InvalidDatapoint(text.to_string()))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub datapoints: BTreeMap<String, i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manufacturer: default_manufacturer(),
            model: default_model(),
            datapoints: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Datapoints cached by a earlier session
    pub fn datapoint_cache(&self) -> Result<DatapointCache, Error> {
        let mut cache = DatapointCache::new();
        for (key, value) in self.datapoints.iter() {
            cache.set(parse_datapoint(key)?, *value)?;
        }
        Ok(cache)
    }
}

#[derive(Debug, Deserialize)]
pub struct Report {
    pub datapoint: u16,
    pub value: i32,
}

#[derive(Debug, Deserialize)]
pub struct Write {
    pub cluster: u16,
    pub attribute: u16,
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    pub report: Option<Report>,
    pub write: Option<Write>,
    #[serde(default)]
    pub bind: bool,
}

#[derive(Debug, PartialEq)]
pub enum Action {
    Bind,
    Report(DatapointIdentifier, i32),
    Write(ClusterIdentifier, AttributeIdentifier, AttributeValue),
}

#[derive(Debug, Default, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub step: Vec<Step>,
}

impl Trace {
    /// Actions in trace order
    pub fn actions(&self) -> Result<Vec<Action>, Error> {
        self.step
            .iter()
            .enumerate()
            .map(|(n, step)| match (step.bind, &step.report, &step.write) {
                (true, None, None) => Ok(Action::Bind),
                (false, Some(report), None) => Ok(Action::Report(
                    DatapointIdentifier::from_raw(report.datapoint),
                    report.value,
                )),
                (false, None, Some(write)) => {
                    let data_type = attribute_data_type(write.cluster, write.attribute)
                        .ok_or(Error::UnknownAttribute(write.cluster, write.attribute))?;
                    let value = AttributeValue::from_integer(data_type, write.value)
                        .map_err(|e| Error::InvalidValue(write.value, e))?;
                    Ok(Action::Write(write.cluster, write.attribute, value))
                }
                _ => Err(Error::InvalidStep(n)),
            })
            .collect()
    }
}

/// Data type of a writable attribute
pub fn attribute_data_type(
    cluster: ClusterIdentifier,
    attribute: AttributeIdentifier,
) -> Option<AttributeDataType> {
    match (cluster, attribute) {
        (thermostat::CLUSTER, thermostat::ATTR_OCCUPIED_HEATING_SETPOINT) => {
            Some(AttributeDataType::Signed16)
        }
        (thermostat::CLUSTER, thermostat::ATTR_SYSTEM_MODE) => {
            Some(AttributeDataType::Enumeration8)
        }
        (thermostat::CLUSTER, thermostat::ATTR_PROGRAMMING_OPERATION_MODE) => {
            Some(AttributeDataType::Bitmap8)
        }
        (user_interface::CLUSTER, user_interface::ATTR_KEYPAD_LOCKOUT) => {
            Some(AttributeDataType::Enumeration8)
        }
        _ => None,
    }
}

pub fn read_config(file_path: &str) -> Result<Config, Error> {
    let text = fs::read_to_string(file_path)?;
    Ok(toml::from_str::<Config>(&text)?)
}

pub fn read_trace(file_path: &str) -> Result<Trace, Error> {
    let text = fs::read_to_string(file_path)?;
    Ok(toml::from_str::<Trace>(&text)?)
}
