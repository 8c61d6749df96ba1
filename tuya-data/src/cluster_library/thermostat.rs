//! # Thermostat Cluster

/// Thermostat cluster
pub const CLUSTER: u16 = 0x0201;
/// Thermostat cluster attribute, local temperature
pub const ATTR_LOCAL_TEMPERATURE: u16 = 0x0000;
/// Thermostat cluster attribute, occupied heating setpoint
pub const ATTR_OCCUPIED_HEATING_SETPOINT: u16 = 0x0012;
/// Thermostat cluster attribute, system mode
pub const ATTR_SYSTEM_MODE: u16 = 0x001c;
/// Thermostat cluster attribute, running mode
pub const ATTR_RUNNING_MODE: u16 = 0x001e;
/// Thermostat cluster attribute, programming operation mode
pub const ATTR_PROGRAMMING_OPERATION_MODE: u16 = 0x0025;
/// Thermostat cluster attribute, running state
pub const ATTR_RUNNING_STATE: u16 = 0x0029;

extended_enum!(
    /// System mode
    SystemMode, u8,
    /// Off
    Off => 0x00,
    /// Automatic
    Auto => 0x01,
    /// Cooling
    Cool => 0x03,
    /// Heating
    Heat => 0x04,
    /// Emergency heating
    EmergencyHeating => 0x05,
    /// Pre-cooling
    Precooling => 0x06,
    /// Fan only
    FanOnly => 0x07,
    /// Dry
    Dry => 0x08,
    /// Sleep
    Sleep => 0x09,
);

extended_enum!(
    /// Running mode
    RunningMode, u8,
    /// Off
    Off => 0x00,
    /// Cooling
    Cool => 0x03,
    /// Heating
    Heat => 0x04,
);

extended_enum!(
    /// Running state, the heating stage bit of the running state bitmap
    RunningState, u16,
    /// Nothing is running
    Idle => 0x0000,
    /// Heat stage 1 is on
    HeatOn => 0x0001,
);

extended_enum!(
    /// Programming operation mode
    ProgrammingOperationMode, u8,
    /// Simple, setpoints are set manually
    Simple => 0x00,
    /// Schedule programming mode
    ScheduleProgramming => 0x01,
);
