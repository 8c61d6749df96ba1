//! # Thermostat User Interface Configuration Cluster

/// Thermostat user interface configuration cluster
pub const CLUSTER: u16 = 0x0204;
/// User interface cluster attribute, temperature display mode
pub const ATTR_TEMPERATURE_DISPLAY_MODE: u16 = 0x0000;
/// User interface cluster attribute, keypad lockout
pub const ATTR_KEYPAD_LOCKOUT: u16 = 0x0001;

extended_enum!(
    /// Keypad lockout
    KeypadLockout, u8,
    /// All functions available
    NoLockout => 0x00,
    /// Level 1 reduced functionality
    Level1Lockout => 0x01,
    /// Level 2 reduced functionality
    Level2Lockout => 0x02,
    /// Level 3 reduced functionality
    Level3Lockout => 0x03,
    /// Level 4 reduced functionality
    Level4Lockout => 0x04,
    /// Level 5 reduced functionality
    Level5Lockout => 0x05,
);

impl KeypadLockout {
    /// Lockout state of a child lock flag
    pub fn from_child_lock(locked: bool) -> Self {
        if locked {
            KeypadLockout::Level1Lockout
        } else {
            KeypadLockout::NoLockout
        }
    }

    /// Whether any lockout level is active
    pub fn is_locked(self) -> bool {
        self != KeypadLockout::NoLockout
    }
}
