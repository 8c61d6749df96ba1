//! # Running state reconciliation
//!
//! Some devices do not report whether they are heating. The running state
//! is then derived from the setpoint, the ambient temperature and the
//! system mode.

use tuya_data::cluster_library::thermostat::{RunningMode, RunningState, SystemMode};

/// Derive running state and running mode.
///
/// Returns `None` until both temperatures are known. A unknown system mode
/// counts as `Heat`.
pub fn derive_running_state(
    local_temperature: Option<i32>,
    occupied_heating_setpoint: Option<i32>,
    system_mode: Option<SystemMode>,
) -> Option<(RunningState, RunningMode)> {
    let local_temperature = local_temperature?;
    let setpoint = occupied_heating_setpoint?;
    let system_mode = system_mode.unwrap_or(SystemMode::Heat);

    if system_mode == SystemMode::Heat && setpoint > local_temperature {
        Some((RunningState::HeatOn, RunningMode::Heat))
    } else {
        Some((RunningState::Idle, RunningMode::Off))
    }
}
