/// Whether the host runs on a battery, used as the notebook indicator
///
/// Probe failures count as "no battery" so desktops without a power
/// supply driver still classify.
pub fn has_battery() -> bool {
    let manager = match battery::Manager::new() {
        Ok(manager) => manager,
        Err(e) => {
            log::warn!("Battery probe unavailable: {}", e);
            return false;
        }
    };

    match manager.batteries() {
        Ok(mut batteries) => batteries.any(|battery| battery.is_ok()),
        Err(e) => {
            log::warn!("Failed to enumerate batteries: {}", e);
            false
        }
    }
}
