// Platform-specific code module

pub mod gpu;
pub mod power;

// Re-exports para imports limpios
pub use gpu::{get_device_query, NvidiaSmi, NvmlQuery};
pub use power::has_battery;
