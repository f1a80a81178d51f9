//! Beacon colors: major -> hue mapping held as an atomically swapped snapshot.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{ColorSetting, ColorSnapshot};
pub use repository::ColorRepository;
pub use store::ColorSettingsStore;

pub const COLOR_NOT_FOUND: &str = "No color associated to the beacon";
pub const NO_COLORS_REGISTERED: &str = "No colors registered";
