// mapdeck core library: layer model, layer list widgets and the host app

pub mod app;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod layers;
pub mod ui;

pub use app::MapDeckApp;
pub use error::{ConfigError, LayerError};
