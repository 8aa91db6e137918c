// Custom log types for different event categories
pub const LOG_TYPE_REORDER: &str = "reorder";
pub const LOG_TYPE_VISIBILITY: &str = "visibility";
pub const LOG_TYPE_CREDENTIALS: &str = "credentials";

pub const APPLICATION_NAME: &str = "mapdeck - Map Layer Manager";
pub const VIEWPORT_X: f32 = 960.0;
pub const VIEWPORT_Y: f32 = 640.0;
