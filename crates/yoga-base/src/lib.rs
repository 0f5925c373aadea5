pub mod logging;
pub mod vec2;
pub mod vec3;

pub use logging::{FileLogger, LogConfig, StdoutLogger, init_logger};
pub use vec2::Vec2;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use yoga_base::log::*
pub use log;
