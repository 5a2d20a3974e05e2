//! Utilities - logging and image allow-list

pub mod images;
pub mod logger;

pub use images::ImagePolicy;
pub use logger::{init_logger, init_logger_with_file};
