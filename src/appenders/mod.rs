//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use rotating_file::{
    append_line, ensure_dir, rotated_dir, rotated_path, write_rotated, Rotation,
    RotatingFileWriter,
};

// Re-export trait for backward compatibility
pub use crate::core::Appender;
