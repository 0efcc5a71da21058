pub mod appender;
pub mod appender_layer;
pub mod color;
pub mod config;
pub mod engine;
pub mod event;
pub mod format;
pub mod logger;
pub mod severity;
pub mod stdout_sink;
pub mod theme;
