/// Installs the tracing subscriber and rotates old log files.
pub mod logsetup;
