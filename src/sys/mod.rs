pub mod runtime;
pub mod watch;
