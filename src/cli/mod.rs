pub mod app;
mod commands;
pub mod logging;

pub use app::App;
pub use commands::{execute_command, Args, Commands};
pub use logging::{log_subscriber, LogHandle};
