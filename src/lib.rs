pub mod chat_core;
pub mod config;
pub mod frontend;

pub use config::Settings;
pub use frontend::start_server;
