mod app;
mod components;
mod server;

pub use server::start_server;
