/// Resource methods of the Uptime API
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
/// Session store seam and 401 interceptor
pub mod session;
