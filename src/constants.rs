/// Base URL used when `UPTIME_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";
/// Request timeout in seconds; 0 leaves the transport default in place
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
/// User agent string used in HTTP requests to identify this client to the Uptime API
pub const USER_AGENT: &str = "uptime-client/0.1.0";
/// Media type sent with JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
