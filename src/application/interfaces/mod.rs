/// Check service interface
pub mod check;
/// Monitor service interface
pub mod monitor;
/// User, recovery and invitation service interface
pub mod user;
