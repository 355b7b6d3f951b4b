/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// HTTP request client bound to the configured base address
pub mod http;
/// Query-string construction
pub mod query;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
