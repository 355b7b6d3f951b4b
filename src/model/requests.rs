/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::model::query::QueryParams;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction accepted by list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Filters for listing the monitors of a user
#[derive(Debug, Clone, Default)]
pub struct MonitorsQuery<'a> {
    /// Maximum number of checks returned per monitor
    pub limit: Option<u32>,
    /// Monitor types to include (`http`, `ping`, ...)
    pub types: Option<&'a [&'a str]>,
    /// Monitor status filter
    pub status: Option<&'a str>,
    /// Sort direction of the embedded checks
    pub sort_order: Option<SortOrder>,
    /// Whether response times should be normalized
    pub normalize: Option<bool>,
}

impl<'a> MonitorsQuery<'a> {
    /// Creates an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the monitor types
    pub fn with_types(mut self, types: &'a [&'a str]) -> Self {
        self.types = Some(types);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set normalization
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Builds `limit, type*, status, sortOrder, normalize`
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("limit", self.limit)
            .push_all("type", self.types)
            .push_opt("status", self.status)
            .push_opt("sortOrder", self.sort_order)
            .push_opt("normalize", self.normalize);
        params
    }
}

/// Filters for the statistics of a monitor
#[derive(Debug, Clone, Default)]
pub struct StatsQuery<'a> {
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Maximum number of checks considered
    pub limit: Option<u32>,
    /// Date range (`day`, `week`, `month`, ...)
    pub date_range: Option<&'a str>,
    /// Number of points to display
    pub num_to_display: Option<u32>,
    /// Whether response times should be normalized
    pub normalize: Option<bool>,
}

impl<'a> StatsQuery<'a> {
    /// Creates an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the date range
    pub fn with_date_range(mut self, date_range: &'a str) -> Self {
        self.date_range = Some(date_range);
        self
    }

    /// Set the number of points to display
    pub fn with_num_to_display(mut self, num_to_display: u32) -> Self {
        self.num_to_display = Some(num_to_display);
        self
    }

    /// Set normalization
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Builds `sortOrder, limit, dateRange, numToDisplay, normalize`
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("sortOrder", self.sort_order)
            .push_opt("limit", self.limit)
            .push_opt("dateRange", self.date_range)
            .push_opt("numToDisplay", self.num_to_display)
            .push_opt("normalize", self.normalize);
        params
    }
}

/// Filters and pagination for check listings
#[derive(Debug, Clone, Default)]
pub struct ChecksQuery<'a> {
    /// Sort direction
    pub sort_order: Option<SortOrder>,
    /// Maximum number of checks
    pub limit: Option<u32>,
    /// Date range (`day`, `week`, `month`, ...)
    pub date_range: Option<&'a str>,
    /// Free-form filter understood by the server (`all`, `down`, `resolve`)
    pub filter: Option<&'a str>,
    /// Zero-based page index
    pub page: Option<u32>,
    /// Page size
    pub rows_per_page: Option<u32>,
}

impl<'a> ChecksQuery<'a> {
    /// Creates an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the date range
    pub fn with_date_range(mut self, date_range: &'a str) -> Self {
        self.date_range = Some(date_range);
        self
    }

    /// Set the filter
    pub fn with_filter(mut self, filter: &'a str) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_rows_per_page(mut self, rows_per_page: u32) -> Self {
        self.rows_per_page = Some(rows_per_page);
        self
    }

    /// Builds `sortOrder, limit, dateRange, filter, page, rowsPerPage`
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("sortOrder", self.sort_order)
            .push_opt("limit", self.limit)
            .push_opt("dateRange", self.date_range)
            .push_opt("filter", self.filter)
            .push_opt("page", self.page)
            .push_opt("rowsPerPage", self.rows_per_page);
        params
    }
}

/// Body of `POST /auth/recovery/validate`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct RecoveryTokenRequest {
    /// Recovery token received by email
    #[serde(rename = "recoveryToken")]
    pub recovery_token: String,
}

/// Body of `POST /auth/invite`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InvitationRequest {
    /// Address the invitation is sent to
    pub email: String,
    /// Role granted on acceptance
    pub role: String,
}

/// Body of `POST /auth/invite/verify`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InvitationVerifyRequest {
    /// Invitation token
    pub token: String,
}
