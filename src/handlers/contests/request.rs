//! Request bodies for the contest endpoints

use serde::Deserialize;

/// Query parameters for `GET /contests`.
#[derive(Debug, Deserialize)]
pub struct ListContestsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
