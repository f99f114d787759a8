//! Request bodies for the problem endpoints

use serde::Deserialize;

/// Query parameters for `GET /problems`.
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
}
