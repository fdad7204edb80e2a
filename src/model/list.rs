use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page metadata, present only for paginated listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginatorDto {
    pub rows_per_page: u64,
    pub page_count: u64,
    pub total: u64,
}

/// Body of the list endpoint.
///
/// A listing without rows is `{}`; otherwise `results` is always present and
/// `paginator` only when the listing was paginated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelopeDto {
    Results {
        results: Vec<Map<String, Value>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paginator: Option<PaginatorDto>,
    },
    Empty {},
}
