/// Request/response envelope for the translate endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    /// Optional table DDL or schema description folded into the prompt.
    #[serde(default)]
    pub table_schema: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
}
