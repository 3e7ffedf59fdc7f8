use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::markup::ChartDocument;

pub const DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire shape for embedding chart markup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: ChartDocument,
}

impl ChartDocument {
    pub fn to_json_contract_v1_pretty(&self) -> BoardResult<String> {
        let payload = ChartDocumentJsonContractV1 {
            schema_version: DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BoardError::InvalidData(format!("failed to serialize document contract v1: {e}"))
        })
    }

    /// Parses either the versioned contract shape or a bare document.
    pub fn from_json_compat_str(input: &str) -> BoardResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartDocumentJsonContractV1>(input) {
            if payload.schema_version != DOCUMENT_JSON_SCHEMA_V1 {
                return Err(BoardError::InvalidData(format!(
                    "unsupported document schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.document);
        }
        serde_json::from_str(input).map_err(|e| {
            BoardError::InvalidData(format!("failed to parse document json payload: {e}"))
        })
    }
}
