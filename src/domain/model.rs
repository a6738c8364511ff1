use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One object from the input JSON array. The source data is heterogeneous,
/// so the shape is a plain map instead of a typed struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

/// One CSV data line: rendered cells in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub header: Vec<String>,
    pub rows: Vec<OutputRow>,
}
