use serde::{Deserialize, Serialize};

/// One solve request, matching the JSON body the frontend sends.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
    pub n: u32,
    pub m: u32,
    pub p: u32,
    pub matrix: Vec<Vec<u32>>,
}

impl Problem {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Matrix serialized on its own, the shape history rows store it in.
    pub fn matrix_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.matrix)
    }
}

/// 1-indexed grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

/// One visited position of the reconstructed route. Chest number 0 is the
/// start position (1,1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub chest_number: u32,
    pub row: u32,
    pub col: u32,
}

impl PathStep {
    pub fn cell(&self) -> Cell {
        Cell { row: self.row, col: self.col }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub min_fuel: f64,
    pub path: Vec<PathStep>,
}
