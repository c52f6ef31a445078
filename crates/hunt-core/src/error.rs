use std::fmt;

/// The only two ways a solve can fail. Both are terminal: no retry, no
/// partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Structural or range violation in n, m, p, or the matrix itself.
    /// Detected before any solving starts.
    Validation(String),
    /// A chest number in 1..=p has no occurrence in the matrix. Detected
    /// after indexing, before solving.
    MissingChest(u32),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(reason) => f.write_str(reason),
            Self::MissingChest(chest) => {
                write!(f, "chest number {chest} not found in the matrix")
            }
        }
    }
}

impl std::error::Error for SolveError {}
