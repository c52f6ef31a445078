use crate::error::SolveError;
use crate::models::{Cell, Problem};

/// Upper bound on both grid sides.
pub const MAX_SIDE: u32 = 500;

/// Validated matrix, flat row-major storage.
#[derive(Clone, Debug)]
pub struct Grid {
    n: u32,
    m: u32,
    p: u32,
    cells: Vec<u32>,
}

impl Grid {
    /// Checks every structural constraint of a request and flattens the
    /// matrix. The first violation wins; nothing is computed past it.
    pub fn validate(problem: &Problem) -> Result<Self, SolveError> {
        let Problem { n, m, p, ref matrix } = *problem;

        if n == 0 || n > MAX_SIDE {
            return Err(SolveError::Validation(format!(
                "n must be between 1 and {MAX_SIDE}"
            )));
        }
        if m == 0 || m > MAX_SIDE {
            return Err(SolveError::Validation(format!(
                "m must be between 1 and {MAX_SIDE}"
            )));
        }
        if p == 0 {
            return Err(SolveError::Validation("p must be at least 1".to_string()));
        }
        if p > n * m {
            return Err(SolveError::Validation(format!(
                "p must be <= n * m ({})",
                n * m
            )));
        }
        if matrix.len() != n as usize {
            return Err(SolveError::Validation(
                "matrix row count doesn't match n".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity((n * m) as usize);
        for row in matrix {
            if row.len() != m as usize {
                return Err(SolveError::Validation(
                    "matrix column count doesn't match m".to_string(),
                ));
            }
            for &value in row {
                if value == 0 || value > p {
                    return Err(SolveError::Validation(format!(
                        "matrix values must be between 1 and {p}"
                    )));
                }
                cells.push(value);
            }
        }

        Ok(Grid { n, m, p, cells })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    /// Chest number at a 1-indexed coordinate.
    pub fn chest_at(&self, cell: Cell) -> u32 {
        self.cells[((cell.row - 1) * self.m + (cell.col - 1)) as usize]
    }
}
