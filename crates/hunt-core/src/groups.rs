use crate::error::SolveError;
use crate::grid::Grid;
use crate::models::Cell;

/// The fixed starting position, modeled as a virtual chest number 0.
pub const START: Cell = Cell { row: 1, col: 1 };

/// Chest positions grouped by chest number, in row-major discovery order.
/// Group 0 holds only [`START`].
#[derive(Clone, Debug)]
pub struct ChestGroups {
    groups: Vec<Vec<Cell>>,
}

impl ChestGroups {
    /// Scans the grid row by row and files every cell under its chest
    /// number, then checks that no chest number in 1..=p is absent.
    /// Range-checked values do not guarantee coverage (p = 3 with no 2
    /// anywhere), so the check runs even on a validated grid.
    pub fn build(grid: &Grid) -> Result<Self, SolveError> {
        let p = grid.p() as usize;
        let mut groups = vec![Vec::new(); p + 1];
        groups[0].push(START);

        for row in 1..=grid.n() {
            for col in 1..=grid.m() {
                let cell = Cell { row, col };
                groups[grid.chest_at(cell) as usize].push(cell);
            }
        }

        for chest in 1..=p {
            if groups[chest].is_empty() {
                return Err(SolveError::MissingChest(chest as u32));
            }
        }

        Ok(ChestGroups { groups })
    }

    /// Largest chest number, i.e. p.
    pub fn chest_count(&self) -> u32 {
        (self.groups.len() - 1) as u32
    }

    /// Positions of one chest number. Chest 0 is the start group.
    pub fn group(&self, chest: u32) -> &[Cell] {
        &self.groups[chest as usize]
    }
}
