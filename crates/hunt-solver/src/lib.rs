mod stage;

use hunt_core::{ChestGroups, Grid, PathStep, Problem, Solution, SolveError};
use stage::StageTable;

/// Solves one treasure hunt: the minimum fuel needed to start at (1,1) and
/// open one chest of every number 1..=p in increasing order, plus the
/// visiting order that achieves it.
///
/// Pure function of the request: fresh state per call, no I/O, callable from
/// any thread. Fails only on a malformed request ([`SolveError::Validation`])
/// or a chest number with no occurrence ([`SolveError::MissingChest`]).
pub fn solve(problem: &Problem) -> Result<Solution, SolveError> {
    let grid = Grid::validate(problem)?;
    let groups = ChestGroups::build(&grid)?;
    let table = StageTable::sweep(&groups);
    Ok(extract(&groups, &table))
}

/// Picks the cheapest final position (smallest index on equal fuel, same rule
/// as the sweep) and walks the predecessor indices back to the start.
fn extract(groups: &ChestGroups, table: &StageTable) -> Solution {
    let p = groups.chest_count();
    let last = table.stage(p);

    let mut best = 0;
    for (i, entry) in last.iter().enumerate().skip(1) {
        if entry.fuel < last[best].fuel {
            best = i;
        }
    }

    let mut path = Vec::with_capacity(p as usize + 1);
    let mut index = best;
    for chest in (0..=p).rev() {
        let cell = groups.group(chest)[index];
        path.push(PathStep { chest_number: chest, row: cell.row, col: cell.col });
        index = table.stage(chest)[index].prev as usize;
    }
    path.reverse();

    Solution { min_fuel: last[best].fuel, path }
}
