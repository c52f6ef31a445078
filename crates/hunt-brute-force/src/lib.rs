use hunt_core::{
    calculate_distance, Cell, ChestGroups, Grid, PathStep, Problem, Solution, SolveError, START,
};

/// Exhaustive reference solve: tries every combination of one position per
/// chest number in increasing order. Exponential in p, only meant for small
/// instances and cross-checking.
pub fn solve(problem: &Problem) -> Result<Solution, SolveError> {
    let grid = Grid::validate(problem)?;
    let groups = ChestGroups::build(&grid)?;
    let p = groups.chest_count() as usize;

    let mut best_fuel = f64::INFINITY;
    let mut best_route = vec![0u32; p + 1];
    let mut route = vec![0u32; p + 1];

    explore(
        &groups,
        1,
        START,
        0.0,
        &mut route,
        &mut best_fuel,
        &mut best_route,
    );

    // Every group is non-empty, so at least one full route was visited.
    let path = best_route
        .iter()
        .enumerate()
        .map(|(chest, &i)| {
            let cell = groups.group(chest as u32)[i as usize];
            PathStep { chest_number: chest as u32, row: cell.row, col: cell.col }
        })
        .collect();

    Ok(Solution { min_fuel: best_fuel, path })
}

fn explore(
    groups: &ChestGroups,
    chest: u32,
    at: Cell,
    fuel: f64,
    route: &mut [u32],
    best_fuel: &mut f64,
    best_route: &mut [u32],
) {
    // Pruning: a partial route already as expensive as the best full one
    // cannot improve on it.
    if fuel >= *best_fuel {
        return;
    }

    if chest > groups.chest_count() {
        *best_fuel = fuel;
        best_route.copy_from_slice(route);
        return;
    }

    for (i, &cell) in groups.group(chest).iter().enumerate() {
        route[chest as usize] = i as u32;
        explore(
            groups,
            chest + 1,
            cell,
            fuel + calculate_distance(at, cell),
            route,
            best_fuel,
            best_route,
        );
    }
}
