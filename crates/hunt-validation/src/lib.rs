use hunt_core::{calculate_distance, PathStep, Problem, SolveError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Seeded random instance where every chest number is guaranteed to occur:
/// the first p slots of a shuffled cell order get chests 1..=p, every other
/// cell draws uniformly from 1..=p.
pub fn random_problem(n: u32, m: u32, p: u32, seed: u64) -> Problem {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let cells = (n * m) as usize;

    let mut order: Vec<usize> = (0..cells).collect();
    order.shuffle(&mut rng);

    let mut flat = vec![0u32; cells];
    for (chest, &slot) in (1..=p).zip(order.iter()) {
        flat[slot] = chest;
    }
    for value in flat.iter_mut() {
        if *value == 0 {
            *value = rng.gen_range(1..=p);
        }
    }

    let matrix = flat.chunks(m as usize).map(|row| row.to_vec()).collect();
    Problem { n, m, p, matrix }
}

/// Total fuel along a reconstructed route.
pub fn path_fuel(path: &[PathStep]) -> f64 {
    path.windows(2)
        .map(|pair| calculate_distance(pair[0].cell(), pair[1].cell()))
        .sum()
}

pub const CSV_HEADER: &str = "n,m,p,seed,dp_fuel,brute_fuel,fuel_agrees,path_consistent";

/// Outcome of running both solvers on one instance.
#[derive(Clone, Debug)]
pub struct ComparisonRecord {
    pub n: u32,
    pub m: u32,
    pub p: u32,
    pub seed: u64,
    pub dp_fuel: f64,
    pub brute_fuel: f64,
    /// Exact agreement is expected: both solvers accumulate the same
    /// distance terms in the same order.
    pub fuel_agrees: bool,
    /// The DP path re-sums to its reported fuel and steps through chest
    /// numbers 0..=p in order.
    pub path_consistent: bool,
}

impl ComparisonRecord {
    pub fn ok(&self) -> bool {
        self.fuel_agrees && self.path_consistent
    }

    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.n,
            self.m,
            self.p,
            self.seed,
            self.dp_fuel,
            self.brute_fuel,
            self.fuel_agrees,
            self.path_consistent
        )
    }
}

/// Runs the stage-DP solver and the brute-force baseline on one instance.
pub fn compare(problem: &Problem, seed: u64) -> Result<ComparisonRecord, SolveError> {
    let dp = hunt_solver::solve(problem)?;
    let brute = hunt_brute_force::solve(problem)?;

    let ordered = dp
        .path
        .iter()
        .enumerate()
        .all(|(chest, step)| step.chest_number == chest as u32);
    let path_consistent = ordered
        && dp.path.len() == problem.p as usize + 1
        && (path_fuel(&dp.path) - dp.min_fuel).abs() < 1e-9;

    Ok(ComparisonRecord {
        n: problem.n,
        m: problem.m,
        p: problem.p,
        seed,
        dp_fuel: dp.min_fuel,
        brute_fuel: brute.min_fuel,
        fuel_agrees: dp.min_fuel == brute.min_fuel,
        path_consistent,
    })
}
