//! Sweeps a grid of seeded random instances through the stage-DP solver and
//! the brute-force baseline, printing one CSV row per instance to stdout.
//! Any disagreement dumps the offending instance to stderr and fails the run.

use std::process::ExitCode;
use std::thread;

use crossbeam_channel::unbounded;
use hunt_core::SolveError;
use hunt_validation::{compare, random_problem, ComparisonRecord, CSV_HEADER};

const BASE_SEED: u64 = 0x7472_6561_7375_7265;
const INSTANCES_PER_SHAPE: u64 = 16;

struct Job {
    index: usize,
    n: u32,
    m: u32,
    p: u32,
    seed: u64,
}

fn main() -> ExitCode {
    // Brute force is exponential in p; keep the shapes small enough that the
    // baseline stays instant.
    let mut jobs = Vec::new();
    for &(n, m) in &[(1, 1), (1, 4), (2, 2), (2, 3), (3, 3), (4, 4)] {
        for p in 1..=(n * m).min(5) {
            for instance in 0..INSTANCES_PER_SHAPE {
                let index = jobs.len();
                let seed = BASE_SEED
                    .wrapping_add(instance)
                    .wrapping_add((index as u64) << 20);
                jobs.push(Job { index, n, m, p, seed });
            }
        }
    }
    let total = jobs.len();

    let (job_tx, job_rx) = unbounded::<Job>();
    let (record_tx, record_rx) = unbounded::<(usize, Result<ComparisonRecord, SolveError>)>();
    for job in jobs {
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .min(total.max(1));

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let record_tx = record_tx.clone();
            scope.spawn(move || {
                for job in job_rx {
                    let problem = random_problem(job.n, job.m, job.p, job.seed);
                    let _ = record_tx.send((job.index, compare(&problem, job.seed)));
                }
            });
        }
        drop(record_tx);
    });

    let mut records: Vec<Option<Result<ComparisonRecord, SolveError>>> =
        (0..total).map(|_| None).collect();
    for (index, outcome) in record_rx {
        records[index] = Some(outcome);
    }

    println!("{CSV_HEADER}");
    let mut failures = 0usize;
    for outcome in records.into_iter().flatten() {
        match outcome {
            Ok(record) => {
                println!("{}", record.csv_row());
                if !record.ok() {
                    failures += 1;
                    dump_instance(&record);
                }
            }
            Err(err) => {
                // Generated instances always cover every chest number, so
                // any error here is a harness bug.
                failures += 1;
                eprintln!("instance failed to solve: {err}");
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {total} instances disagreed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn dump_instance(record: &ComparisonRecord) {
    let problem = random_problem(record.n, record.m, record.p, record.seed);
    match serde_json::to_string(&problem) {
        Ok(json) => eprintln!("disagreement on {json}"),
        Err(err) => eprintln!("disagreement on seed {} ({err})", record.seed),
    }
}
