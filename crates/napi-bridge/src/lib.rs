#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;

use hunt_core::Problem;

#[napi(object)]
pub struct TreasureHuntInput {
    pub n: u32,
    pub m: u32,
    pub p: u32,
    pub matrix: Vec<Vec<u32>>,
}

#[napi(object)]
pub struct Position {
    pub chest_number: u32,
    pub row: u32,
    pub col: u32,
}

#[napi(object)]
pub struct TreasureHuntResponse {
    pub min_fuel: f64,
    pub path: Vec<Position>,
}

#[napi]
pub fn solve(input: TreasureHuntInput) -> Result<TreasureHuntResponse> {
    let problem = Problem {
        n: input.n,
        m: input.m,
        p: input.p,
        matrix: input.matrix,
    };

    let solution =
        hunt_solver::solve(&problem).map_err(|err| Error::from_reason(err.to_string()))?;

    Ok(TreasureHuntResponse {
        min_fuel: solution.min_fuel,
        path: solution
            .path
            .into_iter()
            .map(|step| Position {
                chest_number: step.chest_number,
                row: step.row,
                col: step.col,
            })
            .collect(),
    })
}
