use hunt_core::{calculate_distance, ChestGroups};

/// One slot of a stage: cheapest fuel into this position and the index of
/// the previous-stage position it came from.
#[derive(Clone, Copy, Debug)]
pub struct StageEntry {
    pub fuel: f64,
    pub prev: u32,
}

/// Flattened cost/predecessor tables, one stage per chest number, each
/// aligned index-for-index with its chest group.
pub struct StageTable {
    stages: Vec<Vec<StageEntry>>,
}

impl StageTable {
    /// Runs the sweep. Stage 0 is the start position at fuel 0; stage k is
    /// computed entirely from the finished stage k-1, in order up to p.
    ///
    /// On equal fuel the smallest predecessor index wins: candidates are
    /// scanned in ascending index order and only a strictly smaller fuel
    /// replaces the current best. Both sides of such a tie are sums of the
    /// same operations, so the comparison is reproducible.
    pub fn sweep(groups: &ChestGroups) -> Self {
        let p = groups.chest_count();
        let mut stages = Vec::with_capacity(p as usize + 1);
        stages.push(vec![StageEntry { fuel: 0.0, prev: 0 }]);

        for chest in 1..=p {
            let prev_group = groups.group(chest - 1);
            let prev_stage = &stages[chest as usize - 1];

            let stage = groups
                .group(chest)
                .iter()
                .map(|&position| {
                    let mut best = StageEntry { fuel: f64::INFINITY, prev: 0 };
                    for (j, (&from, entry)) in
                        prev_group.iter().zip(prev_stage.iter()).enumerate()
                    {
                        let fuel = entry.fuel + calculate_distance(from, position);
                        if fuel < best.fuel {
                            best = StageEntry { fuel, prev: j as u32 };
                        }
                    }
                    best
                })
                .collect();

            stages.push(stage);
        }

        StageTable { stages }
    }

    pub fn stage(&self, chest: u32) -> &[StageEntry] {
        &self.stages[chest as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::{Grid, Problem};

    fn table_for(n: u32, m: u32, p: u32, matrix: Vec<Vec<u32>>) -> (ChestGroups, StageTable) {
        let grid = Grid::validate(&Problem { n, m, p, matrix }).unwrap();
        let groups = ChestGroups::build(&grid).unwrap();
        let table = StageTable::sweep(&groups);
        (groups, table)
    }

    #[test]
    fn stage_zero_is_the_seeded_start() {
        let (_, table) = table_for(1, 1, 1, vec![vec![1]]);
        assert_eq!(table.stage(0).len(), 1);
        assert_eq!(table.stage(0)[0].fuel, 0.0);
    }

    #[test]
    fn each_entry_holds_the_cheapest_way_in() {
        let (_, table) = table_for(2, 2, 2, vec![vec![1, 2], vec![2, 1]]);
        // Chest 1 at (1,1) and (2,2): fuel 0 and sqrt(2) from the start.
        assert_eq!(table.stage(1)[0].fuel, 0.0);
        assert_eq!(table.stage(1)[1].fuel, 2.0_f64.sqrt());
        // Chest 2 at (1,2) and (2,1): both are one step from (1,1).
        assert_eq!(table.stage(2)[0].fuel, 1.0);
        assert_eq!(table.stage(2)[0].prev, 0);
        assert_eq!(table.stage(2)[1].fuel, 1.0);
        assert_eq!(table.stage(2)[1].prev, 0);
    }

    #[test]
    fn equal_fuel_keeps_the_smallest_predecessor_index() {
        // Chest 1 at (1,2) and (2,1), both fuel 1 from the start; chest 2 at
        // (2,2), one step from either. The earlier position must win.
        let (_, table) = table_for(2, 2, 2, vec![vec![2, 1], vec![1, 2]]);
        assert_eq!(table.stage(1)[0].fuel, 1.0);
        assert_eq!(table.stage(1)[1].fuel, 1.0);
        assert_eq!(table.stage(2)[0].prev, 0);
        assert_eq!(table.stage(2)[1].prev, 0);
    }
}
