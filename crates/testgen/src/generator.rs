use std::collections::HashSet;

use chrono::{DateTime, Duration, Local};
use gridpath_core::grid::{BLOCKED, START, WALKABLE};
use rand::distr::{Distribution, Uniform};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct GridParams {
    pub id: u64,
    pub rows: u64,
    pub cols: u64,
    /// Blocked cells to scatter over the grid.
    pub blocked: u64,
}

/// A generated instance: the matrix plus its parameters and generation
/// timestamps. Instances are *not* guaranteed solvable; the solver
/// classifies them.
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Deserialize, Serialize, Debug)]
pub struct Instance {
    params: GridParams,
    info: String,
    start: DateTime<Local>,
    end: DateTime<Local>,
    data: Vec<Vec<u8>>,
}

impl Instance {
    #[must_use]
    pub const fn new(
        params: GridParams,
        info: String,
        start: DateTime<Local>,
        end: DateTime<Local>,
        data: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            params,
            info,
            start,
            end,
            data,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_data(&self) -> &Vec<Vec<u8>> {
        &self.data
    }

    #[must_use]
    pub const fn get_params(&self) -> &GridParams {
        &self.params
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Generate a single `rows x cols` matrix with `blocked` blocked cells
/// and a uniformly chosen start among the remaining ones.
///
/// At least one cell always stays walkable: `blocked` is capped at
/// `rows * cols - 1`.
///
/// # Panics
///
/// Panics if `rows` or `cols` is zero (cannot create a uniform
/// distribution over an empty range).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate_single_grid(rows: u64, cols: u64, blocked: u64) -> Vec<Vec<u8>> {
    let total = rows * cols;
    let blocked = blocked.min(total - 1);
    let mut random_generator = rand::rng();
    let cell_range = Uniform::new(0, total).unwrap();

    let mut matrix = vec![vec![WALKABLE; cols as usize]; rows as usize];

    let mut chosen: HashSet<u64> = HashSet::new();
    while (chosen.len() as u64) < blocked {
        let index = cell_range.sample(&mut random_generator);
        if chosen.insert(index) {
            matrix[(index / cols) as usize][(index % cols) as usize] = BLOCKED;
        }
    }

    loop {
        let index = cell_range.sample(&mut random_generator);
        if !chosen.contains(&index) {
            matrix[(index / cols) as usize][(index % cols) as usize] = START;
            break;
        }
    }

    matrix
}

#[must_use]
pub fn generate_mult_instances(
    n_grid: u64,
    rows: u64,
    cols: u64,
    blocked: u64,
) -> Vec<Instance> {
    (0..n_grid)
        .into_par_iter()
        .map(|id| {
            let start_time = Local::now();
            let data = generate_single_grid(rows, cols, blocked);
            let end_time = Local::now();
            Instance {
                params: GridParams {
                    id,
                    rows,
                    cols,
                    blocked,
                },
                info: "generated".to_string(),
                start: start_time,
                end: end_time,
                data,
            }
        })
        .collect()
}
