//! gridpath CLI -- solve and generate grid instances.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "gridpath", about = "Hamiltonian path search on grid graphs")]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve grid instances from files or directories
    Solve(SolveArgs),
    /// Generate random grid instances
    Generate(GenerateArgs),
    /// Print the JSON Schema for the instance file format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Input files (.grid text or .json instances) or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Search strategy
    #[arg(long, value_enum, default_value_t = StrategyName::Optimized)]
    pub strategy: StrategyName,
    /// Print the full path on success
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per file)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of instances to generate
    #[arg(long)]
    pub n_grid: u64,
    /// Rows per grid
    #[arg(long)]
    pub rows: u64,
    /// Columns per grid
    #[arg(long)]
    pub cols: u64,
    /// Blocked cells per grid
    #[arg(long)]
    pub blocked: u64,
    /// Output directory for generated instance files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyName {
    Backtracking,
    Greedy,
    ForcedMove,
    EdgeElimination,
    ValidationForcedMove,
    ValidationEdgeElimination,
    Optimized,
}

impl From<StrategyName> for gridpath_core::Strategy {
    fn from(name: StrategyName) -> Self {
        match name {
            StrategyName::Backtracking => Self::Backtracking,
            StrategyName::Greedy => Self::Greedy,
            StrategyName::ForcedMove => Self::ForcedMove,
            StrategyName::EdgeElimination => Self::EdgeElimination,
            StrategyName::ValidationForcedMove => Self::ValidationForcedMove,
            StrategyName::ValidationEdgeElimination => Self::ValidationEdgeElimination,
            StrategyName::Optimized => Self::Optimized,
        }
    }
}
