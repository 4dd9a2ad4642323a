//! Random grid instance generation for exercising the solver.

pub mod generator;
