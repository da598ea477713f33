mod cell;
mod grid;
pub mod rules;

// Seed patterns for the rule and session tests
#[cfg(test)]
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
#[cfg(test)]
pub use patterns::presets;
pub use rules::next_generation;
