//! Map assembly calculators: label points, neighbors, and army values.
//!
//! Pipeline
//! - `CenterCalculator` writes each territory's label point.
//! - `NeighborCalculator` fills an adjacency graph from shared boundary segments.
//! - `ArmyCalculator` reads the finished graph and assigns army values to
//!   bonuses and super-bonuses.
//!
//! Scoring (per group of territories)
//! - `outer` = neighbors of the group that are not in the group.
//! - `score = tw·(|group| / territories) + ow·min(0.5·|outer| / |group|, 1)`.
//! - `armies = clamp(round(score·max_armies), min_armies, max_armies)`, with
//!   rounding half away from zero.

mod armies;
mod centers;
mod neighbors;
mod types;

pub use armies::ArmyCalculator;
pub use centers::CenterCalculator;
pub use neighbors::{adjacency_from_shared_segments, NeighborCalculator};
pub use types::{ArmyCfg, Bonus, SuperBonus, Territory};
