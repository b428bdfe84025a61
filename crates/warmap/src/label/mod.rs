//! Label engine: pole of inaccessibility of a polygon.
//!
//! Purpose
//! - Find the interior point farthest from the boundary (holes included), to
//!   place a territory's label or army marker.
//!
//! Method
//! - Seed the incumbent with the outer ring's centroid and the envelope center.
//! - Tile the envelope with squares of side min(width, height) and run a
//!   best-first search on each cell's upper bound `max`; cells that cannot beat
//!   the incumbent by more than the tolerance are pruned, others split in four.
//! - Correctness rests on `max` being admissible (see `Cell`).
//!
//! Runtime is bounded only by the tolerance: halving it roughly doubles the
//! depth of the cells near the optimum.

mod centroid;
mod search;
mod types;

pub use centroid::{centroid_cell, ring_centroid};
pub use search::{label_with_defaults, polylabel, polylabel_with_cfg};
pub use types::{Cell, Label, LabelCfg};
