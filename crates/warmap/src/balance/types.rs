//! Map records consumed by the calculators, plus their configuration.

use crate::error::{MapError, Result};
use crate::geometry::{Coord, Point, Polygon};
use crate::graph::VertexId;

/// A single region of the map; `id` is its vertex in the adjacency graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Territory<T> {
    pub id: VertexId,
    pub name: String,
    pub geometry: Polygon<T>,
    /// Label point, filled in by [`CenterCalculator`](super::CenterCalculator).
    pub center: Option<Point<f64>>,
}

impl<T: Coord> Territory<T> {
    pub fn new(id: VertexId, name: impl Into<String>, geometry: Polygon<T>) -> Self {
        Self {
            id,
            name: name.into(),
            geometry,
            center: None,
        }
    }
}

/// Named group of territories scored as a unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bonus {
    pub name: String,
    pub children: Vec<VertexId>,
    pub armies: u32,
}

impl Bonus {
    pub fn new(name: impl Into<String>, children: Vec<VertexId>) -> Self {
        Self {
            name: name.into(),
            children,
            armies: 0,
        }
    }
}

/// Group of bonuses; `children` are indices into the bonus list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuperBonus {
    pub name: String,
    pub children: Vec<usize>,
    pub armies: u32,
}

impl SuperBonus {
    pub fn new(name: impl Into<String>, children: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            children,
            armies: 0,
        }
    }
}

/// Army assignment parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmyCfg {
    pub min_armies: u32,
    pub max_armies: u32,
    /// Weight of the share of the map a group covers.
    pub territory_weight: f64,
    /// Weight of how exposed a group is to outside neighbors.
    pub outer_weight: f64,
}

impl Default for ArmyCfg {
    fn default() -> Self {
        Self {
            min_armies: 1,
            max_armies: 10,
            territory_weight: 0.5,
            outer_weight: 0.5,
        }
    }
}

impl ArmyCfg {
    /// # Errors
    ///
    /// `MapError::InvalidArmyBounds` if `min_armies > max_armies`.
    pub fn validate(&self) -> Result<()> {
        if self.min_armies > self.max_armies {
            return Err(MapError::InvalidArmyBounds {
                min: self.min_armies,
                max: self.max_armies,
            });
        }
        Ok(())
    }
}
