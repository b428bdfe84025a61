//! JSON shapes read and written by the CLI.
//!
//! Points are `[x, y]` pairs; rings are implicitly closed (a repeated first
//! point at the end is accepted and dropped).

use serde::{Deserialize, Serialize};
use warmap::api::{Bonus, Point, Polygon, Ring, SuperBonus, Territory};
use warmap::graph::{Edge, VertexId};

pub type PointDto = [f64; 2];

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PolygonDto {
    pub outer: Vec<PointDto>,
    #[serde(default)]
    pub holes: Vec<Vec<PointDto>>,
}

fn ring(points: &[PointDto]) -> warmap::Result<Ring<f64>> {
    Ring::new(points.iter().map(|&[x, y]| Point::new(x, y)).collect())
}

impl PolygonDto {
    pub fn to_polygon(&self) -> warmap::Result<Polygon<f64>> {
        let outer = ring(&self.outer)?;
        let holes = self
            .holes
            .iter()
            .map(|h| ring(h))
            .collect::<warmap::Result<Vec<_>>>()?;
        Ok(Polygon::with_holes(outer, holes))
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NamedPolygon {
    pub name: String,
    #[serde(flatten)]
    pub polygon: PolygonDto,
}

/// Input of `label` and `validate`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PolygonsFile {
    pub polygons: Vec<NamedPolygon>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LabelRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ValidityRecord {
    pub name: String,
    /// Outer ring has no crossing edges.
    pub simple: bool,
    /// No edges of any ring cross.
    pub valid: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TerritoryDto {
    pub id: VertexId,
    #[serde(default)]
    pub name: String,
    /// Optional; territories with geometry gain neighbors from shared edges.
    #[serde(default)]
    pub polygon: Option<PolygonDto>,
}

impl TerritoryDto {
    pub fn to_territory(&self) -> warmap::Result<Option<Territory<f64>>> {
        match &self.polygon {
            Some(p) => Ok(Some(Territory::new(self.id, self.name.clone(), p.to_polygon()?))),
            None => Ok(None),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GroupDto {
    pub name: String,
    pub children: Vec<usize>,
}

/// Input of `armies`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MapFile {
    #[serde(default)]
    pub territories: Vec<TerritoryDto>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    pub bonuses: Vec<GroupDto>,
    #[serde(default)]
    pub super_bonuses: Vec<GroupDto>,
}

impl MapFile {
    pub fn bonuses(&self) -> Vec<Bonus> {
        self.bonuses
            .iter()
            .map(|g| Bonus::new(g.name.clone(), g.children.clone()))
            .collect()
    }

    pub fn super_bonuses(&self) -> Vec<SuperBonus> {
        self.super_bonuses
            .iter()
            .map(|g| SuperBonus::new(g.name.clone(), g.children.clone()))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ArmyRecord {
    pub name: String,
    pub armies: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ArmiesReport {
    pub territories: usize,
    pub edges: usize,
    pub bonuses: Vec<ArmyRecord>,
    pub super_bonuses: Vec<ArmyRecord>,
}
