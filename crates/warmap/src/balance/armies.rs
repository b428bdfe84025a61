use std::collections::BTreeSet;

use super::types::{ArmyCfg, Bonus, SuperBonus};
use crate::error::{MapError, Result};
use crate::graph::{Graph, VertexId};

/// Assigns army values to bonuses from the adjacency graph.
///
/// `territory_count` is the number of territories on the map; valid
/// territory ids are `0..territory_count`.
#[derive(Debug)]
pub struct ArmyCalculator<'g, G> {
    territory_count: usize,
    neighbors: &'g G,
    cfg: ArmyCfg,
}

impl<'g, G: Graph> ArmyCalculator<'g, G> {
    /// # Errors
    ///
    /// `MapError::InvalidArmyBounds` for an inverted `cfg`.
    pub fn new(territory_count: usize, neighbors: &'g G, cfg: ArmyCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            territory_count,
            neighbors,
            cfg,
        })
    }

    #[inline]
    pub fn cfg(&self) -> ArmyCfg {
        self.cfg
    }

    /// Weighted blend of map share and capped exposure; 0 for an empty group.
    pub fn score(&self, territories: usize, connections: usize) -> f64 {
        if territories == 0 || self.territory_count == 0 {
            return 0.0;
        }
        let share = territories as f64 / self.territory_count as f64;
        let exposure = (0.5 * connections as f64 / territories as f64).min(1.0);
        self.cfg.territory_weight * share + self.cfg.outer_weight * exposure
    }

    /// Round half away from zero, floor at `min_armies`, cap at `max_armies`.
    pub fn armies(&self, score: f64) -> u32 {
        let raw = (score * f64::from(self.cfg.max_armies)).round();
        // `as` saturates; negative scores cannot occur with non-negative weights.
        (raw as u32).max(self.cfg.min_armies).min(self.cfg.max_armies)
    }

    /// Neighbors of `children` that are not themselves children.
    ///
    /// # Errors
    ///
    /// `MapError::VertexNotFound` for an id outside `0..territory_count`.
    pub fn outer_adjacents(&self, children: &BTreeSet<VertexId>) -> Result<BTreeSet<VertexId>> {
        let mut adjacents = BTreeSet::new();
        for &child in children {
            if child >= self.territory_count {
                return Err(MapError::VertexNotFound(child));
            }
            adjacents.extend(self.neighbors.adjacents(child)?);
        }
        Ok(adjacents.difference(children).copied().collect())
    }

    /// Army value of one group of territories.
    ///
    /// # Errors
    ///
    /// See [`ArmyCalculator::outer_adjacents`].
    pub fn group_armies(&self, children: &BTreeSet<VertexId>) -> Result<u32> {
        let outer = self.outer_adjacents(children)?;
        let score = self.score(children.len(), outer.len());
        let armies = self.armies(score);
        tracing::debug!(
            children = children.len(),
            outer = outer.len(),
            score,
            armies,
            "group scored"
        );
        Ok(armies)
    }

    /// Write army values onto every bonus, then onto every super-bonus.
    ///
    /// A super-bonus is scored as one group made of all territories of its
    /// child bonuses. Nothing is written if any record is invalid.
    ///
    /// # Errors
    ///
    /// `MapError::VertexNotFound` for an unknown territory id,
    /// `MapError::UnknownBonus` for a super-bonus child outside `bonuses`.
    pub fn calculate_armies(&self, bonuses: &mut [Bonus], super_bonuses: &mut [SuperBonus]) -> Result<()> {
        let mut bonus_armies = Vec::with_capacity(bonuses.len());
        for bonus in bonuses.iter() {
            let children: BTreeSet<VertexId> = bonus.children.iter().copied().collect();
            bonus_armies.push(self.group_armies(&children)?);
        }

        let mut super_armies = Vec::with_capacity(super_bonuses.len());
        for sb in super_bonuses.iter() {
            let mut children = BTreeSet::new();
            for &index in &sb.children {
                let bonus = bonuses.get(index).ok_or(MapError::UnknownBonus(index))?;
                children.extend(bonus.children.iter().copied());
            }
            super_armies.push(self.group_armies(&children)?);
        }

        for (bonus, armies) in bonuses.iter_mut().zip(bonus_armies) {
            bonus.armies = armies;
        }
        for (sb, armies) in super_bonuses.iter_mut().zip(super_armies) {
            sb.armies = armies;
        }
        tracing::debug!(
            bonuses = bonuses.len(),
            super_bonuses = super_bonuses.len(),
            "armies assigned"
        );
        Ok(())
    }
}
