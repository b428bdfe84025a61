use super::types::Territory;
use crate::error::Result;
use crate::geometry::Coord;
use crate::label::{polylabel_with_cfg, LabelCfg};

/// Places the label point of every territory.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterCalculator {
    cfg: LabelCfg,
}

impl CenterCalculator {
    pub fn new(cfg: LabelCfg) -> Self {
        Self { cfg }
    }

    /// Store the pole of inaccessibility of each territory in `center`.
    ///
    /// # Errors
    ///
    /// `MapError::InvalidPrecision` for a bad tolerance; no territory is
    /// touched in that case.
    pub fn create_centerpoints<T: Coord>(&self, territories: &mut [Territory<T>]) -> Result<()> {
        self.cfg.validate()?;
        for territory in territories.iter_mut() {
            let label = polylabel_with_cfg(&territory.geometry, self.cfg)?;
            tracing::trace!(id = territory.id, distance = label.distance, "center placed");
            territory.center = Some(label.point);
        }
        Ok(())
    }
}
