use crate::core::{Coordinate, Grid, UniformSource};

use super::Combatant;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the grid and
/// simply redrawn.
pub struct AutomatedCombatant<S> {
    source: S,
}

impl<S: UniformSource> AutomatedCombatant<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: UniformSource> Combatant for AutomatedCombatant<S> {
    fn choose_target(&mut self, target: &Grid) -> Option<Coordinate> {
        let size = target.size();
        let row = self.source.below(size);
        let col = self.source.below(size);
        Some(Coordinate::new(row, col))
    }
}
