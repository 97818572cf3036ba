use std::collections::VecDeque;

use crate::core::{Coordinate, Grid, ShotError};

use super::TargetSource;

/// Replays a fixed list of targets, then stops.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTargets {
    queue: VecDeque<Coordinate>,
    rejected: Vec<ShotError>,
}

impl ScriptedTargets {
    pub fn new<I>(targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        Self {
            queue: targets.into_iter().map(Into::into).collect(),
            rejected: Vec::new(),
        }
    }

    /// Targets not yet fired.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Every refusal reported so far.
    pub fn refusals(&self) -> &[ShotError] {
        &self.rejected
    }
}

impl TargetSource for ScriptedTargets {
    fn next_target(&mut self, _target: &Grid) -> Option<Coordinate> {
        self.queue.pop_front()
    }

    fn rejected(&mut self, error: &ShotError) {
        self.rejected.push(*error);
    }
}
