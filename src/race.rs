use log::{info, trace};

use super::pod::{Pod, PodState};
use super::vec2::Point;

pub const POD_COUNT: usize = 4;
/// Slots of the pods we steer.
pub const MY_PODS: [usize; 2] = [0, 1];
/// Slots of the opposing pods.
pub const OPP_PODS: [usize; 2] = [2, 3];

/// Shared world state for one race. Checkpoints never change after setup;
/// pods are refreshed once per turn before any strategy runs.
#[derive(Debug, Clone)]
pub struct Race {
    pub laps: i32,
    pub checkpoints: Vec<Point>,
    pub pods: [Pod; POD_COUNT],
}

impl Race {
    pub fn new(laps: i32, checkpoints: Vec<Point>) -> Self {
        assert!(!checkpoints.is_empty(), "a race needs at least one checkpoint");
        info!(
            "race setup: {} laps, {} checkpoints",
            laps,
            checkpoints.len()
        );
        Race {
            laps,
            checkpoints,
            pods: Default::default(),
        }
    }

    /// Applies one turn of referee state, own pods first.
    pub fn update(&mut self, states: [PodState; POD_COUNT]) {
        let count = self.checkpoints.len();
        for (i, (pod, state)) in self.pods.iter_mut().zip(states).enumerate() {
            pod.update(state, count);
            trace!(
                "pod {}: pos {} vel {} angle {} next cp {} lap {}",
                i,
                pod.pos,
                pod.vel,
                pod.angle,
                pod.next_checkpoint,
                pod.lap
            );
        }
    }

    pub fn pod(&self, slot: usize) -> &Pod {
        &self.pods[slot]
    }

    pub fn my_pod(&self, i: usize) -> &Pod {
        &self.pods[MY_PODS[i]]
    }

    pub fn opp_pod(&self, i: usize) -> &Pod {
        &self.pods[OPP_PODS[i]]
    }

    pub fn opp_pods(&self) -> impl Iterator<Item = &Pod> {
        OPP_PODS.into_iter().map(move |slot| &self.pods[slot])
    }

    pub fn next_checkpoint(&self, slot: usize, offset: usize) -> Point {
        self.pods[slot].next_checkpoint(&self.checkpoints, offset)
    }

    /// Slot of the opposing pod that currently ranks first.
    pub fn opp_leader(&self) -> usize {
        let [a, b] = OPP_PODS;
        if self.pods[b].is_ahead_of(&self.pods[a], &self.checkpoints) {
            b
        } else {
            a
        }
    }
}
