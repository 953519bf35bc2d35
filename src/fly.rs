use log::debug;

use super::action::Action;
use super::pod::Pod;
use super::race::Race;
use super::strategy::{bang_bang_thrust, steer_target, PodStrategy};
use super::vec2::Point;

/// Below this many turns to the next checkpoint we coast in and turn early.
const DRIFT_STEPS: f64 = 6.0;
const DRIFT_GAIN: f64 = 3.0;
const BLAST_WINDOW: f64 = 90.0;
const DRIFT_WINDOW: f64 = 45.0;
const BOOST_WINDOW: f64 = 10.0;
const BOOST_MIN_DIST: f64 = 4000.0;
const SHIELD_MIN_REL_SPEED: f64 = 100.0;

/// Races through the checkpoints as fast as possible with no regard for the
/// other pods, shielding only when a hard hit is coming.
#[derive(Debug, Default)]
pub struct FlyStrategy {
    slot: usize,
    used_boost: bool,
}

impl FlyStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn used_boost(&self) -> bool {
        self.used_boost
    }

    fn should_shield_against(pod: &Pod, other: &Pod) -> bool {
        pod.will_collide_with(other) && (pod.vel - other.vel).len() > SHIELD_MIN_REL_SPEED
    }

    fn should_shield(&self, race: &Race) -> bool {
        let pod = race.pod(self.slot);
        race.opp_pods()
            .any(|other| Self::should_shield_against(pod, other))
    }

    /// Full speed at the next checkpoint.
    fn blast_step(&mut self, race: &Race) -> (Point, Action) {
        let pod = race.pod(self.slot);
        let target = steer_target(pod, race.next_checkpoint(self.slot, 0), DRIFT_GAIN);

        if self.should_shield(race) {
            debug!("pod {}: shield while blasting", self.slot);
            return (target, Action::Shield);
        }

        let target_dist = pod.dist_to(target);
        let angle_diff = pod.angle_to(target).abs();
        if !self.used_boost && angle_diff < BOOST_WINDOW && target_dist > BOOST_MIN_DIST {
            debug!("pod {}: boost, {:.0} to target", self.slot, target_dist);
            self.used_boost = true;
            return (target, Action::Boost);
        }

        (target, Action::thrust(bang_bang_thrust(angle_diff, BLAST_WINDOW)))
    }

    /// Assume we'll drift into the current checkpoint and turn for the one after.
    fn drift_step(&mut self, race: &Race) -> (Point, Action) {
        let pod = race.pod(self.slot);
        let target = steer_target(pod, race.next_checkpoint(self.slot, 1), DRIFT_GAIN);

        if self.should_shield(race) {
            debug!("pod {}: shield while drifting", self.slot);
            return (target, Action::Shield);
        }

        let angle_diff = pod.angle_to(target).abs();
        (target, Action::thrust(bang_bang_thrust(angle_diff, DRIFT_WINDOW)))
    }
}

impl PodStrategy for FlyStrategy {
    fn init(&mut self, _race: &Race, slot: usize) {
        self.slot = slot;
        self.used_boost = false;
    }

    fn compute_step(&mut self, race: &Race) -> (Point, Action) {
        let steps = race.pod(self.slot).steps_to(race.next_checkpoint(self.slot, 0));
        if steps < DRIFT_STEPS {
            debug!("pod {}: drift, {:.1} steps out", self.slot, steps);
            self.drift_step(race)
        } else {
            debug!("pod {}: blast, {:.1} steps out", self.slot, steps);
            self.blast_step(race)
        }
    }
}
