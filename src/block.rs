use log::debug;

use super::action::{Action, FULL_THRUST};
use super::pod::Pod;
use super::race::{Race, OPP_PODS};
use super::strategy::PodStrategy;
use super::vec2::Point;

/// Slowest pursuit speed assumed when solving for an intercept.
pub const MIN_PURSUIT_SPEED: f64 = 100.0;

/// Gets in the way of the lead opponent by heading for where it will be.
///
/// The blocked pod is fixed to the first opposing slot when the strategy is
/// bound; it does not switch if the other opponent takes the lead.
#[derive(Debug, Default)]
pub struct BlockStrategy {
    slot: usize,
    blocked: usize,
}

impl BlockStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocked_slot(&self) -> usize {
        self.blocked
    }

    pub fn compute_target(&self, race: &Race) -> Point {
        let prey = race.pod(self.blocked);
        let speed = race.pod(self.slot).vel.len().max(MIN_PURSUIT_SPEED);
        match self.compute_hit_time(race, speed) {
            Some(t) => prey.pos + prey.vel * t,
            None => prey.pos,
        }
    }

    /// Turns until a pursuer at `speed` can meet the blocked pod, if ever.
    pub fn compute_hit_time(&self, race: &Race, speed: f64) -> Option<f64> {
        intercept_time(race.pod(self.slot).pos, speed, race.pod(self.blocked))
    }
}

/// Earliest non-negative `t` with `|prey.pos + prey.vel * t - from| = speed * t`.
pub fn intercept_time(from: Point, speed: f64, prey: &Pod) -> Option<f64> {
    let delta = prey.pos - from;
    let a = prey.vel.len2() - speed * speed;
    let b = 2.0 * delta.dot(prey.vel);
    let c = delta.len2();
    let disc = b * b - 4.0 * a * c;
    if a == 0.0 || disc < 0.0 {
        return None;
    }

    let sq = disc.sqrt();
    let first = (-b - sq) / (2.0 * a);
    if first >= 0.0 {
        return Some(first);
    }
    let second = (-b + sq) / (2.0 * a);
    if second >= 0.0 {
        Some(second)
    } else {
        None
    }
}

impl PodStrategy for BlockStrategy {
    fn init(&mut self, _race: &Race, slot: usize) {
        self.slot = slot;
        self.blocked = OPP_PODS[0];
    }

    fn compute_step(&mut self, race: &Race) -> (Point, Action) {
        let target = self.compute_target(race);
        debug!(
            "pod {}: blocking pod {} at {}",
            self.slot, self.blocked, target
        );
        (target, Action::thrust(FULL_THRUST))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::{PodState, Vector, POD_COUNT};

    fn state(x: f64, y: f64, vx: f64, vy: f64) -> PodState {
        PodState {
            pos: Point::new(x, y),
            vel: Vector::new(vx, vy),
            angle: 0.0,
            next_checkpoint: 1,
        }
    }

    fn race(me: PodState, lead: PodState, other: PodState) -> Race {
        let mut race = Race::new(3, vec![Point::new(0.0, 0.0), Point::new(10000.0, 0.0)]);
        let mut states = [state(0.0, 8000.0, 0.0, 0.0); POD_COUNT];
        states[1] = me;
        states[2] = lead;
        states[3] = other;
        race.update(states);
        race
    }

    fn block(race: &Race) -> BlockStrategy {
        let mut s = BlockStrategy::new();
        s.init(race, 1);
        s
    }

    #[test]
    fn stationary_prey_is_reached_at_its_position() {
        let race = race(
            state(0.0, 0.0, 100.0, 0.0),
            state(5000.0, 0.0, 0.0, 0.0),
            state(0.0, 5000.0, 0.0, 0.0),
        );
        let s = block(&race);
        let t = s.compute_hit_time(&race, 100.0).unwrap();
        assert!((t - 50.0).abs() < 1e-9);
        let (target, action) = block(&race).compute_step(&race);
        assert_eq!(Point::new(5000.0, 0.0), target);
        assert_eq!(Action::Thrust(100), action);
    }

    #[test]
    fn leads_a_moving_prey() {
        // Prey crossing at 300/turn, hunter at 500/turn: meet after 8 turns.
        let race = race(
            state(0.0, 0.0, 500.0, 0.0),
            state(4000.0, -2400.0, 0.0, 300.0),
            state(0.0, 5000.0, 0.0, 0.0),
        );
        let s = block(&race);
        assert!((s.compute_hit_time(&race, 500.0).unwrap() - 8.0).abs() < 1e-9);
        let target = s.compute_target(&race);
        assert!((target.x - 4000.0).abs() < 1e-6);
        assert!((target.y - 0.0).abs() < 1e-6);
    }

    #[test]
    fn slow_hunter_uses_speed_floor() {
        let race = race(
            state(0.0, 0.0, 10.0, 0.0),
            state(5000.0, 0.0, 0.0, 0.0),
            state(0.0, 5000.0, 0.0, 0.0),
        );
        let s = block(&race);
        let speed = race.pod(1).vel.len().max(MIN_PURSUIT_SPEED);
        assert_eq!(100.0, speed);
        assert!((s.compute_hit_time(&race, speed).unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unreachable_prey_falls_back_to_its_position() {
        // Prey running straight away faster than we can chase.
        let race = race(
            state(0.0, 0.0, 100.0, 0.0),
            state(5000.0, 0.0, 400.0, 0.0),
            state(0.0, 5000.0, 0.0, 0.0),
        );
        let s = block(&race);
        assert_eq!(None, s.compute_hit_time(&race, 100.0));
        assert_eq!(Point::new(5000.0, 0.0), s.compute_target(&race));
    }

    #[test]
    fn equal_speed_has_no_intercept() {
        let prey = Pod::new(state(5000.0, 0.0, 0.0, 100.0));
        assert_eq!(None, intercept_time(Point::new(0.0, 0.0), 100.0, &prey));
    }

    #[test]
    fn keeps_first_opponent_even_when_behind() {
        let race = race(
            state(0.0, 0.0, 100.0, 0.0),
            state(1000.0, 0.0, 0.0, 0.0),
            state(9000.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(OPP_PODS[1], race.opp_leader());
        let s = block(&race);
        assert_eq!(OPP_PODS[0], s.blocked_slot());
        assert_eq!(Point::new(1000.0, 0.0), s.compute_target(&race));
    }
}
