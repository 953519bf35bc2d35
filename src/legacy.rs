use log::debug;

use super::action::Action;
use super::race::Race;
use super::strategy::{bang_bang_thrust, steer_target, PodStrategy};
use super::vec2::Point;

const DRIFT_GAIN: f64 = 2.0;
const THRUST_WINDOW: f64 = 90.0;
const BOOST_WINDOW: f64 = 10.0;
const BOOST_MIN_DIST: f64 = 4000.0;
/// Closer than this to the checkpoint we brake for the turn.
const BRAKE_DIST: f64 = 2000.0;

/// Earlier racer: straight at the next checkpoint, boost on a long straight,
/// shield whenever an opponent is about to touch us.
#[derive(Debug, Default)]
pub struct LegacyStrategy {
    slot: usize,
    dont_boost_before_lap: i32,
    used_boost: bool,
}

impl LegacyStrategy {
    pub fn new(dont_boost_before_lap: i32) -> Self {
        LegacyStrategy {
            dont_boost_before_lap,
            ..Self::default()
        }
    }

    pub fn used_boost(&self) -> bool {
        self.used_boost
    }

    pub fn compute_target(&self, race: &Race) -> Point {
        steer_target(
            race.pod(self.slot),
            race.next_checkpoint(self.slot, 0),
            DRIFT_GAIN,
        )
    }

    pub fn compute_action(&mut self, race: &Race, target: Point) -> Action {
        let pod = race.pod(self.slot);
        if race.opp_pods().any(|other| pod.will_collide_with(other)) {
            debug!("pod {}: shield", self.slot);
            return Action::Shield;
        }

        let target_dist = pod.dist_to(target);
        let angle_diff = pod.angle_to(target).abs();
        if !self.used_boost
            && pod.lap >= self.dont_boost_before_lap
            && angle_diff < BOOST_WINDOW
            && target_dist > BOOST_MIN_DIST
        {
            debug!("pod {}: boost on lap {}", self.slot, pod.lap);
            self.used_boost = true;
            return Action::Boost;
        }

        let mut thrust = bang_bang_thrust(angle_diff, THRUST_WINDOW);
        if pod.dist_to(race.next_checkpoint(self.slot, 0)) < BRAKE_DIST {
            thrust /= 2;
        }
        Action::thrust(thrust)
    }
}

impl PodStrategy for LegacyStrategy {
    fn init(&mut self, _race: &Race, slot: usize) {
        self.slot = slot;
        self.used_boost = false;
    }

    fn compute_step(&mut self, race: &Race) -> (Point, Action) {
        let target = self.compute_target(race);
        let action = self.compute_action(race, target);
        (target, action)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::{Pod, PodState, Vector, POD_COUNT};

    fn state(x: f64, y: f64, vx: f64, vy: f64, next_checkpoint: usize) -> PodState {
        PodState {
            pos: Point::new(x, y),
            vel: Vector::new(vx, vy),
            angle: 0.0,
            next_checkpoint,
        }
    }

    fn race(me: PodState, opp: PodState) -> Race {
        let mut race = Race::new(
            3,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10000.0, 0.0),
                Point::new(10000.0, 6000.0),
            ],
        );
        let mut states = [state(15000.0, 8000.0, 0.0, 0.0, 1); POD_COUNT];
        states[0] = me;
        states[2] = opp;
        race.update(states);
        race
    }

    fn legacy(race: &Race, dont_boost_before_lap: i32) -> LegacyStrategy {
        let mut s = LegacyStrategy::new(dont_boost_before_lap);
        s.init(race, 0);
        s
    }

    #[test]
    fn target_uses_double_drift_correction() {
        let race = race(state(0.0, 0.0, 0.0, 100.0, 1), state(15000.0, 8000.0, 0.0, 0.0, 1));
        let s = legacy(&race, Pod::NO_LAP);
        assert_eq!(Point::new(10000.0, -200.0), s.compute_target(&race));
    }

    #[test]
    fn shield_on_any_contact() {
        // Moving together, so the racer would not shield here.
        let race = race(
            state(0.0, 0.0, 100.0, 0.0, 1),
            state(500.0, 0.0, 120.0, 0.0, 1),
        );
        let mut s = legacy(&race, Pod::NO_LAP);
        assert_eq!(Action::Shield, s.compute_step(&race).1);
        assert!(!s.used_boost());
    }

    #[test]
    fn boost_waits_for_lap_threshold() {
        let race = race(state(0.0, 0.0, 0.0, 0.0, 1), state(15000.0, 8000.0, 0.0, 0.0, 1));
        assert_eq!(Pod::NO_LAP, race.pod(0).lap);

        let mut early = legacy(&race, 0);
        assert_eq!(Action::Thrust(100), early.compute_step(&race).1);

        let mut eager = legacy(&race, Pod::NO_LAP);
        assert_eq!(Action::Boost, eager.compute_step(&race).1);
        assert_eq!(Action::Thrust(100), eager.compute_step(&race).1);
    }

    #[test]
    fn brakes_near_checkpoint() {
        let race = race(
            state(8500.0, 0.0, 0.0, 0.0, 1),
            state(15000.0, 8000.0, 0.0, 0.0, 1),
        );
        let mut s = legacy(&race, Pod::NO_LAP);
        assert_eq!(Action::Thrust(50), s.compute_step(&race).1);
    }

    #[test]
    fn no_thrust_when_facing_away() {
        let mut me = state(8500.0, 0.0, 0.0, 0.0, 1);
        me.angle = 180.0;
        let race = race(me, state(15000.0, 8000.0, 0.0, 0.0, 1));
        assert_eq!(Action::Thrust(0), legacy(&race, 0).compute_step(&race).1);
    }
}
