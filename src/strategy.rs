use clap::ValueEnum;

use super::action::{Action, FULL_THRUST};
use super::block::BlockStrategy;
use super::config::BotConfig;
use super::fly::FlyStrategy;
use super::legacy::LegacyStrategy;
use super::pod::Pod;
use super::race::Race;
use super::vec2::Point;

/// Per-pod decision policy. One instance lives for the whole race and is
/// asked for exactly one decision per turn.
pub trait PodStrategy {
    /// Binds the strategy to the pod in `slot` and resets race-long state.
    fn init(&mut self, race: &Race, slot: usize);

    /// Target point and action for this turn.
    fn compute_step(&mut self, race: &Race) -> (Point, Action);
}

/// Strategy names as accepted on the command line: `fly`, `block`, `legacy`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Fly,
    Block,
    Legacy,
}

impl StrategyKind {
    pub fn build(self, config: &BotConfig) -> Box<dyn PodStrategy> {
        match self {
            StrategyKind::Fly => Box::new(FlyStrategy::new()),
            StrategyKind::Block => Box::new(BlockStrategy::new()),
            StrategyKind::Legacy => {
                Box::new(LegacyStrategy::new(config.dont_boost_before_lap))
            }
        }
    }
}

/// Aim point that cancels sideways drift: the goal shifted against the
/// velocity component perpendicular to the bearing, scaled by `gain`.
pub fn steer_target(pod: &Pod, goal: Point, gain: f64) -> Point {
    let bearing = goal - pod.pos;
    if bearing.is_zero() {
        return goal;
    }
    let perp = bearing.norm().perpendicular();
    let drift = pod.vel.dot(perp);
    goal + perp * (-gain * drift)
}

/// Full power inside the heading window, nothing outside it.
pub(crate) fn bang_bang_thrust(angle_diff: f64, window: f64) -> u8 {
    if angle_diff < window {
        FULL_THRUST
    } else {
        0
    }
}
