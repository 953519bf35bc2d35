use std::fmt;

use log::{debug, info};

use super::action::Action;
use super::config::BotConfig;
use super::pod::PodState;
use super::race::{Race, MY_PODS, POD_COUNT};
use super::strategy::PodStrategy;
use super::vec2::Point;

/// One output line for a controlled pod.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Decision {
    pub target: Point,
    pub action: Action,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.action)
    }
}

/// The race plus one bound strategy per controlled pod.
pub struct Bot {
    race: Race,
    strategies: [Box<dyn PodStrategy>; 2],
}

impl Bot {
    pub fn new(laps: i32, checkpoints: Vec<Point>, config: &BotConfig) -> Self {
        let race = Race::new(laps, checkpoints);
        let [first, second] = config.kinds();
        info!("strategies: {:?} / {:?}", first, second);

        let mut strategies = [first.build(config), second.build(config)];
        for (strategy, slot) in strategies.iter_mut().zip(MY_PODS) {
            strategy.init(&race, slot);
        }

        Bot { race, strategies }
    }

    pub fn race(&self) -> &Race {
        &self.race
    }

    pub fn update(&mut self, states: [PodState; POD_COUNT]) {
        self.race.update(states);
    }

    /// Decision for our pod `i` (0 or 1) this turn.
    pub fn decide(&mut self, i: usize) -> Decision {
        let (target, action) = self.strategies[i].compute_step(&self.race);
        debug!("pod {}: {} {}", MY_PODS[i], target, action);
        Decision { target, action }
    }

    pub fn play(&mut self) -> [Decision; 2] {
        [self.decide(0), self.decide(1)]
    }
}
