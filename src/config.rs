use super::strategy::StrategyKind;

/// Which policy drives each of our pods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotConfig {
    pub first: StrategyKind,
    pub second: StrategyKind,
    /// Lap before which the legacy racer keeps its boost.
    pub dont_boost_before_lap: i32,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            first: StrategyKind::Fly,
            second: StrategyKind::Block,
            dont_boost_before_lap: 0,
        }
    }
}

impl BotConfig {
    pub fn kinds(&self) -> [StrategyKind; 2] {
        [self.first, self.second]
    }
}
