use std::fmt;

pub const FULL_THRUST: u8 = 100;

/// What a controlled pod does this turn, alongside its target point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Propulsion intensity in `0..=100`.
    Thrust(u8),
    /// One-shot burst, usable once per pod per race.
    Boost,
    Shield,
}

impl Action {
    /// Thrust clamped to the range the referee accepts.
    pub fn thrust(power: u8) -> Self {
        Action::Thrust(power.min(FULL_THRUST))
    }

    pub fn is_boost(self) -> bool {
        matches!(self, Action::Boost)
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Thrust(0)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Thrust(power) => write!(f, "{}", power),
            Action::Boost => write!(f, "BOOST"),
            Action::Shield => write!(f, "SHIELD"),
        }
    }
}
