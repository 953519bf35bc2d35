pub mod action;
pub mod block;
pub mod bot;
pub mod config;
pub mod fly;
pub mod legacy;
pub mod pod;
pub mod race;
pub mod strategy;
pub mod vec2;

pub use action::*;
pub use block::BlockStrategy;
pub use bot::*;
pub use config::*;
pub use fly::FlyStrategy;
pub use legacy::LegacyStrategy;
pub use pod::*;
pub use race::*;
pub use strategy::*;
pub use vec2::*;
