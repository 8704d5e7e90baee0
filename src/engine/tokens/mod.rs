//! Token evaluators
//!
//! Tokens are earned per trail: the same token can be re-earned on a
//! different trail but never twice on the same one.

mod categorical;
mod circus;
mod repeat;
mod speed;
mod sports;
mod tags;
mod weight;

pub use categorical::{
    EnvironmentTokens, MovementTokens, PerceptionTokens, SurfaceTokens, WildlifeTokens,
};
pub use circus::CircusTokens;
pub use repeat::RepeatTokens;
pub use speed::SpeedTokens;
pub use sports::SportsTokens;
pub use tags::TrailTagTokens;
pub use weight::WeightTokens;
