//! The leaves of a roll tree.

mod custom;
mod fudge;
mod notation;
mod percentile;
mod sided;

pub use custom::CustomDie;
pub use fudge::FudgeDie;
pub use percentile::PercentileDie;
pub use sided::SidedDie;
