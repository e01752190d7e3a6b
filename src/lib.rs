//! Dice notation evaluation.
//!
//! Notation such as `4d10+2d4` or `(d6+d4)*2` is parsed into a tree of
//! [Rollable] nodes. Every evaluation of a node produces a [Toss] that can be
//! recorded by a [Tracer].
//!
//! ```
//! use dice_cup::Rollable;
//!
//! let cup = dice_cup::parse("4d10 + 2d4").unwrap();
//! assert_eq!(cup.notation(), "4D10+2D4");
//! assert_eq!(cup.minimum().value(), 6);
//! assert_eq!(cup.maximum().value(), 48);
//! ```

mod common;
mod cup;
pub mod dice;
mod error;
mod factory;
mod modifier;
mod parse;
mod roll;
mod tree;

pub use common::{Int, Method};
pub use cup::Cup;
pub use dice::{CustomDie, FudgeDie, PercentileDie, SidedDie};
pub use error::{Error, IllegalValue, SyntaxError};
pub use factory::Factory;
pub use modifier::{Arithmetic, ArithmeticOperator};
pub use roll::{
    null_tracer, FanOutTracer, MemoryTracer, NullTracer, Roller, SharedRoller, SharedTracer,
    Toss, TossContext, Tracer,
};
#[cfg(feature = "logging")]
pub use roll::LogTracer;
pub use tree::{RollNode, Rollable, SupportsTracing};

/// Parses `notation` with a [Factory::default].
pub fn parse(notation: &str) -> Result<RollNode, Error> {
    Factory::default().new_instance(notation)
}
