use super::notation::{self, Leaf};
use crate::common::{Int, Method, NonZeroUInt, UInt};
use crate::error::SyntaxError;
use crate::roll::{null_tracer, record, SharedRoller, SharedTracer, Toss};
use crate::tree::{Rollable, SupportsTracing};
use std::fmt;
use std::str::FromStr;

/// A die numbered `1..=sides`.
#[derive(Clone)]
pub struct SidedDie {
    sides: NonZeroUInt,
    roller: SharedRoller,
    tracer: SharedTracer,
}

impl SidedDie {
    const KIND: &'static str = "SidedDie";

    pub fn new(sides: Int) -> Result<Self, SyntaxError> {
        Self::with_roller(sides, SharedRoller::default())
    }

    pub fn with_roller(sides: Int, roller: SharedRoller) -> Result<Self, SyntaxError> {
        let checked = if sides < 2 {
            None
        } else {
            UInt::try_from(sides).ok().and_then(NonZeroUInt::new)
        };
        checked
            .map(|sides| Self::from_parts(sides, roller))
            .ok_or(SyntaxError::TooFewSides(sides))
    }

    /// Builds a die from notation such as `d6` or `D20`.
    pub fn from_notation(notation: &str, roller: SharedRoller) -> Result<Self, SyntaxError> {
        if !notation::matches(Leaf::Sided, notation) {
            return Err(SyntaxError::invalid_notation(notation));
        }
        let sides = notation[1..]
            .parse()
            .map_err(|_| SyntaxError::invalid_notation(notation))?;
        Self::with_roller(sides, roller)
    }

    pub(crate) fn from_parts(sides: NonZeroUInt, roller: SharedRoller) -> Self {
        Self {
            sides,
            roller,
            tracer: null_tracer(),
        }
    }

    /// The number of sides.
    pub fn size(&self) -> Int {
        self.sides.get() as Int
    }

    pub(crate) fn draw(&self) -> Int {
        self.roller.roll(self.sides) as Int
    }

    fn toss(&self, method: Method, value: Int) -> Toss {
        record(
            &self.tracer,
            Self::KIND,
            self.notation(),
            method,
            value,
            value.to_string(),
        )
    }
}

impl Rollable for SidedDie {
    fn roll(&self) -> Toss {
        self.toss(Method::Roll, self.draw())
    }

    fn minimum(&self) -> Toss {
        self.toss(Method::Minimum, 1)
    }

    fn maximum(&self) -> Toss {
        self.toss(Method::Maximum, self.size())
    }

    fn notation(&self) -> String {
        format!("D{}", self.sides)
    }
}

impl SupportsTracing for SidedDie {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.tracer = tracer;
    }

    fn tracer(&self) -> &SharedTracer {
        &self.tracer
    }
}

impl FromStr for SidedDie {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s, SharedRoller::default())
    }
}

impl PartialEq for SidedDie {
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides
    }
}

impl fmt::Debug for SidedDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidedDie")
            .field("sides", &self.sides)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SidedDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
