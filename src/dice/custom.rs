use super::notation::{self, Leaf};
use crate::common::{Int, Method, NonEmpty, NonZeroUInt, UInt};
use crate::error::SyntaxError;
use crate::roll::{null_tracer, record, SharedRoller, SharedTracer, Toss};
use crate::tree::{Rollable, SupportsTracing};
use std::fmt;
use std::str::FromStr;

/// A die with arbitrary faces.
///
/// Faces may repeat or be negative; every stored face is equally likely, so a
/// repeated face is proportionally more likely than a unique one.
#[derive(Clone)]
pub struct CustomDie {
    faces: NonEmpty<Int>,
    roller: SharedRoller,
    tracer: SharedTracer,
}

impl CustomDie {
    const KIND: &'static str = "CustomDie";

    pub fn new(faces: impl IntoIterator<Item = Int>) -> Result<Self, SyntaxError> {
        Self::with_roller(faces, SharedRoller::default())
    }

    pub fn with_roller(
        faces: impl IntoIterator<Item = Int>,
        roller: SharedRoller,
    ) -> Result<Self, SyntaxError> {
        let faces: Vec<_> = faces.into_iter().collect();
        let count = faces.len() as Int;
        if count < 2 {
            return Err(SyntaxError::TooFewSides(count));
        }
        let faces = NonEmpty::try_from_vec(faces).map_err(|_| SyntaxError::TooFewSides(count))?;
        Ok(Self::from_parts(faces, roller))
    }

    /// Builds a die from notation such as `d[1,2,2,3,5]` or `D[-1,0,1]`.
    pub fn from_notation(notation: &str, roller: SharedRoller) -> Result<Self, SyntaxError> {
        if !notation::matches(Leaf::Custom, notation) {
            return Err(SyntaxError::invalid_notation(notation));
        }
        let faces = notation[2..notation.len() - 1]
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Int>, _>>()
            .map_err(|_| SyntaxError::invalid_notation(notation))?;
        Self::with_roller(faces, roller)
    }

    pub(crate) fn from_parts(faces: NonEmpty<Int>, roller: SharedRoller) -> Self {
        Self {
            faces,
            roller,
            tracer: null_tracer(),
        }
    }

    /// The number of faces.
    pub fn size(&self) -> Int {
        self.faces.len() as Int
    }

    pub fn faces(&self) -> &[Int] {
        &self.faces
    }

    pub(crate) fn draw(&self) -> Int {
        let sides = NonZeroUInt::new(self.faces.len() as UInt).unwrap_or(NonZeroUInt::MIN);
        let index = (self.roller.roll(sides) - 1) as usize;
        self.faces.get(index).copied().unwrap_or(*self.faces.first())
    }

    pub(crate) fn lowest(&self) -> Int {
        self.faces.iter().copied().fold(*self.faces.first(), Int::min)
    }

    pub(crate) fn highest(&self) -> Int {
        self.faces.iter().copied().fold(*self.faces.first(), Int::max)
    }

    pub(crate) fn faces_notation(&self) -> String {
        let faces: Vec<_> = self.faces.iter().map(ToString::to_string).collect();
        format!("D[{}]", faces.join(","))
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

impl Rollable for CustomDie {
    fn roll(&self) -> Toss {
        self.toss(Method::Roll, self.draw())
    }

    fn minimum(&self) -> Toss {
        self.toss(Method::Minimum, self.lowest())
    }

    fn maximum(&self) -> Toss {
        self.toss(Method::Maximum, self.highest())
    }

    fn notation(&self) -> String {
        self.faces_notation()
    }
}

impl SupportsTracing for CustomDie {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.tracer = tracer;
    }

    fn tracer(&self) -> &SharedTracer {
        &self.tracer
    }
}

impl FromStr for CustomDie {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s, SharedRoller::default())
    }
}

impl PartialEq for CustomDie {
    fn eq(&self, other: &Self) -> bool {
        self.faces == other.faces
    }
}

impl fmt::Debug for CustomDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDie")
            .field("faces", &self.faces)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CustomDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
