use crate::cup::Cup;
use crate::dice::{CustomDie, FudgeDie, PercentileDie, SidedDie};
use crate::modifier::Arithmetic;
use crate::roll::{SharedTracer, Toss};
use std::fmt;

/// Something that can be rolled.
#[enum_dispatch::enum_dispatch]
pub trait Rollable {
    fn roll(&self) -> Toss;

    /// The lowest outcome [Rollable::roll] can produce.
    fn minimum(&self) -> Toss;

    /// The highest outcome [Rollable::roll] can produce.
    fn maximum(&self) -> Toss;

    /// The canonical dice notation.
    fn notation(&self) -> String;
}

/// A [Rollable] that reports its tosses to a [Tracer](crate::Tracer).
///
/// A node only reports its own tosses; the nodes it contains keep their own tracers.
#[enum_dispatch::enum_dispatch]
pub trait SupportsTracing {
    fn set_tracer(&mut self, tracer: SharedTracer);

    fn tracer(&self) -> &SharedTracer;
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Rollable, SupportsTracing)]
pub enum RollNode {
    SidedDie(SidedDie),
    CustomDie(CustomDie),
    FudgeDie(FudgeDie),
    PercentileDie(PercentileDie),
    Cup(Cup),
    Arithmetic(Arithmetic),
}

impl RollNode {
    pub fn is_die(&self) -> bool {
        match self {
            Self::SidedDie(_) | Self::CustomDie(_) | Self::FudgeDie(_) | Self::PercentileDie(_) => {
                true
            }
            Self::Cup(_) | Self::Arithmetic(_) => false,
        }
    }

    /// Whether the node contributes anything when added to a [Cup].
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Cup(cup) => !cup.is_empty() && cup.iter().all(Self::is_valid),
            _ => true,
        }
    }

    /// Sets `tracer` on this node and on every node below it.
    pub fn set_tracer_recursive(&mut self, tracer: SharedTracer) {
        match self {
            Self::Cup(cup) => {
                for item in cup.iter_mut() {
                    item.set_tracer_recursive(tracer.clone());
                }
            }
            Self::Arithmetic(arithmetic) => {
                arithmetic.inner_mut().set_tracer_recursive(tracer.clone());
            }
            _ => {}
        }
        self.set_tracer(tracer);
    }
}

impl fmt::Display for RollNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// A node serializes as its notation.
#[cfg(feature = "serde")]
impl serde::Serialize for RollNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.notation())
    }
}
