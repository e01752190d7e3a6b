use super::SidedDie;
use crate::common::{Int, Method, NonZeroUInt};
use crate::roll::{record, SharedRoller, SharedTracer, Toss};
use crate::tree::{Rollable, SupportsTracing};
use std::fmt;

const PERCENT: NonZeroUInt = NonZeroUInt::MIN.saturating_add(99);

/// A hundred-sided die, written `D%`.
#[derive(Clone, PartialEq)]
pub struct PercentileDie {
    die: SidedDie,
}

impl PercentileDie {
    const KIND: &'static str = "PercentileDie";

    pub fn new() -> Self {
        Self::with_roller(SharedRoller::default())
    }

    pub fn with_roller(roller: SharedRoller) -> Self {
        Self {
            die: SidedDie::from_parts(PERCENT, roller),
        }
    }

    pub fn size(&self) -> Int {
        self.die.size()
    }

    fn toss(&self, method: Method, value: Int) -> Toss {
        record(
            self.die.tracer(),
            Self::KIND,
            self.notation(),
            method,
            value,
            value.to_string(),
        )
    }
}

impl Default for PercentileDie {
    fn default() -> Self {
        Self::new()
    }
}

impl Rollable for PercentileDie {
    fn roll(&self) -> Toss {
        self.toss(Method::Roll, self.die.draw())
    }

    fn minimum(&self) -> Toss {
        self.toss(Method::Minimum, 1)
    }

    fn maximum(&self) -> Toss {
        self.toss(Method::Maximum, self.size())
    }

    fn notation(&self) -> String {
        "D%".to_owned()
    }
}

impl SupportsTracing for PercentileDie {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.die.set_tracer(tracer);
    }

    fn tracer(&self) -> &SharedTracer {
        self.die.tracer()
    }
}

impl fmt::Debug for PercentileDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PercentileDie")
    }
}

impl fmt::Display for PercentileDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
