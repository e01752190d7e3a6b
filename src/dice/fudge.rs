use super::CustomDie;
use crate::common::{vec1, Int, Method};
use crate::roll::{record, SharedRoller, SharedTracer, Toss};
use crate::tree::{Rollable, SupportsTracing};
use std::fmt;

/// A Fate/Fudge die with faces `-1`, `0` and `1`.
#[derive(Clone, PartialEq)]
pub struct FudgeDie {
    die: CustomDie,
}

impl FudgeDie {
    const KIND: &'static str = "FudgeDie";

    pub fn new() -> Self {
        Self::with_roller(SharedRoller::default())
    }

    pub fn with_roller(roller: SharedRoller) -> Self {
        Self {
            die: CustomDie::from_parts(vec1![-1, 0, 1], roller),
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

impl Default for FudgeDie {
    fn default() -> Self {
        Self::new()
    }
}

impl Rollable for FudgeDie {
    fn roll(&self) -> Toss {
        self.toss(Method::Roll, self.die.draw())
    }

    fn minimum(&self) -> Toss {
        self.toss(Method::Minimum, self.die.lowest())
    }

    fn maximum(&self) -> Toss {
        self.toss(Method::Maximum, self.die.highest())
    }

    fn notation(&self) -> String {
        "DF".to_owned()
    }
}

impl SupportsTracing for FudgeDie {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.die.set_tracer(tracer);
    }

    fn tracer(&self) -> &SharedTracer {
        self.die.tracer()
    }
}

impl fmt::Debug for FudgeDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FudgeDie")
    }
}

impl fmt::Display for FudgeDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
