use crate::common::{NonZeroUInt, UInt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A source of die draws.
pub trait Roller {
    /// Draws a value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

/// A cheaply clonable handle to a [Roller].
///
/// Every die keeps one of these. Clones share the underlying roller, so all the dice
/// built from one handle draw from a single stream, which makes a seeded handle
/// reproduce the same sequence of outcomes for the whole tree.
#[derive(Clone)]
pub struct SharedRoller(Rc<RefCell<dyn Roller>>);

impl SharedRoller {
    pub fn new<R: Roller + 'static>(roller: R) -> Self {
        Self(Rc::new(RefCell::new(roller)))
    }

    /// A reproducible roller.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn roll(&self, sides: NonZeroUInt) -> UInt {
        self.0.borrow_mut().roll(sides)
    }
}

impl Default for SharedRoller {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for SharedRoller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedRoller")
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
