use super::toss::{Toss, TossContext};
use crate::common::{Int, Method};
use std::cell::RefCell;
use std::rc::Rc;

/// A sink for [Toss]es.
///
/// Implementations must accept every toss without failing. A tracer shared between
/// several nodes receives their tosses in evaluation order.
pub trait Tracer {
    fn append(&self, toss: &Toss);
}

pub type SharedTracer = Rc<dyn Tracer>;

/// The tracer every node starts with.
pub fn null_tracer() -> SharedTracer {
    Rc::new(NullTracer)
}

/// Builds a toss, hands it to `tracer` and returns it.
pub(crate) fn record(
    tracer: &SharedTracer,
    kind: &'static str,
    source: String,
    method: Method,
    value: Int,
    operation: String,
) -> Toss {
    let toss = Toss::new(value, operation, TossContext::new(kind, source, method));
    tracer.append(&toss);
    toss
}

#[derive(Debug, Default, Copy, Clone)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn append(&self, _: &Toss) {}
}

/// Keeps every toss in memory, in the order they were appended.
#[derive(Debug, Default)]
pub struct MemoryTracer {
    tosses: RefCell<Vec<Toss>>,
}

impl MemoryTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tosses(&self) -> Vec<Toss> {
        self.tosses.borrow().clone()
    }

    pub fn filtered(&self, predicate: impl Fn(&Toss) -> bool) -> Vec<Toss> {
        self.tosses
            .borrow()
            .iter()
            .filter(|toss| predicate(toss))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tosses.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tosses.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.tosses.borrow_mut().clear();
    }
}

impl Tracer for MemoryTracer {
    fn append(&self, toss: &Toss) {
        self.tosses.borrow_mut().push(toss.clone());
    }
}

/// Forwards each toss to all of its tracers.
#[derive(Default, Clone)]
pub struct FanOutTracer {
    tracers: Vec<SharedTracer>,
}

impl FanOutTracer {
    pub fn new(tracers: impl IntoIterator<Item = SharedTracer>) -> Self {
        Self {
            tracers: tracers.into_iter().collect(),
        }
    }

    pub fn push(&mut self, tracer: SharedTracer) {
        self.tracers.push(tracer);
    }
}

impl Tracer for FanOutTracer {
    fn append(&self, toss: &Toss) {
        for tracer in &self.tracers {
            tracer.append(toss);
        }
    }
}
