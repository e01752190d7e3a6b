#[cfg(feature = "logging")]
mod logger;
mod roller;
mod toss;
mod tracer;

#[cfg(feature = "logging")]
pub use logger::LogTracer;
pub use roller::{Roller, SharedRoller};
pub use toss::{Toss, TossContext};
pub use tracer::{null_tracer, FanOutTracer, MemoryTracer, NullTracer, SharedTracer, Tracer};

pub(crate) use tracer::record;

#[cfg(test)]
pub(crate) use roller::StepRoller;
