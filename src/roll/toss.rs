use crate::common::{Int, Method};
use std::fmt;

/// Where a [Toss] came from: the kind of node, its notation and the evaluation.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TossContext {
    kind: &'static str,
    source: String,
    method: Method,
}

impl TossContext {
    pub fn new(kind: &'static str, source: impl Into<String>, method: Method) -> Self {
        Self {
            kind,
            source: source.into(),
            method,
        }
    }

    /// The node type, e.g. `"SidedDie"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The notation of the originating node.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

impl fmt::Display for TossContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.kind, self.method)
    }
}

/// The immutable result of one evaluation.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Toss {
    value: Int,
    operation: String,
    context: TossContext,
}

impl Toss {
    pub fn new(value: Int, operation: impl Into<String>, context: TossContext) -> Self {
        Self {
            value,
            operation: operation.into(),
            context,
        }
    }

    pub fn value(&self) -> Int {
        self.value
    }

    /// How the value was obtained, e.g. `"7 + 3"`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn context(&self) -> &TossContext {
        &self.context
    }
}

impl fmt::Display for Toss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<Toss> for Int {
    fn from(toss: Toss) -> Self {
        toss.value
    }
}
