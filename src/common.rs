use std::fmt;
use std::num::NonZeroU64;
pub use vec1::vec1;

/// The value type of every toss.
pub type Int = i64;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The evaluation a [Toss](crate::Toss) was produced by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Roll,
    Minimum,
    Maximum,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
