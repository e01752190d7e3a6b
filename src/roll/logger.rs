use super::{toss::Toss, tracer::Tracer};
use log::Level;

/// Sends every toss to the `log` facade.
///
/// The message is built from a template where `{method}`, `{rollable}`, `{trace}`
/// and `{result}` are replaced by the toss context, the notation of the node, the
/// operation and the value.
#[derive(Debug, Clone)]
pub struct LogTracer {
    level: Level,
    format: String,
}

impl LogTracer {
    pub const DEFAULT_FORMAT: &'static str = "[{method}] - {rollable} : {trace} = {result}";

    pub fn new(level: Level) -> Self {
        Self {
            level,
            format: Self::DEFAULT_FORMAT.to_owned(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    pub fn message(&self, toss: &Toss) -> String {
        self.format
            .replace("{method}", &toss.context().to_string())
            .replace("{rollable}", toss.context().source())
            .replace("{trace}", toss.operation())
            .replace("{result}", &toss.value().to_string())
    }
}

impl Default for LogTracer {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl Tracer for LogTracer {
    fn append(&self, toss: &Toss) {
        log::log!(self.level, "{}", self.message(toss));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Method;
    use crate::roll::toss::TossContext;

    fn toss() -> Toss {
        Toss::new(
            -1,
            "3 + (-4)",
            TossContext::new("Cup", "D6+D[-4,-2]", Method::Roll),
        )
    }

    #[test]
    fn test_default_message() {
        let tracer = LogTracer::default();
        assert_eq!(tracer.level(), Level::Debug);
        assert_eq!(
            tracer.message(&toss()),
            "[Cup::roll] - D6+D[-4,-2] : 3 + (-4) = -1"
        );
    }

    #[test]
    fn test_custom_format() {
        let mut tracer = LogTracer::new(Level::Info).with_format("{rollable}={result}");
        assert_eq!(tracer.message(&toss()), "D6+D[-4,-2]=-1");
        tracer.set_format("{trace}");
        tracer.set_level(Level::Trace);
        assert_eq!(tracer.format(), "{trace}");
        assert_eq!(tracer.level(), Level::Trace);
        assert_eq!(tracer.message(&toss()), "3 + (-4)");
    }

    #[test]
    fn test_append_does_not_fail_without_logger() {
        LogTracer::default().append(&toss());
    }
}
