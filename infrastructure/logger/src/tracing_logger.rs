use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`.
///
/// Every event goes to the `bloomskin` target and carries the `component`
/// that emitted it, so JSON logs can be filtered per aggregate.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "bloomskin", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "bloomskin", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "bloomskin", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "bloomskin", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(out.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn should_tag_events_with_component() {
        let logger = TracingLogger::new("skin_analysis");

        let output = capture(|| logger.warn("Haut.ai returned no results"));

        assert!(output.contains("WARN"));
        assert!(output.contains("bloomskin"));
        assert!(output.contains("component=\"skin_analysis\""));
        assert!(output.contains("Haut.ai returned no results"));
    }

    #[test]
    fn should_emit_debug_events() {
        let logger = TracingLogger::new("user");

        let output = capture(|| logger.debug("Fetching user: uid-1"));

        assert!(output.contains("DEBUG"));
        assert!(output.contains("Fetching user: uid-1"));
    }
}
