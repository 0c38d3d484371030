//! Diagnostics for the `hilo` binary.
//!
//! Engine and CLI events go through `tracing`. The binary installs a fmt
//! subscriber on stderr so stdout stays clean for charts and JSON; the
//! filter defaults to `warn` and follows `RUST_LOG` when set.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. Returns `false` if a global subscriber
/// was already set.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// A captured event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Collects events in memory so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// True if some entry's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(needle))
    }

    pub fn into_layer<S>(self) -> CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        CaptureLayer {
            logs: self,
            _phantom: PhantomData,
        }
    }
}

pub struct CaptureLayer<S> {
    logs: CapturedLogs,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        self.logs
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn captures_solver_events() {
        let logs = CapturedLogs::new();
        let registry = Registry::default().with(logs.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            let mut engine = hilo_engine::engine::Engine::new();
            engine.compute_strategy(0b1001, 1.0).unwrap();
            engine.new_shoe(2).unwrap();
        });

        assert!(logs.contains("strategy computed"));
        assert!(logs.contains("new shoe shuffled"));
        let computed = logs
            .entries()
            .into_iter()
            .find(|e| e.message.contains("strategy computed"))
            .unwrap();
        assert_eq!(computed.level, Level::INFO);
        assert!(computed.target.starts_with("hilo_engine"));
        assert!(computed.fields.iter().any(|(k, v)| k == "options" && v == "9"));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let logs = CapturedLogs::new();
        let registry = Registry::default().with(logs.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || {
            tracing::warn!("shoe exhausted");
        });
        assert_eq!(logs.entries().len(), 1);
        logs.clear();
        assert!(logs.entries().is_empty());
    }
}
