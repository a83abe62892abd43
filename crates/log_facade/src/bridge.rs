//! Provides a [`tracing_subscriber::Layer`] ([`FacadeLayer`]) that routes [`tracing`] events
//! through a [`Logger`], so code instrumented with `tracing` macros lands in the same output.

use std::{fmt, sync::Arc};

use tracing::{
    Event, Metadata, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::{Attr, CallSite, Level, Logger, LoggerError, Record, global, keys};

/// The logger a [`FacadeLayer`] forwards to.
#[derive(Clone, Debug)]
enum Target {
    /// Whichever logger is installed globally at the time of the event.
    Global,

    /// A fixed logger.
    Fixed(Arc<Logger>),
}

/// A [`tracing_subscriber::Layer`] that encodes `tracing` events with a [`Logger`].
///
/// The event's level is mapped onto [`Level`] (`TRACE` becomes `Debug`), its `message` field
/// becomes the record message and its remaining fields become attributes, in the order they
/// were recorded. The `source` field is taken from the event's metadata, subject to the
/// logger's source flag.
///
/// Events emitted by this crate itself are not forwarded.
#[derive(Clone, Debug)]
pub struct FacadeLayer {
    target: Target,
}

impl FacadeLayer {
    /// Forwards events to a fixed logger.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            target: Target::Fixed(logger),
        }
    }

    /// Forwards events to the global logger installed at the time of each event. Events are
    /// dropped while no logger is installed.
    pub fn global() -> Self {
        Self {
            target: Target::Global,
        }
    }

    fn forward(&self, event: &Event<'_>, logger: &Logger) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if is_internal(metadata) || !logger.enabled(level) {
            return;
        }

        let mut fields = EventFields::default();
        event.record(&mut fields);

        let attrs: Vec<Attr<'_>> = fields
            .values
            .iter()
            .map(|(key, value)| Attr::new(key, value))
            .collect();
        let source = if logger.adds_source() {
            CallSite::from_metadata(metadata)
        } else {
            None
        };
        let message = fields.message.as_deref().unwrap_or_else(|| metadata.target());

        logger.emit(&Record::new(
            level,
            format_args!("{message}"),
            &attrs,
            source,
        ));
    }
}

impl<S: Subscriber> Layer<S> for FacadeLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match &self.target {
            Target::Global => {
                if let Some(logger) = global::global() {
                    self.forward(event, &logger);
                }
            }
            Target::Fixed(logger) => self.forward(event, logger),
        }
    }
}

/// Whether the event originates from this crate, whose diagnostics must not end up in the
/// output they describe.
fn is_internal(metadata: &Metadata<'_>) -> bool {
    let target = metadata.target();
    target
        .strip_prefix(keys::CRATE_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Installs a global [`tracing`] subscriber that forwards all events to the global logger.
///
/// Call it once at startup; [`crate::init`] can still replace the logger afterwards.
///
/// # Errors
///
/// Returns [`LoggerError::SubscriberInit`] if a global `tracing` subscriber is already set.
pub fn install_tracing_bridge() -> Result<(), LoggerError> {
    tracing_subscriber::registry()
        .with(FacadeLayer::global())
        .try_init()?;
    Ok(())
}

/// Key-value data recorded for an event.
#[derive(Debug, Default)]
struct EventFields {
    /// Fields other than the message, in recording order.
    values: Vec<(&'static str, String)>,

    /// The event's message, if captured.
    message: Option<String>,
}

impl EventFields {
    fn record_value(&mut self, field: &Field, value: String) {
        match field.name() {
            // `log` crate metadata carried by `tracing-log`
            name if name.starts_with("log.") => (),
            name => {
                let name = name.strip_prefix("r#").unwrap_or(name);
                self.values.push((name, value));
            }
        }
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == keys::TRACING_MESSAGE {
            self.message = Some(value.to_string());
        } else {
            self.record_value(field, value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == keys::TRACING_MESSAGE {
            // `record_str()` takes precedence
            if self.message.is_none() {
                self.message = Some(format!("{value:?}"));
            }
        } else {
            self.record_value(field, format!("{value:?}"));
        }
    }
}
