// Tracing setup
use crate::domain::branding::is_suppressed_log;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::{fmt as fmt_layer, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "sysdash=info,tower_http=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(SuppressCreditLogs)
        .with(filter)
        .with(fmt_layer::layer())
        .init();
}

/// Drops every event whose message mentions the credit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuppressCreditLogs;

impl<S: Subscriber> Layer<S> for SuppressCreditLogs {
    fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        !is_suppressed_log(&visitor.message)
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{:?}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_credit_messages_dropped() {
        let seen = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(SuppressCreditLogs)
            .with(CountEvents(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Switched page");
            tracing::warn!("author credit was modified");
            tracing::info!(page = "overview", "Restored {} text", "author");
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
