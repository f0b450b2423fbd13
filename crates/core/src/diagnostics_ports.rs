//! Diagnostic sink port
//!
//! Every degraded call reports its failure message here before the client
//! hands back an empty value.

use std::sync::Arc;

/// Destination for client failure messages.
///
/// Implementations must tolerate concurrent callers and must never fail
/// outward: a sink that cannot record a message drops it.
pub trait DiagnosticSink: Send + Sync {
    /// Record one failure message.
    fn record(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn record(&self, message: &str) {
        (**self).record(message);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, message: &str) {
        (**self).record(message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct VecSink(Mutex<Vec<String>>);

    impl DiagnosticSink for VecSink {
        fn record(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn arc_and_reference_forward_to_inner_sink() {
        let sink = Arc::new(VecSink::default());
        let as_dyn: Arc<dyn DiagnosticSink> = sink.clone();

        as_dyn.record("first");
        (&*sink).record("second");

        assert_eq!(*sink.0.lock().unwrap(), vec!["first".to_string(), "second".to_string()]);
    }
}
