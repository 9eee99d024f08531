//! Call tracing for math function dispatch.
//!
//! [`call_traced`](crate::call_traced) is generic over a [`CallTracer`], so
//! with [`NoopTracer`] every hook is monomorphized away and the traced entry
//! point costs the same as [`call`](crate::call).
//!
//! | Tracer | Purpose |
//! |--------|---------|
//! | [`NoopTracer`] | Zero-cost no-op |
//! | [`StderrTracer`] | Human-readable call log to stderr |
//! | [`RecordingTracer`] | Collects [`TraceEvent`]s for inspection after the fact |
//!
//! ```
//! use mathcore::{ArgValues, MathFunctions, RecordingTracer, TraceEvent, Value, call_traced};
//!
//! let mut tracer = RecordingTracer::new();
//! call_traced(MathFunctions::Sqrt, ArgValues::One(Value::Float(4.0)), &mut tracer).unwrap();
//! assert!(matches!(tracer.events()[1], TraceEvent::Return { .. }));
//! ```

use crate::{args::ArgValues, exception::MathError, modules::math::MathFunctions, value::Value};

/// A single call, result or failure seen by a tracer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TraceEvent {
    /// A function was called with these arguments.
    Call {
        function: MathFunctions,
        args: Vec<Value>,
    },
    /// The function returned a value.
    Return { function: MathFunctions, value: Value },
    /// The function raised.
    Error {
        function: MathFunctions,
        error: MathError,
    },
}

/// Hooks invoked around each dispatched call.
///
/// All methods default to no-ops; implementations override what they need.
pub trait CallTracer: std::fmt::Debug {
    /// Called before the arguments are validated.
    #[inline]
    fn on_call(&mut self, _function: MathFunctions, _args: &ArgValues) {}

    /// Called after the function returned successfully.
    #[inline]
    fn on_return(&mut self, _function: MathFunctions, _value: &Value) {}

    /// Called after the function raised, including arity and type errors.
    #[inline]
    fn on_error(&mut self, _function: MathFunctions, _error: &MathError) {}
}

// ============================================================================
// NoopTracer
// ============================================================================

/// A tracer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl CallTracer for NoopTracer {}

// ============================================================================
// StderrTracer
// ============================================================================

/// Tracer that prints one line per event to stderr.
///
/// Output format:
/// ```text
///   >>> CALL   factorial(5)
///   <<< RETURN factorial -> 120
///   !!! ERROR  sqrt: ValueError: math domain error
/// ```
#[derive(Debug, Default)]
pub struct StderrTracer {
    /// Maximum number of lines to print. None = unlimited.
    limit: Option<usize>,
    count: usize,
}

impl StderrTracer {
    /// Creates a new stderr tracer with no limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new stderr tracer that goes quiet after `limit` lines.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            count: 0,
        }
    }

    /// Returns false once the limit has been reached, announcing it the first time.
    fn admit(&mut self) -> bool {
        if let Some(limit) = self.limit
            && self.count >= limit
        {
            if self.count == limit {
                eprintln!("--- trace limit reached ({limit} events) ---");
                self.count += 1;
            }
            return false;
        }
        self.count += 1;
        true
    }
}

impl CallTracer for StderrTracer {
    fn on_call(&mut self, function: MathFunctions, args: &ArgValues) {
        if !self.admit() {
            return;
        }
        let rendered: Vec<String> = args.iter().map(Value::py_repr).collect();
        eprintln!("  >>> CALL   {function}({})", rendered.join(", "));
    }

    fn on_return(&mut self, function: MathFunctions, value: &Value) {
        if !self.admit() {
            return;
        }
        eprintln!("  <<< RETURN {function} -> {value}");
    }

    fn on_error(&mut self, function: MathFunctions, error: &MathError) {
        if !self.admit() {
            return;
        }
        eprintln!("  !!! ERROR  {function}: {error}");
    }
}

// ============================================================================
// RecordingTracer
// ============================================================================

/// Tracer that records every event in chronological order.
///
/// Allocates per event, so it is meant for tests and short sessions.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
    /// Optional limit on number of events recorded.
    limit: Option<usize>,
}

impl RecordingTracer {
    /// Creates a new recording tracer with no event limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new recording tracer that stops recording after `limit` events.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumes the tracer and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Returns the number of events recorded.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    fn record(&mut self, event: TraceEvent) {
        if self.limit.is_some_and(|l| self.events.len() >= l) {
            return;
        }
        self.events.push(event);
    }
}

impl CallTracer for RecordingTracer {
    fn on_call(&mut self, function: MathFunctions, args: &ArgValues) {
        self.record(TraceEvent::Call {
            function,
            args: args.iter().cloned().collect(),
        });
    }

    fn on_return(&mut self, function: MathFunctions, value: &Value) {
        self.record(TraceEvent::Return {
            function,
            value: value.clone(),
        });
    }

    fn on_error(&mut self, function: MathFunctions, error: &MathError) {
        self.record(TraceEvent::Error {
            function,
            error: error.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_respects_limit() {
        let mut tracer = RecordingTracer::with_limit(2);
        let args = ArgValues::One(Value::Int(3));
        tracer.on_call(MathFunctions::Factorial, &args);
        tracer.on_return(MathFunctions::Factorial, &Value::Int(6));
        tracer.on_call(MathFunctions::Factorial, &args);
        assert_eq!(tracer.event_count(), 2);
        assert_eq!(
            tracer.into_events()[0],
            TraceEvent::Call {
                function: MathFunctions::Factorial,
                args: vec![Value::Int(3)],
            }
        );
    }

    #[test]
    fn stderr_limit_stops_output() {
        let mut tracer = StderrTracer::with_limit(1);
        assert!(tracer.admit());
        assert!(!tracer.admit());
        assert!(!tracer.admit());
    }
}
