use mathcore::{
    ArgValues, ExcType, MathFunctions, NoopTracer, RecordingTracer, StderrTracer, TraceEvent, Value, call, call_traced,
};
use pretty_assertions::assert_eq;

#[test]
fn records_call_and_return() {
    let mut tracer = RecordingTracer::new();
    let result = call_traced(MathFunctions::Factorial, ArgValues::One(Value::Int(4)), &mut tracer).unwrap();
    assert_eq!(result, Value::Int(24));
    assert_eq!(
        tracer.into_events(),
        vec![
            TraceEvent::Call {
                function: MathFunctions::Factorial,
                args: vec![Value::Int(4)],
            },
            TraceEvent::Return {
                function: MathFunctions::Factorial,
                value: Value::Int(24),
            },
        ]
    );
}

#[test]
fn records_errors() {
    let mut tracer = RecordingTracer::new();
    let args = ArgValues::Two(Value::Float(-1.0), Value::Float(0.5));
    let err = call_traced(MathFunctions::Pow, args, &mut tracer).unwrap_err();
    assert_eq!(err.exc_type(), ExcType::ValueError);
    match &tracer.events()[1] {
        TraceEvent::Error { function, error } => {
            assert_eq!(*function, MathFunctions::Pow);
            assert_eq!(error, &err);
        }
        other => panic!("expected an error event, got {other:?}"),
    }
}

#[test]
fn traced_matches_untraced() {
    let args = || ArgValues::One(Value::Float(0.3));
    let plain = call(MathFunctions::Erf, args()).unwrap();
    assert_eq!(call_traced(MathFunctions::Erf, args(), &mut NoopTracer).unwrap(), plain);
    assert_eq!(call_traced(MathFunctions::Erf, args(), &mut StderrTracer::new()).unwrap(), plain);
}

#[test]
fn events_serialize_to_json() {
    let mut tracer = RecordingTracer::with_limit(1);
    call_traced(MathFunctions::Sqrt, ArgValues::One(Value::Int(9)), &mut tracer).unwrap();
    assert_eq!(tracer.event_count(), 1);
    let json = serde_json::to_string(&tracer.events()[0]).unwrap();
    assert_eq!(json, r#"{"Call":{"function":"sqrt","args":[{"Int":9}]}}"#);
}
