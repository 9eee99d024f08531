#![doc = include_str!("../../../README.md")]

mod args;
mod exception;
mod modules;
pub mod tracer;
mod types;
mod value;

pub use crate::{
    args::ArgValues,
    exception::{ExcType, MathError, RunResult},
    modules::math::{
        E, INF, MathFunctions, NAN, PI, TAU, call, call_traced, constant, erf, erfc, factorial, frexp, ldexp,
        log2_big, modf,
    },
    tracer::{CallTracer, NoopTracer, RecordingTracer, StderrTracer, TraceEvent},
    types::{Complex, LongInt, Type},
    value::Value,
};
