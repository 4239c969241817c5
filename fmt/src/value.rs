//! Dispatch formatting for booleans, complex pairs, container summaries and
//! tagged dynamic values.
//!
//! The printable kinds are a fixed set known at compile time, so they are a
//! closed enum ([`Value`]) with one exhaustive match at the dispatch point —
//! no open-ended runtime type inspection.

use crate::float::{write_f32, write_f64};
use crate::int::{
    write_i8, write_i16, write_i32, write_i64, write_u8, write_u16, write_u32, write_u64,
};
use crate::ptr::write_ptr;
use crate::sink::Sink;

/// Tagged payloads nested deeper than this render as `(...)`. Dynamic values
/// come from the runtime's lowering and are shallow in practice; the cap only
/// keeps a hostile chain from exhausting the stack.
const MAX_NESTING: usize = 16;

/// Write the bytes of `s` verbatim, one sink call per byte. No quoting, no
/// escaping.
pub fn write_str<S: Sink>(sink: &mut S, s: &str) -> Result<(), S::Error> {
    for &byte in s.as_bytes() {
        sink.put(byte)?;
    }
    Ok(())
}

pub fn write_bool<S: Sink>(sink: &mut S, b: bool) -> Result<(), S::Error> {
    write_str(sink, if b { "true" } else { "false" })
}

/// Complex value with 32-bit components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex32 {
    pub re: f32,
    pub im: f32,
}

/// Complex value with 64-bit components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

/// Write `(<re><im>i)`. The two parts carry no separator; each brings its
/// own mandatory sign, which keeps the rendering unambiguous.
pub fn write_complex32<S: Sink>(sink: &mut S, c: Complex32) -> Result<(), S::Error> {
    sink.put(b'(')?;
    write_f32(sink, c.re)?;
    write_f32(sink, c.im)?;
    write_str(sink, "i)")
}

pub fn write_complex64<S: Sink>(sink: &mut S, c: Complex64) -> Result<(), S::Error> {
    sink.put(b'(')?;
    write_f64(sink, c.re)?;
    write_f64(sink, c.im)?;
    write_str(sink, "i)")
}

/// Write a container summary: `map[<count>]`, or `map[nil]` for a null
/// container. Only the element count is consumed; contents are never walked.
pub fn write_map<S: Sink>(sink: &mut S, count: Option<usize>) -> Result<(), S::Error> {
    write_str(sink, "map[")?;
    match count {
        Some(count) => write_u64(sink, count as u64)?,
        None => write_str(sink, "nil")?,
    }
    sink.put(b']')
}

/// Runtime type identifier of a tagged dynamic value, at whichever width the
/// host tagging scheme uses. Only its raw numeric value is printed; the
/// meaning of the code belongs to the runtime's type system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCode {
    W16(u16),
    W32(u32),
    W64(u64),
}

/// Tagged dynamic value: a runtime type code plus a printable payload.
#[derive(Clone, Copy, Debug)]
pub struct Tagged<'a> {
    pub code: TypeCode,
    pub payload: Value<'a>,
}

/// The closed set of printable runtime values.
#[derive(Clone, Copy, Debug)]
pub enum Value<'a> {
    Str(&'a str),
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Complex32(Complex32),
    Complex64(Complex64),
    Ptr(usize),
    Map(Option<usize>),
    Tagged(&'a Tagged<'a>),
}

/// Format any printable value through the single dispatch point.
pub fn write_value<S: Sink>(sink: &mut S, value: &Value<'_>) -> Result<(), S::Error> {
    write_value_at(sink, value, 0)
}

fn write_value_at<S: Sink>(sink: &mut S, value: &Value<'_>, depth: usize) -> Result<(), S::Error> {
    match *value {
        Value::Str(s) => write_str(sink, s),
        Value::Bool(b) => write_bool(sink, b),
        Value::U8(n) => write_u8(sink, n),
        Value::U16(n) => write_u16(sink, n),
        Value::U32(n) => write_u32(sink, n),
        Value::U64(n) => write_u64(sink, n),
        Value::I8(n) => write_i8(sink, n),
        Value::I16(n) => write_i16(sink, n),
        Value::I32(n) => write_i32(sink, n),
        Value::I64(n) => write_i64(sink, n),
        Value::F32(v) => write_f32(sink, v),
        Value::F64(v) => write_f64(sink, v),
        Value::Complex32(c) => write_complex32(sink, c),
        Value::Complex64(c) => write_complex64(sink, c),
        Value::Ptr(addr) => write_ptr(sink, addr),
        Value::Map(count) => write_map(sink, count),
        Value::Tagged(tagged) => write_tagged_at(sink, tagged, depth),
    }
}

/// Format a tagged dynamic value.
///
/// A string payload is emitted verbatim. Anything else renders as
/// `(<type code>:<payload>)` with the code printed through the unsigned
/// formatter matching its width.
pub fn write_tagged<S: Sink>(sink: &mut S, tagged: &Tagged<'_>) -> Result<(), S::Error> {
    write_tagged_at(sink, tagged, 0)
}

fn write_tagged_at<S: Sink>(
    sink: &mut S,
    tagged: &Tagged<'_>,
    depth: usize,
) -> Result<(), S::Error> {
    if depth >= MAX_NESTING {
        return write_str(sink, "(...)");
    }
    if let Value::Str(s) = tagged.payload {
        return write_str(sink, s);
    }

    sink.put(b'(')?;
    match tagged.code {
        TypeCode::W16(code) => write_u16(sink, code)?,
        TypeCode::W32(code) => write_u32(sink, code)?,
        TypeCode::W64(code) => write_u64(sink, code)?,
    }
    sink.put(b':')?;
    write_value_at(sink, &tagged.payload, depth + 1)?;
    sink.put(b')')
}
