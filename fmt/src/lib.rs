//! Allocation-free numeric-to-text formatting for the cinder runtime.
//!
//! This crate is the low-level output path of the runtime: it turns primitive
//! machine values (integers, floats, booleans, pointers, complex pairs,
//! container summaries and tagged dynamic values) into bytes pushed one at a
//! time into a [`Sink`]. No heap, no intermediate string objects, no
//! formatting machinery from `core::fmt` — only fixed-size stack buffers
//! sized from the known maximum digit count per type.
//!
//! Every formatter is a pure function `(sink, value) -> Result<(), S::Error>`;
//! the first sink failure aborts the whole call.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod float;
pub mod int;
pub mod ptr;
pub mod sink;
pub mod value;

pub use float::{write_f32, write_f64};
pub use int::{write_i8, write_i16, write_i32, write_i64};
pub use int::{write_u8, write_u16, write_u32, write_u64};
pub use ptr::write_ptr;
pub use sink::{FnSink, Sink, SliceFull, SliceSink};
pub use value::{
    Complex32, Complex64, Tagged, TypeCode, Value, write_bool, write_complex32, write_complex64,
    write_map, write_str, write_tagged, write_value,
};
