//! Runtime-facing print entry points.
//!
//! All runtime output funnels through a single registered **output
//! primitive** — the embedding runtime's `putchar`. The runtime registers it
//! once during startup; every `print_*` entry point below forwards through
//! it so the lowered code never threads a sink argument.
//!
//! # Backend contract
//!
//! The primitive receives one byte per call, in emission order, and must
//! accept it synchronously. Bytes emitted before registration are dropped:
//! the print path must never fault, however early it is reached.
//!
//! # Registration
//!
//! ```ignore
//! // In the runtime's startup path:
//! cinder_rt::register_putchar(uart_putchar);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

use core::convert::Infallible;

use cinder_fmt::{Complex32, Complex64, Sink, Tagged, Value};
use spin::Once;

/// The runtime's byte output primitive.
pub type PutcharFn = fn(u8);

static PUTCHAR: Once<PutcharFn> = Once::new();

/// Register the output primitive. The first registration wins; later calls
/// are ignored.
pub fn register_putchar(putchar: PutcharFn) {
    PUTCHAR.call_once(|| putchar);
}

/// Sink over the registered output primitive.
struct GlobalSink;

impl Sink for GlobalSink {
    type Error = Infallible;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        if let Some(putchar) = PUTCHAR.get() {
            putchar(byte);
        }
        Ok(())
    }
}

macro_rules! print_fns {
    ($($ty:ident => $writer:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Print a `", stringify!($ty), "` through the registered output primitive.")]
                pub fn [<print_ $ty>](value: $ty) {
                    let _ = cinder_fmt::$writer(&mut GlobalSink, value);
                }
            )*
        }
    };
}

print_fns! {
    u8 => write_u8,
    u16 => write_u16,
    u32 => write_u32,
    u64 => write_u64,
    i8 => write_i8,
    i16 => write_i16,
    i32 => write_i32,
    i64 => write_i64,
    f32 => write_f32,
    f64 => write_f64,
    bool => write_bool,
}

/// Print the bytes of `s` verbatim.
pub fn print_str(s: &str) {
    let _ = cinder_fmt::write_str(&mut GlobalSink, s);
}

/// Print a native-width address (`0x…` full-width lowercase hex, or `nil`).
pub fn print_ptr(addr: usize) {
    let _ = cinder_fmt::write_ptr(&mut GlobalSink, addr);
}

/// Print a container summary (`map[<count>]` / `map[nil]`).
pub fn print_map(count: Option<usize>) {
    let _ = cinder_fmt::write_map(&mut GlobalSink, count);
}

pub fn print_complex32(c: Complex32) {
    let _ = cinder_fmt::write_complex32(&mut GlobalSink, c);
}

pub fn print_complex64(c: Complex64) {
    let _ = cinder_fmt::write_complex64(&mut GlobalSink, c);
}

/// Print any printable runtime value through the generic dispatcher.
pub fn print_value(value: &Value<'_>) {
    let _ = cinder_fmt::write_value(&mut GlobalSink, value);
}

/// Print a tagged dynamic value.
pub fn print_tagged(tagged: &Tagged<'_>) {
    let _ = cinder_fmt::write_tagged(&mut GlobalSink, tagged);
}

/// Print a single space separator.
pub fn print_space() {
    let _ = GlobalSink.put(b' ');
}

/// Print a line terminator. Serial console convention: `\r\n`.
pub fn print_newline() {
    let _ = GlobalSink.put(b'\r');
    let _ = GlobalSink.put(b'\n');
}
