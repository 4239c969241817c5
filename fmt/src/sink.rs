//! Byte sink abstraction.
//!
//! The sink is an explicit capability threaded through every formatter
//! rather than an ambient global `putchar`, so the core carries no hidden
//! dependency and tests can substitute an in-memory sink.

use core::convert::Infallible;
use core::fmt;

/// One-byte-at-a-time output consumer.
///
/// Formatters call [`put`](Sink::put) once per emitted character, in emission
/// order, with no batching. On a freestanding target the sink is typically
/// infallible (`Error = Infallible`); a hosted sink may fail, in which case
/// the formatting call aborts at the first error.
pub trait Sink {
    type Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).put(byte)
    }
}

/// Error returned by [`SliceSink`] once the destination buffer is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceFull;

impl fmt::Display for SliceFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output buffer full")
    }
}

/// Sink writing into a caller-provided byte buffer.
///
/// ```ignore
/// let mut buf = [0u8; 32];
/// let mut sink = SliceSink::new(&mut buf);
/// write_u32(&mut sink, 1234)?;
/// assert_eq!(sink.written(), b"1234");
/// ```
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Sink for SliceSink<'_> {
    type Error = SliceFull;

    fn put(&mut self, byte: u8) -> Result<(), SliceFull> {
        if self.len == self.buf.len() {
            return Err(SliceFull);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }
}

/// Sink wrapping an infallible byte consumer, e.g. a bare-metal `putchar`.
pub struct FnSink<F: FnMut(u8)>(pub F);

impl<F: FnMut(u8)> Sink for FnSink<F> {
    type Error = Infallible;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        (self.0)(byte);
        Ok(())
    }
}
