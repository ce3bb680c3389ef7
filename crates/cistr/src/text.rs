//! The text stream boundary.
//!
//! [`Source`] pulls one byte at a time and signals end-of-input by yielding
//! `None`; [`Sink`] accepts contiguous runs. In-memory types implement both
//! directly, and the [`Reader`] / [`Writer`] adapters bridge to `std::io`
//! when the `std` feature is enabled.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::{collate::Collate, string::StrBuf};

/// A sequential source of bytes.
pub trait Source {
    /// Error reported by the underlying stream.
    type Error;

    /// Pulls the next byte, or `Ok(None)` once the source is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// A sequential sink accepting contiguous runs of bytes.
pub trait Sink {
    /// Error reported by the underlying stream.
    type Error;

    /// Writes the whole run or fails.
    fn write_run(&mut self, run: &[u8]) -> Result<(), Self::Error>;
}

/// A byte slice is an infallible source; reading consumes from the front.
impl Source for &[u8] {
    type Error = Infallible;

    fn next_byte(&mut self) -> Result<Option<u8>, Infallible> {
        Ok(match *self {
            [first, rest @ ..] => {
                *self = rest;
                Some(*first)
            }
            [] => None,
        })
    }
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    fn write_run(&mut self, run: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(run);
        Ok(())
    }
}

/// A buffer is a sink; written runs are appended.
impl<C: Collate> Sink for StrBuf<C> {
    type Error = Infallible;

    fn write_run(&mut self, run: &[u8]) -> Result<(), Infallible> {
        self.append(run);
        Ok(())
    }
}

#[cfg(feature = "std")]
mod io {
    use std::io;

    use super::{Sink, Source};

    /// Adapts any [`io::Read`] into a byte [`Source`].
    ///
    /// Each `next_byte` issues a single one-byte read on the inner reader,
    /// which is the documented line-reading contract and correspondingly
    /// slow on raw handles. Wrap the reader in [`io::BufReader`] when
    /// throughput matters.
    #[derive(Debug)]
    pub struct Reader<R> {
        inner: R,
    }

    impl<R: io::Read> Reader<R> {
        /// Wraps a reader.
        pub fn new(inner: R) -> Self {
            Self { inner }
        }

        /// Returns the wrapped reader.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: io::Read> Source for Reader<R> {
        type Error = io::Error;

        fn next_byte(&mut self) -> io::Result<Option<u8>> {
            let mut byte = [0u8; 1];
            loop {
                match self.inner.read(&mut byte) {
                    Ok(0) => return Ok(None),
                    Ok(_) => return Ok(Some(byte[0])),
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                    Err(err) => return Err(err),
                }
            }
        }
    }

    /// Adapts any [`io::Write`] into a [`Sink`].
    #[derive(Debug)]
    pub struct Writer<W> {
        inner: W,
    }

    impl<W: io::Write> Writer<W> {
        /// Wraps a writer.
        pub fn new(inner: W) -> Self {
            Self { inner }
        }

        /// Returns the wrapped writer.
        pub fn into_inner(self) -> W {
            self.inner
        }
    }

    impl<W: io::Write> Sink for Writer<W> {
        type Error = io::Error;

        fn write_run(&mut self, run: &[u8]) -> io::Result<()> {
            self.inner.write_all(run)
        }
    }
}

#[cfg(feature = "std")]
pub use io::{Reader, Writer};

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Sink, Source};
    use crate::OrdStr;

    #[test]
    fn slice_source_drains_from_front() {
        let mut source: &[u8] = b"ab";
        assert_eq!(source.next_byte().unwrap(), Some(b'a'));
        assert_eq!(source.next_byte().unwrap(), Some(b'b'));
        assert_eq!(source.next_byte().unwrap(), None);
        assert_eq!(source.next_byte().unwrap(), None);
    }

    #[test]
    fn vec_sink_accumulates_runs() {
        let mut sink = Vec::new();
        sink.write_run(b"ab").unwrap();
        sink.write_run(b"").unwrap();
        sink.write_run(b"c").unwrap();
        assert_eq!(sink, b"abc");
    }

    #[test]
    fn buffer_sink_appends() {
        let mut sink = OrdStr::from("ab");
        sink.write_run(b"cd").unwrap();
        assert_eq!(sink.as_bytes(), b"abcd");
    }

    #[cfg(feature = "std")]
    #[test]
    fn reader_and_writer_adapt_io() {
        use std::io::Cursor;

        use super::{Reader, Writer};

        let mut reader = Reader::new(Cursor::new(b"xy".to_vec()));
        assert_eq!(reader.next_byte().unwrap(), Some(b'x'));
        assert_eq!(reader.next_byte().unwrap(), Some(b'y'));
        assert_eq!(reader.next_byte().unwrap(), None);

        let mut writer = Writer::new(Vec::new());
        writer.write_run(b"out").unwrap();
        assert_eq!(writer.into_inner(), b"out");
    }
}
