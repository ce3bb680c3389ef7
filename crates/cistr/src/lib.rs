//! Owned, null-terminated byte strings with pluggable collation.
//!
//! The central type is [`StrBuf`], a heap-backed, growable byte buffer that
//! keeps a NUL terminator after its content at all times, so it can always be
//! handed to C-string consumers via [`StrBuf::as_c_str`]. Every ordering and
//! equality operation goes through a [`Collate`] policy chosen at type level:
//! [`Ordinal`] compares raw byte values, [`Caseless`] folds ASCII case first.
//! The aliases [`OrdStr`] and [`CiStr`] name the two pairings.
//!
//! ```
//! use cistr::{CiStr, OrdStr};
//!
//! let mut greeting = CiStr::from("Hello");
//! greeting.append(b", ").append(b"World!");
//!
//! // Case-insensitive collation: equal despite differing bytes.
//! assert_eq!(greeting, "hELLO, wORLD!");
//!
//! // Ordinal collation over the same content disagrees.
//! let ordinal: OrdStr = greeting.into_collation();
//! assert_ne!(ordinal, "hELLO, wORLD!");
//! ```
//!
//! Line-oriented input and verbatim output go through the [`Source`] and
//! [`Sink`] traits; any `&[u8]` is a source and any `Vec<u8>` or [`StrBuf`]
//! is a sink, with [`Reader`] and [`Writer`] adapting `std::io` types when
//! the `std` feature (on by default) is enabled.
//!
//! ```
//! use cistr::CiStr;
//!
//! let mut source: &[u8] = b"banana\nApple\ncherry";
//! let mut lines = Vec::new();
//! loop {
//!     let mut line = CiStr::new();
//!     let saw_newline = line.read_line(&mut source).unwrap();
//!     lines.push(line);
//!     if !saw_newline {
//!         break;
//!     }
//! }
//! lines.sort_by(|a, b| b.cmp(a));
//! assert_eq!(lines, [CiStr::from("cherry"), "banana".into(), "Apple".into()]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod collate;
#[cfg(feature = "serde")]
mod serde_impls;
mod string;
mod text;

pub use collate::{Caseless, Collate, Ordinal};
pub use string::{CiStr, InteriorNulError, OrdStr, StrBuf};
#[cfg(feature = "std")]
pub use text::{Reader, Writer};
pub use text::{Sink, Source};
