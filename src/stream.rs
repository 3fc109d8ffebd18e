//! Byte stream contract
//!
//! The codec talks to its transport only through [`WireWrite`] and
//! [`WireRead`], which are implemented for every [`std::io::Write`] and
//! [`std::io::Read`]. All fixed-width values are little-endian.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Upper bound on speculative preallocation for length-prefixed reads
pub(crate) const PREALLOC_LIMIT: usize = 64 * 1024;

/// Fixed-width numeric type with a little-endian wire form
pub trait Fixed: Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_wire(self) -> Self::Bytes;
    fn from_wire(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_fixed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Fixed for $t {
                type Bytes = [u8; size_of::<$t>()];

                fn to_wire(self) -> Self::Bytes {
                    self.to_le_bytes()
                }

                fn from_wire(bytes: Self::Bytes) -> Self {
                    <$t>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed!(u8, u16, u32, u64, i32, f64);

/// Write side of the stream contract
pub trait WireWrite: Write {
    /// Write raw bytes
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes)?;
        Ok(())
    }

    /// Write a fixed-width value
    fn write_fixed<T: Fixed>(&mut self, value: T) -> Result<()> {
        self.write_bytes(value.to_wire().as_ref())
    }

    /// Write a u16 length-prefixed byte string
    fn write_string(&mut self, value: &[u8]) -> Result<()> {
        let len = u16::try_from(value.len()).map_err(|_| Error::LengthOverflow {
            what: "string",
            len: value.len(),
            max: u16::MAX as usize,
        })?;
        self.write_fixed(len)?;
        self.write_bytes(value)
    }
}

impl<W: Write + ?Sized> WireWrite for W {}

/// Read side of the stream contract
pub trait WireRead: Read {
    /// Fill `buf` completely, failing with [`Error::TruncatedStream`] on a short read
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.read_exact(buf)?;
        Ok(())
    }

    /// Read exactly `len` bytes into a fresh buffer
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(Error::TruncatedStream);
        }
        Ok(buf)
    }

    /// Read a fixed-width value
    fn read_fixed<T: Fixed>(&mut self) -> Result<T> {
        let mut bytes = T::Bytes::default();
        self.read_bytes(bytes.as_mut())?;
        Ok(T::from_wire(bytes))
    }

    /// Read a u16 length-prefixed byte string
    ///
    /// The bytes are returned as written; no encoding is assumed.
    fn read_string(&mut self) -> Result<Vec<u8>> {
        let len = self.read_fixed::<u16>()?;
        self.read_vec(len as usize)
    }
}

impl<R: Read + ?Sized> WireRead for R {}

/// In-memory FIFO byte stream
///
/// Writes append to the back, reads consume from the front, so a value can
/// be written and decoded again through the same instance.
#[derive(Debug, Default, Clone)]
pub struct MemoryStream {
    buf: VecDeque<u8>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unread bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the unread bytes, leaving the stream empty
    pub fn take_bytes(&mut self) -> Vec<u8> {
        self.buf.drain(..).collect()
    }
}

impl From<Vec<u8>> for MemoryStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self { buf: bytes.into() }
    }
}

impl Read for MemoryStream {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.buf.read(out)
    }
}

impl Write for MemoryStream {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
