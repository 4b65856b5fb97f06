use std::fmt::{Debug, Display, Formatter};
use std::io::SeekFrom;

pub(crate) mod std_readers;
use crate::bytestream::ByteSource;
use crate::endian::u16_from_le;

/// Errors that occur when pulling bytes out of a [`ByteSource`]
pub enum ByteIoError {
    StdIoError(std::io::Error),
    // requested, available
    NotEnoughBytes(usize, usize),
    SeekError(&'static str),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => write!(f, "{err}"),
            ByteIoError::NotEnoughBytes(expected, found) => {
                write!(f, "expected {expected} bytes but only {found} remain")
            }
            ByteIoError::SeekError(err) | ByteIoError::Generic(err) => write!(f, "{err}")
        }
    }
}

impl std::error::Error for ByteIoError {}

impl ByteIoError {
    /// Whether this error means the source ran out of bytes
    pub fn is_eof(&self) -> bool {
        match self {
            ByteIoError::NotEnoughBytes(..) => true,
            ByteIoError::StdIoError(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false
        }
    }
}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A positional reader over a [`ByteSource`]
pub struct ByteReader<T: ByteSource> {
    inner: T
}

impl<T: ByteSource> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Skip `num` bytes without looking at them
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ByteIoError> {
        let offset = i64::try_from(num).map_err(|_| ByteIoError::SeekError("skip too large"))?;
        self.inner.seek_to(SeekFrom::Current(offset))
    }

    #[inline(always)]
    pub fn seek(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.inner.seek_to(from)
    }

    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        self.seek(SeekFrom::Start(position as u64))?;

        Ok(())
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.current_position()
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    /// Read a `u16` stored as little endian, returning it in host order
    ///
    /// Returns an error if the underlying buffer cannot support a u16 read.
    #[inline]
    pub fn get_u16_le_err(&mut self) -> Result<u16, ByteIoError> {
        let bytes = self.read_fixed_bytes_or_error::<2>()?;
        Ok(u16_from_le(bytes))
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    /// Total length of the source in bytes
    ///
    /// The current position is left unchanged
    pub fn stream_len(&mut self) -> Result<u64, ByteIoError> {
        let position = self.position()?;
        let len = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(position))?;

        Ok(len)
    }

    pub fn source_name(&self) -> &'static str {
        self.inner.name()
    }
}
