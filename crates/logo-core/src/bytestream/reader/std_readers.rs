use std::io;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteSource;

impl<T> ByteSource for io::Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let start = self.position();
        let available = (self.get_ref().as_ref().len() as u64).saturating_sub(start);

        if (buf.len() as u64) > available {
            // do not advance on failure, the caller reports the field
            return Err(ByteIoError::NotEnoughBytes(buf.len(), available as usize));
        }
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position() as usize >= self.get_ref().as_ref().len())
    }

    fn current_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position())
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: io::Read + io::Seek> ByteSource for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        match from {
            // keeps the buffer when skipping a few bytes forward
            SeekFrom::Current(offset) => {
                self.seek_relative(offset)?;
                self.stream_position().map_err(ByteIoError::from)
            }
            _ => self.seek(from).map_err(ByteIoError::from)
        }
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ByteIoError::from)
    }

    fn current_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}
