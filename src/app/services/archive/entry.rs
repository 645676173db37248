//! Reader over the decompressed bytes of one archive entry

use flate2::CrcReader;
use flate2::bufread::DeflateDecoder;
use std::io::{self, BufRead, Read, Take};

use super::header::{CompressionMethod, EntryHeader};
use crate::{Error, Result};

enum Body<'a, R> {
    Stored(Take<&'a mut R>),
    Deflated(DeflateDecoder<Take<&'a mut R>>),
    /// Deflate data whose length is only known from the stream itself
    DeflatedUnbounded(DeflateDecoder<&'a mut R>),
}

impl<R: BufRead> Read for Body<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Body::Stored(inner) => inner.read(buf),
            Body::Deflated(inner) => inner.read(buf),
            Body::DeflatedUnbounded(inner) => inner.read(buf),
        }
    }
}

/// Decompressed bytes of the selected entry
///
/// When the header carries the CRC and size up front, both are checked once
/// the stream is exhausted; a mismatch surfaces as an `InvalidData` I/O error.
pub struct EntryReader<'a, R> {
    header: EntryHeader,
    body: CrcReader<Body<'a, R>>,
    produced: u64,
    checked: bool,
}

impl<'a, R: BufRead> EntryReader<'a, R> {
    pub(crate) fn new(header: EntryHeader, source: &'a mut R) -> Result<Self> {
        if header.is_encrypted() {
            return Err(Error::unsupported_archive(format!(
                "entry {} is encrypted",
                header.name
            )));
        }

        let body = match (header.method, header.size_known()) {
            (CompressionMethod::Stored, true) => Body::Stored(source.take(header.compressed_size)),
            (CompressionMethod::Stored, false) => {
                return Err(Error::unsupported_archive(format!(
                    "stored entry {} has no size in its local header",
                    header.name
                )));
            }
            (CompressionMethod::Deflated, true) => {
                Body::Deflated(DeflateDecoder::new(source.take(header.compressed_size)))
            }
            (CompressionMethod::Deflated, false) => {
                Body::DeflatedUnbounded(DeflateDecoder::new(source))
            }
            (CompressionMethod::Unsupported(id), _) => {
                return Err(Error::unsupported_archive(format!(
                    "entry {} uses compression method {}",
                    header.name, id
                )));
            }
        };

        Ok(Self {
            header,
            body: CrcReader::new(body),
            produced: 0,
            checked: false,
        })
    }

    /// Header of the entry being read
    pub fn header(&self) -> &EntryHeader {
        &self.header
    }

    /// Decompressed bytes produced so far
    pub fn bytes_read(&self) -> u64 {
        self.produced
    }

    fn verify(&mut self) -> io::Result<()> {
        self.checked = true;
        if self.header.has_data_descriptor() {
            return Ok(());
        }

        let size = self.bytes_read();
        if size != self.header.uncompressed_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "entry {}: expected {} bytes, decompressed {}",
                    self.header.name, self.header.uncompressed_size, size
                ),
            ));
        }

        let crc = self.body.crc().sum();
        if crc != self.header.crc32 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "entry {}: CRC-32 mismatch (expected {:08x}, computed {:08x})",
                    self.header.name, self.header.crc32, crc
                ),
            ));
        }
        Ok(())
    }
}

impl<R: BufRead> Read for EntryReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.body.read(buf)?;
        self.produced += read as u64;
        if read == 0 && !buf.is_empty() && !self.checked {
            self.verify()?;
        }
        Ok(read)
    }
}
