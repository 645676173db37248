//! Forward-only scan over the local headers of a ZIP archive

use byteorder::{LittleEndian, ReadBytesExt};
use flate2::bufread::DeflateDecoder;
use std::io::{self, BufRead, BufReader, Read};
use tracing::{debug, info};

use super::entry::EntryReader;
use super::header::{CompressionMethod, DataDescriptor, EntryHeader};
use crate::constants::{
    READ_BUFFER_CAPACITY, ZIP_CENTRAL_DIRECTORY_SIGNATURE, ZIP_END_OF_CENTRAL_DIRECTORY_SIGNATURE,
    ZIP_LOCAL_HEADER_SIGNATURE, ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE,
};
use crate::{Error, Result};

/// Sequential reader over the entries of a ZIP byte stream
///
/// Never seeks and never reads the central directory. Entries that are not
/// opened are skipped: by length when the header knows it, otherwise by
/// draining their deflate stream and the trailing data descriptor.
pub struct ZipStream<R> {
    reader: BufReader<R>,
    /// Header returned by `next_entry` whose data has not been consumed
    pending: Option<EntryHeader>,
    finished: bool,
    entries_seen: usize,
}

impl<R: Read> ZipStream<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::with_capacity(READ_BUFFER_CAPACITY, source),
            pending: None,
            finished: false,
            entries_seen: 0,
        }
    }

    /// Number of local headers read so far
    pub fn entries_seen(&self) -> usize {
        self.entries_seen
    }

    /// Advance to the next entry, skipping the data of the current one
    ///
    /// Returns `Ok(None)` at the central directory or at end of input.
    pub fn next_entry(&mut self) -> Result<Option<&EntryHeader>> {
        if let Some(previous) = self.pending.take() {
            self.skip_entry(&previous)?;
        }
        if self.finished {
            return Ok(None);
        }

        if self.reader.fill_buf()?.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        let signature = self.reader.read_u32::<LittleEndian>()?;
        match signature {
            ZIP_LOCAL_HEADER_SIGNATURE => {
                let header = EntryHeader::read_from(&mut self.reader)?;
                self.entries_seen += 1;
                Ok(Some(&*self.pending.insert(header)))
            }
            ZIP_CENTRAL_DIRECTORY_SIGNATURE
            | ZIP_END_OF_CENTRAL_DIRECTORY_SIGNATURE
            | ZIP64_END_OF_CENTRAL_DIRECTORY_SIGNATURE => {
                self.finished = true;
                Ok(None)
            }
            other => Err(Error::unsupported_archive(format!(
                "unexpected signature {:#010x} after {} entries",
                other, self.entries_seen
            ))),
        }
    }

    /// Open the entry last returned by [`next_entry`](Self::next_entry)
    pub fn open_entry(&mut self) -> Result<EntryReader<'_, BufReader<R>>> {
        let header = self
            .pending
            .take()
            .ok_or_else(|| Error::configuration("no archive entry is positioned for reading"))?;
        // the entry data is consumed by the reader; the stream cannot resume
        self.finished = true;
        EntryReader::new(header, &mut self.reader)
    }

    /// Names of all entries, in archive order
    pub fn entries(mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        while let Some(header) = self.next_entry()? {
            names.push(header.name.clone());
        }
        Ok(names)
    }

    /// Scan forward to `name`; `Error::EntryNotFound` when it is absent
    pub fn find_entry(&mut self, name: &str) -> Result<EntryReader<'_, BufReader<R>>> {
        loop {
            match self.next_entry()? {
                Some(header) if header.name == name => break,
                Some(header) => debug!("Skipping archive entry {}", header.name),
                None => return Err(Error::entry_not_found(name)),
            }
        }
        info!("Found archive entry {} after {} entries", name, self.entries_seen);
        self.open_entry()
    }

    fn skip_entry(&mut self, header: &EntryHeader) -> Result<()> {
        if header.size_known() {
            let skipped = io::copy(
                &mut (&mut self.reader).take(header.compressed_size),
                &mut io::sink(),
            )?;
            if skipped != header.compressed_size {
                return Err(truncated(&header.name));
            }
            // sized entries may still be followed by a descriptor
            if header.has_data_descriptor() {
                DataDescriptor::read_from(&mut self.reader, header.zip64)?;
            }
            return Ok(());
        }

        match header.method {
            CompressionMethod::Deflated => {
                io::copy(&mut DeflateDecoder::new(&mut self.reader), &mut io::sink())?;
                let descriptor = DataDescriptor::read_from(&mut self.reader, header.zip64)?;
                debug!(
                    "Drained streamed entry {} ({} bytes compressed)",
                    header.name, descriptor.compressed_size
                );
                Ok(())
            }
            // directories carry no data, only the descriptor
            CompressionMethod::Stored if header.is_dir() => {
                DataDescriptor::read_from(&mut self.reader, header.zip64)?;
                Ok(())
            }
            _ => Err(Error::unsupported_archive(format!(
                "cannot find the end of entry {}: no size and not deflate",
                header.name
            ))),
        }
    }
}

fn truncated(name: &str) -> Error {
    Error::io(
        format!("archive ends inside entry {}", name),
        io::Error::from(io::ErrorKind::UnexpectedEof),
    )
}

/// Stream the decompressed bytes of one named entry to `consumer`
///
/// Entries before the target are skipped without buffering; entries after it
/// are never read.
pub fn stream_entry<R, T, F>(source: R, name: &str, consumer: F) -> Result<T>
where
    R: Read,
    F: FnOnce(EntryReader<'_, BufReader<R>>) -> Result<T>,
{
    let mut archive = ZipStream::new(source);
    let entry = archive.find_entry(name)?;
    consumer(entry)
}
