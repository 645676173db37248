//! ZIP local file headers and data descriptors

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Read;

use crate::constants::{
    ZIP_DATA_DESCRIPTOR_SIGNATURE, ZIP_FLAG_DATA_DESCRIPTOR, ZIP_FLAG_ENCRYPTED,
    ZIP64_EXTRA_FIELD_ID,
};
use crate::{Error, Result};

/// Size value that defers to the ZIP64 extra field
const ZIP64_SIZE_MARKER: u32 = u32::MAX;

/// Compression method of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflated,
    /// Any other method id; such entries can only be skipped
    Unsupported(u16),
}

impl From<u16> for CompressionMethod {
    fn from(id: u16) -> Self {
        match id {
            0 => CompressionMethod::Stored,
            8 => CompressionMethod::Deflated,
            other => CompressionMethod::Unsupported(other),
        }
    }
}

/// Fields of one local file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    pub name: String,
    pub method: CompressionMethod,
    /// General purpose bit flags
    pub flags: u16,
    pub crc32: u32,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    /// Sizes came from a ZIP64 extra field
    pub zip64: bool,
}

impl EntryHeader {
    /// CRC and sizes follow the data instead of the header
    pub fn has_data_descriptor(&self) -> bool {
        self.flags & ZIP_FLAG_DATA_DESCRIPTOR != 0
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags & ZIP_FLAG_ENCRYPTED != 0
    }

    /// The compressed length is known before the data
    pub fn size_known(&self) -> bool {
        !self.has_data_descriptor() || self.compressed_size > 0
    }

    /// Entry names ending in `/` are directories
    pub fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }

    /// Read the header fields that follow the signature
    pub(crate) fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let _version = reader.read_u16::<LittleEndian>()?;
        let flags = reader.read_u16::<LittleEndian>()?;
        let method = reader.read_u16::<LittleEndian>()?;
        let _mod_time = reader.read_u16::<LittleEndian>()?;
        let _mod_date = reader.read_u16::<LittleEndian>()?;
        let crc32 = reader.read_u32::<LittleEndian>()?;
        let compressed_size = reader.read_u32::<LittleEndian>()?;
        let uncompressed_size = reader.read_u32::<LittleEndian>()?;
        let name_len = reader.read_u16::<LittleEndian>()? as usize;
        let extra_len = reader.read_u16::<LittleEndian>()? as usize;

        let mut name = vec![0u8; name_len];
        reader.read_exact(&mut name)?;
        let mut extra = vec![0u8; extra_len];
        reader.read_exact(&mut extra)?;

        let mut header = EntryHeader {
            name: String::from_utf8_lossy(&name).into_owned(),
            method: CompressionMethod::from(method),
            flags,
            crc32,
            compressed_size: compressed_size as u64,
            uncompressed_size: uncompressed_size as u64,
            zip64: false,
        };

        if compressed_size == ZIP64_SIZE_MARKER || uncompressed_size == ZIP64_SIZE_MARKER {
            header.apply_zip64_extra(
                &extra,
                uncompressed_size == ZIP64_SIZE_MARKER,
                compressed_size == ZIP64_SIZE_MARKER,
            )?;
        } else if find_extra_field(&extra, ZIP64_EXTRA_FIELD_ID).is_some() {
            // descriptor sizes are 8 bytes wide when the field is present
            header.zip64 = true;
        }

        Ok(header)
    }

    fn apply_zip64_extra(
        &mut self,
        extra: &[u8],
        has_uncompressed: bool,
        has_compressed: bool,
    ) -> Result<()> {
        let data = find_extra_field(extra, ZIP64_EXTRA_FIELD_ID).ok_or_else(|| {
            Error::unsupported_archive(format!(
                "entry {} has 32-bit size markers but no ZIP64 extra field",
                self.name
            ))
        })?;

        let mut offset = 0;
        let mut next_u64 = || -> Result<u64> {
            let value = data.get(offset..offset + 8).ok_or_else(|| {
                Error::unsupported_archive(format!(
                    "truncated ZIP64 extra field in entry {}",
                    self.name
                ))
            })?;
            offset += 8;
            Ok(LittleEndian::read_u64(value))
        };

        let uncompressed = if has_uncompressed { Some(next_u64()?) } else { None };
        let compressed = if has_compressed { Some(next_u64()?) } else { None };

        if let Some(size) = uncompressed {
            self.uncompressed_size = size;
        }
        if let Some(size) = compressed {
            self.compressed_size = size;
        }
        self.zip64 = true;
        Ok(())
    }
}

/// Body of the extra field with the given id
fn find_extra_field(extra: &[u8], id: u16) -> Option<&[u8]> {
    let mut rest = extra;
    while rest.len() >= 4 {
        let field_id = LittleEndian::read_u16(&rest[0..2]);
        let len = LittleEndian::read_u16(&rest[2..4]) as usize;
        let body = rest.get(4..4 + len)?;
        if field_id == id {
            return Some(body);
        }
        rest = &rest[4 + len..];
    }
    None
}

/// Trailing CRC and sizes of a streamed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataDescriptor {
    pub crc32: u32,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
}

impl DataDescriptor {
    /// Read a descriptor, with or without its optional signature
    pub(crate) fn read_from<R: Read>(reader: &mut R, zip64: bool) -> Result<Self> {
        let mut crc32 = reader.read_u32::<LittleEndian>()?;
        if crc32 == ZIP_DATA_DESCRIPTOR_SIGNATURE {
            crc32 = reader.read_u32::<LittleEndian>()?;
        }

        let (compressed_size, uncompressed_size) = if zip64 {
            (
                reader.read_u64::<LittleEndian>()?,
                reader.read_u64::<LittleEndian>()?,
            )
        } else {
            (
                reader.read_u32::<LittleEndian>()? as u64,
                reader.read_u32::<LittleEndian>()? as u64,
            )
        };

        Ok(Self {
            crc32,
            compressed_size,
            uncompressed_size,
        })
    }
}
