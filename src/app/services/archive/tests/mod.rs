//! Test utilities for the archive reader
//!
//! [`ZipBuilder`] writes small archives in memory with the layouts found in
//! the wild: sized entries, streamed entries with data descriptors, and
//! entries in methods the reader cannot decompress.

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Crc;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

use crate::constants::{
    ZIP_CENTRAL_DIRECTORY_SIGNATURE, ZIP_DATA_DESCRIPTOR_SIGNATURE,
    ZIP_END_OF_CENTRAL_DIRECTORY_SIGNATURE, ZIP_FLAG_DATA_DESCRIPTOR, ZIP_LOCAL_HEADER_SIGNATURE,
};

mod stream_tests;

pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// In-memory ZIP writer
#[derive(Default)]
pub struct ZipBuilder {
    bytes: Vec<u8>,
    names: Vec<String>,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn local_header(&mut self, name: &str, flags: u16, method: u16, crc: u32, sizes: (u32, u32)) {
        let out = &mut self.bytes;
        out.write_u32::<LittleEndian>(ZIP_LOCAL_HEADER_SIGNATURE).unwrap();
        out.write_u16::<LittleEndian>(20).unwrap();
        out.write_u16::<LittleEndian>(flags).unwrap();
        out.write_u16::<LittleEndian>(method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0x21).unwrap();
        out.write_u32::<LittleEndian>(crc).unwrap();
        out.write_u32::<LittleEndian>(sizes.0).unwrap();
        out.write_u32::<LittleEndian>(sizes.1).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.extend_from_slice(name.as_bytes());
        self.names.push(name.to_string());
    }

    /// Uncompressed entry with sizes in the header
    pub fn stored(mut self, name: &str, data: &[u8]) -> Self {
        let len = data.len() as u32;
        self.local_header(name, 0, 0, crc32(data), (len, len));
        self.bytes.extend_from_slice(data);
        self
    }

    /// Deflate entry with sizes in the header
    pub fn deflated(mut self, name: &str, data: &[u8]) -> Self {
        let compressed = deflate(data);
        self.local_header(
            name,
            0,
            8,
            crc32(data),
            (compressed.len() as u32, data.len() as u32),
        );
        self.bytes.extend_from_slice(&compressed);
        self
    }

    /// Deflate entry whose CRC and sizes follow the data
    pub fn streamed(mut self, name: &str, data: &[u8], with_signature: bool) -> Self {
        let compressed = deflate(data);
        self.local_header(name, ZIP_FLAG_DATA_DESCRIPTOR, 8, 0, (0, 0));
        self.bytes.extend_from_slice(&compressed);
        let out = &mut self.bytes;
        if with_signature {
            out.write_u32::<LittleEndian>(ZIP_DATA_DESCRIPTOR_SIGNATURE).unwrap();
        }
        out.write_u32::<LittleEndian>(crc32(data)).unwrap();
        out.write_u32::<LittleEndian>(compressed.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        self
    }

    /// Deflate entry with sizes in the header and a trailing descriptor as well
    pub fn sized_with_descriptor(mut self, name: &str, data: &[u8]) -> Self {
        let compressed = deflate(data);
        let crc = crc32(data);
        let sizes = (compressed.len() as u32, data.len() as u32);
        self.local_header(name, ZIP_FLAG_DATA_DESCRIPTOR, 8, crc, sizes);
        self.bytes.extend_from_slice(&compressed);
        let out = &mut self.bytes;
        out.write_u32::<LittleEndian>(ZIP_DATA_DESCRIPTOR_SIGNATURE).unwrap();
        out.write_u32::<LittleEndian>(crc).unwrap();
        out.write_u32::<LittleEndian>(sizes.0).unwrap();
        out.write_u32::<LittleEndian>(sizes.1).unwrap();
        self
    }

    /// Entry in an arbitrary method, payload written verbatim
    pub fn raw(mut self, name: &str, method: u16, payload: &[u8], crc: u32) -> Self {
        let len = payload.len() as u32;
        self.local_header(name, 0, method, crc, (len, len));
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Append a minimal central directory and return the archive bytes
    pub fn finish(mut self) -> Vec<u8> {
        let count = self.names.len() as u16;
        let out = &mut self.bytes;
        for name in &self.names {
            out.write_u32::<LittleEndian>(ZIP_CENTRAL_DIRECTORY_SIGNATURE).unwrap();
            out.extend_from_slice(&[0u8; 24]);
            out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
            out.extend_from_slice(&[0u8; 16]);
            out.extend_from_slice(name.as_bytes());
        }
        out.write_u32::<LittleEndian>(ZIP_END_OF_CENTRAL_DIRECTORY_SIGNATURE).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(count).unwrap();
        out.write_u16::<LittleEndian>(count).unwrap();
        out.extend_from_slice(&[0u8; 10]);
        self.bytes
    }

    /// Archive bytes without any central directory
    pub fn truncated(self) -> Vec<u8> {
        self.bytes
    }
}
