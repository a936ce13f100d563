//! Outer frame container: magic, version, sizes, CRC32, and a
//! handful of fields mirrored from the inner header for quick inspection
//! without unpacking the bitstreams. V2 adds `scale_decimals` when metrics
//! preprocessing was applied.

use crate::error::DecodeError;
use crate::inner::InnerHeader;

pub const MAGIC: u64 = 0x0047_4F52_494C_4C41;
pub const VERSION: u16 = 1;
pub const V1_HEADER_SIZE: u16 = 80;
pub const V2_HEADER_SIZE: u16 = 84;

pub const FLAG_METRICS: u32 = 0x1;
pub const FLAG_COUNTER: u32 = 0x2;

/// Fields carried in the outer frame header, common to V1 and V2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuterHeader {
    pub version: u16,
    pub header_size: u16,
    pub count: u32,
    pub compressed_size: u32,
    pub original_size: u32,
    pub crc32: u32,
    pub first_timestamp: i64,
    pub first_delta: i32,
    pub first_value_bits: u64,
    pub ts_bit_len: u32,
    pub val_bit_len: u32,
    pub total_bits: u32,
    pub compression_ratio: f64,
    pub creation_time: i64,
    pub flags: u32,
    /// `Some` only for V2 frames.
    pub scale_decimals: Option<u32>,
}

impl OuterHeader {
    pub fn is_v2(&self) -> bool {
        self.scale_decimals.is_some()
    }
}

/// Builds the full frame: outer header followed by the inner payload.
/// `creation_time` is the caller's notion of "now" in seconds since epoch,
/// taken as a parameter so callers can pin it for deterministic tests
/// (the source has no caller-supplied clock).
#[allow(clippy::too_many_arguments)]
pub fn build(
    inner_header: InnerHeader,
    inner_bytes: &[u8],
    flags: u32,
    scale_decimals: Option<u32>,
    creation_time: i64,
) -> Vec<u8> {
    let header_size = if scale_decimals.is_some() {
        V2_HEADER_SIZE
    } else {
        V1_HEADER_SIZE
    };
    let compressed_size = inner_bytes.len() as u32;
    let original_size = inner_header.count * 16;
    let crc32 = crate::crc32::checksum(inner_bytes);
    let total_bits = compressed_size * 8;
    let compression_ratio = if original_size > 0 {
        compressed_size as f64 / original_size as f64
    } else {
        0.0
    };

    let mut out = Vec::with_capacity(header_size as usize + inner_bytes.len());
    out.extend_from_slice(&MAGIC.to_be_bytes());
    out.extend_from_slice(&VERSION.to_be_bytes());
    out.extend_from_slice(&header_size.to_be_bytes());
    out.extend_from_slice(&inner_header.count.to_be_bytes());
    out.extend_from_slice(&compressed_size.to_be_bytes());
    out.extend_from_slice(&original_size.to_be_bytes());
    out.extend_from_slice(&crc32.to_be_bytes());
    out.extend_from_slice(&inner_header.first_timestamp.to_be_bytes());
    out.extend_from_slice(&inner_header.first_delta.to_be_bytes());
    out.extend_from_slice(&inner_header.first_value_bits.to_be_bytes());
    out.extend_from_slice(&inner_header.ts_bit_len.to_be_bytes());
    out.extend_from_slice(&inner_header.val_bit_len.to_be_bytes());
    out.extend_from_slice(&total_bits.to_be_bytes());
    out.extend_from_slice(&compression_ratio.to_be_bytes());
    out.extend_from_slice(&creation_time.to_be_bytes());
    out.extend_from_slice(&flags.to_be_bytes());
    if let Some(scale) = scale_decimals {
        out.extend_from_slice(&scale.to_be_bytes());
    }
    debug_assert_eq!(out.len(), header_size as usize);
    out.extend_from_slice(inner_bytes);
    out
}

/// Parses the outer header and returns it alongside the inner payload slice.
pub fn parse(bytes: &[u8]) -> Result<(OuterHeader, &[u8]), DecodeError> {
    if bytes.len() < 8 {
        return Err(DecodeError::Truncated);
    }
    let magic = u64::from_be_bytes(bytes[0..8].try_into().unwrap());
    if magic != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    if bytes.len() < V1_HEADER_SIZE as usize {
        return Err(DecodeError::Truncated);
    }

    let version = u16::from_be_bytes(bytes[8..10].try_into().unwrap());
    if version > VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let header_size = u16::from_be_bytes(bytes[10..12].try_into().unwrap());
    if header_size != V1_HEADER_SIZE && header_size != V2_HEADER_SIZE {
        return Err(DecodeError::BadHeader(format!(
            "header_size {header_size} not in {{80, 84}}"
        )));
    }
    if bytes.len() < header_size as usize {
        return Err(DecodeError::Truncated);
    }

    let count = u32::from_be_bytes(bytes[12..16].try_into().unwrap());
    let compressed_size = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let original_size = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    let crc32 = u32::from_be_bytes(bytes[24..28].try_into().unwrap());
    let first_timestamp = i64::from_be_bytes(bytes[28..36].try_into().unwrap());
    let first_delta = i32::from_be_bytes(bytes[36..40].try_into().unwrap());
    let first_value_bits = u64::from_be_bytes(bytes[40..48].try_into().unwrap());
    let ts_bit_len = u32::from_be_bytes(bytes[48..52].try_into().unwrap());
    let val_bit_len = u32::from_be_bytes(bytes[52..56].try_into().unwrap());
    let total_bits = u32::from_be_bytes(bytes[56..60].try_into().unwrap());
    let compression_ratio = f64::from_be_bytes(bytes[60..68].try_into().unwrap());
    let creation_time = i64::from_be_bytes(bytes[68..76].try_into().unwrap());
    let flags = u32::from_be_bytes(bytes[76..80].try_into().unwrap());

    let scale_decimals = if header_size == V2_HEADER_SIZE {
        Some(u32::from_be_bytes(bytes[80..84].try_into().unwrap()))
    } else {
        None
    };

    let total_length = header_size as usize + compressed_size as usize;
    if bytes.len() < total_length {
        return Err(DecodeError::Truncated);
    }

    let header = OuterHeader {
        version,
        header_size,
        count,
        compressed_size,
        original_size,
        crc32,
        first_timestamp,
        first_delta,
        first_value_bits,
        ts_bit_len,
        val_bit_len,
        total_bits,
        compression_ratio,
        creation_time,
        flags,
        scale_decimals,
    };

    let inner = &bytes[header_size as usize..total_length];
    Ok((header, inner))
}
