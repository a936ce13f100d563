//! Inner payload layout: a fixed 32-byte header followed by the
//! timestamp and value bitstreams, zero-padded to a byte boundary.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{DecodeError, EncodeError};
use crate::{timestamp, value};

/// Fixed-size header describing the two bitstreams that follow it.
pub const INNER_HEADER_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerHeader {
    pub count: u32,
    pub first_timestamp: i64,
    pub first_value_bits: u64,
    pub first_delta: i32,
    pub ts_bit_len: u32,
    pub val_bit_len: u32,
}

impl InnerHeader {
    pub fn to_bytes(self) -> [u8; INNER_HEADER_SIZE] {
        let mut buf = [0u8; INNER_HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.count.to_be_bytes());
        buf[4..12].copy_from_slice(&self.first_timestamp.to_be_bytes());
        buf[12..20].copy_from_slice(&self.first_value_bits.to_be_bytes());
        buf[20..24].copy_from_slice(&self.first_delta.to_be_bytes());
        buf[24..28].copy_from_slice(&self.ts_bit_len.to_be_bytes());
        buf[28..32].copy_from_slice(&self.val_bit_len.to_be_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < INNER_HEADER_SIZE {
            return Err(DecodeError::Truncated);
        }
        Ok(Self {
            count: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            first_timestamp: i64::from_be_bytes(buf[4..12].try_into().unwrap()),
            first_value_bits: u64::from_be_bytes(buf[12..20].try_into().unwrap()),
            first_delta: i32::from_be_bytes(buf[20..24].try_into().unwrap()),
            ts_bit_len: u32::from_be_bytes(buf[24..28].try_into().unwrap()),
            val_bit_len: u32::from_be_bytes(buf[28..32].try_into().unwrap()),
        })
    }
}

/// Result of packing: the inner payload bytes plus the header used to
/// describe it (the outer frame mirrors several of these fields).
pub struct Packed {
    pub bytes: Vec<u8>,
    pub header: InnerHeader,
}

/// Packs `[inner header | ts bits | value bits | zero-pad]`. The timestamp
/// and value bitstreams share a single bit accumulator — there is no
/// byte-realignment between them, only at the very end.
pub fn pack(timestamps: &[i64], values: &[f64]) -> Result<Packed, EncodeError> {
    debug_assert_eq!(timestamps.len(), values.len());

    let mut writer = BitWriter::with_capacity(timestamps.len() * 2);
    timestamp::encode(&mut writer, timestamps)?;
    let ts_bit_len = writer.total_bits() as u32;
    value::encode(&mut writer, values);
    let val_bit_len = writer.total_bits() as u32 - ts_bit_len;
    let (body, _) = writer.into_bytes_with_trailing();

    let first_timestamp = timestamps.first().copied().unwrap_or(0);
    let first_value_bits = values.first().copied().unwrap_or(0.0).to_bits();
    let first_delta = if timestamps.len() >= 2 {
        (timestamps[1] - timestamps[0]) as i32
    } else {
        0
    };

    let header = InnerHeader {
        count: timestamps.len() as u32,
        first_timestamp,
        first_value_bits,
        first_delta,
        ts_bit_len,
        val_bit_len,
    };

    let mut bytes = Vec::with_capacity(INNER_HEADER_SIZE + body.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&body);

    Ok(Packed { bytes, header })
}

/// Unpacks an inner payload: header, then `ts_bit_len` + `val_bit_len` bits
/// of timestamp/value stream, decoded straight away (the pad bits after
/// them are never read).
pub fn unpack(bytes: &[u8]) -> Result<(Vec<i64>, Vec<f64>), DecodeError> {
    let header = InnerHeader::from_bytes(bytes)?;
    let body = &bytes[INNER_HEADER_SIZE..];

    let ts_bit_len = header.ts_bit_len as usize;
    let val_bit_len = header.val_bit_len as usize;
    let total_bits = ts_bit_len + val_bit_len;
    if body.len() * 8 < total_bits {
        return Err(DecodeError::Truncated);
    }

    let mut reader = BitReader::new(body, total_bits);
    let timestamps =
        timestamp::decode(&mut reader, header.count).ok_or(DecodeError::Truncated)?;
    if reader.position() != ts_bit_len {
        return Err(DecodeError::BadHeader(
            "timestamp stream length disagreed with ts_bit_len".into(),
        ));
    }
    let values = value::decode(&mut reader, header.count).ok_or(DecodeError::Truncated)?;

    Ok((timestamps, values))
}
