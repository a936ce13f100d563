//! Delta-of-delta timestamp encoding.
//!
//! The first timestamp is stored raw (64 bits). The delta to the second
//! timestamp, and every delta-of-delta after that, is stored with the
//! asymmetric variable-width scheme below — most real-world series sample
//! at a fixed interval, so the common case costs a single `0` bit.

use crate::bitio::{BitReader, BitWriter};
use crate::error::EncodeError;

/// Encodes a sequence of timestamps, writing into `writer`. Fails if any
/// delta or delta-of-delta falls outside the `i32` range the overflow
/// bucket's 32-bit payload can hold losslessly, rather than silently
/// truncating a wild jump between samples.
pub fn encode(writer: &mut BitWriter, timestamps: &[i64]) -> Result<(), EncodeError> {
    let mut iter = timestamps.iter().copied();
    let Some(first) = iter.next() else {
        return Ok(());
    };
    writer.write_bits(first as u64, 64);

    let Some(second) = iter.next() else {
        return Ok(());
    };
    let mut prev_delta = second - first;
    encode_varint(writer, prev_delta)?;
    let mut prev_ts = second;

    for ts in iter {
        let delta = ts - prev_ts;
        let dod = delta - prev_delta;
        encode_varint(writer, dod)?;
        prev_delta = delta;
        prev_ts = ts;
    }
    Ok(())
}

/// Decodes exactly `count` timestamps from `reader`. Returns `None` on
/// premature end of stream (the caller maps this to `DecodeError::Truncated`).
pub fn decode(reader: &mut BitReader<'_>, count: u32) -> Option<Vec<i64>> {
    let mut out = Vec::with_capacity(count as usize);
    if count == 0 {
        return Some(out);
    }
    let first = reader.read_bits(64)? as i64;
    out.push(first);
    if count == 1 {
        return Some(out);
    }

    let mut prev_delta = decode_varint(reader)?;
    let mut prev_ts = first + prev_delta;
    out.push(prev_ts);

    for _ in 2..count {
        let dod = decode_varint(reader)?;
        prev_delta += dod;
        prev_ts += prev_delta;
        out.push(prev_ts);
    }
    Some(out)
}

/// Writes `d` using the prefix scheme below. The ranges are asymmetric
/// (`-63..=64`, not `-64..=63`), which does not fit two's-complement in the
/// stated payload width — the first three buckets instead store `d` biased
/// by the range's lower bound as a plain unsigned field (the standard
/// Gorilla bias encoding); only the 32-bit overflow bucket is two's
/// complement.
fn encode_varint(writer: &mut BitWriter, d: i64) -> Result<(), EncodeError> {
    if d == 0 {
        writer.write_bits(0, 1);
    } else if (-63..=64).contains(&d) {
        writer.write_bits(0b10, 2);
        writer.write_bits((d + 63) as u64, 7);
    } else if (-255..=256).contains(&d) {
        writer.write_bits(0b110, 3);
        writer.write_bits((d + 255) as u64, 9);
    } else if (-2047..=2048).contains(&d) {
        writer.write_bits(0b1110, 4);
        writer.write_bits((d + 2047) as u64, 12);
    } else if (i32::MIN as i64..=i32::MAX as i64).contains(&d) {
        writer.write_bits(0b1111, 4);
        writer.write_signed(d, 32);
    } else {
        return Err(EncodeError::InvalidInput(format!(
            "timestamp delta {d} exceeds the i32 range the overflow bucket can store"
        )));
    }
    Ok(())
}

fn decode_varint(reader: &mut BitReader<'_>) -> Option<i64> {
    if !reader.read_bit()? {
        return Some(0);
    }
    if !reader.read_bit()? {
        return Some(reader.read_bits(7)? as i64 - 63);
    }
    if !reader.read_bit()? {
        return Some(reader.read_bits(9)? as i64 - 255);
    }
    if !reader.read_bit()? {
        return Some(reader.read_bits(12)? as i64 - 2047);
    }
    reader.read_signed(32)
}

/// Returns the number of bits the varint scheme would spend on `d`,
/// including its prefix. Used by `InnerPacker` to size the timestamp bit
/// region without re-running the encoder.
pub fn varint_bit_len(d: i64) -> u32 {
    if d == 0 {
        1
    } else if (-63..=64).contains(&d) {
        2 + 7
    } else if (-255..=256).contains(&d) {
        3 + 9
    } else if (-2047..=2048).contains(&d) {
        4 + 12
    } else {
        4 + 32
    }
}
