//! Public codec API: `encode`/`decode` over whole point sequences,
//! option parsing, and error mapping. This is the surface most callers use;
//! the bit-level and framing modules underneath are implementation detail.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{DecodeError, EncodeError};
use crate::frame::{self, FLAG_COUNTER, FLAG_METRICS};
use crate::inner;
use crate::preprocess::{self, ScaleDecimals};

/// A single `(timestamp, value)` sample. `ts` need not be monotonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub ts: i64,
    pub value: f64,
}

impl Point {
    pub fn new(ts: i64, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Encoding knobs. `is_counter` and `scale_decimals` only matter when
/// `metrics_mode` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    pub metrics_mode: bool,
    pub is_counter: bool,
    pub scale_decimals: ScaleDecimals,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            metrics_mode: false,
            is_counter: false,
            scale_decimals: ScaleDecimals::Auto,
        }
    }
}

/// Decode output augmented with the frame's informational fields and the
/// soft CRC signal — `decode` discards all of this and returns
/// just the points; reach for `decode_with_report` to see it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub points: Vec<Point>,
    pub checksum_ok: bool,
    pub creation_time: i64,
    pub compression_ratio: f64,
    pub scale_decimals: Option<u32>,
}

/// Encodes `points` into a self-contained frame. Empty input produces an
/// empty byte vector.
pub fn encode(points: &[Point], opts: EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let timestamps: Vec<i64> = points.iter().map(|p| p.ts).collect();
    let raw_values: Vec<f64> = points.iter().map(|p| p.value).collect();

    let (values, flags, scale_decimals) = if opts.metrics_mode {
        let (scaled, scale) =
            preprocess::preprocess(&raw_values, opts.is_counter, opts.scale_decimals)?;
        let mut flags = FLAG_METRICS;
        if opts.is_counter {
            flags |= FLAG_COUNTER;
        }
        (scaled, flags, Some(scale as u32))
    } else {
        (raw_values, 0u32, None)
    };

    let packed = inner::pack(&timestamps, &values)?;
    let creation_time = now_seconds();
    Ok(frame::build(
        packed.header,
        &packed.bytes,
        flags,
        scale_decimals,
        creation_time,
    ))
}

/// Decodes a frame produced by [`encode`]. Empty input yields an empty
/// point list. A CRC mismatch does not fail decoding; use
/// [`decode_with_report`] to observe it.
pub fn decode(bytes: &[u8]) -> Result<Vec<Point>, DecodeError> {
    Ok(decode_with_report(bytes)?.points)
}

/// Like [`decode`], but also returns the frame's informational header
/// fields and whether the stored CRC32 matched the inner payload.
pub fn decode_with_report(bytes: &[u8]) -> Result<DecodeReport, DecodeError> {
    if bytes.is_empty() {
        return Ok(DecodeReport {
            points: Vec::new(),
            checksum_ok: true,
            creation_time: 0,
            compression_ratio: 0.0,
            scale_decimals: None,
        });
    }

    let (header, inner_bytes) = frame::parse(bytes)?;
    let checksum_ok = crate::crc32::checksum(inner_bytes) == header.crc32;
    if !checksum_ok {
        tracing::debug!(
            expected = header.crc32,
            computed = crate::crc32::checksum(inner_bytes),
            "gorilla frame failed checksum verification; decoding anyway"
        );
    }

    let (timestamps, raw_values) = inner::unpack(inner_bytes)?;

    let is_metrics = header.flags & FLAG_METRICS != 0;
    let is_counter = header.flags & FLAG_COUNTER != 0;
    let values = if is_metrics {
        let scale = header.scale_decimals.unwrap_or(0) as u8;
        preprocess::postprocess(&raw_values, scale, is_counter)
    } else {
        raw_values
    };

    let points = timestamps
        .into_iter()
        .zip(values)
        .map(|(ts, value)| Point::new(ts, value))
        .collect();

    Ok(DecodeReport {
        points,
        checksum_ok,
        creation_time: header.creation_time,
        compression_ratio: header.compression_ratio,
        scale_decimals: header.scale_decimals,
    })
}

fn now_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
