//! XOR-based float encoding with leading/trailing window reuse.
//!
//! Each value is XORed against the previous one's IEEE 754 bit pattern.
//! A run of slowly-changing values shares most of its leading and trailing
//! zero bits, so once a window is established it is cheaply reused.

use crate::bitio::{mask, BitReader, BitWriter};

pub fn encode(writer: &mut BitWriter, values: &[f64]) {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return;
    };
    let mut prev_bits = first.to_bits();
    writer.write_bits(prev_bits, 64);

    let mut prev_leading: u32 = 0;
    let mut prev_trailing: u32 = 0;
    let mut window_open = false;

    for value in iter {
        let bits = value.to_bits();
        let xor = bits ^ prev_bits;

        if xor == 0 {
            writer.write_bits(0, 1);
        } else {
            writer.write_bits(1, 1);
            let leading = xor.leading_zeros();
            let trailing = xor.trailing_zeros();

            if window_open && leading >= prev_leading && trailing >= prev_trailing {
                writer.write_bits(0, 1);
                let meaningful = 64 - prev_leading - prev_trailing;
                let m = (xor >> prev_trailing) & mask(meaningful);
                writer.write_bits(m, meaningful);
            } else {
                writer.write_bits(1, 1);
                // Clamp leading to fit the 5-bit field *before* deriving the
                // meaningful-bit count, so the decoder (which only ever sees
                // the clamped value) recomputes the same window.
                let leading_adj = leading.min(31);
                let meaningful = 64 - leading_adj - trailing;
                writer.write_bits(leading_adj as u64, 5);
                writer.write_bits((meaningful - 1) as u64, 6);
                let m = (xor >> trailing) & mask(meaningful);
                writer.write_bits(m, meaningful);
                prev_leading = leading_adj;
                prev_trailing = trailing;
                window_open = true;
            }
        }
        prev_bits = bits;
    }
}

pub fn decode(reader: &mut BitReader<'_>, count: u32) -> Option<Vec<f64>> {
    let mut out = Vec::with_capacity(count as usize);
    if count == 0 {
        return Some(out);
    }
    let mut prev_bits = reader.read_bits(64)?;
    out.push(f64::from_bits(prev_bits));
    if count == 1 {
        return Some(out);
    }

    let mut prev_leading: u32 = 0;
    let mut prev_trailing: u32 = 0;

    for _ in 1..count {
        if !reader.read_bit()? {
            out.push(f64::from_bits(prev_bits));
            continue;
        }
        if !reader.read_bit()? {
            let meaningful = 64u32.checked_sub(prev_leading + prev_trailing)?;
            let m = reader.read_bits(meaningful)?;
            prev_bits ^= m << prev_trailing;
        } else {
            let leading = reader.read_bits(5)? as u32;
            let meaningful = reader.read_bits(6)? as u32 + 1;
            let trailing = 64u32.checked_sub(leading + meaningful)?;
            let m = reader.read_bits(meaningful)?;
            prev_bits ^= m << trailing;
            prev_leading = leading;
            prev_trailing = trailing;
        }
        out.push(f64::from_bits(prev_bits));
    }
    Some(out)
}
