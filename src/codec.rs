//! Base64 byte/text codec
//!
//! Decoding is deliberately permissive: every byte outside the standard
//! alphabet (`=` padding and whitespace included) is stripped before the
//! bit-level pass, so malformed-but-alphabet-matching input never fails.
//! Alphabet enforcement is the job of [`crate::encoding`], not this module.

/// Map a base64 character to its 6-bit value. Non-alphabet bytes map to 0.
fn sextet(byte: u8) -> u32 {
    match byte {
        b'A'..=b'Z' => u32::from(byte) - 65,
        b'a'..=b'z' => u32::from(byte) - 71,
        b'0'..=b'9' => u32::from(byte) + 4,
        b'+' => 62,
        b'/' => 63,
        _ => 0,
    }
}

/// Map a 6-bit value to its base64 character.
fn base64_char(value: u32) -> char {
    let code = match value {
        0..=25 => 65 + value,
        26..=51 => 71 + value,
        52..=61 => value - 4,
        62 => 43,
        63 => 47,
        _ => 65,
    };
    char::from(u8::try_from(code).unwrap_or(b'A'))
}

fn in_alphabet(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/'
}

/// Decode base64 text into raw bytes.
///
/// Non-alphabet characters are silently discarded rather than rejected.
/// This never fails: garbage that survives the alphabet filter decodes to
/// zero bits.
#[must_use]
pub fn decode_to_bytes(text: &str) -> Vec<u8> {
    decode(text, None)
}

/// Decode base64 text into raw bytes, rounding the output length up to a
/// multiple of `block_size` and zero-filling the tail.
#[must_use]
pub fn decode_to_bytes_padded(text: &str, block_size: usize) -> Vec<u8> {
    decode(text, Some(block_size))
}

fn decode(text: &str, block_size: Option<usize>) -> Vec<u8> {
    let cleaned: Vec<u8> = text.bytes().filter(|b| in_alphabet(*b)).collect();
    let in_len = cleaned.len();
    let out_len = (in_len * 3 + 1) >> 2;
    let out_len = match block_size {
        Some(block) if block > 0 => out_len.div_ceil(block) * block,
        _ => out_len,
    };

    let mut bytes = vec![0u8; out_len];
    let mut accum: u32 = 0;
    let mut out_idx = 0;
    for (in_idx, &byte) in cleaned.iter().enumerate() {
        let mod4 = in_idx & 3;
        accum |= sextet(byte) << (18 - 6 * mod4);
        if mod4 == 3 || in_len - in_idx == 1 {
            let mut mod3 = 0;
            while mod3 < 3 && out_idx < out_len {
                bytes[out_idx] = ((accum >> (16 - 8 * mod3)) & 255) as u8;
                mod3 += 1;
                out_idx += 1;
            }
            accum = 0;
        }
    }
    bytes
}

/// Encode raw bytes as standard-alphabet base64 text with `=` padding.
#[must_use]
pub fn encode_to_text(bytes: &[u8]) -> String {
    let pad_len = (3 - bytes.len() % 3) % 3;
    let in_len = bytes.len();

    let mut text = String::with_capacity(in_len.div_ceil(3) * 4);
    let mut accum: u32 = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let mod3 = idx % 3;
        accum |= u32::from(byte) << (16 - 8 * mod3);
        if mod3 == 2 || in_len - idx == 1 {
            text.push(base64_char((accum >> 18) & 63));
            text.push(base64_char((accum >> 12) & 63));
            text.push(base64_char((accum >> 6) & 63));
            text.push(base64_char(accum & 63));
            accum = 0;
        }
    }

    // The final partial group is emitted as a full quartet above, then the
    // zero-valued tail characters are replaced with padding.
    if pad_len > 0 {
        text.truncate(text.len() - pad_len);
        for _ in 0..pad_len {
            text.push('=');
        }
    }
    text
}
