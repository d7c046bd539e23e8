use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input has an odd number of hex digits ({0})")]
    OddLength(usize),

    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit { found: char, offset: usize },
}

/// Decodes a string of paired hex digits into raw bytes.
///
/// Every character must be a digit in `[0-9a-fA-F]`; separators are not
/// accepted. The empty string decodes to an empty payload.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let digits: Vec<char> = input.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(DecodeError::OddLength(digits.len()));
    }
    let mut payload = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        let hi = digit_value(pair[0], i * 2)?;
        let lo = digit_value(pair[1], i * 2 + 1)?;
        payload.push((hi << 4) | lo);
    }
    Ok(payload)
}

fn digit_value(c: char, offset: usize) -> Result<u8, DecodeError> {
    c.to_digit(16)
        .map(|v| v as u8)
        .ok_or(DecodeError::InvalidDigit { found: c, offset })
}

/// Encodes raw bytes as a lowercase hex string.
pub fn encode(payload: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(payload.len() * 2);
    for &b in payload {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paired_digits() {
        assert_eq!(decode("48656c6c6f").expect("decode failed"), b"Hello");
    }

    #[test]
    fn case_is_insignificant() {
        assert_eq!(
            decode("DEADbeef").expect("decode failed"),
            [0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test]
    fn empty_input_is_an_empty_payload() {
        assert_eq!(decode("").expect("decode failed"), Vec::<u8>::new());
    }

    #[test]
    fn roundtrip_normalizes_case() {
        let input = "0123456789AbCdEf";
        let payload = decode(input).expect("decode failed");
        assert_eq!(encode(&payload), input.to_lowercase());
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(decode("48656"), Err(DecodeError::OddLength(5)));
        assert_eq!(decode("4"), Err(DecodeError::OddLength(1)));
    }

    #[test]
    fn non_digits_are_rejected() {
        assert_eq!(
            decode("zz"),
            Err(DecodeError::InvalidDigit {
                found: 'z',
                offset: 0,
            })
        );
        assert_eq!(
            decode("de:adbe"),
            Err(DecodeError::InvalidDigit {
                found: ':',
                offset: 2,
            })
        );
        // A separator makes the digit count odd here, so length wins.
        assert_eq!(decode("de ad"), Err(DecodeError::OddLength(5)));
    }
}
