// Hex text form used at driver and firmware configuration boundaries

/// Decode a hex string into octets, two digits per byte.
///
/// One leading `0x`/`0X` prefix is stripped. A pair that does not parse as a
/// hex byte yields 0x00 instead of failing, and a trailing unpaired digit is
/// ignored. Empty input yields an empty buffer.
pub fn decode_permissive(text: &str) -> Vec<u8> {
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let input = text.as_bytes();
    let mut octets = Vec::with_capacity(input.len() / 2);
    let mut i = 0;

    while i + 1 < input.len() {
        match (digit(input[i]), digit(input[i + 1])) {
            (Some(hi), Some(lo)) => octets.push(hi << 4 | lo),
            _ => {
                log::trace!("invalid hex pair at byte {}, substituting 00", i);
                octets.push(0);
            }
        }
        i += 2;
    }

    octets
}

/// Encode octets as `0x` followed by two lowercase hex digits per byte.
pub fn encode(octets: &[u8]) -> String {
    format!("0x{}", hex::encode(octets))
}

/// Value of a single ASCII hex digit.
pub(crate) fn digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_prefix() {
        assert_eq!(decode_permissive("0x4142"), b"AB");
        assert_eq!(decode_permissive("0X4142"), b"AB");
    }

    #[test]
    fn test_decode_without_prefix() {
        assert_eq!(decode_permissive("4142"), b"AB");
    }

    #[test]
    fn test_decode_uppercase_digits() {
        assert_eq!(decode_permissive("0xAB"), &[0xab]);
    }

    #[test]
    fn test_invalid_pair_becomes_zero() {
        assert_eq!(decode_permissive("0xZZ"), &[0x00]);
        assert_eq!(decode_permissive("0x41ZZ42"), &[0x41, 0x00, 0x42]);
    }

    #[test]
    fn test_trailing_digit_ignored() {
        assert_eq!(decode_permissive("0x414"), &[0x41]);
        assert_eq!(decode_permissive("4"), b"");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_permissive(""), b"");
        assert_eq!(decode_permissive("0x"), b"");
    }

    #[test]
    fn test_only_first_prefix_stripped() {
        // The second prefix is parsed as data: "0X" is not a hex pair
        assert_eq!(decode_permissive("0x0X44"), &[0x00, 0x44]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(b"AB"), "0x4142");
        assert_eq!(encode(&[0x00, 0xff]), "0x00ff");
        assert_eq!(encode(b""), "0x");
    }
}
