//! Verified-State Codec
//!
//! Round-trips the set of verified item indices through the `v` query value:
//! ascending indices joined by commas.

use std::collections::BTreeSet;

/// Query parameter holding the encoded set
pub const VERIFIED_PARAM: &str = "v";

const DELIMITER: char = ',';

/// Encode a verified set. `None` for the empty set: the caller removes the
/// key instead of writing an empty value.
pub fn encode(indices: &BTreeSet<usize>) -> Option<String> {
    if indices.is_empty() {
        return None;
    }
    let tokens: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    Some(tokens.join(&DELIMITER.to_string()))
}

/// Decode a raw query value. Never fails: tokens that are not non-negative
/// integers are dropped.
pub fn decode(raw: Option<&str>) -> BTreeSet<usize> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    raw.split(DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<usize>() {
            Ok(index) => Some(index),
            Err(_) => {
                log::debug!("[CODEC] Dropping malformed token {:?}", token);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[usize]) -> BTreeSet<usize> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_encode_sorted() {
        assert_eq!(encode(&set(&[5, 0, 2])), Some("0,2,5".to_string()));
    }

    #[test]
    fn test_encode_empty_is_absent() {
        assert_eq!(encode(&BTreeSet::new()), None);
    }

    #[test]
    fn test_round_trip() {
        for values in [&[][..], &[0], &[3, 1], &[0, 1, 2, 10, 42, 1000]] {
            let s = set(values);
            assert_eq!(decode(encode(&s).as_deref()), s);
        }
    }

    #[test]
    fn test_decode_empty_and_absent() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("")).is_empty());
    }

    #[test]
    fn test_decode_drops_malformed_tokens() {
        assert_eq!(decode(Some("2,x,5,-1,3")), set(&[2, 3, 5]));
        assert_eq!(decode(Some(" 4 , ,7,,")), set(&[4, 7]));
        assert_eq!(decode(Some("1.5,99999999999999999999999")), BTreeSet::new());
    }
}
