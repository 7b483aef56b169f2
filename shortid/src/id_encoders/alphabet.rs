use super::IdEncoderError;
use std::fmt;

/// Letters only, so a token never parses as a number.
const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE: i64 = ALPHABET.len() as i64;

fn alphabet_index(c: u8) -> Option<i64> {
    match c {
        b'a'..=b'z' => Some((c - b'a') as i64),
        b'A'..=b'Z' => Some((c - b'A') as i64 + 26),
        _ => None,
    }
}

/// Offset added to every value before it is mapped onto the alphabet.
///
/// The type code part of a token is read back as a fixed two character prefix, thus the salt is
/// restricted so that every type code in `0..=999` encodes to exactly two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt(i64);

impl Salt {
    pub const MIN: i64 = BASE;
    pub const MAX: i64 = BASE * BASE - 1 - 999;
    pub const DEFAULT: Salt = Salt(100);

    pub fn new(salt: i64) -> Result<Self, IdEncoderError> {
        if (Self::MIN..=Self::MAX).contains(&salt) {
            Ok(Self(salt))
        } else {
            Err(IdEncoderError::InvalidConfig(format!(
                "salt {salt} is out of range [{}, {}]",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Salt {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Salt {
    type Error = IdEncoderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Salt> for i64 {
    fn from(value: Salt) -> Self {
        value.0
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a number onto the letter alphabet, least significant character first.
/// Values that are not positive after salting produce an empty string.
pub fn encode_short(value: i64, salt: Salt) -> String {
    let mut n = match value.checked_add(salt.0) {
        Some(n) => n,
        None => return String::new(),
    };

    let mut code = String::new();
    while n > 0 {
        code.push(ALPHABET[(n % BASE) as usize] as char);
        n /= BASE;
    }
    code
}

/// Inverse of [`encode_short`]. Returns `None` for an empty token, a character outside the
/// alphabet or a token too long to fit into an `i64`.
pub fn decode_short(code: &str, salt: Salt) -> Option<i64> {
    if code.is_empty() {
        return None;
    }

    let mut n: i64 = 0;
    for c in code.bytes().rev() {
        let idx = alphabet_index(c)?;
        n = n.checked_mul(BASE)?.checked_add(idx)?;
    }
    n.checked_sub(salt.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use shortid_test::test;

    #[test]
    fn encode_is_little_endian_over_letters() {
        let salt = Salt::DEFAULT;
        // 100 = 48 + 1 * 52
        assert_eq!(encode_short(0, salt), "Wb");
        assert_eq!(encode_short(1, salt), "Xb");
        // 1099 = 7 + 21 * 52
        assert_eq!(encode_short(999, salt), "hv");
        assert_eq!(encode_short(9_999_999_999_999, salt), "FfKKIPLj");
    }

    #[test]
    fn encode_non_positive_is_empty() {
        let salt = Salt::DEFAULT;
        assert_eq!(encode_short(-100, salt), "");
        assert_eq!(encode_short(-5000, salt), "");
        assert_eq!(encode_short(i64::MAX, salt), "");
    }

    #[test]
    fn decode_inverts_encode() {
        let salt = Salt::new(733).unwrap();
        for value in [0, 1, 51, 52, 999, 123_456_789, 9_999_999_999_999] {
            let code = encode_short(value, salt);
            assert_eq!(decode_short(&code, salt), Some(value), "value: {value}, code: {code}");
        }
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        let salt = Salt::DEFAULT;
        assert_eq!(decode_short("", salt), None);
        assert_eq!(decode_short("12", salt), None);
        assert_eq!(decode_short("ab-c", salt), None);
        assert_eq!(decode_short("áb", salt), None);
        assert_eq!(decode_short(&"Z".repeat(20), salt), None);
    }

    #[test]
    fn decode_below_salt_is_negative() {
        assert_eq!(decode_short("a", Salt::DEFAULT), Some(-100));
    }

    #[test]
    fn salt_range_keeps_type_code_two_chars() {
        for salt in [Salt::MIN, 100, 1000, Salt::MAX] {
            let salt = Salt::new(salt).unwrap();
            assert_eq!(encode_short(0, salt).len(), 2, "salt: {salt}");
            assert_eq!(encode_short(999, salt).len(), 2, "salt: {salt}");
        }

        assert!(matches!(Salt::new(Salt::MIN - 1), Err(IdEncoderError::InvalidConfig(_))));
        assert!(matches!(Salt::new(Salt::MAX + 1), Err(IdEncoderError::InvalidConfig(_))));
        assert!(Salt::new(0).is_err());
        assert!(Salt::new(-100).is_err());
    }
}
