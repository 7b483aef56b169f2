use super::{decode_short, encode_short, IdEncoder, IdEncoderError, Salt};

/// Number of decimal digits of an encodable long id.
pub const LONG_ID_DIGITS: usize = 17;
/// Number of digits of the type code, following the marker digit.
pub const TYPE_CODE_DIGITS: usize = 3;
/// Number of digits of the payload, following the type code.
pub const PAYLOAD_DIGITS: usize = 13;
/// Marker digit written back by the decoder, independent of the encoded id.
pub const DECODE_MARKER: u64 = 1;
/// Length of the type code prefix in a token.
pub const TYPE_CODE_TOKEN_LEN: usize = 2;
/// Smallest number considered to be a long id, `10^16`.
pub const LONG_FORM_MIN: i64 = 10_000_000_000_000_000;
/// Weight of the type code inside a long id, `10^13`.
pub const TYPE_CODE_SCALE: u64 = 10_000_000_000_000;

const MARKER_SCALE: u64 = LONG_FORM_MIN as u64;

const TYPE_CODE_MAX: u64 = 999;

/// The fields of a long id.
///
/// Splitting and reconstruction are two independent transforms: [`LongIdParts::split_for_encode`]
/// keeps the original marker digit, while [`LongIdParts::reconstruct_for_decode`] always uses
/// [`DECODE_MARKER`]. A token issued for an id with a marker other than `1` decodes to a
/// different long id with the same type code and payload. Already issued tokens depend on this.
///
/// Fields are only set through the two constructors, both keep every field in its digit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LongIdParts {
    marker: u8,
    type_code: u16,
    payload: u64,
}

impl LongIdParts {
    pub fn split_for_encode(long_id: &str) -> Result<Self, IdEncoderError> {
        let num = long_id
            .parse::<i64>()
            .map_err(|err| IdEncoderError::NotEncodable(format!("{long_id}: {err}")))?;
        if num <= 0 {
            return Err(IdEncoderError::NotEncodable(format!("{long_id}: not positive")));
        }

        let digits = num.to_string();
        if digits.len() != LONG_ID_DIGITS {
            return Err(IdEncoderError::NotEncodable(format!(
                "{long_id}: expected {LONG_ID_DIGITS} digits, got {}",
                digits.len()
            )));
        }

        let (marker, rest) = digits.split_at(1);
        let (type_code, payload) = rest.split_at(TYPE_CODE_DIGITS);
        debug_assert_eq!(payload.len(), PAYLOAD_DIGITS);

        let parse_err = |err: std::num::ParseIntError| IdEncoderError::NotEncodable(format!("{long_id}: {err}"));
        Ok(Self {
            marker: marker.parse().map_err(parse_err)?,
            type_code: type_code.parse().map_err(parse_err)?,
            payload: payload.parse().map_err(parse_err)?,
        })
    }

    /// Returns `None` if the type code is above 999 or the payload has more than 13 digits.
    pub fn reconstruct_for_decode(type_code: u16, payload: u64) -> Option<Self> {
        if type_code as u64 > TYPE_CODE_MAX || payload >= TYPE_CODE_SCALE {
            return None;
        }
        Some(Self {
            marker: DECODE_MARKER as u8,
            type_code,
            payload,
        })
    }

    pub fn marker(&self) -> u8 {
        self.marker
    }

    pub fn type_code(&self) -> u16 {
        self.type_code
    }

    pub fn payload(&self) -> u64 {
        self.payload
    }

    pub fn to_long_id(&self) -> u64 {
        self.marker as u64 * MARKER_SCALE + self.type_code as u64 * TYPE_CODE_SCALE + self.payload
    }
}

/// Converts 17 digit long ids into short letter tokens and back.
///
/// A token is the encoded type code (always [`TYPE_CODE_TOKEN_LEN`] characters) followed by the
/// encoded payload. The salt is carried by the encoder, there is no global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortIdEncoder {
    salt: Salt,
}

impl ShortIdEncoder {
    pub const DEFAULT: ShortIdEncoder = ShortIdEncoder { salt: Salt::DEFAULT };

    pub fn new(salt: Salt) -> Self {
        Self { salt }
    }

    pub fn salt(&self) -> Salt {
        self.salt
    }

    pub fn try_encode_token(&self, long_id: &str) -> Result<String, IdEncoderError> {
        let parts = LongIdParts::split_for_encode(long_id)?;
        let tcode = encode_short(parts.type_code as i64, self.salt);
        let code = encode_short(parts.payload as i64, self.salt);
        debug_assert_eq!(tcode.len(), TYPE_CODE_TOKEN_LEN);
        Ok(tcode + &code)
    }

    /// Encode a long id, returns an empty string if the id is not encodable.
    pub fn encode_token(&self, long_id: &str) -> String {
        match self.try_encode_token(long_id) {
            Ok(token) => token,
            Err(err) => {
                log::debug!("{err}");
                String::new()
            }
        }
    }

    /// Decode a token into a long id.
    ///
    /// Tokens whose type code decodes outside `0..=999` (e.g. `"ZZbb"`) or whose payload decodes
    /// outside `0..10^13` (e.g. `"Wba"`, a payload of `-100`) are rejected. Earlier decoders summed
    /// such fields into `10^16 + type_code * 10^13 + payload` regardless, yielding numbers that no
    /// long id encodes to; these tokens now decode to an error instead.
    pub fn try_decode_token(&self, token: &str) -> Result<u64, IdEncoderError> {
        let invalid = |reason: &str| IdEncoderError::InvalidObfuscatedId(format!("{token:?}: {reason}"));

        let (tcode, code) = match (token.get(..TYPE_CODE_TOKEN_LEN), token.get(TYPE_CODE_TOKEN_LEN..)) {
            (Some(tcode), Some(code)) => (tcode, code),
            _ => return Err(invalid("too short")),
        };

        let type_code = decode_short(tcode, self.salt)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| invalid("malformed type code"))?;
        let payload = decode_short(code, self.salt)
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| invalid("malformed payload"))?;

        let parts = LongIdParts::reconstruct_for_decode(type_code, payload).ok_or_else(|| invalid("field out of range"))?;
        Ok(parts.to_long_id())
    }

    /// Decode a token into a long id, returns `None` if the token is malformed.
    pub fn decode_token(&self, token: &str) -> Option<u64> {
        self.try_decode_token(token)
            .map_err(|err| log::debug!("{err}"))
            .ok()
    }

    /// Syntactic check only: anything that is not a number of at least `10^16` is a short form.
    pub fn is_short_form(&self, id: &str) -> bool {
        match id.parse::<i64>() {
            Ok(num) => num < LONG_FORM_MIN,
            Err(_) => true,
        }
    }

    /// Long ids are returned unchanged, everything else is decoded as a token, including numbers
    /// below `10^16`.
    pub fn to_long_form(&self, id: &str) -> Option<String> {
        if self.is_short_form(id) {
            self.decode_token(id).map(|num| num.to_string())
        } else {
            Some(id.to_owned())
        }
    }

    /// Numbers are encoded, returning an empty string if they are not encodable. Any other input is
    /// considered to be a token already and returned unchanged.
    pub fn to_short_form(&self, id: &str) -> String {
        if id.parse::<i64>().is_ok() {
            self.encode_token(id)
        } else {
            id.to_owned()
        }
    }
}

impl IdEncoder for ShortIdEncoder {
    fn obfuscate(&self, id: u64) -> Result<String, IdEncoderError> {
        self.try_encode_token(&id.to_string())
    }

    fn deobfuscate(&self, id: &str) -> Result<u64, IdEncoderError> {
        self.try_decode_token(id)
    }
}
