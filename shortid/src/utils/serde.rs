/// Expose a long id as its short token in serialized payloads.
///
/// Serialization requires an encodable long id. Deserialization accepts either form and yields the
/// long form, it fails on absent or malformed ids. The encoder always uses the default salt.
pub mod serde_short_id {
    use crate::id_encoders::ShortIdEncoder;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    const ENCODER: ShortIdEncoder = ShortIdEncoder::DEFAULT;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let token = ENCODER.try_encode_token(value).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&token)
    }

    pub fn serialize_opt<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(value) = value {
            serialize(value, serializer)
        } else {
            serializer.serialize_none()
        }
    }

    fn normalize<E: de::Error>(raw: &str) -> Result<String, E> {
        let normalized = ENCODER.normalize_required(raw);
        if normalized.valid {
            Ok(normalized.id)
        } else {
            Err(E::custom(format!("invalid id: {raw:?}")))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        normalize(&raw)
    }

    /// `null` is `None`, any other value must be a valid id.
    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => normalize(&raw).map(Some),
            None => Ok(None),
        }
    }
}
