use crate::id_encoders::ShortIdEncoder;

/// Check if the (trimmed) id is a strictly positive number.
pub fn is_valid_numeric_id(id: &str) -> bool {
    matches!(id.trim().parse::<i64>(), Ok(num) if num > 0)
}

/// Outcome of normalizing an optional id parameter.
///
/// `provided` and `valid` are independent: an absent value is valid, a present but malformed
/// value is not. `id` is empty unless both are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedId {
    pub id: String,
    pub provided: bool,
    pub valid: bool,
}

impl NormalizedId {
    fn absent() -> Self {
        Self {
            id: String::new(),
            provided: false,
            valid: true,
        }
    }

    fn invalid() -> Self {
        Self {
            id: String::new(),
            provided: true,
            valid: false,
        }
    }

    fn valid(id: String) -> Self {
        Self {
            id,
            provided: true,
            valid: true,
        }
    }

    /// Get the id, if it was provided and valid.
    pub fn into_option(self) -> Option<String> {
        if self.provided && self.valid {
            Some(self.id)
        } else {
            None
        }
    }
}

/// Outcome of normalizing a required id parameter, a missing value is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredId {
    pub id: String,
    pub valid: bool,
}

impl From<NormalizedId> for RequiredId {
    fn from(value: NormalizedId) -> Self {
        if value.provided {
            Self {
                id: value.id,
                valid: value.valid,
            }
        } else {
            Self {
                id: String::new(),
                valid: false,
            }
        }
    }
}

fn is_absent(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("null") || raw.eq_ignore_ascii_case("undefined")
}

impl ShortIdEncoder {
    /// Normalize an optional id accepting both the long and the short form.
    /// Empty input, `null` and `undefined` are treated as not provided.
    pub fn normalize_optional(&self, raw: &str) -> NormalizedId {
        let raw = raw.trim();
        if is_absent(raw) {
            return NormalizedId::absent();
        }

        match self.to_long_form(raw) {
            Some(id) if is_valid_numeric_id(&id) => NormalizedId::valid(id),
            _ => {
                log::debug!("Rejected id: {raw:?}");
                NormalizedId::invalid()
            }
        }
    }

    /// Normalize a required id accepting both the long and the short form.
    pub fn normalize_required(&self, raw: &str) -> RequiredId {
        self.normalize_optional(raw).into()
    }
}
