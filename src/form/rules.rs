use crate::form::models::{Field, PropertyType};

/// Inclusive integer bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRange {
    pub min: i64,
    pub max: i64,
}

impl ValidationRange {
    const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Bound for a numeric field; `None` for state and city.
    pub fn lookup(property_type: PropertyType, field: Field) -> Option<Self> {
        let range = match (property_type, field) {
            (PropertyType::Apartment, Field::Bedrooms) => Self::new(1, 4),
            (PropertyType::Apartment, Field::Bathrooms) => Self::new(1, 2),
            (PropertyType::Apartment, Field::Area) => Self::new(30, 200),
            (PropertyType::Villa, Field::Bedrooms) => Self::new(1, 7),
            (PropertyType::Villa, Field::Bathrooms) => Self::new(1, 5),
            (PropertyType::Villa, Field::Area) => Self::new(100, 1000),
            (_, Field::State | Field::City) => return None,
        };
        Some(range)
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Anything after the digits is ignored, so "3.7" is 3 and "12 m" is 12.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Whether `raw` may be stored into `field` under `property_type`.
pub fn accepts(property_type: Option<PropertyType>, field: Field, raw: &str) -> bool {
    if !field.is_numeric() {
        return true;
    }

    let Some(range) = property_type.and_then(|t| ValidationRange::lookup(t, field)) else {
        return false;
    };

    parse_leading_int(raw).is_some_and(|v| range.contains(v))
}

pub fn generate_label(property_type: Option<PropertyType>, field: Field) -> String {
    let Some(range) = property_type.and_then(|t| ValidationRange::lookup(t, field)) else {
        return String::new();
    };

    match field {
        Field::Bedrooms => format!("Bedrooms (Min: {}, Max: {})", range.min, range.max),
        Field::Bathrooms => format!("Bathrooms (Min: {}, Max: {})", range.min, range.max),
        Field::Area => format!(
            "Area (Min: {} sq m, Max: {} sq m)",
            range.min, range.max
        ),
        Field::State | Field::City => String::new(),
    }
}

/// Outcome of leaving the area input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurCheck {
    /// No property type yet; the error text is left untouched.
    Skip,
    Clear,
    Error(String),
}

pub fn check_area_on_blur(property_type: Option<PropertyType>, raw: &str) -> BlurCheck {
    let Some(property_type) = property_type else {
        return BlurCheck::Skip;
    };

    let out_of_range = match (
        parse_leading_int(raw),
        ValidationRange::lookup(property_type, Field::Area),
    ) {
        (Some(value), Some(range)) => !range.contains(value),
        // unparseable input clears the message
        _ => false,
    };

    if !out_of_range {
        return BlurCheck::Clear;
    }

    let message = match property_type {
        PropertyType::Apartment => "Area must be between 30 and 200 sq m for apartments.",
        PropertyType::Villa => "Area must be between 100 and 1000 sq m for houses.",
    };
    BlurCheck::Error(message.to_string())
}
