use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "House",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    /// Accepts the wire value or the display name ("house" selects a villa).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "villa" | "house" => Ok(PropertyType::Villa),
            other => Err(format!("unknown property type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bedrooms,
    Bathrooms,
    Area,
    State,
    City,
}

impl Field {
    /// Key used in the prediction request body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Bedrooms => "n_bedrooms",
            Field::Bathrooms => "n_bathrooms",
            Field::Area => "area",
            Field::State => "state",
            Field::City => "city",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Bedrooms | Field::Bathrooms | Field::Area)
    }
}

/// Values as the user typed them. Empty string means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub state: String,
    pub city: String,
    pub property_type: Option<PropertyType>,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Bedrooms => &self.bedrooms,
            Field::Bathrooms => &self.bathrooms,
            Field::Area => &self.area,
            Field::State => &self.state,
            Field::City => &self.city,
        }
    }

    pub fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::Area => &mut self.area,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.property_type.is_some()
            && [
                Field::Bedrooms,
                Field::Bathrooms,
                Field::Area,
                Field::State,
                Field::City,
            ]
            .iter()
            .all(|f| !self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Result,
}

/// Everything a renderer needs: the form plus derived UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub form: FormState,
    pub cities: Vec<String>,
    pub error: Option<String>,
    pub price: Option<f64>,
    pub view: View,
}
