use serde::{Deserialize, Serialize};

use crate::form::models::FormState;

/// Body of `POST /api/predict`. Values are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub n_bedrooms: String,
    pub n_bathrooms: String,
    pub area: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "Type")]
    pub property_type: String,
}

impl PredictionRequest {
    /// `None` until every field, property type included, is filled in.
    pub fn from_form(form: &FormState) -> Option<Self> {
        if !form.is_complete() {
            return None;
        }

        Some(Self {
            n_bedrooms: form.bedrooms.clone(),
            n_bathrooms: form.bathrooms.clone(),
            area: form.area.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            property_type: form.property_type?.as_str().to_string(),
        })
    }
}

/// Only `price` is read; the service echoes other keys that are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub price: Option<f64>,
}
