mod reducer;
mod service;
mod store;
pub mod models;
pub mod rules;

pub use models::{AppState, Field, FormState, PropertyType, View};
pub use reducer::{reduce, Event};
pub use rules::{generate_label, ValidationRange};
pub use service::{FormController, MISSING_FIELDS};
pub use store::{Store, SubscriptionId};

use crate::predictor::PredictError;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),

    #[error("a prediction request is already pending")]
    InFlight,

    #[error("the form is not being shown")]
    NotOnForm,

    #[error(transparent)]
    Request(#[from] PredictError),
}
