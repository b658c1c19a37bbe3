use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::form::models::{AppState, Field, PropertyType, View};
use crate::form::reducer::Event;
use crate::form::store::{Store, SubscriptionId};
use crate::form::FormError;
use crate::locations::LocationIndex;
use crate::predictor::{PredictionRequest, PredictionResult, PricePredictor};

pub const MISSING_FIELDS: &str = "All fields are required.";

pub struct FormController {
    store: Store,
    predictor: Arc<dyn PricePredictor>,
    in_flight: AtomicBool,
}

impl FormController {
    pub fn new(locations: Arc<LocationIndex>, predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            store: Store::new(locations),
            predictor,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn states(&self) -> Vec<String> {
        self.store.locations().states()
    }

    pub fn set_property_type(&self, property_type: PropertyType) -> AppState {
        self.store.dispatch(Event::PropertyTypeSelected(property_type))
    }

    pub fn set_field(&self, field: Field, raw: impl Into<String>) -> AppState {
        self.store.dispatch(Event::FieldInput {
            field,
            raw: raw.into(),
        })
    }

    pub fn set_state(&self, state: impl Into<String>) -> AppState {
        self.store.dispatch(Event::StateSelected(state.into()))
    }

    pub fn set_city(&self, city: impl Into<String>) -> AppState {
        self.store.dispatch(Event::CitySelected(city.into()))
    }

    pub fn on_area_blur(&self, raw: impl Into<String>) -> AppState {
        self.store.dispatch(Event::AreaBlurred(raw.into()))
    }

    /// Sends the form to the prediction service.
    ///
    /// Failures of the request itself are logged and returned but never shown
    /// in the form; the user can simply submit again.
    pub async fn submit(&self) -> Result<PredictionResult, FormError> {
        let current = self.store.snapshot();
        if current.view != View::Form {
            return Err(FormError::NotOnForm);
        }

        let Some(request) = PredictionRequest::from_form(&current.form) else {
            self.store.dispatch(Event::ValidationFailed(MISSING_FIELDS.to_string()));
            return Err(FormError::Validation(MISSING_FIELDS.to_string()));
        };

        let Some(_in_flight) = InFlight::claim(&self.in_flight) else {
            warn!("Submit ignored, a prediction request is already pending");
            return Err(FormError::InFlight);
        };

        self.store.dispatch(Event::SubmitAccepted);

        info!(
            property_type = %request.property_type,
            state = %request.state,
            city = %request.city,
            "Submitting prediction request"
        );

        match self.predictor.predict(&request).await {
            Ok(result) => {
                info!(price = ?result.price, "Prediction received");
                self.store.dispatch(Event::PredictionReceived(result));
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Error predicting price");
                Err(FormError::Request(e))
            }
        }
    }

    pub fn reset(&self) -> AppState {
        self.store.dispatch(Event::GoBack)
    }
}

/// Held for the duration of one request; released on drop, so an abandoned
/// submit frees the slot too.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
