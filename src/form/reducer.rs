//! Pure state transitions for the estimator form.
//!
//! Every user action and every submission milestone is an [`Event`];
//! [`reduce`] maps the current [`AppState`] and an event to the next state
//! without side effects. Location data is passed in rather than captured so
//! the function stays pure.

use tracing::debug;

use crate::form::models::{AppState, Field, PropertyType, View};
use crate::form::rules::{self, BlurCheck};
use crate::locations::LocationIndex;
use crate::predictor::PredictionResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PropertyTypeSelected(PropertyType),
    FieldInput { field: Field, raw: String },
    StateSelected(String),
    CitySelected(String),
    AreaBlurred(String),
    ValidationFailed(String),
    SubmitAccepted,
    PredictionReceived(PredictionResult),
    GoBack,
}

impl Event {
    /// Events that come from form inputs; ignored while the result is shown.
    fn is_form_input(&self) -> bool {
        matches!(
            self,
            Event::PropertyTypeSelected(_)
                | Event::FieldInput { .. }
                | Event::StateSelected(_)
                | Event::CitySelected(_)
                | Event::AreaBlurred(_)
        )
    }
}

pub fn reduce(state: &AppState, event: &Event, locations: &LocationIndex) -> AppState {
    if state.view == View::Result && event.is_form_input() {
        return state.clone();
    }

    let mut next = state.clone();

    match event {
        // existing values are not re-checked against the new type's bounds
        Event::PropertyTypeSelected(property_type) => {
            next.form.property_type = Some(*property_type);
        }
        Event::FieldInput { field, raw } => match field {
            Field::State => select_state(&mut next, raw, locations),
            Field::City => next.form.city = raw.clone(),
            numeric => {
                if rules::accepts(next.form.property_type, *numeric, raw) {
                    *next.form.slot_mut(*numeric) = raw.clone();
                } else {
                    debug!(field = numeric.wire_name(), raw = %raw, "Input outside range ignored");
                }
            }
        },
        Event::StateSelected(selected) => select_state(&mut next, selected, locations),
        Event::CitySelected(city) => next.form.city = city.clone(),
        Event::AreaBlurred(raw) => match rules::check_area_on_blur(next.form.property_type, raw) {
            BlurCheck::Skip => {}
            BlurCheck::Clear => next.error = None,
            BlurCheck::Error(message) => next.error = Some(message),
        },
        Event::ValidationFailed(message) => next.error = Some(message.clone()),
        Event::SubmitAccepted => next.error = None,
        Event::PredictionReceived(result) => {
            next.price = result.price;
            next.view = View::Result;
        }
        Event::GoBack => next = AppState::default(),
    }

    next
}

fn select_state(next: &mut AppState, selected: &str, locations: &LocationIndex) {
    next.form.state = selected.to_string();
    next.form.city.clear();
    next.cities = locations.cities(selected);
}
