mod form;
pub mod result;

pub use form::render_form;
pub use result::{format_price, ResultView};

use crate::form::{AppState, View};

/// Renders whichever view the state currently shows.
pub fn render(state: &AppState) -> String {
    match state.view {
        View::Form => render_form(state),
        View::Result => ResultView::from_state(state).render(),
    }
}
