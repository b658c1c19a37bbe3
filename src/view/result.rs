use crate::form::{AppState, FormController};

pub const CURRENCY: &str = "TND";
pub const NOT_FOUND: &str = "Price data not found.";

/// Shows the estimated price; stateless apart from the price it was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultView {
    price: Option<f64>,
}

impl ResultView {
    pub fn new(price: Option<f64>) -> Self {
        Self { price }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.price)
    }

    pub fn price_line(&self) -> String {
        match self.price {
            Some(price) => format!("{} {}", format_price(price), CURRENCY),
            None => NOT_FOUND.to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!("Estimated Price\n{}\n\n[back] Go Back", self.price_line())
    }

    pub fn go_back(&self, controller: &FormController) -> AppState {
        controller.reset()
    }
}

/// en-US number grouping with up to three fraction digits.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let thousandths = (value.abs() * 1000.0).round();
    let whole = (thousandths / 1000.0).trunc();
    let frac = (thousandths - whole * 1000.0) as u32;

    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value < 0.0 && thousandths > 0.0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        let frac = format!("{:03}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
