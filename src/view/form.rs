use std::fmt::Write;

use crate::form::{generate_label, AppState, Field};

const TITLE: &str = "Tunisian Real Estate Pricer";

pub fn render_form(state: &AppState) -> String {
    let form = &state.form;
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "Enter property details below");
    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {}", error);
    }
    out.push('\n');

    let type_value = form
        .property_type
        .map(|t| t.display_name())
        .unwrap_or("<select property type>");
    let _ = writeln!(out, "Property Type: {}", type_value);

    // the remaining inputs only appear once a type is chosen
    if form.property_type.is_some() {
        for field in [Field::Bedrooms, Field::Bathrooms, Field::Area] {
            let _ = writeln!(
                out,
                "{}: {}",
                generate_label(form.property_type, field),
                placeholder(form.get(field))
            );
        }
        let _ = writeln!(out, "State: {}", placeholder(&form.state));
        let _ = writeln!(out, "City: {}", placeholder(&form.city));
    }

    out.push_str("\n[submit] Submit");
    out
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
