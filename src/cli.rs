//! Line commands accepted by the terminal front-end.

use crate::form::{Field, PropertyType};

pub const HELP: &str = "\
Commands:
  type <apartment|villa|house>   select the property type
  bedrooms <n>                   number of bedrooms
  bathrooms <n>                  number of bathrooms
  area <sq m>                    living area
  state <name>                   select a state (clears the city)
  city <name>                    select a city
  states | cities                list choices
  submit                         request a price estimate
  back                           leave the result and start over
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetType(PropertyType),
    Input { field: Field, raw: String },
    State(String),
    City(String),
    ListStates,
    ListCities,
    Submit,
    Back,
    Show,
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("'{}' needs a {}", word, what))
            } else {
                Ok(rest.to_string())
            }
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "type" => Command::SetType(needs_arg("property type")?.parse()?),
            "bedrooms" => Command::Input {
                field: Field::Bedrooms,
                raw: needs_arg("value")?,
            },
            "bathrooms" => Command::Input {
                field: Field::Bathrooms,
                raw: needs_arg("value")?,
            },
            "area" => Command::Input {
                field: Field::Area,
                raw: needs_arg("value")?,
            },
            "state" => Command::State(needs_arg("state name")?),
            "city" => Command::City(needs_arg("city name")?),
            "states" => Command::ListStates,
            "cities" => Command::ListCities,
            "submit" => Command::Submit,
            "back" => Command::Back,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(Some(cmd))
    }
}
