use std::sync::Arc;

use dariprice::cli::{Command, HELP};
use dariprice::config::{Config, LogFormat};
use dariprice::form::{Field, FormController, FormError, View};
use dariprice::locations::LocationIndex;
use dariprice::predictor::HttpPredictor;
use dariprice::view::{self, ResultView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;
    init_tracing(cfg.log_format);

    info!(public_base_url = %cfg.public_base_url, "Starting price estimator");

    let locations = Arc::new(LocationIndex::load(&cfg.locations_path).await?);
    let predictor = Arc::new(HttpPredictor::new(cfg.public_base_url.as_str())?);
    let controller = FormController::new(locations, predictor);

    controller.subscribe(|state| println!("\n{}", view::render(state)));

    println!("{}", view::render(&controller.snapshot()));
    println!("\n{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match cmd {
            Command::SetType(property_type) => {
                controller.set_property_type(property_type);
            }
            Command::Input { field, raw } => {
                controller.set_field(field, raw.as_str());
                if field == Field::Area {
                    controller.on_area_blur(raw);
                }
            }
            Command::State(state) => {
                controller.set_state(state);
            }
            Command::City(city) => {
                controller.set_city(city);
            }
            Command::ListStates => println!("{}", controller.states().join("\n")),
            Command::ListCities => {
                let cities = controller.snapshot().cities;
                if cities.is_empty() {
                    println!("Select a state first");
                } else {
                    println!("{}", cities.join("\n"));
                }
            }
            Command::Submit => match controller.submit().await {
                Ok(_) => {}
                // shown through the form's error line
                Err(FormError::Validation(_)) => {}
                Err(e) => debug!(error = %e, "Submit did not complete"),
            },
            Command::Back => {
                let state = controller.snapshot();
                if state.view == View::Result {
                    ResultView::from_state(&state).go_back(&controller);
                } else {
                    println!("Nothing to go back from");
                }
            }
            Command::Show => println!("\n{}", view::render(&controller.snapshot())),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}
