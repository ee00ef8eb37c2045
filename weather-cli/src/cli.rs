use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, Offset};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tracing::debug;
use weather_search_core::{
    API_KEY_ENV, Config, Event, Session, WidgetState, filter_suggestions, provider_from_config,
};

use crate::{completer::CityCompleter, render::render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-search", version, about = "Search current weather by city")]
pub struct Cli {
    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        city: String,

        /// Print the widget snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List autocomplete suggestions for a partial city name.
    Suggest { query: String },

    /// Prompt for cities with autocomplete until an empty line or Esc.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(config),
            Command::Show { city, json } => show(&config, &city, json).await,
            Command::Suggest { query } => {
                for city in filter_suggestions(&query, &config.cities) {
                    println!("{city}");
                }
                Ok(())
            }
            Command::Interactive => interactive(&config).await,
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(key.trim().to_string());
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn new_session(config: &Config) -> anyhow::Result<Session> {
    let provider = provider_from_config(config, std::env::var(API_KEY_ENV).ok())?;
    let offset = Local::now().offset().fix();
    let state = WidgetState::new(config.cities.clone(), offset);

    Ok(Session::new(Arc::new(provider), state))
}

async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<()> {
    let mut session = new_session(config)?;
    let snapshot = session.search(city).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render(&snapshot)?);
    }

    Ok(())
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    let mut session = new_session(config)?;
    let completer = CityCompleter::new(config.cities.clone());

    loop {
        let input = match Text::new("City:")
            .with_autocomplete(completer.clone())
            .with_help_message("Tab to complete, Enter to search, Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        if input.is_empty() {
            break;
        }

        session.dispatch(Event::QueryChanged(input.clone()));
        if session.state().suggestions().contains(&input) {
            debug!(%input, "picked suggestion");
            session.dispatch(Event::SuggestionPicked(input));
        } else {
            session.dispatch(Event::Submit);
        }

        if session.state().is_loading() {
            println!("Loading...");
        }
        session.run_until_idle().await;

        print!("{}", render(&session.state().snapshot())?);
    }

    Ok(())
}
