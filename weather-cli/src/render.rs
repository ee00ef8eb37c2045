use std::fmt::{self, Write};

use weather_search_core::{Phase, Snapshot};

/// Render the widget as plain text, one element per line.
pub fn render(snapshot: &Snapshot) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if !snapshot.suggestions.is_empty() {
        writeln!(out, "Suggestions: {}", snapshot.suggestions.join(", "))?;
    }

    if snapshot.loading {
        writeln!(out, "Loading...")?;
    }

    if let Some(error) = &snapshot.error {
        writeln!(out, "{error}")?;
    }

    if let Some(weather) = &snapshot.weather {
        writeln!(out, "== {} ==", weather.city)?;
        writeln!(out, "{} ({})", weather.condition.description, weather.condition.icon_url())?;
        writeln!(out, "Temp: {}°C", weather.temperature_c)?;
        writeln!(out, "Humidity: {}%", weather.humidity_pct)?;
        writeln!(out, "Wind: {} m/s", weather.wind_speed_mps)?;

        if let Some(timing) = &snapshot.timing {
            let phase = snapshot.theme.phase;
            writeln!(out, "Current Time: {}", timing.local_time)?;
            if phase != Phase::Unknown {
                writeln!(out, "{} It's {} Time", phase.glyph(), phase.label())?;
            }
            writeln!(out, "🌅 Sunrise: {}", timing.sunrise_time)?;
            writeln!(out, "🌇 Sunset: {}", timing.sunset_time)?;
        }
    }

    // The palette follows the last known day/night phase, even after an error.
    if snapshot.theme.phase != Phase::Unknown {
        let theme = &snapshot.theme;
        write!(
            out,
            "Theme: {} (background {}, text {}, icons {}",
            theme.phase.label(),
            theme.background,
            theme.text,
            theme.icon_tint,
        )?;
        match theme.icon_class {
            Some(class) => writeln!(out, ", {class})")?,
            None => writeln!(out, ")")?,
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use weather_search_core::{
        Condition, Event, FetchOutcome, WeatherRecord, WidgetState, default_cities, state::Effect,
    };

    fn state() -> WidgetState {
        WidgetState::new(default_cities(), FixedOffset::east_opt(0).unwrap())
    }

    fn record() -> WeatherRecord {
        WeatherRecord {
            city: "London".into(),
            condition: Condition {
                id: Some(500),
                main: Some("Rain".into()),
                description: "light rain".into(),
                icon: "10d".into(),
            },
            temperature_c: 11.4,
            humidity_pct: 81,
            wind_speed_mps: 6.2,
            sunrise: 900,
            sunset: 1100,
            observed_at: 1000,
        }
    }

    #[test]
    fn renders_weather_panel() {
        let mut s = state();
        let Some(Effect::Fetch { request, .. }) = s.reduce(Event::SuggestionPicked("London".into()))
        else {
            panic!("expected fetch");
        };
        s.reduce(Event::FetchCompleted { request, result: Ok(FetchOutcome::Found(record())) });

        let text = render(&s.snapshot()).unwrap();

        assert!(text.contains("== London =="));
        assert!(text.contains("light rain (https://openweathermap.org/img/wn/10d.png)"));
        assert!(text.contains("Temp: 11.4°C"));
        assert!(text.contains("Humidity: 81%"));
        assert!(text.contains("Wind: 6.2 m/s"));
        assert!(text.contains("Current Time: 12:16:40 AM"));
        assert!(text.contains("🌞 It's Day Time"));
        assert!(text.contains("🌅 Sunrise: 12:15:00 AM"));
        assert!(!text.contains("Loading"));
        assert!(text.contains("Theme: Day (background #87CEFA, text #000, icons #00008B)"));
    }

    #[test]
    fn error_keeps_last_theme_line() {
        let mut s = state();
        let Some(Effect::Fetch { request, .. }) = s.reduce(Event::SuggestionPicked("London".into()))
        else {
            panic!("expected fetch");
        };
        let mut night = record();
        night.observed_at = 2000;
        s.reduce(Event::FetchCompleted { request, result: Ok(FetchOutcome::Found(night)) });

        s.reduce(Event::QueryChanged("Atlantis".into()));
        let Some(Effect::Fetch { request, .. }) = s.reduce(Event::Submit) else {
            panic!("expected fetch");
        };
        s.reduce(Event::FetchCompleted {
            request,
            result: Ok(FetchOutcome::NotFound { code: "404".into(), message: None }),
        });

        let text = render(&s.snapshot()).unwrap();

        assert!(text.contains("City not found. Please try again."));
        assert!(!text.contains("== London =="));
        assert!(text.contains("Theme: Night (background #2C3E50, text #fff, icons #fff, night-icon)"));
    }

    #[test]
    fn renders_loading_and_suggestions() {
        let mut s = state();
        s.reduce(Event::QueryChanged("Lon".into()));
        s.reduce(Event::Submit);

        let text = render(&s.snapshot()).unwrap();

        assert!(text.contains("Suggestions: London"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render(&state().snapshot()).unwrap(), "");
    }
}
