//! Colours and icon treatment derived from day/night classification.

use serde::Serialize;

use crate::timing::DerivedTiming;

/// CSS class that inverts illustrative icons at night.
pub const NIGHT_ICON_CLASS: &str = "night-icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Day,
    Night,
    /// No successful fetch yet.
    Unknown,
}

impl Phase {
    pub fn from_timing(timing: Option<&DerivedTiming>) -> Self {
        match timing {
            Some(t) if t.is_daytime => Phase::Day,
            Some(_) => Phase::Night,
            None => Phase::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Day => "Day",
            Phase::Night => "Night",
            Phase::Unknown => "",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Phase::Day => "🌞",
            Phase::Night | Phase::Unknown => "🌙",
        }
    }
}

/// Presentation palette. The provider's condition icon is never recoloured;
/// `icon_class` applies to illustrative icons only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub phase: Phase,
    pub background: &'static str,
    pub text: &'static str,
    pub icon_tint: &'static str,
    pub input_background: &'static str,
    pub icon_class: Option<&'static str>,
}

impl Theme {
    pub fn for_timing(timing: Option<&DerivedTiming>) -> Self {
        let phase = Phase::from_timing(timing);

        // Anything that isn't day gets the night palette, but only a known
        // night inverts the icons.
        match phase {
            Phase::Day => Theme {
                phase,
                background: "#87CEFA",
                text: "#000",
                icon_tint: "#00008B",
                input_background: "#fff",
                icon_class: None,
            },
            Phase::Night | Phase::Unknown => Theme {
                phase,
                background: "#2C3E50",
                text: "#fff",
                icon_tint: "#fff",
                input_background: "#333",
                icon_class: (phase == Phase::Night).then_some(NIGHT_ICON_CLASS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(is_daytime: bool) -> DerivedTiming {
        DerivedTiming {
            is_daytime,
            local_time: "12:00:00 PM".into(),
            sunrise_time: "6:00:00 AM".into(),
            sunset_time: "6:00:00 PM".into(),
        }
    }

    #[test]
    fn day_palette() {
        let theme = Theme::for_timing(Some(&timing(true)));

        assert_eq!(theme.phase, Phase::Day);
        assert_eq!(theme.background, "#87CEFA");
        assert_eq!(theme.text, "#000");
        assert_eq!(theme.icon_tint, "#00008B");
        assert_eq!(theme.icon_class, None);
    }

    #[test]
    fn night_palette_inverts_icons() {
        let theme = Theme::for_timing(Some(&timing(false)));

        assert_eq!(theme.phase, Phase::Night);
        assert_eq!(theme.background, "#2C3E50");
        assert_eq!(theme.text, "#fff");
        assert_eq!(theme.input_background, "#333");
        assert_eq!(theme.icon_class, Some(NIGHT_ICON_CLASS));
    }

    #[test]
    fn unknown_uses_night_colours_without_inversion() {
        let theme = Theme::for_timing(None);

        assert_eq!(theme.phase, Phase::Unknown);
        assert_eq!(theme.background, "#2C3E50");
        assert_eq!(theme.icon_class, None);
        assert_eq!(theme.phase.label(), "");
    }
}
