use std::fmt;

pub const FRONTEND_ENV_VAR: &str = "TICTACTOE_UI";

const DEFAULT_FRONTEND: &str = "gui";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Cli,
    Gui,
    Headless,
}

impl Frontend {
    /// Every selectable frontend, sorted by name for listings.
    pub const ALL: [Frontend; 3] = [Frontend::Cli, Frontend::Gui, Frontend::Headless];

    pub fn name(self) -> &'static str {
        match self {
            Frontend::Cli => "cli",
            Frontend::Gui => "gui",
            Frontend::Headless => "headless",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Frontend::Cli => "Simple console interface",
            Frontend::Gui => "egui desktop GUI",
            Frontend::Headless => "GUI rendered through the headless view shim",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "cli" => Some(Frontend::Cli),
            "gui" => Some(Frontend::Gui),
            "headless" => Some(Frontend::Headless),
            _ => None,
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the frontend from the `--ui` flag, falling back to the
/// `TICTACTOE_UI` environment variable, then to the GUI. The choice is
/// trimmed and lowercased before matching; blank choices count as unset.
pub fn resolve_frontend(
    cli_choice: Option<&str>,
    env_choice: Option<&str>,
) -> Result<Frontend, String> {
    let choice = cli_choice
        .filter(|choice| !choice.trim().is_empty())
        .or(env_choice.filter(|choice| !choice.trim().is_empty()))
        .unwrap_or(DEFAULT_FRONTEND);
    let normalized = choice.trim().to_lowercase();
    Frontend::from_name(&normalized).ok_or_else(|| {
        let available: Vec<&str> = Frontend::ALL.iter().map(|f| f.name()).collect();
        format!(
            "Unknown frontend '{}'. Choose one of: {}.",
            choice,
            available.join(", ")
        )
    })
}

pub fn list_frontends() -> String {
    Frontend::ALL
        .iter()
        .map(|frontend| format!("{:<9} - {}", frontend.name(), frontend.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_gui() {
        assert_eq!(resolve_frontend(None, None), Ok(Frontend::Gui));
    }

    #[test]
    fn test_flag_overrides_environment() {
        assert_eq!(resolve_frontend(Some("cli"), Some("headless")), Ok(Frontend::Cli));
    }

    #[test]
    fn test_environment_used_when_no_flag() {
        assert_eq!(resolve_frontend(None, Some("headless")), Ok(Frontend::Headless));
    }

    #[test]
    fn test_choice_is_normalized() {
        assert_eq!(resolve_frontend(Some("  GUI "), None), Ok(Frontend::Gui));
        assert_eq!(resolve_frontend(None, Some("Cli")), Ok(Frontend::Cli));
    }

    #[test]
    fn test_empty_environment_falls_back_to_default() {
        assert_eq!(resolve_frontend(None, Some("")), Ok(Frontend::Gui));
        assert_eq!(resolve_frontend(None, Some("   ")), Ok(Frontend::Gui));
    }

    #[test]
    fn test_blank_flag_falls_through_to_environment() {
        assert_eq!(resolve_frontend(Some(""), Some("cli")), Ok(Frontend::Cli));
    }

    #[test]
    fn test_unknown_choice_lists_alternatives() {
        let error = resolve_frontend(Some("web"), None).unwrap_err();
        assert_eq!(error, "Unknown frontend 'web'. Choose one of: cli, gui, headless.");
    }

    #[test]
    fn test_listing_names_every_frontend() {
        let listing = list_frontends();
        for frontend in Frontend::ALL {
            assert!(listing.contains(frontend.name()));
            assert!(listing.contains(frontend.description()));
        }
    }
}
