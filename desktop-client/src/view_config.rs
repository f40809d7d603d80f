use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            width: 400.0,
            height: 600.0,
            resizable: false,
        }
    }
}

/// Human-readable strings rendered by the views. The turn and win
/// templates carry `{player}` / `{winner}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub title: String,
    pub reset_button: String,
    pub draw_message: String,
    pub win_message_template: String,
    pub turn_message_template: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            reset_button: "New Game".to_string(),
            draw_message: "It's a draw!".to_string(),
            win_message_template: "Player {winner} wins!".to_string(),
            turn_message_template: "Player {player}'s turn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub title_font_size: f32,
    pub status_font_size: f32,
    pub cell_font_size: f32,
    pub reset_font_size: f32,
    pub cell_size: f32,
    pub cell_spacing: f32,
    pub title_padding: f32,
    pub status_padding: f32,
    pub board_padding: f32,
    pub reset_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_font_size: 32.0,
            status_font_size: 20.0,
            cell_font_size: 32.0,
            reset_font_size: 16.0,
            cell_size: 100.0,
            cell_spacing: 5.0,
            title_padding: 20.0,
            status_padding: 10.0,
            board_padding: 20.0,
            reset_padding: 20.0,
        }
    }
}

/// Color hooks for theming, as `#RRGGBB` strings; unset fields keep the
/// toolkit's theme colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub title_text: Option<String>,
    pub status_text: Option<String>,
    pub board_background: Option<String>,
    pub cell_text: Option<String>,
    pub cell_fg: Option<String>,
    pub cell_hover: Option<String>,
    pub reset_fg: Option<String>,
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &Option<String>); 7] {
        [
            ("title_text", &self.title_text),
            ("status_text", &self.status_text),
            ("board_background", &self.board_background),
            ("cell_text", &self.cell_text),
            ("cell_fg", &self.cell_fg),
            ("cell_hover", &self.cell_hover),
            ("reset_fg", &self.reset_fg),
        ]
    }
}

/// Parses an `#RRGGBB` string into its channel values.
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((red, green, blue))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub window: WindowConfig,
    pub text: TextConfig,
    pub layout: LayoutConfig,
    pub colors: ColorConfig,
}

impl Validate for ViewConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window.title.is_empty() {
            return Err("window title must not be empty".to_string());
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err("window size must be positive".to_string());
        }
        if !self.text.turn_message_template.contains("{player}") {
            return Err("turn message template must contain {player}".to_string());
        }
        if !self.text.win_message_template.contains("{winner}") {
            return Err("win message template must contain {winner}".to_string());
        }
        if self.layout.cell_size <= 0.0 {
            return Err("cell size must be positive".to_string());
        }
        if self.layout.cell_spacing < 0.0 {
            return Err("cell spacing must not be negative".to_string());
        }
        for (name, value) in self.colors.entries() {
            if let Some(value) = value
                && parse_color(value).is_none()
            {
                return Err(format!("{} must be a #RRGGBB color, got '{}'", name, value));
            }
        }
        Ok(())
    }
}

type ViewConfigManager = ConfigManager<FileContentConfigProvider, ViewConfig, YamlConfigSerializer>;

/// Loads the view configuration from the given YAML file; without a path
/// (or when the file does not exist) the defaults apply.
pub fn load_view_config(path: Option<&str>) -> Result<ViewConfig, String> {
    match path {
        Some(path) => ViewConfigManager::from_yaml_file(path).get_config(),
        None => Ok(ViewConfig::default()),
    }
}
