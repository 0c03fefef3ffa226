// Chunk: docs/chunks/menu_config - Layered TOML configuration
//!
//! Configuration loading and resolution.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! the TOML config file, and command-line flags. Each layer is a
//! [`RawConfig`] of optional strings; [`RawConfig::merge`] stacks them and
//! [`Config::resolve`] turns the result into typed settings.
//!
//! ```toml
//! prompt = "> "
//! layout = "vertical"
//!
//! [window]
//! width = "50%"
//! x = "middle"
//!
//! [style.completion_highlighted]
//! background = "#268bd2"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dispatcher::MenuOptions;
use crate::error::ConfigError;
use crate::geometry::{Dimension, Placement, WindowGeometry};
use crate::layout::{LayoutSettings, Orientation, DEFAULT_PROMPT_WIDTH};
use crate::style::{parse_size, BoxStyle, Padding, Rgba, Role, Sides, Styles};

/// Directory name under the user config directory.
pub const APP_NAME: &str = "lite-menu";

/// File name of the config file.
pub const CONFIG_FILENAME: &str = "config.toml";

// =============================================================================
// Raw layers
// =============================================================================

/// One configuration layer, as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub prompt: Option<String>,
    pub layout: Option<String>,
    pub prompt_width: Option<usize>,
    pub first_selected: Option<bool>,
    pub free_text: Option<bool>,
    pub multiple_select: Option<bool>,
    pub separator: Option<String>,
    #[serde(default)]
    pub window: RawWindow,
    #[serde(default)]
    pub style: RawStyles,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWindow {
    pub width: Option<String>,
    pub height: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub border: Option<String>,
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStyles {
    #[serde(default)]
    pub prompt: RawBoxStyle,
    #[serde(default)]
    pub completion: RawBoxStyle,
    #[serde(default)]
    pub completion_highlighted: RawBoxStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBoxStyle {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub padding: Option<String>,
    pub border: Option<String>,
    pub border_color: Option<String>,
}

impl RawStyles {
    fn get(&self, role: Role) -> &RawBoxStyle {
        match role {
            Role::Prompt => &self.prompt,
            Role::Completion => &self.completion,
            Role::CompletionHighlighted => &self.completion_highlighted,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut RawBoxStyle {
        match role {
            Role::Prompt => &mut self.prompt,
            Role::Completion => &mut self.completion,
            Role::CompletionHighlighted => &mut self.completion_highlighted,
        }
    }
}

fn role_key(role: Role) -> &'static str {
    match role {
        Role::Prompt => "prompt",
        Role::Completion => "completion",
        Role::CompletionHighlighted => "completion_highlighted",
    }
}

impl RawConfig {
    /// Parses one TOML layer.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Stacks `overlay` on top of `self`; every value set in `overlay` wins.
    pub fn merge(self, overlay: RawConfig) -> RawConfig {
        RawConfig {
            prompt: overlay.prompt.or(self.prompt),
            layout: overlay.layout.or(self.layout),
            prompt_width: overlay.prompt_width.or(self.prompt_width),
            first_selected: overlay.first_selected.or(self.first_selected),
            free_text: overlay.free_text.or(self.free_text),
            multiple_select: overlay.multiple_select.or(self.multiple_select),
            separator: overlay.separator.or(self.separator),
            window: RawWindow {
                width: overlay.window.width.or(self.window.width),
                height: overlay.window.height.or(self.window.height),
                x: overlay.window.x.or(self.window.x),
                y: overlay.window.y.or(self.window.y),
                border: overlay.window.border.or(self.window.border),
                border_color: overlay.window.border_color.or(self.window.border_color),
            },
            style: RawStyles {
                prompt: self.style.prompt.merge(overlay.style.prompt),
                completion: self.style.completion.merge(overlay.style.completion),
                completion_highlighted: self
                    .style
                    .completion_highlighted
                    .merge(overlay.style.completion_highlighted),
            },
        }
    }
}

impl RawBoxStyle {
    fn merge(self, overlay: RawBoxStyle) -> RawBoxStyle {
        RawBoxStyle {
            foreground: overlay.foreground.or(self.foreground),
            background: overlay.background.or(self.background),
            padding: overlay.padding.or(self.padding),
            border: overlay.border.or(self.border),
            border_color: overlay.border_color.or(self.border_color),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Returns `$XDG_CONFIG_HOME/lite-menu/config.toml` or the platform
/// equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILENAME))
}

/// Reads and parses a config file.
pub fn load_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RawConfig::from_toml(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the file layer.
///
/// An explicitly given file must exist. The default file is optional: if it
/// is missing, an empty layer is returned.
pub fn load(explicit: Option<&Path>) -> Result<RawConfig, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config file");
        return load_file(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(RawConfig::default());
    };
    match load_file(&path) {
        Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file");
            Ok(RawConfig::default())
        }
        other => other,
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub layout: LayoutSettings,
    pub window: WindowGeometry,
    pub options: MenuOptions,
    /// Splits candidate lines into raw and display text.
    pub separator: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            window: WindowGeometry {
                width: Dimension::Percent(100),
                height: Dimension::Absolute(1),
                x: Placement::Start,
                y: Placement::Start,
            },
            options: MenuOptions::default(),
            separator: None,
        }
    }
}

impl Config {
    /// Resolves a merged layer on top of the defaults.
    ///
    /// Malformed colors fall back to their default with a warning; any
    /// other malformed value is an error.
    pub fn resolve(raw: &RawConfig) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let orientation = match &raw.layout {
            Some(layout) => layout.parse().map_err(ConfigError::invalid("layout"))?,
            None => defaults.layout.orientation,
        };

        let mut styles = Styles::default();
        for role in Role::ALL {
            let resolved = resolve_box(raw.style.get(role), &styles[role], role)?;
            styles[role] = resolved;
        }

        let border = match &raw.window.border {
            Some(text) => Sides::parse_with(text, parse_size).map_err(ConfigError::invalid("window.border"))?,
            None => defaults.layout.border,
        };
        let border_color = resolve_colors(raw.window.border_color.as_deref(), defaults.layout.border_color);

        let default_height = match orientation {
            Orientation::Horizontal => Dimension::Absolute(1),
            Orientation::Vertical => Dimension::Absolute(10),
        };
        let window = WindowGeometry {
            width: parse_opt(raw.window.width.as_deref(), "window.width")?.unwrap_or(defaults.window.width),
            height: parse_opt(raw.window.height.as_deref(), "window.height")?.unwrap_or(default_height),
            x: parse_opt(raw.window.x.as_deref(), "window.x")?.unwrap_or(defaults.window.x),
            y: parse_opt(raw.window.y.as_deref(), "window.y")?.unwrap_or(defaults.window.y),
        };

        let options = MenuOptions {
            first_selected: raw.first_selected.unwrap_or(defaults.options.first_selected),
            free_text: raw.free_text.unwrap_or(defaults.options.free_text),
            multiple_select: raw.multiple_select.unwrap_or(defaults.options.multiple_select),
        };

        let config = Config {
            layout: LayoutSettings {
                orientation,
                prompt: raw.prompt.clone().unwrap_or(defaults.layout.prompt),
                prompt_width: raw.prompt_width.unwrap_or(DEFAULT_PROMPT_WIDTH),
                styles,
                border,
                border_color,
            },
            window,
            options,
            separator: raw.separator.clone().filter(|separator| !separator.is_empty()),
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

fn parse_opt<T>(text: Option<&str>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = crate::error::ValueError>,
{
    text.map(|text| text.parse().map_err(ConfigError::invalid(key)))
        .transpose()
}

fn resolve_colors(text: Option<&str>, fallback: Sides<Rgba>) -> Sides<Rgba> {
    let Some(text) = text else {
        return fallback;
    };
    Sides::parse_with(text, Rgba::parse).unwrap_or_else(|err| {
        tracing::warn!("{err}, using the default border colors");
        fallback
    })
}

fn resolve_box(raw: &RawBoxStyle, defaults: &BoxStyle, role: Role) -> Result<BoxStyle, ConfigError> {
    let key = |field: &str| format!("style.{}.{field}", role_key(role));

    let padding = match &raw.padding {
        Some(text) => Sides::parse_with(text, Padding::parse).map_err(ConfigError::invalid(key("padding")))?,
        None => defaults.padding,
    };
    let border = match &raw.border {
        Some(text) => Sides::parse_with(text, parse_size).map_err(ConfigError::invalid(key("border")))?,
        None => defaults.border,
    };

    Ok(BoxStyle {
        padding,
        border,
        border_color: resolve_colors(raw.border_color.as_deref(), defaults.border_color),
        background: raw
            .background
            .as_deref()
            .map_or(defaults.background, |text| Rgba::parse_or(text, defaults.background)),
        foreground: raw
            .foreground
            .as_deref()
            .map_or(defaults.foreground, |text| Rgba::parse_or(text, defaults.foreground)),
    })
}
