// Chunk: docs/chunks/menu_cli - Command-line flags
//!
//! Command-line flags. Everything except `--config` and `--log` becomes the
//! topmost configuration layer.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{RawBoxStyle, RawConfig, RawStyles, RawWindow};

/// Filter lines from standard input and print the selected one.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "lite-menu", version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long = "version")]
    pub display_version: bool,

    /// Always select the first match
    #[arg(short = 'a', long = "first-selected")]
    pub first_selected: bool,

    /// Refuse to confirm text that matches no candidate
    #[arg(short = 'A', long = "no-free-text")]
    pub no_free_text: bool,

    /// Keep running after a confirm-and-continue, printing each selection
    #[arg(short = 'm', long = "multiple-select")]
    pub multiple_select: bool,

    /// Match and show only the part of each line after SEP
    #[arg(short = 'd', long = "separator", value_name = "SEP")]
    pub separator: Option<String>,

    /// Prompt shown in front of the query
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Layout: horizontal or vertical
    #[arg(short = 'l', long = "layout", value_name = "LAYOUT")]
    pub layout: Option<String>,

    /// Window width (cells or percentage)
    #[arg(short = 'W', long = "width")]
    pub width: Option<String>,

    /// Window height (rows or percentage)
    #[arg(short = 'H', long = "height")]
    pub height: Option<String>,

    /// Window x position: start, middle, end, cells or percentage
    #[arg(short = 'x', value_name = "X")]
    pub x: Option<String>,

    /// Window y position: start, middle, end, rows or percentage
    #[arg(short = 'y', value_name = "Y")]
    pub y: Option<String>,

    /// Padding of every box, CSS shorthand ("auto" centers vertically)
    #[arg(short = 'P', long = "padding")]
    pub padding: Option<String>,

    /// Window border widths, CSS shorthand
    #[arg(short = 'b', long = "border", value_name = "BORDERS")]
    pub border: Option<String>,

    /// Window border colors, CSS shorthand
    #[arg(short = 'B', long = "border-color", value_name = "COLORS")]
    pub border_color: Option<String>,

    /// Prompt foreground color
    #[arg(short = 't', value_name = "COLOR")]
    pub prompt_fg: Option<String>,

    /// Prompt background color
    #[arg(short = 'T', value_name = "COLOR")]
    pub prompt_bg: Option<String>,

    /// Completion foreground color
    #[arg(short = 'c', value_name = "COLOR")]
    pub completion_fg: Option<String>,

    /// Completion background color
    #[arg(short = 'C', value_name = "COLOR")]
    pub completion_bg: Option<String>,

    /// Highlighted completion foreground color
    #[arg(short = 's', value_name = "COLOR")]
    pub highlighted_fg: Option<String>,

    /// Highlighted completion background color
    #[arg(short = 'S', value_name = "COLOR")]
    pub highlighted_bg: Option<String>,

    /// Load configuration from a specific file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Write logs to a file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The configuration layer given on the command line.
    pub fn overlay(&self) -> RawConfig {
        let boxed = |foreground: &Option<String>, background: &Option<String>| RawBoxStyle {
            foreground: foreground.clone(),
            background: background.clone(),
            padding: self.padding.clone(),
            ..RawBoxStyle::default()
        };

        RawConfig {
            prompt: self.prompt.clone(),
            layout: self.layout.clone(),
            prompt_width: None,
            first_selected: self.first_selected.then_some(true),
            free_text: self.no_free_text.then_some(false),
            multiple_select: self.multiple_select.then_some(true),
            separator: self.separator.clone(),
            window: RawWindow {
                width: self.width.clone(),
                height: self.height.clone(),
                x: self.x.clone(),
                y: self.y.clone(),
                border: self.border.clone(),
                border_color: self.border_color.clone(),
            },
            style: RawStyles {
                prompt: boxed(&self.prompt_fg, &self.prompt_bg),
                completion: boxed(&self.completion_fg, &self.completion_bg),
                completion_highlighted: boxed(&self.highlighted_fg, &self.highlighted_bg),
            },
        }
    }
}
