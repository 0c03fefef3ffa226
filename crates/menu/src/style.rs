// Chunk: docs/chunks/menu_styles - Colors and per-role box styles
//!
//! Colors, CSS-like four-sided values and the box style of each role.
//!
//! Every box the layout engine draws has one of three [`Role`]s. A role maps
//! to a [`BoxStyle`] through [`Styles`], which is indexed by role instead of
//! keeping parallel per-role fields.

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::ValueError;

// =============================================================================
// Colors
// =============================================================================

/// A color with premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parses `#rgb`, `#rrggbb` or `#aarrggbb`.
    ///
    /// The color channels are premultiplied by alpha; a zero alpha yields
    /// [`Rgba::TRANSPARENT`].
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::Color(text.to_string());

        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        let argb = match hex.len() {
            3 => {
                let expanded = (value & 0xf00) * 0x1100 | (value & 0x0f0) * 0x0110 | (value & 0x00f) * 0x0011;
                0xff00_0000 | expanded
            }
            6 => 0xff00_0000 | value,
            8 => value,
            _ => return Err(invalid()),
        };

        let [a, r, g, b] = argb.to_be_bytes();
        if a == 0 {
            return Ok(Self::TRANSPARENT);
        }
        let premultiply = |channel: u8| (u16::from(channel) * u16::from(a) / 255) as u8;
        Ok(Self {
            r: premultiply(r),
            g: premultiply(g),
            b: premultiply(b),
            a,
        })
    }

    /// Parses `text`, falling back to `fallback` with a warning.
    pub fn parse_or(text: &str, fallback: Rgba) -> Self {
        Self::parse(text).unwrap_or_else(|err| {
            tracing::warn!("{err}, using the default color");
            fallback
        })
    }
}

impl FromStr for Rgba {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Four-sided values
// =============================================================================

/// A value for each side of a box, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// The same value on every side.
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Expands the CSS shorthand of 1 to 4 space separated values.
    ///
    /// One value applies to all sides, two are vertical/horizontal, three are
    /// top, horizontal, bottom, and four go clockwise from the top.
    pub fn parse_with<F>(text: &str, mut parse: F) -> Result<Self, ValueError>
    where
        F: FnMut(&str) -> Result<T, ValueError>,
    {
        let values = text
            .split_whitespace()
            .map(&mut parse)
            .collect::<Result<Vec<T>, _>>()?;

        let sides = match values.as_slice() {
            [all] => Self::all(all.clone()),
            [vertical, horizontal] => Self {
                top: vertical.clone(),
                right: horizontal.clone(),
                bottom: vertical.clone(),
                left: horizontal.clone(),
            },
            [top, horizontal, bottom] => Self {
                top: top.clone(),
                right: horizontal.clone(),
                bottom: bottom.clone(),
                left: horizontal.clone(),
            },
            [top, right, bottom, left] => Self {
                top: top.clone(),
                right: right.clone(),
                bottom: bottom.clone(),
                left: left.clone(),
            },
            other => return Err(ValueError::SideCount(other.len())),
        };
        Ok(sides)
    }
}

impl Sides<i32> {
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Parses a non-negative integer.
pub fn parse_size(text: &str) -> Result<i32, ValueError> {
    text.parse::<i32>()
        .ok()
        .filter(|value| *value >= 0)
        .ok_or_else(|| ValueError::Number(text.to_string()))
}

/// Padding of one side: a fixed size or centered in the available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Fixed(i32),
    Auto,
}

impl Padding {
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        if text == "auto" {
            Ok(Self::Auto)
        } else {
            parse_size(text).map(Self::Fixed)
        }
    }

    /// Resolves `auto` against the space left over on this axis, split
    /// evenly between both sides.
    pub fn resolve(self, leftover: i32) -> i32 {
        match self {
            Self::Fixed(size) => size,
            Self::Auto => (leftover / 2).max(0),
        }
    }

    fn fixed_or_zero(self) -> i32 {
        match self {
            Self::Fixed(size) => size,
            Self::Auto => 0,
        }
    }
}

impl Sides<Padding> {
    /// Horizontal padding; `auto` is only meaningful vertically and counts as 0.
    pub fn resolve_horizontal(&self) -> (i32, i32) {
        (self.left.fixed_or_zero(), self.right.fixed_or_zero())
    }
}

// =============================================================================
// Box styles
// =============================================================================

/// What a box displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Prompt,
    Completion,
    CompletionHighlighted,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Prompt, Role::Completion, Role::CompletionHighlighted];

    fn slot(self) -> usize {
        match self {
            Role::Prompt => 0,
            Role::Completion => 1,
            Role::CompletionHighlighted => 2,
        }
    }
}

/// Padding, borders and colors of one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxStyle {
    pub padding: Sides<Padding>,
    pub border: Sides<i32>,
    pub border_color: Sides<Rgba>,
    pub background: Rgba,
    pub foreground: Rgba,
}

impl BoxStyle {
    /// A borderless box with one cell of horizontal padding.
    pub fn plain(foreground: Rgba, background: Rgba) -> Self {
        Self {
            padding: Sides {
                top: Padding::Fixed(0),
                right: Padding::Fixed(1),
                bottom: Padding::Fixed(0),
                left: Padding::Fixed(1),
            },
            border: Sides::all(0),
            border_color: Sides::all(Rgba::BLACK),
            background,
            foreground,
        }
    }
}

/// One [`BoxStyle`] per [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles([BoxStyle; 3]);

impl Styles {
    pub fn new(prompt: BoxStyle, completion: BoxStyle, highlighted: BoxStyle) -> Self {
        Self([prompt, completion, highlighted])
    }
}

impl Default for Styles {
    /// White on black, inverted for the highlighted completion.
    fn default() -> Self {
        Self::new(
            BoxStyle::plain(Rgba::WHITE, Rgba::BLACK),
            BoxStyle::plain(Rgba::WHITE, Rgba::BLACK),
            BoxStyle::plain(Rgba::BLACK, Rgba::WHITE),
        )
    }
}

impl Index<Role> for Styles {
    type Output = BoxStyle;

    fn index(&self, role: Role) -> &BoxStyle {
        &self.0[role.slot()]
    }
}

impl IndexMut<Role> for Styles {
    fn index_mut(&mut self, role: Role) -> &mut BoxStyle {
        &mut self.0[role.slot()]
    }
}
