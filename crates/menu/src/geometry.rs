// Chunk: docs/chunks/menu_geometry - Window size and placement
//!
//! Rectangles and the window geometry settings.
//!
//! Sizes are resolved against the screen once at startup: a [`Dimension`]
//! is either absolute or a percentage of the screen extent, and a
//! [`Placement`] positions the window along one axis.

use std::str::FromStr;

use crate::error::ValueError;

/// An axis-aligned rectangle. Coordinates grow right and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the overlap of two rectangles, empty if they do not meet.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }
}

/// A length, absolute or relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Absolute(i32),
    Percent(i32),
}

impl Dimension {
    /// Resolves against the screen extent `max` on the same axis.
    ///
    /// Percentages far past 100 saturate instead of overflowing.
    pub fn resolve(self, max: i32) -> i32 {
        match self {
            Dimension::Absolute(value) => value,
            Dimension::Percent(percent) => {
                let scaled = i64::from(percent) * i64::from(max) / 100;
                scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
        }
    }
}

impl FromStr for Dimension {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::Dimension(text.to_string());
        match text.strip_suffix('%') {
            Some(percent) => percent.trim().parse().map(Dimension::Percent).map_err(|_| invalid()),
            None => text.trim().parse().map(Dimension::Absolute).map_err(|_| invalid()),
        }
    }
}

/// Where the window goes along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    Middle,
    End,
    At(Dimension),
}

impl Placement {
    /// Resolves the window origin, given the screen extent and the
    /// window's own extent on that axis.
    pub fn resolve(self, max: i32, own: i32) -> i32 {
        match self {
            Placement::Start => 0,
            Placement::Middle => max.saturating_sub(own) / 2,
            Placement::End => max.saturating_sub(own),
            Placement::At(dimension) => dimension.resolve(max),
        }
    }
}

impl FromStr for Placement {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, ValueError> {
        match text {
            "start" => Ok(Placement::Start),
            "middle" => Ok(Placement::Middle),
            "end" => Ok(Placement::End),
            other => other
                .parse()
                .map(Placement::At)
                .map_err(|_| ValueError::Placement(text.to_string())),
        }
    }
}

/// Window size and position settings, before the screen is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: Dimension,
    pub height: Dimension,
    pub x: Placement,
    pub y: Placement,
}

impl WindowGeometry {
    /// Places the window on a `screen_width` x `screen_height` screen.
    ///
    /// The result is clamped so the window never extends past the screen.
    pub fn resolve(&self, screen_width: i32, screen_height: i32) -> Rect {
        let width = self.width.resolve(screen_width).clamp(1, screen_width.max(1));
        let height = self.height.resolve(screen_height).clamp(1, screen_height.max(1));

        let x = self.x.resolve(screen_width, width).clamp(0, screen_width.saturating_sub(width).max(0));
        let y = self.y.resolve(screen_height, height).clamp(0, screen_height.saturating_sub(height).max(0));

        Rect::new(x, y, width, height)
    }
}
