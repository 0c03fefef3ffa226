// Chunk: docs/chunks/menu_layout - Box layout, drawing and hit-testing
//!
//! Positions the prompt and the visible matches as a row (horizontal
//! layout) or a column (vertical layout) of boxes, paints them through a
//! [`Canvas`], and records where each match landed so pointer clicks can be
//! mapped back to it.
//!
//! Layout is pure with respect to its inputs: the same query, matches and
//! window size always produce the same paint calls and the same
//! [`RenderPlan`]. Drawing primitives are injected through [`Canvas`], so
//! the whole module is testable with a recording fake.
//!
//! ## Paint order
//!
//! 1. The whole window in the completion background
//! 2. The prompt box
//! 3. One box per visible match, starting at the scroll offset
//! 4. The window border, on top of everything

use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::candidates::CandidateSet;
use crate::error::ValueError;
use crate::filter::FilterEngine;
use crate::geometry::Rect;
use crate::style::{Rgba, Role, Sides, Styles};

/// Default number of query graphemes shown in a horizontal prompt.
pub const DEFAULT_PROMPT_WIDTH: usize = 20;

/// Drawing primitives, in window coordinates.
pub trait Canvas {
    /// Returns the `(width, height)` of `text` when drawn.
    ///
    /// Must be stable across calls within one redraw.
    fn measure_text(&self, text: &str) -> (i32, i32);

    /// Paints a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Paints `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba);
}

/// Direction in which boxes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Prompt and matches side by side in one strip.
    #[default]
    Horizontal,
    /// Prompt on top, one match per row below it.
    Vertical,
}

impl FromStr for Orientation {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, ValueError> {
        match text {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(ValueError::Layout(other.to_string())),
        }
    }
}

/// Everything the layout engine needs besides the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSettings {
    pub orientation: Orientation,
    /// Text drawn in front of the query.
    pub prompt: String,
    /// Query graphemes kept visible in a horizontal prompt.
    pub prompt_width: usize,
    pub styles: Styles,
    /// Window border widths.
    pub border: Sides<i32>,
    pub border_color: Sides<Rgba>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            prompt: "$ ".to_string(),
            prompt_width: DEFAULT_PROMPT_WIDTH,
            styles: Styles::default(),
            border: Sides::all(0),
            border_color: Sides::all(Rgba::BLACK),
        }
    }
}

// =============================================================================
// Render plan and hit-testing
// =============================================================================

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Position in the match list.
    Item(usize),
    /// Outside the visible matches.
    Cancel,
}

/// Start coordinate of every match on the primary axis, rebuilt on every
/// redraw. `None` marks a match that is not currently visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    orientation: Orientation,
    first: usize,
    offsets: Vec<Option<i32>>,
}

impl RenderPlan {
    /// Returns the recorded offset of match `position`.
    pub fn offset(&self, position: usize) -> Option<i32> {
        self.offsets.get(position).copied().flatten()
    }

    /// Returns the positions of the matches drawn by the last redraw.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(position, offset)| offset.map(|_| position))
    }

    /// Maps a coordinate on the primary axis to a match.
    ///
    /// The hit is the last match, scanning from the scroll offset, whose
    /// start is at or before `coord`. Anything before the first visible
    /// match (the prompt, usually) is a cancel.
    pub fn hit_test(&self, coord: i32) -> Hit {
        let mut hit = Hit::Cancel;
        for (position, offset) in self.offsets.iter().enumerate().skip(self.first) {
            match offset {
                Some(start) if *start <= coord => hit = Hit::Item(position),
                _ => break,
            }
        }
        hit
    }

    /// Like [`hit_test`](Self::hit_test), picking the axis from the layout.
    pub fn hit_test_point(&self, x: i32, y: i32) -> Hit {
        match self.orientation {
            Orientation::Horizontal => self.hit_test(x),
            Orientation::Vertical => self.hit_test(y),
        }
    }
}

// =============================================================================
// Layout engine
// =============================================================================

/// Draws the menu for a window of a given size.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    settings: LayoutSettings,
    width: i32,
    height: i32,
}

/// One box to draw.
struct BoxSpec<'a> {
    role: Role,
    origin: i32,
    prefix: Option<&'a str>,
    text: &'a str,
    /// Minimum content extent along the primary axis.
    min_content: i32,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings, width: i32, height: i32) -> Self {
        Self {
            settings,
            width,
            height,
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Adopts a new window size for the next redraw.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    fn x_zero(&self) -> i32 {
        self.settings.border.left
    }

    fn y_zero(&self) -> i32 {
        self.settings.border.top
    }

    fn inner_width(&self) -> i32 {
        self.width.saturating_sub(self.settings.border.horizontal()).max(0)
    }

    fn inner_height(&self) -> i32 {
        self.height.saturating_sub(self.settings.border.vertical()).max(0)
    }

    /// Paints the whole menu and returns where each match was drawn.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        query: &str,
        filter: &FilterEngine,
        candidates: &CandidateSet,
    ) -> RenderPlan {
        let styles = &self.settings.styles;
        canvas.fill_rect(
            Rect::new(0, 0, self.width, self.height),
            styles[Role::Completion].background,
        );

        let plan = match self.settings.orientation {
            Orientation::Horizontal => self.draw_horizontally(canvas, query, filter, candidates),
            Orientation::Vertical => self.draw_vertically(canvas, query, filter, candidates),
        };

        self.draw_window_border(canvas);
        plan
    }

    // |------------------|----------------------------------------------|
    // | $ query          | completion | completion | completion | compl |
    // |------------------|----------------------------------------------|
    fn draw_horizontally(
        &self,
        canvas: &mut dyn Canvas,
        query: &str,
        filter: &FilterEngine,
        candidates: &CandidateSet,
    ) -> RenderPlan {
        let prompt = &self.settings.prompt;
        let visible_query = tail_graphemes(query, self.settings.prompt_width);
        let glyph_width = canvas.measure_text("n").0;
        let query_room = i32::try_from(self.settings.prompt_width).unwrap_or(i32::MAX);
        let min_content = canvas
            .measure_text(prompt)
            .0
            .saturating_add(glyph_width.saturating_mul(query_room));

        let mut x = self.x_zero();
        x = x.saturating_add(self.draw_box(
            canvas,
            BoxSpec {
                role: Role::Prompt,
                origin: x,
                prefix: Some(prompt.as_str()),
                text: visible_query,
                min_content,
            },
        ));

        let far_edge = self.x_zero().saturating_add(self.inner_width());
        self.draw_matches(canvas, x, far_edge, filter, candidates)
    }

    // |-----------------------------------------------------------------|
    // |  $ query                                                        |
    // |-----------------------------------------------------------------|
    // |  completion                                                     |
    // |-----------------------------------------------------------------|
    fn draw_vertically(
        &self,
        canvas: &mut dyn Canvas,
        query: &str,
        filter: &FilterEngine,
        candidates: &CandidateSet,
    ) -> RenderPlan {
        let mut y = self.y_zero();
        y = y.saturating_add(self.draw_box(
            canvas,
            BoxSpec {
                role: Role::Prompt,
                origin: y,
                prefix: Some(self.settings.prompt.as_str()),
                text: query,
                min_content: 0,
            },
        ));

        let far_edge = self.y_zero().saturating_add(self.inner_height());
        self.draw_matches(canvas, y, far_edge, filter, candidates)
    }

    /// Draws matches from the scroll offset on, starting at `cursor`, until
    /// the cursor reaches `far_edge`.
    fn draw_matches(
        &self,
        canvas: &mut dyn Canvas,
        mut cursor: i32,
        far_edge: i32,
        filter: &FilterEngine,
        candidates: &CandidateSet,
    ) -> RenderPlan {
        let first = filter.scroll_offset();
        let mut offsets = vec![None; filter.match_count()];

        for position in first..filter.match_count() {
            if cursor >= far_edge {
                break;
            }
            let Some(candidate) = filter.matched(position, candidates) else {
                break;
            };

            let role = if filter.selected() == Some(position) {
                Role::CompletionHighlighted
            } else {
                Role::Completion
            };

            offsets[position] = Some(cursor);
            cursor = cursor.saturating_add(self.draw_box(
                canvas,
                BoxSpec {
                    role,
                    origin: cursor,
                    prefix: None,
                    text: candidate.display(),
                    min_content: 0,
                },
            ));
        }

        RenderPlan {
            orientation: self.settings.orientation,
            first,
            offsets,
        }
    }

    /// Draws one box and returns its extent along the primary axis.
    ///
    /// Borders go first, then the interior background, then the prefix
    /// and the text. Boxes span the whole inner cross extent.
    fn draw_box(&self, canvas: &mut dyn Canvas, spec: BoxSpec<'_>) -> i32 {
        let style = &self.settings.styles[spec.role];
        let border = style.border;

        let prefix_width = spec.prefix.map_or(0, |prefix| canvas.measure_text(prefix).0);
        let (text_width, text_height) = canvas.measure_text(spec.text);
        let text_height = text_height.max(spec.prefix.map_or(0, |prefix| canvas.measure_text(prefix).1));
        let content_width = prefix_width.saturating_add(text_width);

        let (pad_left, pad_right) = style.padding.resolve_horizontal();
        let (rect, pad_top) = match self.settings.orientation {
            Orientation::Horizontal => {
                let height = self.inner_height();
                let leftover = height.saturating_sub(border.vertical()).saturating_sub(text_height);
                let pad_top = style.padding.top.resolve(leftover);
                let width = extent(&[border.horizontal(), pad_left, content_width.max(spec.min_content), pad_right]);
                (Rect::new(spec.origin, self.y_zero(), width, height), pad_top)
            }
            Orientation::Vertical => {
                let pad_top = style.padding.top.resolve(0);
                let pad_bottom = style.padding.bottom.resolve(0);
                let height = extent(&[border.vertical(), pad_top, text_height.max(spec.min_content), pad_bottom]);
                (Rect::new(self.x_zero(), spec.origin, self.inner_width(), height), pad_top)
            }
        };

        paint_border(canvas, rect, &border, &style.border_color);
        let interior = Rect::new(
            rect.x.saturating_add(border.left),
            rect.y.saturating_add(border.top),
            rect.width.saturating_sub(border.horizontal()),
            rect.height.saturating_sub(border.vertical()),
        );
        if !interior.is_empty() {
            canvas.fill_rect(interior, style.background);
        }

        let text_x = interior.x.saturating_add(pad_left);
        let text_y = interior.y.saturating_add(pad_top);
        if let Some(prefix) = spec.prefix {
            canvas.draw_text(text_x, text_y, prefix, style.foreground);
        }
        canvas.draw_text(text_x.saturating_add(prefix_width), text_y, spec.text, style.foreground);

        match self.settings.orientation {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    fn draw_window_border(&self, canvas: &mut dyn Canvas) {
        let window = Rect::new(0, 0, self.width, self.height);
        paint_border(canvas, window, &self.settings.border, &self.settings.border_color);
    }
}

/// Paints the four border strips of `rect`, skipping zero-width sides.
fn paint_border(canvas: &mut dyn Canvas, rect: Rect, widths: &Sides<i32>, colors: &Sides<Rgba>) {
    let strips = [
        (widths.top, Rect::new(rect.x, rect.y, rect.width, widths.top), colors.top),
        (
            widths.right,
            Rect::new(rect.right().saturating_sub(widths.right), rect.y, widths.right, rect.height),
            colors.right,
        ),
        (
            widths.bottom,
            Rect::new(rect.x, rect.bottom().saturating_sub(widths.bottom), rect.width, widths.bottom),
            colors.bottom,
        ),
        (widths.left, Rect::new(rect.x, rect.y, widths.left, rect.height), colors.left),
    ];

    for (width, strip, color) in strips {
        if width > 0 {
            canvas.fill_rect(strip, color);
        }
    }
}

/// Sums box parts, saturating at `i32::MAX` for absurd configured sizes.
fn extent(parts: &[i32]) -> i32 {
    parts.iter().fold(0i32, |total, part| total.saturating_add(*part))
}

/// Returns the last `count` grapheme clusters of `text`.
pub fn tail_graphemes(text: &str, count: usize) -> &str {
    let total = text.graphemes(true).count();
    if total <= count {
        return text;
    }
    let start = text
        .grapheme_indices(true)
        .nth(total - count)
        .map_or(text.len(), |(index, _)| index);
    &text[start..]
}
