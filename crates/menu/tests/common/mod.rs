//! Shared helpers for the menu integration tests.

#![allow(dead_code)]

use lite_menu::geometry::Rect;
use lite_menu::style::Rgba;
use lite_menu::{Canvas, CandidateSet, Dispatcher, LayoutEngine, LayoutSettings, LogicalEvent, LoopState, MenuOptions};

/// One paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fill(Rect, Rgba),
    Text(i32, i32, String, Rgba),
}

/// Records paint calls. Every char is one cell wide and one row tall.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    /// Texts drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, text, _) => Some(text.as_str()),
                Op::Fill(..) => None,
            })
            .collect()
    }

    /// Position and color of the first draw of `text`.
    pub fn find_text(&self, text: &str) -> Option<(i32, i32, Rgba)> {
        self.ops.iter().find_map(|op| match op {
            Op::Text(x, y, drawn, color) if drawn == text => Some((*x, *y, *color)),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn measure_text(&self, text: &str) -> (i32, i32) {
        (text.chars().count() as i32, 1)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        self.ops.push(Op::Text(x, y, text.to_string(), color));
    }
}

pub fn lines(items: &[&str]) -> CandidateSet {
    CandidateSet::from_lines(items.iter().copied(), None)
}

/// Drives a dispatcher the way the event loop does, redrawing into a fresh
/// recorder after every applied action.
pub struct Session<'a> {
    pub dispatcher: Dispatcher<'a>,
    pub canvas: Recorder,
    pub emitted: Vec<String>,
}

impl<'a> Session<'a> {
    pub fn new(candidates: &'a CandidateSet, settings: LayoutSettings, size: (i32, i32), options: MenuOptions) -> Self {
        let layout = LayoutEngine::new(settings, size.0, size.1);
        let mut session = Self {
            dispatcher: Dispatcher::new(candidates, layout, options),
            canvas: Recorder::default(),
            emitted: Vec::new(),
        };
        session.redraw();
        session
    }

    pub fn horizontal(candidates: &'a CandidateSet, options: MenuOptions) -> Self {
        Self::new(candidates, LayoutSettings::default(), (80, 1), options)
    }

    pub fn redraw(&mut self) {
        self.canvas = Recorder::default();
        self.dispatcher.redraw(&mut self.canvas);
    }

    /// Feeds one event; returns the loop state, or `None` if it was ignored.
    pub fn send(&mut self, event: LogicalEvent) -> Option<LoopState> {
        let action = self.dispatcher.decide(&event)?;
        let state = self.dispatcher.apply(action).unwrap();
        match &state {
            LoopState::Accepted(text) | LoopState::AcceptedContinue(text) => self.emitted.push(text.clone()),
            LoopState::Looping | LoopState::Rejected => {}
        }
        self.redraw();
        Some(state)
    }

    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.send(LogicalEvent::Char(ch));
        }
    }
}
