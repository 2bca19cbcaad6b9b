//! Display-list renderer producing one stroke command per line.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Cap, Line, Stroke};
use peniko::Color;

/// Which kind of line a command draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRole {
    Finished,
    Selected,
    Active,
}

/// A single stroked segment.
#[derive(Debug, Clone)]
pub struct StrokeCommand {
    pub line: Line,
    pub color: Color,
    pub stroke: Stroke,
    pub role: StrokeRole,
}

/// Renderer that records stroke commands in paint order: finished lines in
/// completion order, then strokes still in progress on top.
#[derive(Debug, Default)]
pub struct StrokeListRenderer {
    commands: Vec<StrokeCommand>,
}

impl StrokeListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands built by the last frame.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }

    /// Take the commands built by the last frame.
    pub fn take_commands(&mut self) -> Vec<StrokeCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for StrokeListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.commands.clear();
        let style = &ctx.style;
        let stroke = Stroke::new(style.thickness).with_caps(Cap::Round);

        for (index, line) in ctx.scene.finished.iter().enumerate() {
            let (color, role) = if ctx.scene.is_selected(index) {
                (style.selected_color, StrokeRole::Selected)
            } else {
                (style.finished_color, StrokeRole::Finished)
            };
            self.commands.push(StrokeCommand {
                line: line.as_kurbo(),
                color,
                stroke: stroke.clone(),
                role,
            });
        }

        for line in ctx.scene.active_lines() {
            self.commands.push(StrokeCommand {
                line: line.as_kurbo(),
                color: style.active_color,
                stroke: stroke.clone(),
                role: StrokeRole::Active,
            });
        }

        log::trace!("Built {} stroke commands", self.commands.len());
    }
}
