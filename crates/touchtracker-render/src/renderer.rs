//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use touchtracker_core::config::TrackerConfig;
use touchtracker_core::tracker::SceneView;

/// Colors and width used to stroke lines.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    /// Stroke width for every line.
    pub thickness: f64,
    /// Finished, unselected lines.
    pub finished_color: Color,
    /// Strokes still being drawn.
    pub active_color: Color,
    /// The selected finished line.
    pub selected_color: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::from(&TrackerConfig::default())
    }
}

impl From<&TrackerConfig> for LineStyle {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            thickness: config.line_thickness,
            finished_color: config.finished_color.into(),
            active_color: config.active_color.into(),
            selected_color: config.selected_color.into(),
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Tracker state to draw.
    pub scene: SceneView<'a>,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Line colors and width.
    pub style: LineStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(scene: SceneView<'a>, viewport_size: Size) -> Self {
        Self {
            scene,
            viewport_size,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            style: LineStyle::default(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the line style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
