//! TouchTracker Render Library
//!
//! Renderer abstraction for TouchTracker plus a display-list implementation
//! that turns tracker state into styled stroke commands.

mod renderer;
mod stroke_list;

pub use renderer::{LineStyle, RenderContext, Renderer};
pub use stroke_list::{StrokeCommand, StrokeListRenderer, StrokeRole};
