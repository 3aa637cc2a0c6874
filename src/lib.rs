//! # pixel-path
//!
//! Pixel-exact 2D vector path rasterizer for small displays and off-screen
//! buffers. Paths are written in an SVG-like mini language with integer
//! coordinates, rasterized with pure integer arithmetic, and delivered one
//! pixel at a time to a caller-supplied callback; the library never touches
//! a framebuffer itself and has no opinion about the canvas behind the
//! callback. Every pixel is fully opaque or absent; there is no
//! anti-aliasing and no sub-pixel positioning.
//!
//! ## Pipeline
//!
//! 1. **Parser** ([`parse_path`]) turns path text into a [`Segment`] list
//!    with absolute coordinates.
//! 2. **Primitive generators** ([`draw_line`], [`draw_cubic`],
//!    [`draw_circle`], [`draw_arc`]) emit ordered boundary pixel streams,
//!    cleaned up by a three-slot smoothing window.
//! 3. **Transformer** ([`Matrix`], [`transform_segments`]) applies
//!    fixed-point affine transformations to segment lists.
//! 4. **Walker** ([`draw_segments`]) threads the pen through a path and
//!    emits the borders of all sub-paths.
//! 5. **Fill engine** ([`fill_segments`]) turns the boundary stream into
//!    border plus even-odd interior pixels in one scanline pass.
//! 6. **Widget** ([`PathWidget`]) retains a path with colors and a
//!    transformation for repeated drawing and undrawing.
//!
//! ## Example
//!
//! ```
//! use pixel_path::path_by_text;
//!
//! let mut pixels = Vec::new();
//! let mut border = |x: i16, y: i16| pixels.push((x, y));
//! path_by_text("M1 1 h7 v7 h-7 z", 0, 0, 100, Some(&mut border), None);
//! assert_eq!(pixels.len(), 28);
//! ```

pub mod arc;
pub mod basics;
pub mod bezier;
pub mod circle;
pub mod color;
pub mod fill;
pub mod line;
pub mod path;
pub mod raster;
pub mod rect;
pub mod smooth;
pub mod transform;
pub mod trig;
pub mod widget;

pub use arc::draw_arc;
pub use basics::{Point, ARC_FLAG_LARGE, ARC_FLAG_SWEEP, BREAK_Y, INVALID_Y};
pub use bezier::draw_cubic;
pub use circle::{circle_quadrant, draw_circle, draw_circle_segment};
pub use color::Color;
pub use fill::{fill_segments, path_by_text, Edge};
pub use line::draw_line;
pub use path::{parse_path, Segment};
pub use raster::draw_segments;
pub use rect::{draw_rect, draw_rounded_rect, draw_solid_rect};
pub use smooth::SmoothingWindow;
pub use transform::{
    move_segments, rotate_segments, scale_segments, transform_segments, Matrix,
};
pub use trig::{cos256, scale256, sin256, vector_angle};
pub use widget::PathWidget;
