//! Retained path widget: a segment list plus transformation matrix and
//! colors, drawn through a color-aware pixel callback.

use core::cell::RefCell;

use crate::basics::Point;
use crate::color::Color;
use crate::fill::fill_segments;
use crate::path::{parse_path, Segment};
use crate::transform::{transform_segments, Matrix};

/// A drawable object built from a path, a transformation and two colors.
///
/// The segment list is built once and never mutated afterwards; drawing
/// clones it, applies the accumulated matrix and hands the result to the
/// fill engine. Transformations compose into the matrix, so repeated
/// drawing never accumulates rounding errors.
///
/// With a read-back callback the widget records the colors it paints over
/// and can restore them later ([`PathWidget::undraw`]).
pub struct PathWidget {
    segments: Vec<Segment>,
    matrix: Matrix,
    stroke: Color,
    fill: Color,
    background: Vec<(Point, Color)>,
    bounds: Option<(Point, Point)>,
}

impl PathWidget {
    /// An empty widget with a black stroke and no fill.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            matrix: Matrix::identity(),
            stroke: crate::color::BLACK,
            fill: crate::color::TRANSPARENT,
            background: Vec::new(),
            bounds: None,
        }
    }

    pub fn with_colors(stroke: Color, fill: Color) -> Self {
        let mut w = Self::new();
        w.stroke = stroke;
        w.fill = fill;
        w
    }

    pub fn with_path(text: &str, stroke: Color, fill: Color) -> Self {
        let mut w = Self::with_colors(stroke, fill);
        w.set_path(text);
        w
    }

    // ===== path building =====

    /// Replace the segment list with a parsed path and reset the matrix.
    pub fn set_path(&mut self, text: &str) {
        self.segments = parse_path(text);
        self.matrix = Matrix::identity();
    }

    /// Append one segment.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Replace the path with a `w` by `h` rectangle at the origin.
    pub fn set_rect(&mut self, w: i16, h: i16) {
        self.segments = vec![
            Segment::Move { x: 0, y: 0 },
            Segment::Line { x: 0, y: h - 1 },
            Segment::Line { x: w - 1, y: h - 1 },
            Segment::Line { x: w - 1, y: 0 },
            Segment::Close,
        ];
        self.matrix = Matrix::identity();
    }

    /// Replace the path with a circle of radius `r` around the origin.
    pub fn set_circle(&mut self, r: i16) {
        self.segments = vec![Segment::Circle { cx: 0, cy: 0, r }];
        self.matrix = Matrix::identity();
    }

    // ===== coloring =====

    pub fn set_stroke_color(&mut self, stroke: Color) {
        self.stroke = stroke;
    }

    pub fn set_fill_color(&mut self, fill: Color) {
        self.fill = fill;
    }

    // ===== transformation =====

    /// Forget all recorded transformations.
    pub fn reset_transform(&mut self) {
        self.matrix = Matrix::identity();
    }

    /// Record a translation by `(dx, dy)`.
    pub fn move_by(&mut self, dx: i16, dy: i16) {
        self.matrix.multiply(&Matrix::translation(dx, dy));
    }

    /// Record a scaling around the origin by `percent` / 100.
    pub fn scale(&mut self, percent: i16) {
        if percent != 100 {
            self.matrix.multiply(&Matrix::scaling(percent, 100));
        }
    }

    /// Record a clockwise rotation around `(cx, cy)`, in degrees.
    pub fn rotate(&mut self, degrees: i16, cx: i16, cy: i16) {
        self.matrix.multiply(&Matrix::rotation_around(degrees, cx, cy));
    }

    // ===== drawing =====

    /// Transform and draw, delivering each pixel with its color.
    pub fn draw(&mut self, sink: impl FnMut(i16, i16, Color)) {
        self.draw_inner(sink, None::<fn(i16, i16) -> Color>);
    }

    /// Like [`PathWidget::draw`], additionally reading the pixels about to
    /// be painted so [`PathWidget::undraw`] can restore them.
    pub fn draw_with_background(
        &mut self,
        sink: impl FnMut(i16, i16, Color),
        read: impl FnMut(i16, i16) -> Color,
    ) {
        self.draw_inner(sink, Some(read));
    }

    /// Repaint the colors captured by the last
    /// [`PathWidget::draw_with_background`], newest first, and forget them.
    pub fn undraw(&mut self, mut sink: impl FnMut(i16, i16, Color)) {
        while let Some((p, color)) = self.background.pop() {
            sink(p.x, p.y, color);
        }
    }

    /// Bounding box of the last draw as `(min, max)` corners, if anything
    /// was drawn. Useful for invalidating the covered screen region.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        self.bounds
    }

    fn draw_inner(
        &mut self,
        sink: impl FnMut(i16, i16, Color),
        read: Option<impl FnMut(i16, i16) -> Color>,
    ) {
        let mut transformed = self.segments.clone();
        let matrix = self.matrix;
        transform_segments(&mut transformed, |x, y| {
            let (nx, ny) = matrix.apply(*x, *y);
            *x = nx;
            *y = ny;
        });

        self.background.clear();
        self.bounds = None;
        // border and fill both paint through the one sink; the engine wants
        // them as two callbacks
        let state = RefCell::new((sink, read, &mut self.background, &mut self.bounds));
        let stroke = self.stroke;
        let fill = self.fill;
        let paint = |x: i16, y: i16, color: Color| {
            let mut s = state.borrow_mut();
            let (sink, read, background, bounds) = &mut *s;
            if let Some(read) = read.as_mut() {
                background.push((Point::new(x, y), read(x, y)));
            }
            **bounds = Some(match **bounds {
                None => (Point::new(x, y), Point::new(x, y)),
                Some((lo, hi)) => (
                    Point::new(lo.x.min(x), lo.y.min(y)),
                    Point::new(hi.x.max(x), hi.y.max(y)),
                ),
            });
            sink(x, y, color);
        };

        let mut border = |x: i16, y: i16| paint(x, y, stroke);
        let mut fill_sink = |x: i16, y: i16| paint(x, y, fill);
        match (stroke.is_transparent(), fill.is_transparent()) {
            (false, false) => {
                fill_segments(&transformed, Some(&mut border), Some(&mut fill_sink))
            }
            (false, true) => fill_segments(&transformed, Some(&mut border), None),
            (true, false) => fill_segments(&transformed, None, Some(&mut fill_sink)),
            (true, true) => {}
        }
    }
}

impl Default for PathWidget {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
