//! Affine transformation of segment lists.
//!
//! Two layers: a generic per-coordinate callback transformer that knows how
//! to treat each segment kind, and a 3x3 fixed-point matrix (entries scaled
//! by 1000) that the widget layer composes transformations into. Keeping
//! everything in one matrix avoids the rounding drift of chained
//! intermediate transforms.

use crate::path::Segment;
use crate::trig::vector_angle;

// ============================================================================
// Matrix
// ============================================================================

/// 3x3 transformation matrix, entries scaled by 1000.
///
/// The identity carries 1000 on the diagonal. Applying the matrix to a
/// point computes `x' = (a*x + b*y + c + 500) / 1000` with half-up
/// rounding, row-major `[[a, b, c], [d, e, f], [g, h, i]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix {
    m: [[i32; 3]; 3],
}

impl Matrix {
    /// The identity transformation.
    pub fn identity() -> Self {
        Self {
            m: [[1000, 0, 0], [0, 1000, 0], [0, 0, 1000]],
        }
    }

    /// Translation by `(dx, dy)`.
    pub fn translation(dx: i16, dy: i16) -> Self {
        let mut m = Self::identity();
        m.m[0][2] = dx as i32 * 1000;
        m.m[1][2] = dy as i32 * 1000;
        m
    }

    /// Scaling around the origin by the ratio `num / den`.
    pub fn scaling(num: i16, den: i16) -> Self {
        let mut m = Self::identity();
        if den != 0 {
            let f = num as i32 * 1000 / den as i32;
            m.m[0][0] = f;
            m.m[1][1] = f;
        }
        m
    }

    /// Clockwise rotation around the origin, in degrees.
    pub fn rotation(degrees: i16) -> Self {
        let (sin, cos) = (degrees as f64).to_radians().sin_cos();
        let s = (sin * 1000.0).round() as i32;
        let c = (cos * 1000.0).round() as i32;
        Self {
            m: [[c, -s, 0], [s, c, 0], [0, 0, 1000]],
        }
    }

    /// Rotation around the pivot `(cx, cy)`: translate the pivot to the
    /// origin, rotate, translate back.
    pub fn rotation_around(degrees: i16, cx: i16, cy: i16) -> Self {
        if cx == 0 && cy == 0 {
            return Self::rotation(degrees);
        }
        let mut m = Matrix::translation(-cx, -cy);
        m.multiply(&Self::rotation(degrees));
        m.multiply(&Self::translation(cx, cy));
        m
    }

    /// Left-multiply by `other`, so `other` applies after everything already
    /// recorded in `self`.
    pub fn multiply(&mut self, other: &Matrix) {
        let a = &other.m;
        let b = &self.m;
        let mut out = [[0i32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut acc: i64 = 0;
                for k in 0..3 {
                    acc += a[i][k] as i64 * b[k][j] as i64;
                }
                *cell = (acc / 1000) as i32;
            }
        }
        self.m = out;
    }

    /// Transform a single point, rounding half-up.
    pub fn apply(&self, x: i16, y: i16) -> (i16, i16) {
        let xi = x as i64;
        let yi = y as i64;
        let tx = self.m[0][0] as i64 * xi + self.m[0][1] as i64 * yi + self.m[0][2] as i64;
        let ty = self.m[1][0] as i64 * xi + self.m[1][1] as i64 * yi + self.m[1][2] as i64;
        (
            ((tx + 500).div_euclid(1000)) as i16,
            ((ty + 500).div_euclid(1000)) as i16,
        )
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Segment transformer
// ============================================================================

/// Transform every control point of a segment list with `f`.
///
/// Move, line and cubic segments pass all their coordinates through the
/// callback. Arc segments transform only the end point directly; their
/// radii and rotation cannot go through a point callback, so the transform
/// is probed once with `(0, 0)` and `(1000, 0)` and the resulting vector
/// yields the uniform scale (length / 1000) and rotation applied to every
/// arc. Circle segments move their center and scale their radius, which is
/// exact for translation, uniform scaling and rotation; a transform that
/// distorts circles into ellipses is not representable here.
pub fn transform_segments(segments: &mut [Segment], mut f: impl FnMut(&mut i16, &mut i16)) {
    // probe for the arc scale and angle
    let (mut x0, mut y0) = (0i16, 0i16);
    let (mut x1, mut y1) = (1000i16, 0i16);
    f(&mut x0, &mut y0);
    f(&mut x1, &mut y1);
    let dx = x1 as i64 - x0 as i64;
    let dy = y1 as i64 - y0 as i64;
    let scale1000 = (((dx * dx + dy * dy) as f64).sqrt()).round() as i32;
    let angle = vector_angle(dx as i32, dy as i32);

    for seg in segments.iter_mut() {
        match seg {
            Segment::Move { x, y } | Segment::Line { x, y } => f(x, y),
            Segment::Cubic {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => {
                f(c1x, c1y);
                f(c2x, c2y);
                f(x, y);
            }
            Segment::Arc {
                rx, ry, phi, x, y, ..
            } => {
                *rx = (*rx as i32 * scale1000 / 1000) as i16;
                *ry = (*ry as i32 * scale1000 / 1000) as i16;
                *phi += angle;
                f(x, y);
            }
            Segment::Circle { cx, cy, r } => {
                log::debug!("scaling circle segment by {scale1000}/1000");
                f(cx, cy);
                *r = (*r as i32 * scale1000 / 1000) as i16;
            }
            Segment::Close => {}
        }
    }
}

/// Translate all segments by `(dx, dy)`.
pub fn move_segments(segments: &mut [Segment], dx: i16, dy: i16) {
    transform_segments(segments, |x, y| {
        *x = x.wrapping_add(dx);
        *y = y.wrapping_add(dy);
    });
}

/// Scale all segments around the origin by `percent` / 100.
pub fn scale_segments(segments: &mut [Segment], percent: i16) {
    if percent == 100 {
        return;
    }
    transform_segments(segments, |x, y| {
        *x = ((*x as i32 * percent as i32 + 50) / 100) as i16;
        *y = ((*y as i32 * percent as i32 + 50) / 100) as i16;
    });
}

/// Rotate all segments clockwise around the origin, in degrees.
pub fn rotate_segments(segments: &mut [Segment], degrees: i16) {
    if degrees == 0 {
        return;
    }
    let m = Matrix::rotation(degrees);
    transform_segments(segments, |x, y| {
        let (nx, ny) = m.apply(*x, *y);
        *x = nx;
        *y = ny;
    });
}

// ============================================================================
// Tests
// ============================================================================
