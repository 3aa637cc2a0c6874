//! Circle rasterization: quadrants, full circles and circular arcs.
//!
//! Everything here is the midpoint algorithm walking one quadrant at a
//! time. Quadrants are numbered clockwise with the y axis pointing down:
//! 0 sweeps from (r, 0) to (0, r), 1 on to (-r, 0), 2 to (0, -r) and 3
//! back to (r, 0). Pixels within a quadrant come in order of increasing
//! angle, which is what the fill engine needs from a boundary trace.

use crate::basics::{Point, ARC_FLAG_LARGE, ARC_FLAG_SWEEP};
use crate::smooth::SmoothingWindow;
use crate::trig::vector_angle;

/// Walk one quadrant of a radius `r` circle around the origin, emitting
/// center-relative coordinates, endpoints on both axes included.
fn quadrant_walk(r: i16, q: u8, emit: &mut impl FnMut(i16, i16)) {
    let r = r as i32;
    let mut x = -r;
    let mut y = 0i32;
    let mut err = 2 - 2 * r;
    while x < 0 {
        match q & 3 {
            0 => emit(-x as i16, y as i16),
            1 => emit(-y as i16, -x as i16),
            2 => emit(x as i16, -y as i16),
            _ => emit(y as i16, x as i16),
        }
        let e = err;
        if e <= y {
            y += 1;
            err += y * 2 + 1;
        }
        if e > x || err > y {
            x += 1;
            err += x * 2 + 1;
        }
    }
    match q & 3 {
        0 => emit(0, r as i16),
        1 => emit(-r as i16, 0),
        2 => emit(0, -(r as i16)),
        _ => emit(r as i16, 0),
    }
}

/// One quadrant of a circle in center-relative coordinates.
///
/// `quadrant` 0 yields the lower-right sweep, 1 the lower-left, 2 the
/// upper-left, 3 the upper-right.
pub fn circle_quadrant(r: i16, quadrant: u8, sink: &mut impl FnMut(i16, i16)) {
    if r <= 0 {
        sink(0, 0);
        return;
    }
    quadrant_walk(r, quadrant, sink);
}

/// Full circle boundary in clockwise order, starting at `(cx + r, cy)`.
pub(crate) fn circle_points(center: Point, r: i16, emit: &mut impl FnMut(Point)) {
    if r <= 0 {
        emit(center);
        return;
    }
    for q in 0..4u8 {
        let mut first = true;
        quadrant_walk(r, q, &mut |x, y| {
            // quadrants share their axis endpoints; emit each once
            if q > 0 && first {
                first = false;
                return;
            }
            first = false;
            emit(Point::new(center.x + x, center.y + y));
        });
    }
}

/// Draw the complete circle around `center`, clockwise from the rightmost
/// point, terminated by a sub-path marker.
pub fn draw_circle(center: Point, r: i16, sink: &mut impl FnMut(i16, i16)) {
    let mut win = SmoothingWindow::new();
    circle_points(center, r, &mut |p| win.propose(p, sink));
    win.propose(Point::break_marker(), sink);
}

/// Arc of a circle from `start` to `end`, both absolute lattice points on
/// or near the circle around `center`.
///
/// Traversal is clockwise when the sweep bit of `flags` is set, otherwise
/// counter-clockwise (computed clockwise on the vertically mirrored circle
/// and mirrored back, so both directions walk the same lattice). A request
/// with `start == end` and the large bit set produces the full circle.
pub(crate) fn circle_segment_points(
    center: Point,
    r: i16,
    start: Point,
    end: Point,
    flags: u8,
    emit: &mut impl FnMut(Point),
) {
    if r <= 0 {
        emit(center);
        return;
    }
    let cw = flags & ARC_FLAG_SWEEP != 0;
    let large = flags & ARC_FLAG_LARGE != 0;

    let sx = start.x - center.x;
    let mut sy = start.y - center.y;
    let ex = end.x - center.x;
    let mut ey = end.y - center.y;
    if !cw {
        sy = -sy;
        ey = -ey;
    }
    let mirror = !cw;
    let mut emit_rel = |x: i16, y: i16| {
        if mirror {
            emit(Point::new(center.x + x, center.y - y));
        } else {
            emit(Point::new(center.x + x, center.y + y));
        }
    };

    let a1 = vector_angle(sx as i32, sy as i32) as i32;
    let a2 = vector_angle(ex as i32, ey as i32) as i32;
    let qs = (a1 / 90) as u8;

    if (sx, sy) == (ex, ey) && large {
        for k in 0..4u8 {
            let mut first = true;
            quadrant_walk(r, (qs + k) & 3, &mut |x, y| {
                if k > 0 && first {
                    first = false;
                    return;
                }
                first = false;
                emit_rel(x, y);
            });
        }
        return;
    }

    // Three states: before the start angle, emitting, done. Pixels arrive
    // in clockwise angle order across at most six quadrant passes, so the
    // angular offset from the start is monotone while emitting.
    let span = (a2 - a1).rem_euclid(360);
    let mut emitting = false;
    let mut prev_rel = -1i32;
    for k in 0..6u8 {
        let mut done = false;
        quadrant_walk(r, (qs + k) & 3, &mut |x, y| {
            if done {
                return;
            }
            let rel = (vector_angle(x as i32, y as i32) as i32 - a1).rem_euclid(360);
            if !emitting {
                if rel <= 90 {
                    emitting = true;
                } else {
                    return;
                }
            }
            if rel < prev_rel - 180 || rel > span {
                done = true;
                return;
            }
            if rel >= prev_rel || rel < 90 {
                emit_rel(x, y);
                prev_rel = prev_rel.max(rel);
            }
        });
        if done {
            return;
        }
    }
}

/// Draw a circular arc, smoothed and terminated by a sub-path marker.
///
/// See [`circle_segment_points`] for the traversal rules; this wrapper adds
/// the smoothing window so the emitted boundary has no duplicates or gaps.
pub fn draw_circle_segment(
    center: Point,
    r: i16,
    start: Point,
    end: Point,
    flags: u8,
    sink: &mut impl FnMut(i16, i16),
) {
    let mut win = SmoothingWindow::new();
    circle_segment_points(center, r, start, end, flags, &mut |p| win.propose(p, sink));
    win.propose(Point::break_marker(), sink);
}

// ============================================================================
// Tests
// ============================================================================
