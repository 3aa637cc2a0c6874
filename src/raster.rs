//! The segment walker: turns a segment list into one smoothed boundary
//! pixel stream.

use crate::arc::arc_points;
use crate::basics::Point;
use crate::bezier::cubic_points;
use crate::circle::circle_points;
use crate::line::draw_line;
use crate::path::Segment;
use crate::smooth::SmoothingWindow;

/// Rasterize the borders of a path.
///
/// Threads the pen through the segment list, dispatches each segment to its
/// generator and routes every candidate pixel through one shared smoothing
/// window, so joins between segments are deduplicated like any other
/// neighboring samples. Sub-paths are separated by `(0, BREAK_Y)` markers;
/// a final marker terminates the stream.
///
/// | segment | action |
/// |---------|--------|
/// | Move | set pen and sub-path start |
/// | Line | line from pen |
/// | Cubic | curve from pen |
/// | Arc | elliptic arc from pen |
/// | Circle | full ring, pen unchanged, own sub-path |
/// | Close | line back to the sub-path start, then a marker |
pub fn draw_segments(segments: &[Segment], sink: &mut impl FnMut(i16, i16)) {
    let mut win = SmoothingWindow::new();
    let mut pen = Point::new(0, 0);
    let mut start = Point::new(0, 0);
    let mut open = false;

    for seg in segments {
        match *seg {
            Segment::Move { x, y } => {
                pen = Point::new(x, y);
                start = pen;
            }
            Segment::Line { x, y } => {
                let target = Point::new(x, y);
                draw_line(pen.x, pen.y, x, y, &mut |px, py| {
                    win.propose(Point::new(px, py), sink)
                });
                pen = target;
                open = true;
            }
            Segment::Cubic {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => {
                let target = Point::new(x, y);
                cubic_points(
                    pen,
                    Point::new(c1x, c1y),
                    Point::new(c2x, c2y),
                    target,
                    &mut |p| win.propose(p, sink),
                );
                pen = target;
                open = true;
            }
            Segment::Arc {
                rx,
                ry,
                phi,
                flags,
                x,
                y,
            } => {
                let target = Point::new(x, y);
                arc_points(pen, target, rx, ry, phi, flags, &mut |p| {
                    win.propose(p, sink)
                });
                pen = target;
                open = true;
            }
            Segment::Circle { cx, cy, r } => {
                // a ring is a complete sub-path of its own
                circle_points(Point::new(cx, cy), r, &mut |p| win.propose(p, sink));
                win.propose(Point::break_marker(), sink);
                open = false;
            }
            Segment::Close => {
                if pen != start {
                    draw_line(pen.x, pen.y, start.x, start.y, &mut |px, py| {
                        win.propose(Point::new(px, py), sink)
                    });
                }
                win.propose(Point::break_marker(), sink);
                pen = start;
                open = false;
            }
        }
    }
    if open {
        win.propose(Point::break_marker(), sink);
    }
}

// ============================================================================
// Tests
// ============================================================================
