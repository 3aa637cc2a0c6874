//! End-to-end rasterization scenarios exercising the whole pipeline:
//! parser, generators, smoothing, transformation and fill.

use std::collections::HashMap;

use pixel_path::{
    draw_cubic, draw_line, fill_segments, move_segments, parse_path, path_by_text,
    vector_angle, PathWidget, Point, BREAK_Y,
};

/// Render border and fill into one map; border wins where both touch.
fn render(text: &str) -> HashMap<(i16, i16), char> {
    let segments = parse_path(text);
    let mut border_px = Vec::new();
    let mut fill_px = Vec::new();
    let mut border = |x: i16, y: i16| border_px.push((x, y));
    let mut fill = |x: i16, y: i16| fill_px.push((x, y));
    fill_segments(&segments, Some(&mut border), Some(&mut fill));
    let mut grid = HashMap::new();
    for p in fill_px {
        grid.insert(p, 'F');
    }
    for p in border_px {
        grid.insert(p, 'B');
    }
    grid
}

#[test]
fn line_pixel_counts() {
    let mut count = 0;
    draw_line(5, 5, 10, 5, &mut |_x, y| {
        count += 1;
        assert_eq!(y, 5);
    });
    assert_eq!(count, 6);

    count = 0;
    draw_line(5, 5, 5, 10, &mut |x, _y| {
        count += 1;
        assert_eq!(x, 5);
    });
    assert_eq!(count, 6);

    count = 0;
    draw_line(5, 5, 20, 10, &mut |_x, _y| count += 1);
    assert_eq!(count, 16);
}

#[test]
fn cubic_reference_pixel_count() {
    let mut pixels = Vec::new();
    draw_cubic(
        Point::new(10, 10),
        Point::new(11, 2),
        Point::new(25, 18),
        Point::new(26, 10),
        &mut |x, y| {
            if y != BREAK_Y {
                pixels.push((x, y));
            }
        },
    );
    assert_eq!(pixels.len(), 19);
    assert!(pixels.contains(&(10, 10)));
    assert!(pixels.contains(&(26, 10)));
}

#[test]
fn vector_angle_diagonals() {
    assert_eq!(vector_angle(1, 1), 45);
    assert_eq!(vector_angle(-1, 1), 135);
    assert_eq!(vector_angle(-1, -1), 225);
    assert_eq!(vector_angle(1, -1), 315);
}

#[test]
fn filled_rectangle_covers_its_area() {
    // the union of border and interior is the full 8x8 square
    let grid = render("M1 1 h7 v7 h-7 z");
    assert_eq!(grid.len(), 64);
    for y in 1..=8i16 {
        for x in 1..=8i16 {
            assert!(grid.contains_key(&(x, y)), "missing ({x},{y})");
        }
    }
}

#[test]
fn filled_rectangle_at_offset() {
    let mut border_px = Vec::new();
    let mut fill_px = Vec::new();
    let mut border = |x: i16, y: i16| border_px.push((x, y));
    let mut fill = |x: i16, y: i16| fill_px.push((x, y));
    path_by_text(
        "M1 1 h7 v7 h-7 z",
        10,
        10,
        100,
        Some(&mut border),
        Some(&mut fill),
    );
    let pixels: std::collections::HashSet<(i16, i16)> =
        border_px.into_iter().chain(fill_px).collect();
    assert_eq!(pixels.len(), 64);
    assert!(pixels.contains(&(11, 11)));
    assert!(pixels.contains(&(18, 18)));
}

#[test]
fn translation_commutes_with_rasterization() {
    let text = "M4 2 h12 a4 4 0 0 1 0 8 h-12 a4 4 0 0 1 0 -8 z";
    let base = render(text);

    let mut segments = parse_path(text);
    move_segments(&mut segments, 7, 9);
    let mut border_px = Vec::new();
    let mut fill_px = Vec::new();
    let mut border = |x: i16, y: i16| border_px.push((x, y));
    let mut fill = |x: i16, y: i16| fill_px.push((x, y));
    fill_segments(&segments, Some(&mut border), Some(&mut fill));
    let mut moved = HashMap::new();
    for p in fill_px {
        moved.insert(p, 'F');
    }
    for p in border_px {
        moved.insert(p, 'B');
    }

    let shifted: HashMap<(i16, i16), char> =
        base.iter().map(|(&(x, y), &v)| ((x + 7, y + 9), v)).collect();
    assert_eq!(moved, shifted);
}

#[test]
fn scaling_scales_the_drawn_bounds() {
    let mut w = PathWidget::with_path(
        "M1 1 h7 v7 h-7 z",
        pixel_path::color::BLUE,
        pixel_path::color::TRANSPARENT,
    );
    w.scale(200);
    w.draw(|_, _, _| {});
    let (lo, hi) = w.bounding_box().unwrap();
    assert_eq!((lo.x, lo.y), (2, 2));
    assert_eq!((hi.x, hi.y), (16, 16));
}

#[test]
fn smiley_face_with_holes() {
    let smiley = concat!(
        "M24 0c-14 0-24 10-24 24 c0 14 10 24 24 24 c14 0 24-10 24-24 c0-14-10-24-24-24Z",
        "M16 12c5 0 5 7 0 7 c-5 0-5-7 0-7Z",
        "M32 12c5 0 5 7 0 7 c-5 0-5-7 0-7Z",
        "M38 32c0 1-1 2-2 3 c-6 5-12 6-19 3 c-2-2-5-3-5-6 c1-2 3 0 4 1 c4 3 9 5 15 2 c3-2 3-2 5-4 c1-1 2-1 2 1Z"
    );
    let grid = render(smiley);
    assert_eq!(grid.len(), 1770);
    // the eyes are even-odd holes
    assert!(!grid.contains_key(&(16, 15)));
    assert!(!grid.contains_key(&(32, 15)));
    // the face around them is filled
    assert_eq!(grid.get(&(24, 5)), Some(&'F'));
    assert_eq!(grid.get(&(24, 25)), Some(&'F'));
    assert_eq!(grid.get(&(5, 24)), Some(&'F'));
    assert_eq!(grid.get(&(24, 45)), Some(&'F'));
}

#[test]
fn no_unbounded_fill_anywhere() {
    for text in [
        "M2 42 l20-33 l20 38 l20 -38 l20 33 l0 -40 l-70 0 z",
        "M2 52 l60-50 v20 h20 l-30 50z",
        "M12,2h64c4,0 8,4 8,8v48c0,4 -4,8 -8,8h-64c-4,0 -8,-4 -8,-8v-48c0,-4 4,-8 8,-8z",
        "O 20 20 12",
        "M2 10 a8 5 0 1 0 16 0 a8 5 0 1 0 -16 0 z",
    ] {
        let grid = render(text);
        assert!(!grid.is_empty(), "{text}");
        let mut borders: HashMap<i16, Vec<i16>> = HashMap::new();
        for (&(x, y), &v) in grid.iter() {
            if v == 'B' {
                borders.entry(y).or_default().push(x);
            }
        }
        for (&(x, y), &v) in grid.iter() {
            if v == 'F' {
                let row = &borders[&y];
                assert!(
                    row.iter().any(|&b| b < x) && row.iter().any(|&b| b > x),
                    "{text}: unbounded fill at ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn fill_runs_are_identical_on_repeat() {
    let text = "M12,2h64c4,0 8,4 8,8v48c0,4 -4,8 -8,8h-64c-4,0 -8,-4 -8,-8v-48c0,-4 4,-8 8,-8z\
                M12,10 h60v20h-60z\
                M24,36c6,0 12,6 12,12c0,6 -6,12 -12,12c-6,0 -12,-6 -12,-12c0,-6 6,-12 12,-12z";
    assert_eq!(render(text), render(text));
}

#[test]
fn widget_draw_and_undraw_round_trip() {
    let screen: std::cell::RefCell<HashMap<(i16, i16), pixel_path::Color>> =
        std::cell::RefCell::new(HashMap::new());
    let white = pixel_path::color::WHITE;

    let mut widget = PathWidget::with_path(
        "M1 1 h7 v7 h-7 z",
        pixel_path::color::RED,
        pixel_path::color::YELLOW,
    );
    widget.scale(300);
    widget.rotate(25, 0, 0);
    widget.move_by(40, 10);
    widget.draw_with_background(
        |x, y, c| {
            screen.borrow_mut().insert((x, y), c);
        },
        |x, y| *screen.borrow().get(&(x, y)).unwrap_or(&white),
    );
    assert!(!screen.borrow().is_empty());

    widget.undraw(|x, y, c| {
        screen.borrow_mut().insert((x, y), c);
    });
    assert!(screen.borrow().values().all(|&c| c == white));
}
