use {
    super::Canvas,
    crate::basis::{BoundingBox, Color, BACKGROUND, CANVAS_SIZE, FOREGROUND},
    rand::prelude::*,
};

fn distance_from_center(x: u32, y: u32) -> f64 {
    let c = CANVAS_SIZE as f64 / 2.0;
    let dx = x as f64 + 0.5 - c;
    let dy = y as f64 + 0.5 - c;
    (dx * dx + dy * dy).sqrt()
}

#[test]
fn new_fills_whole_canvas() {
    let canvas = Canvas::new(8, BACKGROUND);
    assert_eq!(canvas.size(), 8);
    assert!(canvas.as_image().pixels().all(|p| Color::from(*p) == BACKGROUND));
}

#[test]
fn icon_has_only_two_colors() {
    let canvas = Canvas::icon();
    assert_eq!(canvas.as_image().dimensions(), (CANVAS_SIZE, CANVAS_SIZE));

    let mut background = 0;
    let mut foreground = 0;
    for p in canvas.as_image().pixels() {
        match Color::from(*p) {
            BACKGROUND => background += 1,
            FOREGROUND => foreground += 1,
            c => panic!("unexpected color {:?}", c),
        }
    }
    assert!(background > 0);
    assert!(foreground > 0);
}

#[test]
fn icon_circle_geometry() {
    let canvas = Canvas::icon();

    // fixed rng for stabilize test results
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..4096 {
        let x = rng.gen_range(0..CANVAS_SIZE);
        let y = rng.gen_range(0..CANVAS_SIZE);
        let d = distance_from_center(x, y);
        if d < 47.5 {
            assert_eq!(canvas.pixel(x, y), FOREGROUND, "({}, {}) d={}", x, y, d);
        } else if d > 48.5 {
            assert_eq!(canvas.pixel(x, y), BACKGROUND, "({}, {}) d={}", x, y, d);
        }
    }
}

#[test]
fn icon_margin_is_background() {
    let canvas = Canvas::icon();
    for i in 0..CANVAS_SIZE {
        for j in 0..16 {
            assert_eq!(canvas.pixel(i, j), BACKGROUND);
            assert_eq!(canvas.pixel(j, i), BACKGROUND);
            assert_eq!(canvas.pixel(i, CANVAS_SIZE - 1 - j), BACKGROUND);
            assert_eq!(canvas.pixel(CANVAS_SIZE - 1 - j, i), BACKGROUND);
        }
    }
}

#[test]
fn icon_circle_is_symmetric() {
    let canvas = Canvas::icon();
    let last = CANVAS_SIZE - 1;
    for y in 0..CANVAS_SIZE {
        for x in 0..CANVAS_SIZE {
            let p = canvas.pixel(x, y);
            assert_eq!(p, canvas.pixel(last - x, y));
            assert_eq!(p, canvas.pixel(x, last - y));
            assert_eq!(p, canvas.pixel(y, x));
        }
    }
    // widest row spans the full diameter
    assert_eq!(canvas.pixel(16, 63), FOREGROUND);
    assert_eq!(canvas.pixel(111, 64), FOREGROUND);
}

#[test]
fn ellipse_is_clipped_to_canvas() {
    let mut canvas = Canvas::new(4, BACKGROUND);
    canvas.fill_ellipse(BoundingBox::new(0, 0, 8, 8), FOREGROUND);
    // only the quarter of the ellipse overlapping the canvas is painted
    assert_eq!(canvas.pixel(3, 3), FOREGROUND);
    assert_eq!(canvas.pixel(0, 0), BACKGROUND);
}

#[test]
fn empty_ellipse_paints_nothing() {
    let mut canvas = Canvas::new(4, BACKGROUND);
    canvas.fill_ellipse(BoundingBox::new(2, 0, 2, 4), FOREGROUND);
    assert!(canvas.as_image().pixels().all(|p| Color::from(*p) == BACKGROUND));
}

#[test]
fn inverted_ellipse_paints_nothing() {
    let mut canvas = Canvas::new(8, BACKGROUND);
    let bbox = BoundingBox {
        left: 6,
        top: 1,
        right: 2,
        bottom: 7,
    };
    canvas.fill_ellipse(bbox, FOREGROUND);
    assert!(canvas.as_image().pixels().all(|p| Color::from(*p) == BACKGROUND));
}
