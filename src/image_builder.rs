use log::debug;
use crate::color::Color;
use crate::frame::Frame;
use crate::random::RandomSource;
use crate::rasterizer::{draw_box, draw_circle, draw_line, draw_solid_box};

pub const IMAGE_WIDTH: usize = 256;
pub const IMAGE_HEIGHT: usize = 256;
const SHAPE_GROUPS: usize = 5;
const MAX_CHANNEL: u32 = 255;
const MAX_COORDINATE: u32 = 255;
const CIRCLE_MIN_CENTER: u32 = 55;
const CIRCLE_MIN_RADIUS: u32 = 3;
const CIRCLE_MAX_RADIUS: u32 = 255;

pub fn random_color(random: &mut dyn RandomSource) -> Color {
    let r = random.draw_number(0, MAX_CHANNEL) as i32;
    let g = random.draw_number(0, MAX_CHANNEL) as i32;
    let b = random.draw_number(0, MAX_CHANNEL) as i32;
    Color::new(r, g, b)
}

// origin anywhere on the canvas, size keeps the far edge inside it
fn random_rect(random: &mut dyn RandomSource) -> (i32, i32, i32, i32) {
    let x = random.draw_number(0, MAX_COORDINATE);
    let y = random.draw_number(0, MAX_COORDINATE);
    let w = random.draw_number(1, IMAGE_WIDTH as u32 - x);
    let h = random.draw_number(1, IMAGE_HEIGHT as u32 - y);
    (x as i32, y as i32, w as i32, h as i32)
}

fn draw_shape_group(frame: &mut Frame, random: &mut dyn RandomSource, group: usize) {
    let color = random_color(random);

    let x1 = random.draw_number(0, MAX_COORDINATE) as i32;
    let y1 = random.draw_number(0, MAX_COORDINATE) as i32;
    let x2 = random.draw_number(0, MAX_COORDINATE) as i32;
    let y2 = random.draw_number(0, MAX_COORDINATE) as i32;
    debug!("group {}: {} line ({}, {}) -> ({}, {})", group, color, x1, y1, x2, y2);
    draw_line(frame, x1, y1, x2, y2, &color);

    let (x, y, w, h) = random_rect(random);
    debug!("group {}: box at ({}, {}) size {}x{}", group, x, y, w, h);
    draw_box(frame, x, y, w, h, &color);

    let (x, y, w, h) = random_rect(random);
    debug!("group {}: solid box at ({}, {}) size {}x{}", group, x, y, w, h);
    draw_solid_box(frame, x, y, w, h, &color);

    let cx = random.draw_number(CIRCLE_MIN_CENTER, MAX_COORDINATE) as i32;
    let cy = random.draw_number(CIRCLE_MIN_CENTER, MAX_COORDINATE) as i32;
    let radius = random.draw_number(CIRCLE_MIN_RADIUS, CIRCLE_MAX_RADIUS) as i32;
    let solid = random.draw_bool();
    debug!("group {}: circle at ({}, {}) radius {} solid: {}", group, cx, cy, radius, solid);
    draw_circle(frame, cx, cy, radius, &color, solid);
}

/// Draws the randomized shape groups onto a fresh, zeroed frame.
pub fn build_image(random: &mut dyn RandomSource) -> Frame {
    let mut frame = Frame::new(IMAGE_WIDTH, IMAGE_HEIGHT);

    for group in 0..SHAPE_GROUPS {
        draw_shape_group(&mut frame, random, group);
    }

    frame
}
