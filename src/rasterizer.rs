use log::trace;
use crate::color::Color;
use crate::surface::Surface;
use crate::util::order_pair;

/// One pixel wide rectangle border covering `[x, x+w) x [y, y+h)`.
pub fn draw_box(surface: &mut dyn Surface, x: i32, y: i32, w: i32, h: i32, color: &Color) {
    trace!("box at ({}, {}) size {}x{} {}", x, y, w, h, color);

    let right = x.saturating_add(w).saturating_sub(1);
    let bottom = y.saturating_add(h).saturating_sub(1);

    for dx in x..x.saturating_add(w) {
        surface.set_point(dx, y, color);
        surface.set_point(dx, bottom, color);
    }

    // corners already drawn by the rows
    for dy in y.saturating_add(1)..bottom {
        surface.set_point(x, dy, color);
        surface.set_point(right, dy, color);
    }
}

pub fn draw_solid_box(surface: &mut dyn Surface, x: i32, y: i32, w: i32, h: i32, color: &Color) {
    trace!("solid box at ({}, {}) size {}x{} {}", x, y, w, h, color);

    for dx in x..x.saturating_add(w) {
        for dy in y..y.saturating_add(h) {
            surface.set_point(dx, dy, color);
        }
    }
}

/// Steps along the dominant axis, the minor coordinate is the slope product truncated
/// toward zero. Both axes are ordered independently, so a line going up-right is drawn
/// as if it went down-right. The far endpoint is never plotted.
pub fn draw_line(surface: &mut dyn Surface, mut x1: i32, mut y1: i32, mut x2: i32, mut y2: i32, color: &Color) {
    order_pair(&mut x1, &mut x2);
    order_pair(&mut y1, &mut y2);

    let w = x2.saturating_sub(x1);
    let h = y2.saturating_sub(y1);

    if w == 0 && h == 0 {
        return;
    }

    trace!("line ({}, {}) -> ({}, {}) {}", x1, y1, x2, y2, color);

    if w < h {
        let m = w as f32 / h as f32;
        for dy in 0..h {
            let dx = (dy as f32 * m) as i32;
            surface.set_point(x1.saturating_add(dx), y1.saturating_add(dy), color);
        }
    } else {
        let m = h as f32 / w as f32;
        for dx in 0..w {
            let dy = (dx as f32 * m) as i32;
            surface.set_point(x1.saturating_add(dx), y1.saturating_add(dy), color);
        }
    }
}

/// Midpoint circle. A solid circle is filled with four `draw_line` spans per step
/// instead of the eight octant points.
pub fn draw_circle(surface: &mut dyn Surface, x0: i32, y0: i32, radius: i32, color: &Color, solid: bool) {
    trace!("circle at ({}, {}) radius {} solid: {} {}", x0, y0, radius, solid, color);

    let at = |dx: i32, dy: i32| (x0.saturating_add(dx), y0.saturating_add(dy));

    let mut x = radius;
    let mut y = 0;
    let mut radius_error = 1 - i64::from(x);

    while x >= y {
        if solid {
            for (from, to) in [((-y, -x), (y, -x)), ((-x, -y), (x, -y)), ((-x, y), (x, y)), ((-y, x), (y, x))] {
                let (x1, y1) = at(from.0, from.1);
                let (x2, y2) = at(to.0, to.1);
                draw_line(surface, x1, y1, x2, y2, color);
            }
        } else {
            for (dx, dy) in [(x, y), (y, x), (-x, y), (-y, x), (-x, -y), (-y, -x), (x, -y), (y, -x)] {
                let (px, py) = at(dx, dy);
                surface.set_point(px, py, color);
            }
        }

        y += 1;
        if radius_error < 0 {
            radius_error += 2 * i64::from(y) + 1;
        } else {
            x -= 1;
            radius_error += 2 * (i64::from(y) - i64::from(x) + 1);
        }
    }
}
