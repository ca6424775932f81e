use crate::color::Color;
use crate::surface::Surface;

/// Flat RGB buffer, one `i32` per channel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pixels: Vec<i32>,
    width: usize,
    height: usize,
}

impl Frame {

    pub fn new(width: usize, height: usize) -> Self {
        Frame {
            pixels: vec![0; width * height * 3],
            width,
            height
        }
    }

    pub fn pixels(&self) -> &[i32] {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // x = 0 and y = 0 are rejected too, generated images never touch the first row or column.
    pub fn is_point_in_boundary(&self, x: i32, y: i32) -> bool {
        x > 0 && (x as usize) < self.width && y > 0 && (y as usize) < self.height
    }

    pub fn get_point(&self, x: usize, y: usize) -> (i32, i32, i32) {
        let index = 3 * (y * self.width + x);

        (self.pixels[index], self.pixels[index + 1], self.pixels[index + 2])
    }
}

impl Surface for Frame {
    fn set_point(&mut self, x: i32, y: i32, color: &Color) {
        if !self.is_point_in_boundary(x, y) {
            return;
        }

        let index = 3 * (y as usize * self.width + x as usize);

        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }
}
