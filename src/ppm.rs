use crate::frame::Frame;

pub const PPM_MAGIC: &str = "P3";
pub const PPM_MAX_VALUE: i32 = 255;

/// Plain-text PPM: magic, dimensions, max value, then one `r g b` line per pixel,
/// row-major from the top-left. Channels are written as stored.
pub fn encode(frame: &Frame) -> String {
    let mut data = String::with_capacity(frame.pixels().len() * 4 + 16);

    data.push_str(&format!("{}\n{} {}\n{}\n", PPM_MAGIC, frame.width(), frame.height(), PPM_MAX_VALUE));

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let (r, g, b) = frame.get_point(x, y);
            data.push_str(&format!("{} {} {}\n", r, g, b));
        }
    }

    data
}
