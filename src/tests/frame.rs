use crate::color::Color;
use crate::frame::Frame;
use crate::surface::Surface;
use crate::tests::init;

const COLOR: Color = Color { r: 12, g: 34, b: 56 };

#[test]
fn new_frame_is_zeroed_with_three_channels_per_pixel() {
    init();

    // Act
    let frame = Frame::new(256, 256);

    // Assert
    assert_eq!(frame.pixels().len(), 3 * 256 * 256);
    assert!(frame.pixels().iter().all(|&channel| channel == 0));
    assert_eq!(frame.width(), 256);
    assert_eq!(frame.height(), 256);
}

#[test]
fn should_read_back_point_written_in_bounds() {
    init();

    // Arrange
    let mut frame = Frame::new(256, 256);

    for &(x, y) in &[(1, 1), (255, 255), (1, 255), (255, 1), (128, 37)] {
        // Act
        frame.set_point(x, y, &COLOR);

        // Assert
        assert_eq!(frame.get_point(x as usize, y as usize), (COLOR.r, COLOR.g, COLOR.b));
    }
}

#[test]
fn should_store_channels_at_row_major_index() {
    init();

    // Arrange
    let mut frame = Frame::new(256, 256);

    // Act
    frame.set_point(3, 2, &COLOR);

    // Assert
    let index = 3 * (2 * 256 + 3);
    assert_eq!(&frame.pixels()[index..index + 3], &[12, 34, 56]);
}

#[test]
fn should_ignore_points_outside_the_writable_area() {
    init();

    // Arrange
    let mut frame = Frame::new(256, 256);
    frame.set_point(10, 10, &COLOR);
    let snapshot = frame.clone();

    // Act
    for &(x, y) in &[(0, 10), (10, 0), (0, 0), (-1, 10), (10, -1), (256, 10), (10, 256), (i32::MIN, i32::MAX)] {
        frame.set_point(x, y, &Color::new(255, 255, 255));
    }

    // Assert
    assert_eq!(frame, snapshot);
}

#[test]
fn should_use_explicit_width_for_non_square_frames() {
    init();

    // Arrange
    let mut frame = Frame::new(4, 3);

    // Act
    frame.set_point(3, 2, &COLOR);
    frame.set_point(4, 2, &COLOR);
    frame.set_point(3, 3, &COLOR);

    // Assert
    assert_eq!(frame.get_point(3, 2), (12, 34, 56));
    assert_eq!(frame.pixels().iter().filter(|&&channel| channel != 0).count(), 3);
}

#[test]
fn should_not_clamp_channel_values() {
    init();

    // Arrange
    let mut frame = Frame::new(8, 8);

    // Act
    frame.set_point(2, 2, &Color::new(300, -1, 256));

    // Assert
    assert_eq!(frame.get_point(2, 2), (300, -1, 256));
}
