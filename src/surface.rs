#[cfg(test)]
use mockall::automock;
use crate::color::Color;

/// Anything a shape can be rasterized onto.
///
/// Implementations must silently drop points they cannot hold, shapes rely on
/// it for clipping at the canvas edges.
#[cfg_attr(test, automock)]
pub trait Surface {
    fn set_point(&mut self, x: i32, y: i32, color: &Color);
}
