//! Player pose: continuous position and heading.

/// Unit direction vector for a heading angle.
///
/// Heading 0 points toward increasing y. Movement and ray casting both use
/// this mapping; sharing one function keeps collision and rendering from
/// drifting out of sync.
#[inline]
pub fn heading_vector(angle: f32) -> (f32, f32) {
    (angle.sin(), angle.cos())
}

/// Player position and orientation.
///
/// `x` and `y` are continuous grid coordinates (fractional parts are the
/// offset within a cell). `heading` is radians and deliberately unbounded;
/// display code normalizes it where a bounded range is needed, the math here
/// never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Unit direction vector of the current heading.
    pub fn direction(&self) -> (f32, f32) {
        heading_vector(self.heading)
    }
}
