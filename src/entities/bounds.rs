/// Axis-aligned bounding box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Overlap on both axes. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Anything with a bounding box can take part in collision checks.
pub trait Collider {
    fn bounds(&self) -> Bounds;

    fn collides_with<C: Collider + ?Sized>(&self, other: &C) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

impl Collider for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}
