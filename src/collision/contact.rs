use glam::Vec2;

/// Overlap between two bodies, identified by their flattened indices.
///
/// `index_a < index_b` always holds; `normal` points from A toward B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub index_a: usize,
    pub index_b: usize,
    pub normal: Vec2,
    /// Distance between the two centers.
    pub distance: f32,
    /// How far the discs interpenetrate (`radius_a + radius_b - distance`).
    pub overlap: f32,
}

impl Contact {
    /// Whether the centers coincided and the normal is the fallback axis.
    pub fn is_degenerate(&self) -> bool {
        self.distance == 0.0
    }
}
