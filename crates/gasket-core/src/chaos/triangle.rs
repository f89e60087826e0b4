use crate::math::Vec2;

/// The three attractor vertices of the chaos game, fixed for a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vec2; 3],
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    #[inline]
    pub const fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    /// Bounds-checked vertex access; panics for `index >= 3`.
    #[inline]
    pub fn vertex(&self, index: usize) -> Vec2 {
        self.vertices[index]
    }

    /// Arithmetic mean of the vertices; always interior for a non-degenerate
    /// triangle, which makes it a safe chaos-game seed.
    #[inline]
    pub fn centroid(&self) -> Vec2 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    /// Membership test for the closed triangle (edges count as inside).
    pub fn contains(&self, p: Vec2) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = edge_sign(p, a, b);
        let d2 = edge_sign(p, b, c);
        let d3 = edge_sign(p, c, a);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }

    /// Axis-aligned bounding box of the vertices as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let [a, b, c] = self.vertices;
        (
            Vec2::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Vec2::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }
}

/// The attractor used by the original gasket demo, spanning NDC.
impl Default for Triangle {
    fn default() -> Self {
        Self::new(
            Vec2::new(-1.0, -1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, -1.0),
        )
    }
}

fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}
