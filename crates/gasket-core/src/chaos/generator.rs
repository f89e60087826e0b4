use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::math::Vec2;

use super::Triangle;

/// Source of vertex choices for the chaos game.
///
/// Production pickers must be uniform over `{0, 1, 2}`; returning anything
/// outside that range is a programming error. Injecting the picker keeps the
/// generator deterministic under test.
pub trait VertexPicker {
    /// Returns the index of the vertex to step toward, in `0..3`.
    fn pick(&mut self) -> usize;
}

/// Uniform random picker over the three triangle vertices.
#[derive(Debug, Clone)]
pub struct UniformPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformPicker<R> {
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformPicker<ThreadRng> {
    /// Picker backed by the thread-local RNG; not reproducible across runs.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl UniformPicker<StdRng> {
    /// Deterministic picker for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VertexPicker for UniformPicker<R> {
    #[inline]
    fn pick(&mut self) -> usize {
        self.rng.gen_range(0..3)
    }
}

/// Chaos-game configuration: attractor triangle, interior seed point, and
/// target point count.
///
/// Replaces ambient globals with an explicit value passed to the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosGame {
    triangle: Triangle,
    seed_point: Vec2,
    point_count: usize,
}

impl ChaosGame {
    pub const DEFAULT_POINT_COUNT: usize = 20_000;

    /// Interior seed used with the default triangle.
    pub const DEFAULT_SEED_POINT: Vec2 = Vec2::new(0.25, 0.5);

    /// Builds a configuration seeded at the triangle's centroid, which is
    /// guaranteed interior. Use [`with_seed_point`](Self::with_seed_point)
    /// to pick a different starting point.
    pub fn new(triangle: Triangle, point_count: usize) -> Self {
        let seed_point = triangle.centroid();
        Self {
            triangle,
            seed_point,
            point_count,
        }
    }

    /// Overrides the starting point.
    ///
    /// A seed outside the triangle's hull still converges; only the first
    /// few points are visibly off the attractor.
    pub fn with_seed_point(mut self, seed_point: Vec2) -> Self {
        self.seed_point = seed_point;
        self
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    #[inline]
    pub fn seed_point(&self) -> Vec2 {
        self.seed_point
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Materializes the full point sequence.
    ///
    /// `points[0]` is the seed; each following point is the midpoint between
    /// its predecessor and a picked vertex. Early points not yet on the
    /// attractor are emitted as-is — no rejection, no burn-in discard.
    ///
    /// A count of 0 yields an empty buffer; 1 yields just the seed.
    pub fn generate<P: VertexPicker>(&self, picker: &mut P) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.point_count);
        if self.point_count == 0 {
            return points;
        }

        points.push(self.seed_point);

        for _ in 1..self.point_count {
            let j = picker.pick();
            debug_assert!(j < 3, "VertexPicker returned {j}, expected 0..3");

            let prev = points[points.len() - 1];
            points.push((prev + self.triangle.vertex(j)) / 2.0);
        }

        points
    }
}

/// The original demo's setup: default triangle, seed (0.25, 0.50), 20 000
/// points.
impl Default for ChaosGame {
    fn default() -> Self {
        Self::new(Triangle::default(), Self::DEFAULT_POINT_COUNT)
            .with_seed_point(Self::DEFAULT_SEED_POINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double replaying a fixed vertex sequence, cycling at the end.
    struct ScriptedPicker {
        script: Vec<usize>,
        next: usize,
    }

    impl ScriptedPicker {
        fn new(script: &[usize]) -> Self {
            Self {
                script: script.to_vec(),
                next: 0,
            }
        }
    }

    impl VertexPicker for ScriptedPicker {
        fn pick(&mut self) -> usize {
            let j = self.script[self.next % self.script.len()];
            self.next += 1;
            j
        }
    }

    // ── reference sequence ────────────────────────────────────────────────

    #[test]
    fn scripted_run_matches_reference_sequence() {
        let game = ChaosGame::new(Triangle::default(), 5)
            .with_seed_point(Vec2::new(0.25, 0.5));
        let points = game.generate(&mut ScriptedPicker::new(&[1, 0, 2, 1]));

        // Every value here is dyadic, so the midpoints are exact in f32.
        assert_eq!(
            points,
            vec![
                Vec2::new(0.25, 0.5),
                Vec2::new(0.125, 0.75),
                Vec2::new(-0.4375, -0.125),
                Vec2::new(0.28125, -0.5625),
                Vec2::new(0.140625, 0.21875),
            ]
        );
    }

    // ── degenerate counts ─────────────────────────────────────────────────

    #[test]
    fn zero_count_yields_empty_sequence() {
        let game = ChaosGame::new(Triangle::default(), 0);
        assert!(game.generate(&mut ScriptedPicker::new(&[0])).is_empty());
    }

    #[test]
    fn count_of_one_yields_just_the_seed() {
        let game = ChaosGame::new(Triangle::default(), 1)
            .with_seed_point(Vec2::new(0.25, 0.5));
        let points = game.generate(&mut ScriptedPicker::new(&[2]));
        assert_eq!(points, vec![Vec2::new(0.25, 0.5)]);
    }

    // ── contraction ───────────────────────────────────────────────────────

    #[test]
    fn points_stay_within_hull_of_predecessor_and_vertices() {
        let game = ChaosGame::default();
        let points = game.generate(&mut UniformPicker::seeded(42));
        assert_eq!(points.len(), ChaosGame::DEFAULT_POINT_COUNT);

        let (tmin, tmax) = game.triangle().bounds();
        for window in points.windows(2) {
            let (prev, next) = (window[0], window[1]);
            let min_x = tmin.x.min(prev.x);
            let min_y = tmin.y.min(prev.y);
            let max_x = tmax.x.max(prev.x);
            let max_y = tmax.y.max(prev.y);
            assert!(next.x >= min_x && next.x <= max_x, "x escaped hull: {next:?}");
            assert!(next.y >= min_y && next.y <= max_y, "y escaped hull: {next:?}");
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let game = ChaosGame::default();
        let a = game.generate(&mut UniformPicker::seeded(7));
        let b = game.generate(&mut UniformPicker::seeded(7));
        assert_eq!(a, b);
    }

    // ── picker contract ───────────────────────────────────────────────────

    #[test]
    fn uniform_picker_stays_in_range_and_hits_every_vertex() {
        let mut picker = UniformPicker::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            let j = picker.pick();
            assert!(j < 3);
            seen[j] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn default_reproduces_original_demo_setup() {
        let game = ChaosGame::default();
        assert_eq!(game.point_count(), 20_000);
        assert_eq!(game.seed_point(), Vec2::new(0.25, 0.5));
        assert_eq!(*game.triangle(), Triangle::default());
    }

    #[test]
    fn new_seeds_at_the_centroid() {
        let t = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(6.0, 0.0),
            Vec2::new(0.0, 6.0),
        );
        let game = ChaosGame::new(t, 10);
        assert_eq!(game.seed_point(), Vec2::new(2.0, 2.0));
        assert!(t.contains(game.seed_point()));
    }
}
