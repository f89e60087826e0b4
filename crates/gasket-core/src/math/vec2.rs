use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::{DIVIDE_EPSILON, ParseVecError};

/// 2D vector; the element type of the generated point cloud.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A near-zero-length vector normalizes to the zero vector (the division
    /// guard, see [`DIVIDE_EPSILON`]).
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Components as a contiguous read-only slice, in declaration order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_ref::<Self, [f32; 2]>(self)
    }

    /// Components as a contiguous mutable slice, in declaration order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_mut::<Self, [f32; 2]>(self)
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    /// Saturating division: a divisor below [`DIVIDE_EPSILON`] in magnitude
    /// yields the zero vector.
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        if rhs.abs() < DIVIDE_EPSILON {
            return Vec2::zero();
        }
        self * rhs.recip()
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ── indexing ──────────────────────────────────────────────────────────────

impl Index<usize> for Vec2 {
    type Output = f32;
    /// Bounds-checked component access; panics for `index >= 2`.
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 component index out of range: {index}"),
        }
    }
}

// ── formatting ────────────────────────────────────────────────────────────

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.x, self.y)
    }
}

impl FromStr for Vec2 {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = super::parse_components::<2>(s)?;
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_sub_neg() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);
        assert_eq!(a + b, Vec2::new(-2.0, 2.5));
        assert_eq!(a - b, Vec2::new(4.0, 1.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn scale() {
        assert_eq!(Vec2::new(1.5, -2.0) * 2.0, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn in_place_ops() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(0.5, 1.0);
        assert_eq!(v, Vec2::new(1.5, 2.0));
        v *= 2.0;
        assert_eq!(v, Vec2::new(3.0, 4.0));
        v /= 2.0;
        assert_eq!(v, Vec2::new(1.5, 2.0));
    }

    // ── saturating division ───────────────────────────────────────────────

    #[test]
    fn divide_by_near_zero_saturates() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(v / 0.0, Vec2::zero());
        assert_eq!(v / 9.0e-8, Vec2::zero());
        assert_eq!(v / -9.0e-8, Vec2::zero());
    }

    #[test]
    fn divide_regular() {
        let v = Vec2::new(3.0, -4.0) / 2.0;
        assert_eq!(v, Vec2::new(1.5, -2.0));
    }

    #[test]
    fn divide_assign_near_zero_saturates() {
        let mut v = Vec2::new(3.0, -4.0);
        v /= 0.0;
        assert_eq!(v, Vec2::zero());
    }

    // ── dot / length / normalize ──────────────────────────────────────────

    #[test]
    fn dot_is_commutative() {
        let a = Vec2::new(1.25, -3.0);
        let b = Vec2::new(0.5, 7.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn length_pythagorean() {
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < EPS);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec2::zero().normalized(), Vec2::zero());
    }

    // ── indexing / raw view ───────────────────────────────────────────────

    #[test]
    fn index_components() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let _ = Vec2::zero()[2];
    }

    #[test]
    fn raw_view_declaration_order() {
        let mut v = Vec2::new(1.0, 2.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        v.as_mut_slice()[1] = 5.0;
        assert_eq!(v, Vec2::new(1.0, 5.0));
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn display_format() {
        assert_eq!(Vec2::new(0.25, -1.0).to_string(), "( 0.25, -1 )");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let v = Vec2::new(0.125, -7.5);
        let back: Vec2 = v.to_string().parse().unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn parse_without_parens() {
        let v: Vec2 = "1.5 -2".parse().unwrap();
        assert_eq!(v, Vec2::new(1.5, -2.0));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!("( 1, 2, 3 )".parse::<Vec2>().is_err());
        assert!("( 1 )".parse::<Vec2>().is_err());
        assert!("( a, b )".parse::<Vec2>().is_err());
    }
}
