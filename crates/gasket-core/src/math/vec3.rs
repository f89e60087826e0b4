use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::{DIVIDE_EPSILON, ParseVecError};

/// 3D vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`; near-zero length normalizes
    /// to the zero vector.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Components as a contiguous read-only slice, in declaration order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_ref::<Self, [f32; 3]>(self)
    }

    /// Components as a contiguous mutable slice, in declaration order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_mut::<Self, [f32; 3]>(self)
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    /// Saturating division: a divisor below [`DIVIDE_EPSILON`] in magnitude
    /// yields the zero vector.
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        if rhs.abs() < DIVIDE_EPSILON {
            return Vec3::zero();
        }
        self * rhs.recip()
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    // Multiplies each component; scale-in-place is a true scale.
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ── indexing ──────────────────────────────────────────────────────────────

impl Index<usize> for Vec3 {
    type Output = f32;
    /// Bounds-checked component access; panics for `index >= 3`.
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 component index out of range: {index}"),
        }
    }
}

// ── formatting ────────────────────────────────────────────────────────────

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3 {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = super::parse_components::<3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_sub_neg_scale() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vec3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vec3::new(0.5, 3.0, 1.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn scale_in_place_multiplies() {
        // Guards against add-instead-of-multiply regressions in *=.
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v *= 3.0;
        assert_eq!(v, Vec3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn divide_by_near_zero_saturates() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(v / 0.0, Vec3::zero());
        assert_eq!(v / 5.0e-8, Vec3::zero());
        let mut w = v;
        w /= 0.0;
        assert_eq!(w, Vec3::zero());
    }

    // ── dot / length / normalize ──────────────────────────────────────────

    #[test]
    fn dot_is_commutative() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(4.0, 3.0, -1.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec3::new(1.0, 2.0, -2.0).normalized();
        assert!((n.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec3::zero().normalized(), Vec3::zero());
    }

    // ── cross product ─────────────────────────────────────────────────────

    #[test]
    fn cross_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -(b.cross(a)));
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < EPS);
        assert!(c.dot(b).abs() < EPS);
    }

    // ── indexing / formatting ─────────────────────────────────────────────

    #[test]
    fn index_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let _ = Vec3::zero()[3];
    }

    #[test]
    fn display_round_trips_through_parse() {
        let v = Vec3::new(0.5, -1.25, 3.0);
        assert_eq!(v.to_string(), "( 0.5, -1.25, 3 )");
        let back: Vec3 = v.to_string().parse().unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn raw_view_declaration_order() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).as_slice(), &[1.0, 2.0, 3.0]);
    }
}
