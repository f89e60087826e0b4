use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use super::{DIVIDE_EPSILON, ParseVecError, Vec3};

/// 4D homogeneous vector.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
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

    /// Right-handed cross product of the xyz parts; `w` is ignored and the
    /// result is 3D.
    #[inline]
    pub fn cross(self, rhs: Self) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Components as a contiguous read-only slice, in declaration order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        bytemuck::cast_ref::<Self, [f32; 4]>(self)
    }

    /// Components as a contiguous mutable slice, in declaration order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        bytemuck::cast_mut::<Self, [f32; 4]>(self)
    }
}

/// Widens a point to homogeneous coordinates with `w = 1.0`.
impl From<Vec3> for Vec4 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }
}

// ── arithmetic ────────────────────────────────────────────────────────────

impl Neg for Vec4 {
    type Output = Vec4;
    #[inline]
    fn neg(self) -> Vec4 {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    #[inline]
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    #[inline]
    fn sub(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: f32) -> Vec4 {
        Vec4::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;
    /// Saturating division: a divisor below [`DIVIDE_EPSILON`] in magnitude
    /// yields the zero vector.
    #[inline]
    fn div(self, rhs: f32) -> Vec4 {
        if rhs.abs() < DIVIDE_EPSILON {
            return Vec4::zero();
        }
        self * rhs.recip()
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec4) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec4) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ── indexing ──────────────────────────────────────────────────────────────

impl Index<usize> for Vec4 {
    type Output = f32;
    /// Bounds-checked component access; panics for `index >= 4`.
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 component index out of range: {index}"),
        }
    }
}

// ── formatting ────────────────────────────────────────────────────────────

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {}, {} )", self.x, self.y, self.z, self.w)
    }
}

impl FromStr for Vec4 {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z, w] = super::parse_components::<4>(s)?;
        Ok(Self::new(x, y, z, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn widen_from_vec3_defaults_w_to_one() {
        let v = Vec4::from(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn divide_by_near_zero_saturates() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v / 0.0, Vec4::zero());
        assert_eq!(v / -3.0e-8, Vec4::zero());
    }

    #[test]
    fn dot_is_commutative() {
        let a = Vec4::new(1.0, -2.0, 0.5, 2.0);
        let b = Vec4::new(4.0, 3.0, -1.0, 0.25);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec4::new(1.0, -1.0, 2.0, 0.5).normalized();
        assert!((n.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn cross_ignores_w_and_is_anti_commutative() {
        let a = Vec4::new(1.0, 2.0, 3.0, 9.0);
        let b = Vec4::new(-4.0, 0.5, 2.0, -7.0);
        let a3 = Vec3::new(1.0, 2.0, 3.0);
        let b3 = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), a3.cross(b3));
        assert_eq!(a.cross(b), -(b.cross(a)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let v = Vec4::new(0.5, -1.25, 3.0, 1.0);
        assert_eq!(v.to_string(), "( 0.5, -1.25, 3, 1 )");
        let back: Vec4 = v.to_string().parse().unwrap();
        assert_eq!(back, v);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let _ = Vec4::zero()[4];
    }

    #[test]
    fn raw_view_declaration_order() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
