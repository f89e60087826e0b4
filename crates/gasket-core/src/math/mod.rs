//! Fixed-size vector math shared by the generator and the renderer.
//!
//! Conventions:
//! - Components are `f32` in declaration order, `#[repr(C)]` and `Pod`, so a
//!   slice of vectors doubles as raw GPU vertex data without copying.
//! - Division saturates: a divisor whose magnitude is below
//!   [`DIVIDE_EPSILON`] yields the zero vector instead of producing an
//!   infinity or NaN. Normalization inherits the same guard through its
//!   division by the length.

mod error;
mod vec2;
mod vec3;
mod vec4;

pub use error::ParseVecError;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Divisor magnitudes below this are treated as degenerate; the quotient is
/// the zero vector.
pub const DIVIDE_EPSILON: f32 = 1e-7;

/// Flattens a point buffer into its component floats, in generation order.
///
/// Zero-copy; the returned slice aliases `points` and has `2 * points.len()`
/// entries laid out `x0, y0, x1, y1, ..`.
#[inline]
pub fn as_components(points: &[Vec2]) -> &[f32] {
    bytemuck::cast_slice(points)
}

/// Parses `N` float components from `( a, b, .. )`-style text.
///
/// Parentheses are optional; components may be separated by commas and/or
/// whitespace, matching the inverse of the `Display` format.
pub(crate) fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], ParseVecError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let mut out = [0.0f32; N];
    let mut found = 0usize;

    for token in inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if found == N {
            return Err(ParseVecError::new(format!(
                "expected {N} components, found more in {s:?}"
            )));
        }
        out[found] = token
            .parse::<f32>()
            .map_err(|_| ParseVecError::new(format!("invalid component {token:?}")))?;
        found += 1;
    }

    if found != N {
        return Err(ParseVecError::new(format!(
            "expected {N} components, found {found} in {s:?}"
        )));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_components_flattens_in_generation_order() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        assert_eq!(as_components(&points), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn as_components_of_empty_buffer_is_empty() {
        assert!(as_components(&[]).is_empty());
    }
}
