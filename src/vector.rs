use nalgebra::Vector2;

pub type Vec2 = Vector2<f64>;

/// Unit vector pointing at `angle` radians from the x axis.
pub fn unit(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Like `normalize`, but the zero vector maps to itself.
pub fn normalize_or_zero(v: &Vec2) -> Vec2 {
    let norm = v.norm();
    if norm == 0. {
        return *v;
    }
    v / norm
}

/// Shortens `v` to `max_norm` if it is longer, keeping its direction.
pub fn clamp_norm(v: &Vec2, max_norm: f64) -> Vec2 {
    if v.norm() > max_norm {
        return normalize_or_zero(v) * max_norm;
    }
    *v
}

pub fn angle_of(v: &Vec2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn zero_vector_normalizes_to_itself() {
        assert_eq!(normalize_or_zero(&Vec2::zeros()), Vec2::zeros());
        assert_relative_eq!(normalize_or_zero(&Vec2::new(3., 4.)), Vec2::new(0.6, 0.8));
    }

    #[test]
    fn clamp_keeps_short_vectors() {
        let v = Vec2::new(3., 4.);
        assert_eq!(clamp_norm(&v, 10.), v);
        assert_relative_eq!(clamp_norm(&v, 1.), Vec2::new(0.6, 0.8));
        assert_eq!(clamp_norm(&Vec2::zeros(), 0.), Vec2::zeros());
    }

    #[test]
    fn angle_of_covers_all_quadrants() {
        assert_relative_eq!(angle_of(&Vec2::new(0., 1.)), FRAC_PI_2);
        assert_relative_eq!(angle_of(&Vec2::new(-1., 0.)), PI);
        assert_relative_eq!(angle_of(&Vec2::new(-1., -1.)), -3. * PI / 4., epsilon = 1e-12);
        assert_relative_eq!(angle_of(&unit(1.2)), 1.2, epsilon = 1e-12);
    }
}
