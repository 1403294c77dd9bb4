//! Helper functions for materials
//!
//! Math and utility functions shared between material models.

/// Physics parameter conversions - universal MPM utilities.
/// Used by many constitutive models for material calculations.
pub mod physics {
    use crate::math::Real;

    /// Computes the Lamé parameters (lambda, mu) from Young's modulus and Poisson ratio.
    #[inline]
    pub fn lame_lambda_mu(young_modulus: Real, poisson_ratio: Real) -> (Real, Real) {
        let lambda =
            young_modulus * poisson_ratio / ((1.0 + poisson_ratio) * (1.0 - 2.0 * poisson_ratio));
        let mu = shear_modulus(young_modulus, poisson_ratio);
        (lambda, mu)
    }

    /// Shear modulus (mu) from Young's modulus and Poisson ratio.
    #[inline]
    pub fn shear_modulus(young_modulus: Real, poisson_ratio: Real) -> Real {
        young_modulus / (2.0 * (1.0 + poisson_ratio))
    }

    /// Bulk modulus from Young's modulus and Poisson ratio.
    #[inline]
    pub fn bulk_modulus(young_modulus: Real, poisson_ratio: Real) -> Real {
        young_modulus / (3.0 * (1.0 - 2.0 * poisson_ratio))
    }
}

/// Check if material properties make sense.
pub mod check {
    use crate::math::Real;

    /// Check if deformation gradient determinant is reasonable.
    #[inline]
    pub fn deformation_gradient_ok(det: Real) -> bool {
        det > 1e-6 && det < 1e6 && det.is_finite()
    }

    /// Check if Young's modulus is physically reasonable.
    #[inline]
    pub fn young_modulus_ok(e: Real) -> bool {
        e > 0.0 && e < 1e12 && e.is_finite()
    }

    /// Check if Poisson ratio is in valid range.
    #[inline]
    pub fn poisson_ratio_ok(nu: Real) -> bool {
        nu > -1.0 && nu < 0.5 && nu.is_finite()
    }
}
