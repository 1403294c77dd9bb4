use nalgebra::{Matrix3, Vector3};

pub type Real = f64;
pub const DIM: usize = 3;

pub type Vector = Vector3<Real>;
pub type Matrix = Matrix3<Real>;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vector::zeros()
}

#[inline(always)]
pub fn zero_matrix() -> Matrix {
    Matrix::zeros()
}

#[inline(always)]
pub fn identity_matrix() -> Matrix {
    Matrix::identity()
}

#[inline(always)]
pub fn matrix_trace(m: &Matrix) -> Real {
    m.trace()
}

#[inline(always)]
pub fn matrix_transpose(m: &Matrix) -> Matrix {
    m.transpose()
}

#[inline(always)]
pub fn matrix_determinant(m: &Matrix) -> Real {
    m.determinant()
}

/// Outer product a ⊗ b.
#[inline(always)]
pub fn outer_product(a: &Vector, b: &Vector) -> Matrix {
    a * b.transpose()
}

/// Exact zero check inverse (prevents NaN from division by zero)
#[inline(always)]
pub fn inv_exact(e: Real) -> Real {
    if e == 0.0 { 0.0 } else { 1.0 / e }
}
