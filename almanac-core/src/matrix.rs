//! 3x3 rotation matrices for orientation-frame transformations.
//!
//! Every frame-to-frame transformation in this workspace is a proper
//! rotation: a 3x3 orthogonal matrix with determinant +1. Matrices act on
//! column vectors as the standard product `M * v`, with row-major storage:
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! Because every matrix produced by the frame graph is orthonormal by
//! construction, the inverse transformation is always the transpose,
//! never a numeric re-derivation.
//!
//! ```
//! use almanac_core::RotationMatrix3;
//!
//! let m = RotationMatrix3::from_rows([
//!     [0.0, 1.0, 0.0],
//!     [-1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! let back = m.multiply(&m.transpose());
//! assert!(back.max_difference(&RotationMatrix3::identity()) < 1e-15);
//! ```

use std::fmt;

/// A 3x3 rotation matrix in row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    rows: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// The identity rotation (leaves every vector unchanged).
    pub fn identity() -> Self {
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Builds a matrix from row-major elements.
    ///
    /// Does not validate orthonormality; use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the element at `row`, `col` (0-based, panics past 2).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Returns a reference to the underlying row-major array.
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Matrix product `self * other`: the rotation that applies `other`
    /// first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.rows[i][k] * other.rows[k][j];
                }
            }
        }
        Self::from_rows(result)
    }

    /// Applies this rotation to a Cartesian triple (`M * v`).
    pub fn apply_to_vector(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.rows[0][0] * v[0] + self.rows[0][1] * v[1] + self.rows[0][2] * v[2],
            self.rows[1][0] * v[0] + self.rows[1][1] * v[1] + self.rows[1][2] * v[2],
            self.rows[2][0] * v[0] + self.rows[2][1] * v[1] + self.rows[2][2] * v[2],
        ]
    }

    /// Returns the transpose, which for a proper rotation is the exact
    /// inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Computes the determinant (+1 for a proper rotation).
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Checks orthonormality and determinant +1 within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Maximum absolute element-wise difference from `other`.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((self.rows[i][j] - other.rows[i][j]).abs());
            }
        }
        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.rows {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
