//! Polynomial Interpolation
//!
//! Builds the unique degree-(n-1) polynomial through n data points with
//! distinct abscissas and evaluates it at arbitrary locations, inside or
//! outside the data range.
//!
//! Two independent constructions are provided:
//!
//! - **Lagrange form** ([`lagrange_eval`]): coefficient-free, O(n²) per
//!   evaluated point. Convenient for one-off evaluations on small grids.
//! - **Newton divided-difference form** ([`NewtonPoly`]): coefficients are
//!   computed once from the grid and reused; each evaluation is O(n) via
//!   nested (Horner) multiplication.
//!
//! Both forms represent the same polynomial and agree to floating-point
//! tolerance at any evaluation point.
//!
//! # Example
//!
//! ```rust
//! use freekick::{lagrange_eval, NewtonPoly};
//!
//! // Kicking power (W) measured at four run-up speeds (m/s)
//! let speed = [0.0, 3.0, 5.0, 8.0];
//! let power = [100.0, 700.0, 1100.0, 2000.0];
//!
//! let direct = lagrange_eval(&speed, &power, 5.8).unwrap();
//! let poly = NewtonPoly::fit(&speed, &power).unwrap();
//!
//! assert!((direct - poly.eval(5.8)).abs() < 1e-9);
//! ```

use thiserror::Error;

/// Errors from interpolant construction and evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// Grid and value arrays have different lengths
    #[error("grid has {nodes} nodes but {values} values were given")]
    LengthMismatch {
        /// Number of grid nodes
        nodes: usize,
        /// Number of ordinate values
        values: usize,
    },
    /// No data points were given
    #[error("at least one data point is required")]
    Empty,
    /// Two grid nodes coincide, so no interpolating polynomial exists
    #[error("grid nodes {i} and {j} coincide at x = {x}")]
    DuplicateNodes {
        /// Index of the first coincident node
        i: usize,
        /// Index of the second coincident node
        j: usize,
        /// The shared abscissa
        x: f64,
    },
}

/// Evaluate the k-th Lagrange cardinal polynomial at `x`.
///
/// This is the unique degree-(n-1) polynomial that is 1 at `xi[k]` and 0 at
/// every other grid node, computed as the product over all `i != k` of
/// `(x - xi[i]) / (xi[k] - xi[i])`.
///
/// Distinct grid nodes are a precondition: coincident nodes make the
/// denominator vanish and the result is meaningless. Use [`NewtonPoly::fit`]
/// if the grid needs validating first.
///
/// # Panics
///
/// Panics if `k >= xi.len()`.
pub fn lagrange_basis(k: usize, xi: &[f64], x: f64) -> f64 {
    let xk = xi[k];
    let mut prod = 1.0;
    for (i, &node) in xi.iter().enumerate() {
        if i == k {
            continue;
        }
        prod *= (x - node) / (xk - node);
    }
    prod
}

/// Evaluate the Lagrange interpolant through `(xi[i], yi[i])` at `x`.
///
/// Returns `Σ_k yi[k] * L_k(x)` where `L_k` is the k-th cardinal polynomial.
/// Cost is O(n²) per call, acceptable for the grid sizes this crate targets
/// (tens of nodes). For repeated evaluation on the same grid, fit a
/// [`NewtonPoly`] instead.
///
/// Distinct grid nodes are a precondition (see [`lagrange_basis`]).
pub fn lagrange_eval(xi: &[f64], yi: &[f64], x: f64) -> Result<f64, InterpError> {
    if xi.len() != yi.len() {
        return Err(InterpError::LengthMismatch {
            nodes: xi.len(),
            values: yi.len(),
        });
    }
    if xi.is_empty() {
        return Err(InterpError::Empty);
    }

    let mut sum = 0.0;
    for (k, &yk) in yi.iter().enumerate() {
        sum += yk * lagrange_basis(k, xi, x);
    }
    Ok(sum)
}

/// Compute Newton divided-difference coefficients for the grid `(xi, yi)`.
///
/// Returns the coefficient vector `c` of the interpolating polynomial in
/// Newton form:
///
/// ```text
/// P(x) = c[0] + c[1](x - xi[0]) + c[2](x - xi[0])(x - xi[1]) + ...
/// ```
///
/// The coefficients are the top row of the divided-difference table,
/// computed in place column by column. The table entry at row `i`, column
/// `j` is `(T[i+1][j-1] - T[i][j-1]) / (xi[i+j] - xi[i])`; updating in
/// descending row order lets a single vector stand in for the whole
/// triangle.
///
/// Evaluate the result with [`newton_eval`] against the *same* grid.
pub fn divided_differences(xi: &[f64], yi: &[f64]) -> Result<Vec<f64>, InterpError> {
    if xi.len() != yi.len() {
        return Err(InterpError::LengthMismatch {
            nodes: xi.len(),
            values: yi.len(),
        });
    }
    if xi.is_empty() {
        return Err(InterpError::Empty);
    }

    let n = xi.len();
    let mut c = yi.to_vec();
    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (xi[i] - xi[i - j]);
        }
    }
    Ok(c)
}

/// Evaluate a Newton-form polynomial at `x` by nested multiplication.
///
/// Starts from the highest-order coefficient and works down:
/// `r = c[n-1]; r = r*(x - xi[i]) + c[i]` for `i = n-2 .. 0`.
///
/// `xi` must be the grid (in the same order) that produced `coeffs` via
/// [`divided_differences`]; a mismatched grid silently yields wrong values.
/// [`NewtonPoly`] bundles the two together and removes that hazard.
///
/// # Panics
///
/// Panics if `coeffs` is empty or longer than `xi`.
pub fn newton_eval(coeffs: &[f64], xi: &[f64], x: f64) -> f64 {
    let n = coeffs.len();
    let mut result = coeffs[n - 1];
    for i in (0..n - 1).rev() {
        result = result * (x - xi[i]) + coeffs[i];
    }
    result
}

/// Interpolating polynomial in Newton divided-difference form.
///
/// Fitted once from a grid, immutable afterwards, and reusable for any
/// number of evaluations. The polynomial owns a copy of its grid nodes, so
/// nested evaluation cannot be fed a mismatched grid.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPoly {
    coeffs: Vec<f64>,
    nodes: Vec<f64>,
}

impl NewtonPoly {
    /// Fit the interpolating polynomial through `(xi[i], yi[i])`.
    ///
    /// Validates that the arrays have equal non-zero length and that all
    /// grid nodes are distinct.
    pub fn fit(xi: &[f64], yi: &[f64]) -> Result<Self, InterpError> {
        // O(n²) pairwise check; grids here are tens of points at most.
        for i in 0..xi.len() {
            for j in i + 1..xi.len() {
                if xi[i] == xi[j] {
                    return Err(InterpError::DuplicateNodes { i, j, x: xi[i] });
                }
            }
        }

        let coeffs = divided_differences(xi, yi)?;
        Ok(Self {
            coeffs,
            nodes: xi.to_vec(),
        })
    }

    /// Evaluate the polynomial at `x`, inside or outside the data range.
    pub fn eval(&self, x: f64) -> f64 {
        newton_eval(&self.coeffs, &self.nodes, x)
    }

    /// The Newton-form coefficient vector (one per grid node).
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The grid nodes the polynomial was fitted on.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Degree of the polynomial (number of nodes minus one).
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }
}
