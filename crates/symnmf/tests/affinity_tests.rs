//! Tests for the affinity construction stages.
//!
//! These tests verify the structural properties of the three matrix goals:
//! - Similarity: symmetry, zero diagonal, kernel values
//! - Degree: diagonal shape and row-sum entries
//! - Normalization: symmetry and the zero-degree guard

use approx::assert_relative_eq;

use symnmf::prelude::*;

fn sample_points() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![1.0, 0.5],
        vec![-2.0, 3.0],
        vec![4.0, -1.0],
        vec![0.3, 0.3],
    ]
}

// ============================================================================
// Similarity Tests
// ============================================================================

#[test]
fn similarity_is_symmetric_with_zero_diagonal() {
    let a = similarity::<f64, _>(&sample_points()).unwrap();

    for i in 0..a.rows() {
        assert_eq!(a[(i, i)], 0.0, "diagonal entry ({i},{i}) must be exactly 0");
        for j in 0..a.cols() {
            assert_eq!(a[(i, j)], a[(j, i)]);
        }
    }
}

#[test]
fn similarity_off_diagonal_entries_lie_in_unit_interval() {
    let a = similarity::<f64, _>(&sample_points()).unwrap();

    for i in 0..a.rows() {
        for j in 0..a.cols() {
            if i != j {
                assert!(a[(i, j)] > 0.0 && a[(i, j)] <= 1.0);
            }
        }
    }
}

#[test]
fn coincident_points_have_similarity_one() {
    let points = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
    let a = similarity::<f64, _>(&points).unwrap();

    assert_eq!(a[(0, 1)], 1.0);
    assert_eq!(a[(1, 0)], 1.0);
    assert_eq!(a[(0, 0)], 0.0);
}

#[test]
fn two_point_kernel_value_matches_formula() {
    // Squared distance 4.0 gives exp(-2).
    let points = vec![vec![0.0], vec![2.0]];
    let a = similarity::<f64, _>(&points).unwrap();

    assert_relative_eq!(a[(0, 1)], (-2.0f64).exp(), epsilon = 1e-15);
    assert_eq!(a[(0, 1)], a[(1, 0)]);
}

#[test]
fn similarity_is_bitwise_deterministic() {
    let points = sample_points();
    let first = similarity::<f64, _>(&points).unwrap();
    let second = similarity::<f64, _>(&points).unwrap();

    assert_eq!(first, second);
}

#[test]
fn single_point_similarity_is_one_by_one_zero() {
    let points = vec![vec![1.5, 2.5]];
    let a = similarity::<f64, _>(&points).unwrap();

    assert_eq!(a.rows(), 1);
    assert_eq!(a.cols(), 1);
    assert_eq!(a[(0, 0)], 0.0);
}

// ============================================================================
// Degree Tests
// ============================================================================

#[test]
fn degree_matrix_is_diagonal_with_row_sums() {
    let points = sample_points();
    let a = similarity::<f64, _>(&points).unwrap();
    let d = degree::<f64, _>(&points).unwrap();

    for i in 0..d.rows() {
        let row_sum: f64 = a.row(i).iter().sum();
        assert_relative_eq!(d[(i, i)], row_sum, epsilon = 1e-12);
        for j in 0..d.cols() {
            if i != j {
                assert_eq!(d[(i, j)], 0.0, "off-diagonal entry ({i},{j}) must be exactly 0");
            }
        }
    }
}

#[test]
fn single_point_degree_is_zero() {
    let points = vec![vec![1.5, 2.5]];
    let d = degree::<f64, _>(&points).unwrap();

    assert_eq!(d.rows(), 1);
    assert_eq!(d[(0, 0)], 0.0);
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn normalized_matrix_is_symmetric() {
    let w = normalized::<f64, _>(&sample_points()).unwrap();

    for i in 0..w.rows() {
        for j in 0..w.cols() {
            assert_relative_eq!(w[(i, j)], w[(j, i)], epsilon = 1e-12);
        }
    }
}

#[test]
fn normalized_entries_match_degree_scaling() {
    let points = sample_points();
    let a = similarity::<f64, _>(&points).unwrap();
    let w = normalized::<f64, _>(&points).unwrap();

    let degrees: Vec<f64> = (0..a.rows()).map(|i| a.row(i).iter().sum()).collect();
    for i in 0..w.rows() {
        for j in 0..w.cols() {
            let expected = a[(i, j)] / (degrees[i].sqrt() * degrees[j].sqrt());
            assert_relative_eq!(w[(i, j)], expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn single_point_normalization_hits_the_zero_degree_guard() {
    // One point has degree 0; the guard must produce an exact 0, not NaN.
    let points = vec![vec![1.5, 2.5]];
    let w = normalized::<f64, _>(&points).unwrap();

    assert_eq!(w.rows(), 1);
    assert_eq!(w[(0, 0)], 0.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn empty_point_set_is_rejected() {
    let points: Vec<Vec<f64>> = Vec::new();
    assert_eq!(similarity::<f64, _>(&points).unwrap_err(), SymNmfError::EmptyInput);
}

#[test]
fn ragged_point_set_is_rejected() {
    let points = vec![vec![0.0, 1.0], vec![2.0]];
    let err = similarity::<f64, _>(&points).unwrap_err();

    assert_eq!(
        err,
        SymNmfError::RaggedInput {
            row: 1,
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let points = vec![vec![0.0, 1.0], vec![f64::NAN, 2.0]];
    assert!(matches!(
        normalized::<f64, _>(&points).unwrap_err(),
        SymNmfError::InvalidNumericValue(_)
    ));
}
