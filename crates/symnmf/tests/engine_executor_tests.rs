#![cfg(feature = "dev")]
//! Tests for the multiplicative-update execution engine.
//!
//! These tests drive the executor directly with hand-built affinity targets:
//! - Termination behavior (convergence, cap exhaustion, both policies)
//! - The denominator zero-guard
//! - Non-negativity preservation
//!
//! The full pipeline path is covered by the integration tests in
//! api_tests.rs.

use symnmf::internals::engine::executor::{
    ConvergencePolicy, FactorizationExecutor, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
use symnmf::internals::primitives::errors::SymNmfError;
use symnmf::internals::primitives::matrix::Matrix;

fn two_block_target() -> Matrix<f64> {
    // Two coincident pairs: within-pair affinity 1, cross-pair effectively 0.
    Matrix::from_rows(&[
        vec![0.0, 1.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0],
    ])
    .unwrap()
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn executor_defaults_match_the_documented_parameters() {
    let executor = FactorizationExecutor::<f64>::new();

    assert_eq!(executor.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(executor.max_iterations, 300);
    assert_eq!(executor.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(executor.tolerance, 1e-4);
    assert_eq!(executor.damping, DEFAULT_DAMPING);
    assert_eq!(executor.damping, 0.5);
    assert_eq!(executor.policy, ConvergencePolicy::Strict);
}

// ============================================================================
// Termination Behavior
// ============================================================================

#[test]
fn zero_target_converges_within_a_few_iterations() {
    // With W = 0 the update halves every entry whose denominator is nonzero,
    // so successive iterates collapse geometrically.
    let w = Matrix::<f64>::zeros(3, 3);
    let h0 = Matrix::from_rows(&[vec![1.0, 0.5], vec![0.8, 0.2], vec![0.3, 0.9]]).unwrap();

    let output = FactorizationExecutor::new().optimize(&w, &h0).unwrap();
    assert!(output.converged);
    assert!(output.iterations <= 20, "took {} iterations", output.iterations);
}

#[test]
fn zero_initial_factors_converge_immediately() {
    // All-zero H makes every denominator zero; the guard leaves H unchanged
    // and the first residual is exactly 0.
    let w = two_block_target();
    let h0 = Matrix::<f64>::zeros(4, 2);

    let output = FactorizationExecutor::new().optimize(&w, &h0).unwrap();
    assert!(output.converged);
    assert_eq!(output.iterations, 1);
    assert_eq!(output.residual, 0.0);
    assert!(output.factors.iter().all(|&v| v == 0.0));
}

#[test]
fn strict_policy_reports_cap_exhaustion_as_an_error() {
    let w = two_block_target();
    let h0 = Matrix::from_rows(&[
        vec![0.9, 0.1],
        vec![0.8, 0.2],
        vec![0.1, 0.7],
        vec![0.2, 0.9],
    ])
    .unwrap();

    // An unreachable tolerance forces the loop to its cap.
    let err = FactorizationExecutor::new()
        .max_iterations(2)
        .tolerance(1e-300)
        .optimize(&w, &h0)
        .unwrap_err();

    assert_eq!(err, SymNmfError::DidNotConverge { iterations: 2 });
}

#[test]
fn best_effort_policy_returns_the_last_iterate_flagged_unconverged() {
    let w = two_block_target();
    let h0 = Matrix::from_rows(&[
        vec![0.9, 0.1],
        vec![0.8, 0.2],
        vec![0.1, 0.7],
        vec![0.2, 0.9],
    ])
    .unwrap();

    let output = FactorizationExecutor::new()
        .max_iterations(2)
        .tolerance(1e-300)
        .policy(ConvergencePolicy::BestEffort)
        .optimize(&w, &h0)
        .unwrap();

    assert!(!output.converged);
    assert_eq!(output.iterations, 2);
    assert!(output.residual > 0.0);
    assert_eq!(output.factors.rows(), 4);
    assert_eq!(output.factors.cols(), 2);
}

// ============================================================================
// Update Rule Properties
// ============================================================================

#[test]
fn non_negativity_is_preserved_from_a_non_negative_start() {
    let w = two_block_target();
    let h0 = Matrix::from_rows(&[
        vec![0.9, 0.1],
        vec![0.8, 0.2],
        vec![0.1, 0.7],
        vec![0.2, 0.9],
    ])
    .unwrap();

    let output = FactorizationExecutor::new()
        .max_iterations(50)
        .policy(ConvergencePolicy::BestEffort)
        .optimize(&w, &h0)
        .unwrap();

    assert!(output.factors.iter().all(|&v| v >= 0.0));
}

#[test]
fn block_structure_of_the_start_is_preserved_in_the_labels() {
    // A basin-locked start keeps each pair dominant in its own column, so the
    // argmax assignment is stable regardless of how far the loop runs.
    let w = two_block_target();
    let h0 = Matrix::from_rows(&[
        vec![1.0, 0.01],
        vec![1.0, 0.01],
        vec![0.01, 1.0],
        vec![0.01, 1.0],
    ])
    .unwrap();

    let output = FactorizationExecutor::new()
        .policy(ConvergencePolicy::BestEffort)
        .optimize(&w, &h0)
        .unwrap();

    let labels = symnmf::internals::evaluation::labels::hard_labels(&output.factors);
    assert_eq!(labels, vec![0, 0, 1, 1]);
}

#[test]
fn inputs_are_left_unmodified() {
    let w = two_block_target();
    let h0 = Matrix::from_rows(&[
        vec![0.5, 0.1],
        vec![0.4, 0.2],
        vec![0.1, 0.5],
        vec![0.2, 0.4],
    ])
    .unwrap();
    let w_before = w.clone();
    let h0_before = h0.clone();

    let _ = FactorizationExecutor::new()
        .policy(ConvergencePolicy::BestEffort)
        .optimize(&w, &h0);

    assert_eq!(w, w_before);
    assert_eq!(h0, h0_before);
}
