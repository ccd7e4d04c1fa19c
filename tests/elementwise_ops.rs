//! Element-wise adapter tests: shape preservation and the fail-fast
//! partial-failure policy.

use nalgebra::{DMatrix, DVector};

use approxcalc::approximationerror::ApproximationError;
use approxcalc::array::elementwise;
use approxcalc::dispatch::dispatcher::Dispatcher;
use approxcalc::dispatch::functionid::FunctionId;
use approxcalc::math::approximation::{inverse, trigonometric};

#[test]
fn map_slice_applies_the_scalar_model_per_element() {
    let input = [-0.5, 0.0, 0.5];
    let output = elementwise::map_slice(trigonometric::sin, &input);

    assert_eq!(output.len(), 3);
    for (x, y) in input.iter().zip(&output) {
        assert_eq!(y.to_bits(), trigonometric::sin(*x).to_bits());
    }
}

#[test]
fn try_map_slice_succeeds_when_every_element_is_in_domain() {
    let input = [-1.0, -0.5, 0.0, 0.5, 1.0];
    let output = elementwise::try_map_slice(inverse::arcsin, &input).unwrap();

    assert_eq!(output.len(), 5);
    for (x, y) in input.iter().zip(&output) {
        assert_eq!(y.to_bits(), inverse::arcsin(*x).unwrap().to_bits());
    }
}

#[test]
fn try_map_slice_fails_fast_with_the_offending_index() {
    let input = [0.5, 1.5, 0.1];
    let error = elementwise::try_map_slice(inverse::arcsin, &input).unwrap_err();

    match error {
        ApproximationError::Element { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(
                *source,
                ApproximationError::Domain {
                    function: "arcsin",
                    ..
                }
            ));
        }
        other => panic!("expected element error, got {:?}", other),
    }
}

#[test]
fn map_matrix_preserves_the_shape() {
    let input = DMatrix::from_row_slice(2, 3, &[0.0, 0.5, 1.0, -0.5, -1.0, 2.0]);
    let output = elementwise::map_matrix(trigonometric::cos, &input);

    assert_eq!(output.shape(), (2, 3));
    for (x, y) in input.iter().zip(output.iter()) {
        assert_eq!(y.to_bits(), trigonometric::cos(*x).to_bits());
    }
}

#[test]
fn map_matrix_accepts_vectors() {
    let input = DVector::from_column_slice(&[-0.5, 0.0, 0.5]);
    let output = elementwise::map_matrix(trigonometric::sin, &input);

    assert_eq!(output.len(), 3);
    assert_eq!(
        output[1].to_bits(),
        trigonometric::sin(0.0).to_bits()
    );
}

#[test]
fn try_map_matrix_reports_the_column_major_index() {
    // Column-major iteration visits 0.1, 0.3, 2.0, 0.4; the invalid
    // element sits at linear index 2.
    let input = DMatrix::from_row_slice(2, 2, &[0.1, 2.0, 0.3, 0.4]);
    let error = elementwise::try_map_matrix(inverse::arcsin, &input).unwrap_err();

    match error {
        ApproximationError::Element { index, .. } => assert_eq!(index, 2),
        other => panic!("expected element error, got {:?}", other),
    }
}

#[test]
fn dispatcher_lifts_functions_over_slices() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.on();

    let input = [-0.5, 0.0, 0.5];
    let output = dispatcher.evaluate_slice(FunctionId::Sin, &input).unwrap();
    assert_eq!(output.len(), 3);
    for (x, y) in input.iter().zip(&output) {
        assert_eq!(y.to_bits(), trigonometric::sin(*x).to_bits());
    }

    dispatcher.off();
    let output = dispatcher.evaluate_slice(FunctionId::Sin, &input).unwrap();
    for (x, y) in input.iter().zip(&output) {
        assert_eq!(y.to_bits(), x.sin().to_bits());
    }
}

#[test]
fn dispatcher_lifts_functions_over_matrices() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.on();

    let input = DMatrix::from_row_slice(2, 2, &[0.1, 0.2, 0.3, 0.4]);
    let output = dispatcher
        .evaluate_matrix(FunctionId::Tanh, &input)
        .unwrap();

    assert_eq!(output.shape(), (2, 2));
    for (x, y) in input.iter().zip(output.iter()) {
        assert_eq!(y.to_bits(), approxcalc::math::approximation::hyperbolic::tanh(*x).to_bits());
    }
}

#[test]
fn dispatcher_matrix_evaluation_fails_fast_on_domain_errors() {
    let dispatcher = Dispatcher::new();
    let input = DVector::from_column_slice(&[0.0, 0.5, -3.0]);

    let error = dispatcher
        .evaluate_matrix(FunctionId::Arccos, &input)
        .unwrap_err();
    match error {
        ApproximationError::Element { index, .. } => assert_eq!(index, 2),
        other => panic!("expected element error, got {:?}", other),
    }
}
