// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodecomp::config::DEFAULT_MAX_JOINT_CELLS;
use infodecomp::{
    BITS, Estimator, InfoError, MeasureConfig, conditional_entropy, conditional_mutual_information,
    information_entropy, interaction_information, mutual_information,
    partial_information_decomposition,
};
use ndarray::{Array1, array};
use rstest::rstest;

use crate::test_helpers::stack_columns;

#[test]
fn default_config_is_maximum_likelihood_in_bits() {
    let config = MeasureConfig::default();
    assert_eq!(config.estimator, Estimator::MaximumLikelihood);
    assert_eq!(config.base, BITS);
    assert_eq!(config.max_joint_cells, DEFAULT_MAX_JOINT_CELLS);
    assert_eq!(config.estimator.name(), "ml");
}

#[test]
fn maximum_likelihood_name_is_accepted() {
    let config = MeasureConfig::new("ml", 2.0).unwrap();
    assert_eq!(config.estimator, Estimator::MaximumLikelihood);
    assert_eq!("ml".parse::<Estimator>(), Ok(Estimator::MaximumLikelihood));
}

#[rstest]
#[case("ML")]
#[case("mle")]
#[case("MLE")]
#[case(" ml ")]
#[case(" mle ")]
#[case("bayes")]
#[case("miller_madow")]
#[case("")]
fn unknown_estimators_are_rejected(#[case] name: &str) {
    let err = MeasureConfig::new(name, 2.0).unwrap_err();
    assert_eq!(err, InfoError::UnsupportedEstimator(name.to_string()));
    assert!(err.to_string().contains("unsupported estimator"));
}

#[rstest]
#[case(1.0)]
#[case(0.0)]
#[case(-2.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn invalid_bases_are_rejected(#[case] base: f64) {
    let err = MeasureConfig::new("ml", base).unwrap_err();
    assert!(matches!(err, InfoError::InvalidBase(_)));
}

#[test]
fn invalid_base_set_directly_fails_at_call() {
    let config = MeasureConfig {
        base: 1.0,
        ..MeasureConfig::default()
    };
    let err = information_entropy(array![0, 1], &config).unwrap_err();
    assert_eq!(err, InfoError::InvalidBase(1.0));
}

#[test]
fn row_count_mismatch_is_reported() {
    let config = MeasureConfig::default();
    let err = mutual_information(array![0, 1, 0, 1], Some(array![0, 1, 1]), &config).unwrap_err();
    assert_eq!(
        err,
        InfoError::RowCountMismatch {
            expected: 4,
            found: 3
        }
    );

    let err = partial_information_decomposition(
        array![0, 1, 0, 1],
        Some(array![0, 1, 1, 0]),
        Some(array![0, 1]),
        &config,
    )
    .unwrap_err();
    assert_eq!(
        err,
        InfoError::RowCountMismatch {
            expected: 4,
            found: 2
        }
    );
}

#[test]
fn z_without_y_is_a_shape_error() {
    let err = conditional_mutual_information(
        stack_columns(&[&[0, 1], &[1, 0]]),
        None,
        Some(array![0, 1]),
        &MeasureConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, InfoError::ShapeMismatch { .. }));
}

#[test]
fn wrong_column_counts_are_shape_errors() {
    let config = MeasureConfig::default();
    let three = stack_columns(&[&[0, 1], &[1, 0], &[1, 1]]);
    let one = array![0, 1, 1, 0];

    assert!(matches!(
        mutual_information(three.clone(), None, &config),
        Err(InfoError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        conditional_entropy(one.clone(), None, &config),
        Err(InfoError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        conditional_mutual_information(one.clone(), Some(one.clone()), None, &config),
        Err(InfoError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        interaction_information(three.clone(), Some(array![0, 1]), None, &config),
        Err(InfoError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        partial_information_decomposition(one, None, None, &config),
        Err(InfoError::ShapeMismatch { .. })
    ));

    // two columns plus y make the required three
    assert!(conditional_mutual_information(
        stack_columns(&[&[0, 1], &[1, 0]]),
        Some(array![1, 1]),
        None,
        &config
    )
    .is_ok());
}

#[test]
fn empty_samples_fail_explicitly() {
    let config = MeasureConfig::default();
    let empty = || Array1::<i32>::zeros(0);

    assert_eq!(
        information_entropy(empty(), &config).unwrap_err(),
        InfoError::EmptySamples
    );
    assert_eq!(
        mutual_information(empty(), Some(empty()), &config).unwrap_err(),
        InfoError::EmptySamples
    );
    assert_eq!(
        conditional_entropy(empty(), Some(empty()), &config).unwrap_err(),
        InfoError::EmptySamples
    );
    assert_eq!(
        conditional_mutual_information(empty(), Some(empty()), Some(empty()), &config).unwrap_err(),
        InfoError::EmptySamples
    );
    assert_eq!(
        interaction_information(empty(), Some(empty()), Some(empty()), &config).unwrap_err(),
        InfoError::EmptySamples
    );
    assert_eq!(
        partial_information_decomposition(empty(), Some(empty()), Some(empty()), &config)
            .unwrap_err(),
        InfoError::EmptySamples
    );
}

#[test]
fn joint_table_limit_applies_to_measures() {
    let config = MeasureConfig::default().with_max_joint_cells(8);
    let x: Array1<i32> = (0..3).collect();
    let err = conditional_mutual_information(x.clone(), Some(x.clone()), Some(x.clone()), &config)
        .unwrap_err();
    assert_eq!(err, InfoError::JointTableTooLarge { cells: 27, limit: 8 });

    // a single column stays well below the limit
    assert!(information_entropy(x, &config).is_ok());
}
