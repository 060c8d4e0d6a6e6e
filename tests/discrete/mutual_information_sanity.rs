// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodecomp::estimators::mutual_information::MutualInformation;
use infodecomp::estimators::traits::GlobalValue;
use infodecomp::{
    MeasureConfig, conditional_mutual_information, information_entropy, interaction_information,
    mutual_information,
};
use ndarray::Array1;
use rstest::rstest;

use crate::test_helpers::{
    binary_pairs, generate_binomial_data, generate_random_data, stack_columns,
};

fn joint_entropy(columns: &[&[i32]], config: &MeasureConfig) -> f64 {
    information_entropy(stack_columns(columns), config).unwrap()
}

#[rstest]
#[case(generate_random_data(100, 5, 42))]
#[case(generate_binomial_data(250, 8, 0.4, 43))]
#[case(vec![1, 1, 2, 3, 3, 4, 5])]
fn self_information_equals_entropy(#[case] x_vec: Vec<i32>) {
    let config = MeasureConfig::default();
    let x = Array1::from(x_vec);
    let mi = mutual_information(x.clone(), Some(x.clone()), &config).unwrap();
    let h = information_entropy(x, &config).unwrap();
    assert_abs_diff_eq!(mi, h, epsilon = 1e-10);
}

#[rstest]
#[case(generate_random_data(100, 5, 44), generate_random_data(100, 5, 45))]
#[case(generate_random_data(60, 2, 46), generate_binomial_data(60, 4, 0.5, 47))]
#[case(vec![0, 0, 1, 1, 0, 1, 0, 1], vec![0, 1, 0, 1, 0, 1, 0, 1])]
fn mutual_information_is_symmetric(#[case] x_vec: Vec<i32>, #[case] y_vec: Vec<i32>) {
    let config = MeasureConfig::default();
    let x = Array1::from(x_vec);
    let y = Array1::from(y_vec);
    let mi_xy = mutual_information(x.clone(), Some(y.clone()), &config).unwrap();
    let mi_yx = mutual_information(y, Some(x), &config).unwrap();
    println!("I(X;Y) = {}, I(Y;X) = {}", mi_xy, mi_yx);
    assert_abs_diff_eq!(mi_xy, mi_yx, epsilon = 1e-12);
    assert!(mi_xy >= -1e-12);
}

#[test]
fn independent_full_factorial_has_zero_mutual_information() {
    let (x, y) = binary_pairs(25);
    let mi = mutual_information(x, Some(y), &MeasureConfig::default()).unwrap();
    assert_abs_diff_eq!(mi, 0.0, epsilon = 1e-12);
}

#[test]
fn two_column_input_matches_separate_columns() {
    let config = MeasureConfig::default();
    let x = generate_random_data(80, 3, 48);
    let y = generate_random_data(80, 4, 49);
    let joined = mutual_information(stack_columns(&[&x, &y]), None, &config).unwrap();
    let separate = mutual_information(Array1::from(x), Some(Array1::from(y)), &config).unwrap();
    assert_eq!(joined, separate);
}

#[test]
fn conditional_mutual_information_known_example() {
    // X and Y agree on every sample where Z = 1 and half the samples where Z = 0
    let x = Array1::from(vec![0, 0, 1, 1, 0, 1, 0, 1]);
    let y = Array1::from(vec![0, 1, 0, 1, 0, 1, 0, 1]);
    let z = Array1::from(vec![0, 0, 0, 0, 1, 1, 1, 1]);
    let config = MeasureConfig::default();

    let cmi = conditional_mutual_information(x.clone(), Some(y.clone()), Some(z.clone()), &config)
        .unwrap();
    assert_abs_diff_eq!(cmi, 0.5, epsilon = 1e-12);

    let mi = mutual_information(x.clone(), Some(y.clone()), &config).unwrap();
    assert_abs_diff_eq!(mi, 0.18872187554086728, epsilon = 1e-12);

    let ii = interaction_information(x, Some(y), Some(z), &config).unwrap();
    assert_abs_diff_eq!(ii, 0.5 - 0.18872187554086728, epsilon = 1e-12);
}

#[test]
fn xor_has_positive_interaction_information() {
    let (x, y) = binary_pairs(10);
    let z = &x ^ &y;
    let config = MeasureConfig::default();
    let cmi = conditional_mutual_information(x.clone(), Some(y.clone()), Some(z.clone()), &config)
        .unwrap();
    let ii = interaction_information(x, Some(y), Some(z), &config).unwrap();
    assert_abs_diff_eq!(cmi, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ii, 1.0, epsilon = 1e-12);
}

#[test]
fn copy_has_negative_interaction_information() {
    let (x, _) = binary_pairs(10);
    let config = MeasureConfig::default();
    let ii = interaction_information(x.clone(), Some(x.clone()), Some(x), &config).unwrap();
    assert_abs_diff_eq!(ii, -1.0, epsilon = 1e-12);
}

#[rstest]
#[case(
    generate_random_data(100, 3, 50),
    generate_random_data(100, 3, 51),
    generate_random_data(100, 3, 52)
)]
#[case(
    generate_random_data(300, 2, 53),
    generate_random_data(300, 5, 54),
    generate_binomial_data(300, 3, 0.5, 55)
)]
fn conditional_mutual_information_is_non_negative_and_consistent(
    #[case] x_vec: Vec<i32>,
    #[case] y_vec: Vec<i32>,
    #[case] z_vec: Vec<i32>,
) {
    let config = MeasureConfig::default();
    let x = Array1::from(x_vec.clone());
    let y = Array1::from(y_vec.clone());
    let z = Array1::from(z_vec.clone());

    let cmi = conditional_mutual_information(x.clone(), Some(y.clone()), Some(z.clone()), &config)
        .unwrap();
    assert!(cmi >= -1e-12);

    // I(X;Y|Z) from joint entropies computed independently
    let expected = joint_entropy(&[&x_vec, &z_vec], &config)
        + joint_entropy(&[&y_vec, &z_vec], &config)
        - joint_entropy(&[&x_vec, &y_vec, &z_vec], &config)
        - joint_entropy(&[&z_vec], &config);
    assert_abs_diff_eq!(cmi, expected, epsilon = 1e-10);

    // Three-column input and the (x, y) + z split give the same value
    let xy = stack_columns(&[&x_vec, &y_vec]);
    let split = conditional_mutual_information(xy, Some(z), None, &config).unwrap();
    assert_abs_diff_eq!(cmi, split, epsilon = 1e-12);

    let ii = interaction_information(x.clone(), Some(y.clone()), Some(Array1::from(z_vec)), &config)
        .unwrap();
    let mi = mutual_information(x, Some(y), &config).unwrap();
    assert_abs_diff_eq!(ii, cmi - mi, epsilon = 1e-10);
}

#[test]
fn facade_estimators_report_global_values() {
    let config = MeasureConfig::default();
    let x = Array1::from(generate_random_data(90, 3, 60));
    let y = Array1::from(generate_random_data(90, 3, 61));
    let z = Array1::from(generate_random_data(90, 3, 62));

    let mi = MutualInformation::new_discrete(x.clone(), Some(y.clone()), &config).unwrap();
    assert_eq!(
        mi.global_value(),
        mutual_information(x.clone(), Some(y.clone()), &config).unwrap()
    );

    let cmi =
        MutualInformation::new_cmi_discrete(x.clone(), Some(y.clone()), Some(z.clone()), &config)
            .unwrap();
    let entropies = cmi.entropies();
    assert_abs_diff_eq!(
        cmi.global_value(),
        entropies.xz + entropies.yz - entropies.xyz - entropies.z,
        epsilon = 1e-12
    );

    let ii = MutualInformation::new_interaction_discrete(
        x.clone(),
        Some(y.clone()),
        Some(z.clone()),
        &config,
    )
    .unwrap();
    assert_abs_diff_eq!(ii.global_value(), entropies.cmi() - entropies.mi_xy(), epsilon = 1e-12);

    let pid = MutualInformation::new_pid_discrete(x, Some(y), Some(z), &config).unwrap();
    assert_abs_diff_eq!(pid.global_value(), pid.components().total(), epsilon = 1e-6);
}
