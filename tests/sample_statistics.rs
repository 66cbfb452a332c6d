//! End to end checks of the sampler and moment estimators through the public API.

#![allow(
    unused_crate_dependencies,
    missing_docs,
    reason = "Integration tests don't use all dependencies"
)]

use catsim::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use test_case::test_case;

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
fn empirical_moments_converge_to_theoretical(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let probs = ProbabilityVector::new(vec![0.2, 0.3, 0.5]).unwrap();
    let (frequencies, observations) = sample(&probs, 10_000, &mut rng);

    assert_eq!(frequencies.total(), 10_000);
    assert_eq!(observations.len(), 10_000);

    let expected = theoretical(&probs);
    let actual = empirical(&observations);
    assert!((expected.mean() - 1.3).abs() < 1e-12);
    assert!((expected.variance() - 0.61).abs() < 1e-12);
    assert!(
        (actual.mean() - expected.mean()).abs() < 0.05,
        "empirical {actual} vs theoretical {expected}"
    );
    assert!(
        (actual.variance() - expected.variance()).abs() < 0.05,
        "empirical {actual} vs theoretical {expected}"
    );
}

#[test]
fn generated_distribution_round_trip() {
    let mut rng = StdRng::seed_from_u64(99);
    let probs = generate(8, &mut rng).unwrap();
    let (frequencies, observations) = sample(&probs, 50_000, &mut rng);

    let expected = theoretical(&probs);
    let actual = empirical(&observations);
    assert!((actual.mean() - expected.mean()).abs() < 0.1);
    assert!((actual.variance() - expected.variance()).abs() < 0.25);

    for (ratio, p) in frequencies.ratios().iter().zip(probs.probabilities()) {
        assert!((ratio - p).abs() < 0.02, "ratio {ratio} vs probability {p}");
    }
}

#[test]
fn single_category_always_lands_in_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let probs = generate(1, &mut rng).unwrap();
    let (frequencies, observations) = sample(&probs, 1234, &mut rng);
    assert_eq!(frequencies.counts(), &[1234]);
    assert!(observations.iter().all(|obs| *obs == 0));
    assert_eq!(empirical(&observations), MomentSummary::new(0.0, 0.0));
}

#[test]
fn streaming_estimator_matches_batch() {
    let observations = ObservationSequence::new(vec![0, 1, 1, 2, 2, 2], 3).unwrap();
    let mut welford = WelfordOnline::new();
    welford.extend(observations.iter().map(|obs| *obs as f64));
    assert_eq!(welford.summary(), empirical(&observations));
}

#[test]
fn invalid_input() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(generate(0, &mut rng), Err(Error::InvalidCategoryCount));
    assert_eq!(
        SimulationConfig::new(10, 0),
        Err(ConfigError::InvalidCategoryCount)
    );
    assert!(matches!(
        ProbabilityVector::new(vec![0.7, 0.7]),
        Err(Error::ProbabilitiesDoNotSumToOne { .. })
    ));
}
