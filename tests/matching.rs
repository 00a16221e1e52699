use rand::{Rng, SeedableRng, rngs::SmallRng};
use correlator::{Float, FeaturePoint, SurfDescriptor, DESCRIPTOR_SIZE, match_feature_points, CorrelatorError};

fn point(x: usize, sign: i8, head: &[Float]) -> FeaturePoint {
    let mut data = [0.0; DESCRIPTOR_SIZE];
    data[..head.len()].copy_from_slice(head);
    FeaturePoint::new(x, 0, 2, 6, sign, SurfDescriptor::from_array(data))
}

fn random_point(rng: &mut SmallRng, x: usize) -> FeaturePoint {
    let mut data = [0.0; DESCRIPTOR_SIZE];
    for value in data.iter_mut() {
        *value = rng.gen_range(-1.0..1.0);
    }
    let sign = if rng.gen::<bool>() { 1 } else { -1 };
    FeaturePoint::new(x, x, 2, 6, sign, SurfDescriptor::from_array(data))
}

#[test]
fn empty_collections_give_no_matches() {
    let points = vec![point(0, 1, &[1.0])];

    assert!(match_feature_points(&[], &points, 0.5).unwrap().is_empty());
    assert!(match_feature_points(&points, &[], 0.5).unwrap().is_empty());
    assert!(match_feature_points(&[], &[], 0.5).unwrap().is_empty());
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    let points = vec![point(0, 1, &[1.0])];

    assert_eq!(match_feature_points(&points, &points, 1.5).unwrap_err(), CorrelatorError::InvalidMatchingThreshold(1.5));
    assert_eq!(match_feature_points(&points, &points, -0.1).unwrap_err(), CorrelatorError::InvalidMatchingThreshold(-0.1));
    assert!(match_feature_points(&points, &points, Float::NAN).is_err());
}

#[test]
fn unambiguous_nearest_neighbour_is_accepted() {
    let first = vec![point(0, 1, &[1.0, 2.0])];
    let second = vec![point(10, 1, &[1.0, 2.0]), point(11, 1, &[11.0, 2.0])];

    let matches = match_feature_points(&first, &second, 0.015).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].feature_two.x, 10);
    // the only accepted distance is 0, normalization is skipped
    assert_eq!(matches[0].distance, 0.0);
}

#[test]
fn ambiguous_match_fails_ratio_test() {
    let first = vec![point(0, 1, &[0.0])];
    let second = vec![point(10, 1, &[1.0]), point(11, 1, &[-1.0])];

    assert!(match_feature_points(&first, &second, 1.0).unwrap().is_empty());
}

#[test]
fn ratio_exactly_at_bound_is_rejected() {
    let first = vec![point(0, 1, &[0.0])];
    let at_bound = vec![point(10, 1, &[4.0]), point(11, 1, &[5.0])];
    let below_bound = vec![point(10, 1, &[3.0]), point(11, 1, &[5.0])];

    // 4 / 5 is exactly 0.8
    assert!(match_feature_points(&first, &at_bound, 1.0).unwrap().is_empty());
    assert_eq!(match_feature_points(&first, &below_bound, 1.0).unwrap().len(), 1);
}

#[test]
fn point_without_second_candidate_is_dropped() {
    let first = vec![point(0, 1, &[0.0])];
    let second = vec![point(10, 1, &[0.0]), point(11, -1, &[5.0])];

    assert!(match_feature_points(&first, &second, 1.0).unwrap().is_empty());
}

#[test]
fn opposite_signs_are_never_compared() {
    let first = vec![point(0, 1, &[0.0])];
    let second = vec![point(10, -1, &[0.0]), point(11, 1, &[1.0]), point(12, 1, &[4.0])];

    let matches = match_feature_points(&first, &second, 1.0).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].feature_two.x, 11);
}

#[test]
fn distances_are_normalized_then_thresholded() {
    let first = vec![point(0, 1, &[0.0]), point(1, 1, &[100.0])];
    let second = vec![point(10, 1, &[1.0]), point(11, 1, &[102.0]), point(12, 1, &[50.0])];

    let all = match_feature_points(&first, &second, 1.0).unwrap();
    assert_eq!(all.iter().map(|m| (m.feature_one.x, m.feature_two.x, m.distance)).collect::<Vec<_>>(), vec![(0, 10, 0.5), (1, 11, 1.0)]);

    let close = match_feature_points(&first, &second, 0.6).unwrap();
    assert_eq!(close.len(), 1);
    assert_eq!(close[0].feature_one.x, 0);
}

#[test]
fn claimed_points_are_not_offered_again() {
    let first = vec![point(0, 1, &[1.0]), point(1, 1, &[2.0])];
    let second = vec![point(10, 1, &[0.0]), point(11, 1, &[10.0]), point(12, 1, &[100.0])];

    let matches = match_feature_points(&first, &second, 1.0).unwrap();

    // the second point would prefer x = 10, which the first point already claimed
    assert_eq!(matches.iter().map(|m| (m.feature_one.x, m.feature_two.x)).collect::<Vec<_>>(), vec![(0, 10), (1, 11)]);
    assert_eq!(matches[0].distance, 1.0/8.0);
    assert_eq!(matches[1].distance, 1.0);
}

#[test]
fn pairs_keep_caller_orientation_when_second_is_shorter() {
    let first = vec![point(0, 1, &[0.0]), point(1, 1, &[10.0]), point(2, 1, &[100.0])];
    let second = vec![point(10, 1, &[0.5]), point(11, 1, &[99.0])];

    let matches = match_feature_points(&first, &second, 1.0).unwrap();

    assert_eq!(matches.len(), 2);
    for matched_pair in matches.iter() {
        assert!(first.iter().any(|p| std::ptr::eq(p, matched_pair.feature_one)));
        assert!(second.iter().any(|p| std::ptr::eq(p, matched_pair.feature_two)));
    }
    assert_eq!(matches[0].feature_one.x, 0);
    assert_eq!(matches[1].feature_one.x, 2);
}

#[test]
fn second_collection_drives_the_scan_on_equal_sizes() {
    let first = vec![point(0, 1, &[0.0]), point(1, 1, &[1.0])];
    let second = vec![point(10, 1, &[0.9]), point(11, 1, &[10.0])];

    let matches = match_feature_points(&first, &second, 1.0).unwrap();

    // x = 10 claims x = 1 first, leaving x = 11 without a second candidate
    assert_eq!(matches.iter().map(|m| (m.feature_one.x, m.feature_two.x)).collect::<Vec<_>>(), vec![(1, 10)]);
    assert_eq!(matches[0].distance, 1.0);
    assert!(std::ptr::eq(matches[0].feature_one, &first[1]));
    assert!(std::ptr::eq(matches[0].feature_two, &second[0]));
}

#[test]
fn random_collections_respect_ratio_and_normalization() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    let first = (0..40).map(|x| random_point(&mut rng, x)).collect::<Vec<FeaturePoint>>();
    let second = (0..60).map(|x| random_point(&mut rng, x)).collect::<Vec<FeaturePoint>>();

    let matches = match_feature_points(&first, &second, 1.0).unwrap();
    let repeated = match_feature_points(&first, &second, 1.0).unwrap();
    assert_eq!(matches, repeated);

    for matched_pair in matches.iter() {
        assert_eq!(matched_pair.feature_one.sign, matched_pair.feature_two.sign);
        assert!(matched_pair.distance >= 0.0 && matched_pair.distance <= 1.0);
    }
    if !matches.is_empty() {
        let max_distance = matches.iter().map(|m| m.distance).fold(0.0, Float::max);
        assert_eq!(max_distance, 1.0);
    }

    let mut claimed = matches.iter().map(|m| m.feature_two.x).collect::<Vec<usize>>();
    claimed.sort();
    claimed.dedup();
    assert_eq!(claimed.len(), matches.len());
}
