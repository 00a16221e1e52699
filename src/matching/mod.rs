use log::debug;

use crate::{Float, CorrelatorError};
use crate::features::surf_feature::FeaturePoint;
use crate::pyramid::surf::surf_runtime_params::validate_matching_threshold;

pub mod surf_descriptor;

/// Nearest over second nearest distance must stay below this ratio.
pub const RELATIVE_MATCH_THRESHOLD: Float = 0.8;

#[derive(Debug,Clone,PartialEq)]
pub struct MatchedPair<'a> {
    pub feature_one: &'a FeaturePoint,
    pub feature_two: &'a FeaturePoint,
    /// Normalized by the largest accepted distance.
    pub distance: Float
}

struct MatchCandidate {
    index_short: usize,
    index_long: usize,
    distance: Float
}

/// Greedy nearest neighbour matching with a ratio test.
///
/// Each point of the shorter collection claims its nearest unclaimed partner of
/// equal sign; on equal sizes the second collection drives the scan. Claimed
/// points are not offered to later points. Distances are divided by the largest
/// accepted distance (unless that is 0) and pairs above `threshold` are dropped.
/// Pairs are returned as `(first, second)` regardless of which collection was
/// shorter.
pub fn match_feature_points<'a>(first: &'a [FeaturePoint], second: &'a [FeaturePoint], threshold: Float) -> Result<Vec<MatchedPair<'a>>, CorrelatorError> {
    validate_matching_threshold(threshold)?;

    let is_swapped = second.len() <= first.len();
    let (short, long) = match is_swapped {
        true => (second, first),
        false => (first, second)
    };

    let mut already_matched = vec![false; long.len()];
    let mut candidates = Vec::<MatchCandidate>::new();

    for (index_short, point) in short.iter().enumerate() {
        let mut nearest: Option<(usize, Float)> = None;
        let mut second_nearest: Option<Float> = None;

        for (index_long, other) in long.iter().enumerate() {
            if already_matched[index_long] || point.sign != other.sign {
                continue;
            }

            let distance = point.distance_between(other);
            let nearest_distance = nearest.map(|(_, best)| best);
            match nearest_distance {
                Some(best) if distance >= best => {
                    if second_nearest.map_or(true, |second_best| distance < second_best) {
                        second_nearest = Some(distance);
                    }
                },
                _ => {
                    second_nearest = nearest_distance;
                    nearest = Some((index_long, distance));
                }
            }
        }

        if let (Some((index_long, nearest_distance)), Some(second_nearest_distance)) = (nearest, second_nearest) {
            if nearest_distance < RELATIVE_MATCH_THRESHOLD*second_nearest_distance {
                already_matched[index_long] = true;
                candidates.push(MatchCandidate{index_short, index_long, distance: nearest_distance});
            }
        }
    }

    normalize_distances(&mut candidates);

    let matches = candidates.iter()
        .filter(|candidate| candidate.distance <= threshold)
        .map(|candidate| {
            let (feature_one, feature_two) = match is_swapped {
                true => (&long[candidate.index_long], &short[candidate.index_short]),
                false => (&short[candidate.index_short], &long[candidate.index_long])
            };
            MatchedPair{feature_one, feature_two, distance: candidate.distance}
        })
        .collect::<Vec<MatchedPair<'a>>>();

    debug!("{} of {} points passed the ratio test, {} within threshold {}", candidates.len(), short.len(), matches.len(), threshold);

    Ok(matches)
}

fn normalize_distances(candidates: &mut [MatchCandidate]) {
    let max_distance = candidates.iter().map(|candidate| candidate.distance).fold(0.0, Float::max);

    // all accepted pairs are exact matches
    if max_distance == 0.0 {
        return;
    }

    for candidate in candidates.iter_mut() {
        candidate.distance /= max_distance;
    }
}
