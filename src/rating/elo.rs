//! Pairwise Elo update primitive
//!
//! The leaf shared by every computer: an expected score on the standard
//! logistic curve (a 400-point gap implies a 10:1 expected-outcome ratio)
//! and the K-weighted update derived from it. Expected scores come from the
//! skillratings elo module; the update step is written out here since the
//! computers need fractional outcomes, which skillratings does not expose.

use skillratings::elo::EloRating;

/// Expected score of side A against side B
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let (expected_a, _expected_b) = skillratings::elo::expected_score(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
    );
    expected_a
}

/// Update a pair of ratings from a continuous outcome
///
/// `result_a` is 1.0 for a clean win by side A, 0.0 for a clean win by
/// side B, 0.5 for a draw; intermediate values are accepted. Ratings are
/// not clamped and may diverge arbitrarily.
pub fn pairwise_update(rating_a: f64, rating_b: f64, result_a: f64, k: f64) -> (f64, f64) {
    let expected_a = expected_score(rating_a, rating_b);
    let new_a = rating_a + k * (result_a - expected_a);
    let new_b = rating_b + k * ((1.0 - result_a) - (1.0 - expected_a));
    (new_a, new_b)
}

/// Round a rating to two decimal places
///
/// Stored ratings are always rounded; the rounded value feeds the next
/// expected-score computation, so this is part of the replay contract, not
/// display formatting.
pub fn round_rating(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}
