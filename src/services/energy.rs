//! METs energy model.
//!
//! `kcal = METs × intensity × weight_kg × hours`. Both directions are pure
//! and reject out-of-domain input instead of substituting defaults.

use crate::constants::{MAX_INTENSITY, MIN_INTENSITY};
use crate::error::{AppError, Result};
use crate::models::ExerciseType;

/// Calories burned by `exercise` for `duration_minutes` at `weight_kg`.
pub fn calories(
    exercise: ExerciseType,
    duration_minutes: f64,
    weight_kg: f64,
    intensity: f64,
) -> Result<f64> {
    let mets = checked_mets(exercise)?;
    check_weight(weight_kg)?;
    check_intensity(intensity)?;
    if !duration_minutes.is_finite() || duration_minutes < 0.0 {
        return Err(AppError::invalid(
            "duration_minutes",
            format!("must be a non-negative number, got {}", duration_minutes),
        ));
    }

    Ok(mets * intensity * weight_kg * (duration_minutes / 60.0))
}

/// Minutes of `exercise` needed to burn `target_calories`.
pub fn duration_for_calories(
    exercise: ExerciseType,
    target_calories: f64,
    weight_kg: f64,
    intensity: f64,
) -> Result<f64> {
    let mets = checked_mets(exercise)?;
    check_weight(weight_kg)?;
    check_intensity(intensity)?;
    if !target_calories.is_finite() || target_calories < 0.0 {
        return Err(AppError::invalid(
            "target_calories",
            format!("must be a non-negative number, got {}", target_calories),
        ));
    }

    Ok(target_calories / (mets * intensity * weight_kg) * 60.0)
}

fn checked_mets(exercise: ExerciseType) -> Result<f64> {
    let mets = exercise.mets();
    if mets <= 0.0 {
        return Err(AppError::invalid(
            "exercise_type",
            format!("{} has non-positive METs", exercise),
        ));
    }
    Ok(mets)
}

fn check_weight(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid(
            "weight_kg",
            format!("must be greater than 0, got {}", weight_kg),
        ));
    }
    Ok(())
}

fn check_intensity(intensity: f64) -> Result<()> {
    if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        return Err(AppError::invalid(
            "intensity",
            format!(
                "must be between {} and {}, got {}",
                MIN_INTENSITY, MAX_INTENSITY, intensity
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_thirty_minutes() {
        // 3.5 METs × 70kg × 0.5h
        let kcal = calories(ExerciseType::Walking, 30.0, 70.0, 1.0).unwrap();
        assert!((kcal - 122.5).abs() < 1e-9);
    }

    #[test]
    fn test_matches_closed_form() {
        for exercise in ExerciseType::all() {
            let (d, w) = (37.0, 63.5);
            let kcal = calories(exercise, d, w, 1.0).unwrap();
            let expected = exercise.mets() * w * d / 60.0;
            assert!(
                (kcal - expected).abs() <= 1e-9 * expected,
                "{}: {} vs {}",
                exercise,
                kcal,
                expected
            );
        }
    }

    #[test]
    fn test_linear_in_duration() {
        for d in [1.0, 7.5, 33.3, 59.0, 120.0] {
            let single = calories(ExerciseType::Running, d, 81.2, 1.0).unwrap();
            let double = calories(ExerciseType::Running, 2.0 * d, 81.2, 1.0).unwrap();
            assert_eq!(double, 2.0 * single);
        }
    }

    #[test]
    fn test_intensity_scales_linearly() {
        let base = calories(ExerciseType::Cycling, 40.0, 70.0, 1.0).unwrap();
        let hard = calories(ExerciseType::Cycling, 40.0, 70.0, 1.5).unwrap();
        assert!((hard - 1.5 * base).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_recovers_duration() {
        let kcal = calories(ExerciseType::Aerobics, 42.0, 58.0, 1.2).unwrap();
        let minutes = duration_for_calories(ExerciseType::Aerobics, kcal, 58.0, 1.2).unwrap();
        assert!((minutes - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_zero_calories() {
        assert_eq!(calories(ExerciseType::Yoga, 0.0, 70.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_weight() {
        for w in [0.0, -5.0, f64::NAN] {
            let err = duration_for_calories(ExerciseType::Walking, 100.0, w, 1.0).unwrap_err();
            assert!(matches!(err, AppError::InvalidParameter { ref field, .. } if field == "weight_kg"));
            assert!(calories(ExerciseType::Walking, 10.0, w, 1.0).is_err());
        }
    }

    #[test]
    fn test_rejects_out_of_range_intensity_and_duration() {
        assert!(calories(ExerciseType::Walking, 10.0, 70.0, 0.4).is_err());
        assert!(calories(ExerciseType::Walking, 10.0, 70.0, 1.6).is_err());
        assert!(calories(ExerciseType::Walking, -1.0, 70.0, 1.0).is_err());
        assert!(duration_for_calories(ExerciseType::Walking, -1.0, 70.0, 1.0).is_err());
    }
}
