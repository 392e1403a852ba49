//! Vertical motion of the character.

use super::constants::{ASCENT_TILT, MAX_TILT, TILT_PER_VELOCITY};
use super::types::Character;
use crate::config::Tuning;

/// Advance one tick: velocity gains gravity, then position gains velocity.
pub fn integrate(character: &mut Character, tuning: &Tuning) {
    character.velocity += tuning.gravity;
    character.y += character.velocity;
    character.rotation = rotation_for_velocity(character.velocity);
}

/// Jump overrides whatever velocity had accumulated (it is not additive).
pub fn apply_jump(character: &mut Character, tuning: &Tuning) {
    character.velocity = tuning.jump_strength;
}

/// Cosmetic tilt: a fixed nose-up angle while rising, proportional nose-down
/// while falling, capped at a vertical dive.
pub fn rotation_for_velocity(velocity: f64) -> f64 {
    if velocity < 0.0 {
        ASCENT_TILT
    } else if velocity > 0.0 {
        (velocity * TILT_PER_VELOCITY).min(MAX_TILT)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_one_tick_after_jump() {
        let tuning = Tuning {
            gravity: 0.6,
            jump_strength: -8.0,
            ..Tuning::default()
        };
        let mut character = Character::at(0.0);
        apply_jump(&mut character, &tuning);
        integrate(&mut character, &tuning);
        assert!(approx(character.velocity, -7.4));
        assert!(approx(character.y, -7.4));
    }

    #[test]
    fn test_jump_overrides_fall_speed() {
        let tuning = Tuning::default();
        let mut character = Character::at(200.0);
        character.velocity = 12.0;
        apply_jump(&mut character, &tuning);
        assert_eq!(character.velocity, tuning.jump_strength);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let tuning = Tuning::default();
        let mut character = Character::at(200.0);
        for _ in 0..10 {
            integrate(&mut character, &tuning);
        }
        assert!(character.y > 200.0);
        assert!(character.velocity > 0.0);
    }

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(rotation_for_velocity(-3.0), ASCENT_TILT);
        assert_eq!(rotation_for_velocity(0.0), 0.0);
        assert!(approx(rotation_for_velocity(5.0), 20.0));
        assert_eq!(rotation_for_velocity(50.0), MAX_TILT);
    }
}
