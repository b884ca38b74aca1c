//! Light aggregation
//!
//! Ambient lights never become entities: their `color * intensity` is folded
//! into the build-wide ambient accumulator, which is purely additive and thus
//! order-independent. Every other light kind maps to a light entity.

use crate::foundation::math::Vec3;
use crate::model::LightSource;
use crate::scene::LightEntity;

/// Folds one light into the ambient accumulator or produces an entity.
pub fn aggregate(light: &LightSource, ambient: &mut Vec3) -> Option<LightEntity> {
    match light {
        LightSource::Ambient { color, intensity } => {
            *ambient += color * *intensity;
            None
        }
        LightSource::Directional { color, intensity } => Some(LightEntity::Directional {
            color: *color,
            intensity: *intensity,
        }),
        LightSource::Point {
            color,
            intensity,
            attenuation,
        } => Some(LightEntity::Point {
            color: *color,
            intensity: *intensity,
            attenuation: *attenuation,
        }),
        LightSource::Spot {
            color,
            intensity,
            attenuation,
            cut_off_angle,
        } => Some(LightEntity::Spot {
            color: *color,
            intensity: *intensity,
            attenuation: *attenuation,
            cut_off_angle: *cut_off_angle,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ambient_accumulates_scaled_color() {
        let mut ambient = Vec3::zeros();
        let light = LightSource::Ambient {
            color: Vec3::new(0.5, 0.25, 1.0),
            intensity: 2.0,
        };

        assert!(aggregate(&light, &mut ambient).is_none());
        assert_relative_eq!(ambient.x, 1.0);
        assert_relative_eq!(ambient.y, 0.5);
        assert_relative_eq!(ambient.z, 2.0);
    }

    #[test]
    fn test_ambient_accumulation_is_order_independent() {
        let l1 = LightSource::Ambient {
            color: Vec3::new(0.1, 0.2, 0.3),
            intensity: 0.7,
        };
        let l2 = LightSource::Ambient {
            color: Vec3::new(0.9, 0.1, 0.5),
            intensity: 1.3,
        };

        let mut forward = Vec3::zeros();
        aggregate(&l1, &mut forward);
        aggregate(&l2, &mut forward);

        let mut reversed = Vec3::zeros();
        aggregate(&l2, &mut reversed);
        aggregate(&l1, &mut reversed);

        assert_relative_eq!(forward.x, reversed.x, epsilon = 1e-6);
        assert_relative_eq!(forward.y, reversed.y, epsilon = 1e-6);
        assert_relative_eq!(forward.z, reversed.z, epsilon = 1e-6);
    }

    #[test]
    fn test_spot_light_keeps_attenuation_and_cutoff() {
        let mut ambient = Vec3::zeros();
        let light = LightSource::Spot {
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 3.0,
            attenuation: [1.0, 0.1, 0.01],
            cut_off_angle: 30.0,
        };

        let entity = aggregate(&light, &mut ambient).unwrap();
        match entity {
            LightEntity::Spot {
                attenuation,
                cut_off_angle,
                intensity,
                ..
            } => {
                assert_eq!(attenuation, [1.0, 0.1, 0.01]);
                assert_relative_eq!(cut_off_angle, 30.0);
                assert_relative_eq!(intensity, 3.0);
            }
            _ => panic!("expected spot entity"),
        }
        // Non-ambient lights leave the accumulator untouched.
        assert_eq!(ambient, Vec3::zeros());
    }
}
