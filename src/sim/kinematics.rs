//! Vertical kinematics: gravity integration and ground clamping
//!
//! Shared by the player and the falling boxes. Everything is always subject
//! to gravity; there is no separate "falling" state, only the clamp outcome.

/// Ground-contact outcome of a single fall step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Still above the ground line after the step
    Airborne,
    /// Crossed the ground line this step (the landed edge)
    JustLanded,
    /// Was already resting on the ground line
    Grounded,
}

/// Updated position/velocity plus the contact outcome
#[derive(Debug, Clone, Copy)]
pub struct FallStep {
    pub y: f32,
    pub vel: f32,
    pub contact: Contact,
}

/// Advance a falling entity by one frame of gravity.
///
/// Semi-implicit Euler: `v' = v + g*dt`, then `y' = y + v'*dt`. If the new
/// position reaches `rest_y` (ground line minus the entity's half height),
/// position is clamped there and velocity zeroed. `was_grounded` separates
/// the landed edge from the re-clamp that happens every frame while resting.
pub fn fall_step(
    y: f32,
    vel: f32,
    was_grounded: bool,
    gravity: f32,
    rest_y: f32,
    dt: f32,
) -> FallStep {
    let vel = vel + gravity * dt;
    let y = y + vel * dt;

    if y >= rest_y {
        let contact = if was_grounded {
            Contact::Grounded
        } else {
            Contact::JustLanded
        };
        FallStep {
            y: rest_y,
            vel: 0.0,
            contact,
        }
    } else {
        FallStep {
            y,
            vel,
            contact: Contact::Airborne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GRAVITY: f32 = 1800.0;
    const REST_Y: f32 = 468.0;

    #[test]
    fn test_free_fall_is_semi_implicit() {
        // One step well above the floor: velocity updates first, position
        // uses the updated velocity.
        let step = fall_step(100.0, 0.0, false, GRAVITY, REST_Y, 0.1);
        assert!((step.vel - 180.0).abs() < 1e-3);
        assert!((step.y - 118.0).abs() < 1e-3);
        assert_eq!(step.contact, Contact::Airborne);
    }

    #[test]
    fn test_clamp_reports_landed_edge() {
        // Starting just above the floor with downward velocity
        let step = fall_step(REST_Y - 1.0, 200.0, false, GRAVITY, REST_Y, 0.016);
        assert_eq!(step.contact, Contact::JustLanded);
        assert_eq!(step.y, REST_Y);
        assert_eq!(step.vel, 0.0);
    }

    #[test]
    fn test_resting_reclamps_as_grounded() {
        // An entity already on the floor gets pulled below and re-clamped
        // every frame; that is not a landed edge.
        let step = fall_step(REST_Y, 0.0, true, GRAVITY, REST_Y, 0.016);
        assert_eq!(step.contact, Contact::Grounded);
        assert_eq!(step.y, REST_Y);
        assert_eq!(step.vel, 0.0);
    }

    #[test]
    fn test_upward_velocity_leaves_the_ground() {
        let step = fall_step(REST_Y, -680.0, true, GRAVITY, REST_Y, 0.016);
        assert_eq!(step.contact, Contact::Airborne);
        assert!(step.y < REST_Y);
        assert!(step.vel < 0.0);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let step = fall_step(100.0, -50.0, false, GRAVITY, REST_Y, 0.0);
        assert_eq!(step.y, 100.0);
        assert_eq!(step.vel, -50.0);
        assert_eq!(step.contact, Contact::Airborne);
    }

    proptest! {
        /// The clamp holds for any starting state and any non-negative dt.
        #[test]
        fn never_below_the_floor(
            y in -500.0f32..=468.0,
            vel in -1000.0f32..=1000.0,
            was_grounded in proptest::bool::ANY,
            dt in 0.0f32..=0.25,
        ) {
            let step = fall_step(y, vel, was_grounded, GRAVITY, REST_Y, dt);
            prop_assert!(step.y <= REST_Y);
        }
    }
}
