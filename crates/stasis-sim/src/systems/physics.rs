//! Projectile kinematics: velocity integration and gravity.
//!
//! Both passes run unconditionally every tick, frozen projectiles
//! included. The freeze scheduler pins positions back afterwards in the
//! same tick, so a frozen projectile's drift is never observable across a
//! tick boundary.

use hecs::World;

use stasis_core::components::Gravity;
use stasis_core::constants::{DT, GRAVITY};
use stasis_core::types::{Position, Velocity};

/// Integrate Position from Velocity: position += velocity * dt.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;
    }
}

/// Accelerate gravity-enabled entities downward. Entities whose gravity
/// flag is off (frozen projectiles) keep their velocity untouched.
pub fn apply_gravity(world: &mut World) {
    for (_entity, (vel, gravity)) in world.query_mut::<(&mut Velocity, &Gravity)>() {
        if gravity.enabled {
            vel.z -= GRAVITY * DT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_entity() {
        let mut world = World::new();
        let entity = world.spawn((Position::new(0.0, 0.0, 10.0), Velocity::new(20.0, 0.0, 0.0)));

        integrate(&mut world);

        let pos = *world.get::<&Position>(entity).unwrap();
        assert!((pos.x - 20.0 * DT).abs() < 1e-12);
        assert_eq!(pos.z, 10.0);
    }

    #[test]
    fn test_gravity_only_when_enabled() {
        let mut world = World::new();
        let falling = world.spawn((Velocity::zero(), Gravity::default()));
        let held = world.spawn((Velocity::zero(), Gravity { enabled: false }));

        apply_gravity(&mut world);

        let falling_vel = *world.get::<&Velocity>(falling).unwrap();
        let held_vel = *world.get::<&Velocity>(held).unwrap();
        assert!((falling_vel.z + GRAVITY * DT).abs() < 1e-12);
        assert_eq!(held_vel.z, 0.0, "Disabled gravity should leave velocity alone");
    }
}
