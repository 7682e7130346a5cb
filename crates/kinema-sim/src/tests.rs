#[cfg(test)]
mod tests {
    use kinema_core::fixed::Fixed;
    use kinema_core::vec2::Vec2f;

    use crate::world::{BodyId, World, WorldError};

    fn fixed_vec(x: i64, y: i64) -> Vec2f {
        Vec2f::new(Fixed::from_int(x), Fixed::from_int(y))
    }

    // --- Body creation and lookup ---

    #[test]
    fn body_ids_are_sequential_creation_order() {
        let mut world = World::new();
        let a = world.create_body();
        let b = world.create_body();
        let c = world.create_body();
        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
        assert_eq!(c.index, 2);
        assert_eq!(world.body_count(), 3);
    }

    #[test]
    fn new_body_has_default_state() {
        let mut world = World::new();
        let id = world.create_body();
        assert_eq!(world.position(id).unwrap(), Vec2f::ZERO);
        assert_eq!(world.velocity(id).unwrap(), Vec2f::ZERO);
        assert_eq!(world.force(id).unwrap(), Vec2f::ZERO);
        assert_eq!(world.mass(id).unwrap(), 1.0);
        assert_eq!(world.angle(id).unwrap(), 0.0);
    }

    #[test]
    fn unknown_body_is_rejected() {
        let mut world = World::new();
        let stray = BodyId::new(7);
        assert_eq!(
            world.position(stray),
            Err(WorldError::UnknownBody { id: stray })
        );
        assert_eq!(
            world.set_velocity(stray, Vec2f::ZERO),
            Err(WorldError::UnknownBody { id: stray })
        );
    }

    // --- Mass invariant ---

    #[test]
    fn non_positive_mass_is_rejected_at_assignment() {
        let mut world = World::new();
        let id = world.create_body();
        world.set_mass(id, 2.5).unwrap();

        assert_eq!(
            world.set_mass(id, 0.0),
            Err(WorldError::InvalidMass { mass: 0.0 })
        );
        assert_eq!(
            world.set_mass(id, -1.0),
            Err(WorldError::InvalidMass { mass: -1.0 })
        );
        assert!(matches!(
            world.set_mass(id, f32::NAN),
            Err(WorldError::InvalidMass { .. })
        ));
        // stored mass unchanged by the failed assignments
        assert_eq!(world.mass(id).unwrap(), 2.5);
    }

    #[test]
    fn step_defends_against_corrupted_mass() {
        let mut world = World::new();
        let id = world.create_body();
        world.set_velocity(id, fixed_vec(1, 0)).unwrap();
        world.body_mut(id).unwrap().mass = 0.0;

        assert_eq!(
            world.step(1.0),
            Err(WorldError::InvalidMass { mass: 0.0 })
        );
        // the failed step mutated nothing
        assert_eq!(world.position(id).unwrap(), Vec2f::ZERO);
        assert_eq!(world.time().tick, 0);
    }

    // --- Integration ---

    #[test]
    fn velocity_moves_position() {
        let mut world = World::new();
        let id = world.create_body();
        world.set_velocity(id, fixed_vec(1, 0)).unwrap();

        world.step(1.0).unwrap();

        assert_eq!(world.position(id).unwrap(), fixed_vec(1, 0));
        assert_eq!(world.velocity(id).unwrap(), fixed_vec(1, 0));
        assert_eq!(world.force(id).unwrap(), Vec2f::ZERO);
    }

    #[test]
    fn force_accelerates_by_inverse_mass() {
        let mut world = World::new();
        let id = world.create_body();
        world.set_mass(id, 2.0).unwrap();
        world.add_force(id, fixed_vec(4, 0)).unwrap();

        world.step(0.5).unwrap();

        // dv = F/m * dt = 4/2 * 0.5 = 1; position integrates the new velocity
        assert_eq!(world.velocity(id).unwrap(), fixed_vec(1, 0));
        assert_eq!(
            world.position(id).unwrap(),
            Vec2f::new(Fixed::new(1, -1), Fixed::ZERO)
        );
    }

    #[test]
    fn forces_accumulate_between_steps() {
        let mut world = World::new();
        let id = world.create_body();
        world.add_force(id, fixed_vec(1, 2)).unwrap();
        world.add_force(id, fixed_vec(2, -1)).unwrap();
        assert_eq!(world.force(id).unwrap(), fixed_vec(3, 1));
    }

    #[test]
    fn force_resets_after_step() {
        let mut world = World::new();
        let a = world.create_body();
        let b = world.create_body();
        world.add_force(a, fixed_vec(10, -3)).unwrap();
        world.add_force(b, fixed_vec(-7, 40)).unwrap();

        world.step(0.25).unwrap();

        assert_eq!(world.force(a).unwrap(), Vec2f::ZERO);
        assert_eq!(world.force(b).unwrap(), Vec2f::ZERO);
    }

    #[test]
    fn angle_integrates_angular_velocity() {
        let mut world = World::new();
        let id = world.create_body();
        world.set_angle(id, 0.25).unwrap();
        world.set_angular_velocity(id, 1.5).unwrap();

        world.step(0.5).unwrap();

        assert_eq!(world.angle(id).unwrap(), 1.0);
        assert_eq!(world.angular_velocity(id).unwrap(), 1.5);
    }

    #[test]
    fn gravity_accelerates_independent_of_mass() {
        let gravity = Vec2f::new(Fixed::ZERO, Fixed::from_int(-10));
        let mut world = World::with_gravity(gravity);
        assert_eq!(world.gravity(), gravity);
        let light = world.create_body();
        let heavy = world.create_body();
        world.set_mass(heavy, 8.0).unwrap();

        world.step(1.0).unwrap();

        assert_eq!(world.velocity(light).unwrap(), fixed_vec(0, -10));
        assert_eq!(world.velocity(heavy).unwrap(), fixed_vec(0, -10));
        // gravity is ambient, not part of the accumulated force readback
        assert_eq!(world.force(light).unwrap(), Vec2f::ZERO);
    }

    #[test]
    fn invalid_dt_is_rejected() {
        let mut world = World::new();
        world.create_body();
        assert!(matches!(
            world.step(f32::NAN),
            Err(WorldError::InvalidTimeStep { .. })
        ));
        assert_eq!(
            world.step(-0.5),
            Err(WorldError::InvalidTimeStep { dt: -0.5 })
        );
        assert_eq!(world.time().tick, 0);
    }

    #[test]
    fn time_advances_once_per_step() {
        let mut world = World::new();
        world.step(0.5).unwrap();
        world.step(0.25).unwrap();
        assert_eq!(world.time().tick, 2);
        assert!((world.time().elapsed_secs - 0.75).abs() < 1e-6);
    }

    // --- Snapshots ---

    #[test]
    fn snapshot_captures_bodies_in_creation_order() {
        let mut world = World::new();
        let a = world.create_body();
        let b = world.create_body();
        world.set_velocity(a, fixed_vec(1, 0)).unwrap();
        world.set_mass(b, 3.0).unwrap();
        world.step(1.0).unwrap();

        let snapshot = world.snapshot();
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.bodies.len(), 2);
        assert_eq!(snapshot.bodies[0].id, a);
        assert_eq!(snapshot.bodies[0].position, fixed_vec(1, 0));
        assert_eq!(snapshot.bodies[1].mass, 3.0);
    }

    #[test]
    fn snapshot_serializes_identically_for_identical_state() {
        let build = || {
            let mut world = World::new();
            let id = world.create_body();
            world.set_velocity(id, fixed_vec(3, -2)).unwrap();
            world.add_force(id, fixed_vec(-1, 5)).unwrap();
            world.step(0.125).unwrap();
            serde_json::to_string(&world.snapshot()).unwrap()
        };
        assert_eq!(build(), build());
    }
}
