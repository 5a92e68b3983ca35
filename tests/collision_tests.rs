use pointmass::{
    Bounds, BoundaryCollisions, Contact, ContactResolver, NoOpStepObserver, Particle, ParticleCollisions,
    ParticleSet, Vec3,
};

fn ball(pos: Vec3<f64>, vel: Vec3<f64>, inv_mass: f64, radius: f64) -> Particle<f64> {
    Particle::new(pos, vel, Vec3::zero(), inv_mass, radius).with_gravity(Vec3::zero())
}

fn detect_pairs(set: &ParticleSet<f64>, restitution: f64) -> Vec<Contact<f64>> {
    let mut out = Vec::new();
    ParticleCollisions::new(restitution).generate_contacts(set, &mut out);
    out
}

#[test]
fn elastic_head_on_collision_swaps_velocities() {
    let mut set = ParticleSet::new();
    let a = set.insert(ball(Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), 1.0, 10.0));
    let b = set.insert(ball(Vec3::new(15.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0), 1.0, 10.0));

    let mut contacts = detect_pairs(&set, 1.0);
    assert_eq!(contacts.len(), 1);
    assert!((contacts[0].penetration - 5.0).abs() < 1e-12);
    assert_eq!(contacts[0].normal, Vec3::new(-1.0, 0.0, 0.0));

    let stats = ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);
    assert!(stats.converged);

    let (pa, pb) = (set.get(a).unwrap(), set.get(b).unwrap());
    assert!((pa.vel.x + 5.0).abs() < 1e-12, "a should bounce back, got {:?}", pa.vel);
    assert!((pb.vel.x - 5.0).abs() < 1e-12, "b should bounce back, got {:?}", pb.vel);
    assert!(
        pa.pos.distance(pb.pos) >= 20.0 - 1e-12,
        "overlap should be removed, separation {}",
        pa.pos.distance(pb.pos)
    );
}

#[test]
fn overlapping_but_separating_pair_is_only_pushed_apart() {
    let mut set = ParticleSet::new();
    let a = set.insert(ball(Vec3::new(0.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0), 1.0, 10.0));
    let b = set.insert(ball(Vec3::new(15.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), 1.0, 10.0));

    let mut contacts = detect_pairs(&set, 1.0);
    ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);

    let (pa, pb) = (set.get(a).unwrap(), set.get(b).unwrap());
    assert_eq!(pa.vel.x, -5.0);
    assert_eq!(pb.vel.x, 5.0);
    assert!((pa.pos.x + 2.5).abs() < 1e-12);
    assert!((pb.pos.x - 17.5).abs() < 1e-12);
}

#[test]
fn unequal_masses_split_correction_by_inverse_mass() {
    let mut set = ParticleSet::new();
    let light = set.insert(ball(Vec3::new(0.0, 0.0, 0.0), Vec3::zero(), 3.0, 2.0));
    let heavy = set.insert(ball(Vec3::new(3.0, 0.0, 0.0), Vec3::zero(), 1.0, 2.0));

    let mut contacts = detect_pairs(&set, 1.0);
    ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);

    // Penetration 1: three quarters go to the light ball.
    assert!((set.get(light).unwrap().pos.x + 0.75).abs() < 1e-12);
    assert!((set.get(heavy).unwrap().pos.x - 3.25).abs() < 1e-12);
}

#[test]
fn boundary_bounce_reverses_normal_velocity_only() {
    let bounds = Bounds::new([-10.0, 10.0], [-10.0, 10.0], [0.0, 50.0]);
    let mut set = ParticleSet::new();
    let h = set.insert(ball(Vec3::new(0.0, 0.0, 0.5), Vec3::new(3.0, -2.0, -4.0), 1.0, 1.0));

    let mut contacts = Vec::new();
    BoundaryCollisions::new(bounds, 1.0).generate_contacts(&set, &mut contacts);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].b, None);
    assert_eq!(contacts[0].normal, Vec3::new(0.0, 0.0, 1.0));
    assert!((contacts[0].penetration - 0.5).abs() < 1e-12);

    ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);
    let p = set.get(h).unwrap();
    assert_eq!(p.vel.x, 3.0);
    assert_eq!(p.vel.y, -2.0);
    assert!((p.vel.z - 4.0).abs() < 1e-12);
    assert!((p.pos.z - 1.0).abs() < 1e-12);
}

#[test]
fn partial_restitution_scales_rebound() {
    let bounds = Bounds::new([-10.0, 10.0], [-10.0, 10.0], [0.0, 50.0]);
    let mut set = ParticleSet::new();
    let h = set.insert(ball(Vec3::new(9.5, 0.0, 25.0), Vec3::new(6.0, 0.0, 0.0), 1.0, 1.0));

    let mut contacts = Vec::new();
    BoundaryCollisions::new(bounds, 0.5).generate_contacts(&set, &mut contacts);
    assert_eq!(contacts[0].normal, Vec3::new(-1.0, 0.0, 0.0));
    assert!((contacts[0].penetration - 0.5).abs() < 1e-12);

    ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);
    let p = set.get(h).unwrap();
    assert!((p.vel.x + 3.0).abs() < 1e-12);
    assert!((p.pos.x - 9.0).abs() < 1e-12);
}

#[test]
fn corner_contacts_every_violated_wall() {
    let bounds = Bounds::new([0.0, 10.0], [0.0, 10.0], [0.0, 10.0]);
    let mut set = ParticleSet::new();
    set.insert(ball(Vec3::new(0.5, 9.5, 5.0), Vec3::zero(), 1.0, 1.0));

    let mut contacts = Vec::new();
    BoundaryCollisions::new(bounds, 1.0).generate_contacts(&set, &mut contacts);
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].normal, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(contacts[1].normal, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn fixed_particle_is_never_moved_by_contacts() {
    let mut set = ParticleSet::new();
    let wall = set.insert(Particle::fixed(Vec3::zero(), 5.0));
    let mover = set.insert(ball(Vec3::new(8.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0), 1.0, 5.0));

    let mut contacts = detect_pairs(&set, 1.0);
    assert_eq!(contacts.len(), 1);
    ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);

    let w = set.get(wall).unwrap();
    assert_eq!(w.pos, Vec3::zero());
    assert_eq!(w.vel, Vec3::zero());
    let m = set.get(mover).unwrap();
    assert!((m.vel.x - 2.0).abs() < 1e-12);
    assert!((m.pos.x - 10.0).abs() < 1e-12);
}

#[test]
fn two_fixed_particles_produce_no_work() {
    let mut set = ParticleSet::new();
    set.insert(Particle::fixed(Vec3::zero(), 2.0));
    set.insert(Particle::fixed(Vec3::new(1.0, 0.0, 0.0), 2.0));

    let mut contacts = detect_pairs(&set, 1.0);
    assert_eq!(contacts.len(), 1);
    let stats = ContactResolver::default().resolve_contacts(&mut set, &mut contacts, 1.0 / 60.0, &mut NoOpStepObserver);
    assert_eq!(stats.iterations, 0);
    assert!(stats.converged);
}

#[test]
fn sphere_wider_than_box_hits_low_wall_only() {
    let bounds = Bounds::new([0.0, 2.0], [-10.0, 10.0], [0.0, 50.0]);
    let mut set = ParticleSet::new();
    set.insert(ball(Vec3::new(1.0, 0.0, 25.0), Vec3::zero(), 1.0, 3.0));

    let mut contacts = Vec::new();
    BoundaryCollisions::new(bounds, 1.0).generate_contacts(&set, &mut contacts);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].normal, Vec3::new(1.0, 0.0, 0.0));
    assert!((contacts[0].penetration - 2.0).abs() < 1e-12);
}
