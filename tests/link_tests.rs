use pointmass::{Particle, ParticleHandle, Vec3, World};

const DT: f64 = 1.0 / 60.0;

fn world() -> World<f64> {
    World::with_limits([-60.0, 60.0], [-60.0, 60.0], [0.0, 50.0]).unwrap()
}

fn distance(world: &World<f64>, a: ParticleHandle, b: ParticleHandle) -> f64 {
    world.particle(a).unwrap().pos.distance(world.particle(b).unwrap().pos)
}

#[test]
fn rod_pendulum_holds_length_every_tick() {
    let mut w = world();
    let anchor = w.add_particle(Particle::fixed(Vec3::new(0.0, 0.0, 40.0), 1.0));
    let bob = w.add_particle(Particle::with_mass(Vec3::new(12.0, 0.0, 40.0), 2.0, 1.0));
    w.add_rod(anchor, bob, 10.0).unwrap();

    for tick in 0..200 {
        w.step(DT);
        let len = distance(&w, anchor, bob);
        assert!((len - 10.0).abs() < 1e-9, "tick {}: rod length {}", tick, len);
    }

    // The bob swings below the anchor rather than staying level with it.
    assert!(w.particle(bob).unwrap().pos.z < 40.0);
    assert_eq!(w.particle(anchor).unwrap().pos, Vec3::new(0.0, 0.0, 40.0));
}

#[test]
fn rod_between_free_particles_holds_length_while_spinning() {
    let mut w = world();
    let a = w.add_particle(
        Particle::new(Vec3::new(-6.0, 0.0, 25.0), Vec3::new(-3.0, 0.0, 0.0), Vec3::zero(), 1.0, 1.0)
            .with_gravity(Vec3::zero()),
    );
    let b = w.add_particle(
        Particle::new(Vec3::new(6.0, 0.0, 25.0), Vec3::new(4.0, 1.0, 0.0), Vec3::zero(), 0.5, 1.0)
            .with_gravity(Vec3::zero()),
    );
    w.add_rod(a, b, 10.0).unwrap();

    for tick in 0..150 {
        w.step(DT);
        let len = distance(&w, a, b);
        assert!((len - 10.0).abs() < 1e-9, "tick {}: rod length {}", tick, len);
    }
}

#[test]
fn compressed_rod_pushes_apart() {
    let mut w = world();
    let a = w.add_particle(Particle::with_mass(Vec3::new(0.0, 0.0, 25.0), 1.0, 0.5).with_gravity(Vec3::zero()));
    let b = w.add_particle(Particle::with_mass(Vec3::new(4.0, 0.0, 25.0), 1.0, 0.5).with_gravity(Vec3::zero()));
    w.add_rod(a, b, 5.0).unwrap();

    w.step(DT);
    assert!((distance(&w, a, b) - 5.0).abs() < 1e-9);
    assert!((w.particle(a).unwrap().pos.x + 0.5).abs() < 1e-9);
}

#[test]
fn cable_never_exceeds_max_length() {
    let mut w = world();
    let anchor = w.add_particle(Particle::fixed(Vec3::new(0.0, 0.0, 40.0), 1.0));
    let bob = w.add_particle(Particle::with_mass(Vec3::new(3.0, 0.0, 35.0), 1.0, 1.0));
    w.add_cable(anchor, bob, 15.0, 0.5).unwrap();

    let mut longest: f64 = 0.0;
    for tick in 0..300 {
        w.step(DT);
        let len = distance(&w, anchor, bob);
        assert!(len <= 15.0 + 1e-9, "tick {}: cable length {}", tick, len);
        longest = longest.max(len);
    }
    assert!(longest > 14.9, "the bob should have pulled the cable taut");
}

#[test]
fn slack_cable_exerts_nothing() {
    let mut w = world();
    let a = w.add_particle(Particle::with_mass(Vec3::new(0.0, 0.0, 25.0), 1.0, 1.0).with_gravity(Vec3::zero()));
    let b = w.add_particle(
        Particle::new(Vec3::new(5.0, 0.0, 25.0), Vec3::new(1.0, 0.0, 0.0), Vec3::zero(), 1.0, 1.0)
            .with_gravity(Vec3::zero()),
    );
    w.add_cable(a, b, 20.0, 0.0).unwrap();

    for _ in 0..30 {
        let stats = w.step(DT);
        assert_eq!(stats.contacts, 0);
    }
    assert_eq!(w.particle(a).unwrap().pos, Vec3::new(0.0, 0.0, 25.0));
}
