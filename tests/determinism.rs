use pointmass::{Particle, Vec3, World};

fn run_scene() -> Vec<Vec3<f64>> {
    let mut world = World::with_limits([-30.0, 30.0], [-30.0, 30.0], [0.0, 40.0]).unwrap();

    let mut handles = Vec::new();
    for i in 0..6 {
        for j in 0..6 {
            let pos = Vec3::new(-15.0 + 6.0 * i as f64, -15.0 + 6.0 * j as f64, 10.0 + (i + j) as f64);
            let vel = Vec3::new((j as f64 - 2.5) * 4.0, (i as f64 - 2.5) * 4.0, 0.0);
            handles.push(world.add_particle(Particle::new(pos, vel, Vec3::zero(), 1.0, 1.5)));
        }
    }
    let anchor = world.add_particle(Particle::fixed(Vec3::new(0.0, 0.0, 38.0), 1.0));
    world.add_rod(anchor, handles[14], 20.0).unwrap();
    world.add_cable(handles[0], handles[35], 25.0, 0.5).unwrap();
    world.add_spring(handles[7], handles[8], 5.0, 4.0).unwrap();

    for _ in 0..240 {
        world.step(1.0 / 60.0);
    }
    handles.iter().map(|&h| world.particle(h).unwrap().pos).collect()
}

#[test]
fn world_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_scene()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}
