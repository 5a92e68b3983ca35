use pointmass::{
    Bounds, ForceGenerator, Particle, ParticleHandle, PhysicsError, StepStats, Vec3, World, WorldConfig,
};
use wasm_bindgen::prelude::*;

fn js_error(e: PhysicsError) -> JsError {
    JsError::new(&e.to_string())
}

/// Flat `[x0, y0, z0, r0, x1, ...]` for every live particle.
fn flat_spheres(world: &World<f32>) -> Vec<f32> {
    let mut out = Vec::with_capacity(world.particle_count() * 4);
    for (_, p) in world.particles() {
        out.extend_from_slice(&[p.pos.x, p.pos.y, p.pos.z, p.radius]);
    }
    out
}

// ---- Box Demo ----

#[wasm_bindgen]
pub struct BoxDemo {
    world: World<f32>,
    last: StepStats,
    seed: u32,
}

#[wasm_bindgen]
impl BoxDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(restitution: f32) -> Result<BoxDemo, JsError> {
        let bounds = Bounds::new([-60.0, 60.0], [-60.0, 60.0], [0.0, 50.0]);
        let config = WorldConfig::new()
            .with_collision_restitution(restitution)
            .with_boundary_restitution(restitution);
        Ok(BoxDemo {
            world: World::new(bounds, &config).map_err(js_error)?,
            last: StepStats::default(),
            seed: 0x2545_f491,
        })
    }

    /// Drop a ball of random size and velocity near the top of the box.
    pub fn spawn_ball(&mut self) {
        let pos = Vec3::new(self.random() * 80.0 - 40.0, self.random() * 80.0 - 40.0, 40.0);
        let vel = Vec3::new(self.random() * 40.0 - 20.0, self.random() * 40.0 - 20.0, 0.0);
        let radius = 1.0 + self.random() * 3.0;
        let mut ball = Particle::with_mass(pos, radius * radius * radius, radius);
        ball.vel = vel;
        self.world.add_particle(ball);
    }

    pub fn fire_laser(&mut self, x: f32, y: f32, z: f32, dx: f32, dy: f32, dz: f32) {
        self.world
            .add_particle(Particle::laser(Vec3::new(x, y, z), Vec3::new(dx, dy, dz)));
    }

    pub fn launch_firework(&mut self, x: f32, y: f32) {
        self.world
            .add_particle(Particle::firework(Vec3::new(x, y, 1.0), Vec3::new(0.0, 0.0, 60.0)));
    }

    pub fn update(&mut self, dt: f32) {
        self.last = self.world.step(dt);
        let bounds = *self.world.bounds();
        self.world.retain_particles(|_, p| bounds.contains(p.pos));
    }

    pub fn spheres(&self) -> Vec<f32> {
        flat_spheres(&self.world)
    }

    pub fn particle_count(&self) -> usize {
        self.world.particle_count()
    }

    /// Contacts found and resolver iterations used by the last update.
    pub fn last_contacts(&self) -> usize {
        self.last.contacts
    }

    pub fn last_iterations(&self) -> usize {
        self.last.iterations
    }
}

impl BoxDemo {
    /// xorshift32 in [0, 1].
    fn random(&mut self) -> f32 {
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 17;
        self.seed ^= self.seed << 5;
        self.seed as f32 / u32::MAX as f32
    }
}

// ---- Chain Demo ----

#[wasm_bindgen]
pub struct ChainDemo {
    world: World<f32>,
    links: Vec<ParticleHandle>,
}

#[wasm_bindgen]
impl ChainDemo {
    /// A rod chain of `segments` links hanging from a fixed anchor, with a
    /// cable tying its free end back to a second anchor.
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Result<ChainDemo, JsError> {
        let mut world = World::new(
            Bounds::new([-60.0, 60.0], [-60.0, 60.0], [0.0, 50.0]),
            &WorldConfig::new().with_collisions(false),
        )
        .map_err(js_error)?;

        let start = Vec3::new(-20.0, 0.0, 45.0);
        let end = Vec3::new(20.0, 0.0, 45.0);
        let segments = segments.max(1);
        let spacing = start.distance(end) / segments as f32;

        let mut links = Vec::with_capacity(segments + 1);
        links.push(world.add_particle(Particle::fixed(start, 0.5)));
        for i in 1..=segments {
            let pos = start.lerp(end, i as f32 / segments as f32);
            let handle = world.add_particle(Particle::with_mass(pos, 1.0, 0.5));
            world.add_rod(links[i - 1], handle, spacing).map_err(js_error)?;
            links.push(handle);
        }

        let hook = world.add_particle(Particle::fixed(Vec3::new(30.0, 0.0, 45.0), 0.5));
        if let Some(&tail) = links.last() {
            world.add_cable(hook, tail, 30.0, 0.3).map_err(js_error)?;
        }
        Ok(ChainDemo { world, links })
    }

    pub fn update(&mut self, dt: f32) {
        self.world.step(dt);
    }

    /// Give the free end a kick.
    pub fn kick(&mut self, dx: f32, dy: f32, dz: f32) {
        if let Some(tail) = self.links.last().and_then(|&h| self.world.particle_mut(h)) {
            tail.vel += Vec3::new(dx, dy, dz);
        }
    }

    pub fn spheres(&self) -> Vec<f32> {
        flat_spheres(&self.world)
    }

    /// Flat `[x0, y0, z0, x1, ...]` of the chain links in order.
    pub fn chain(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.links.len() * 3);
        for p in self.links.iter().filter_map(|&h| self.world.particle(h)) {
            out.extend_from_slice(&[p.pos.x, p.pos.y, p.pos.z]);
        }
        out
    }
}

// ---- Springs Demo ----

#[wasm_bindgen]
pub struct SpringsDemo {
    world: World<f32>,
    bobs: [ParticleHandle; 3],
}

#[wasm_bindgen]
impl SpringsDemo {
    /// Three bobs, each hung from its own anchor: a plain spring, a bungee
    /// and a stiff spring.
    #[wasm_bindgen(constructor)]
    pub fn new(stiffness: f32) -> Result<SpringsDemo, JsError> {
        let mut world = World::new(
            Bounds::new([-60.0, 60.0], [-60.0, 60.0], [0.0, 50.0]),
            &WorldConfig::new().with_collisions(false),
        )
        .map_err(js_error)?;

        let anchors = [
            Vec3::new(-20.0, 0.0, 45.0),
            Vec3::new(0.0, 0.0, 45.0),
            Vec3::new(20.0, 0.0, 45.0),
        ];
        let drop = Vec3::new(0.0, 0.0, 5.0);
        let bobs = anchors.map(|a| world.add_particle(Particle::with_mass(a - drop, 1.0, 1.0)));

        world
            .add_force(bobs[0], ForceGenerator::anchored_spring(anchors[0], stiffness, 10.0))
            .map_err(js_error)?;
        world
            .add_force(bobs[1], ForceGenerator::anchored_bungee(anchors[1], stiffness, 10.0))
            .map_err(js_error)?;
        world
            .add_force(bobs[2], ForceGenerator::stiff_anchored_spring(anchors[2], stiffness, 0.5))
            .map_err(js_error)?;

        Ok(SpringsDemo { world, bobs })
    }

    pub fn update(&mut self, dt: f32) {
        self.world.step(dt);
    }

    /// Pull every bob sideways by `dx`.
    pub fn displace(&mut self, dx: f32) {
        for &h in &self.bobs {
            if let Some(p) = self.world.particle_mut(h) {
                p.pos.x += dx;
            }
        }
    }

    pub fn spheres(&self) -> Vec<f32> {
        flat_spheres(&self.world)
    }
}
