//! Generational arena owning the world's particles.
//!
//! Springs, links and contacts refer to particles through [`ParticleHandle`]
//! rather than references, so a removed particle can never be reached
//! through a handle that outlived it.

use crate::float::Float;
use crate::particle::Particle;
use alloc::vec::Vec as AllocVec;

/// Stable identity of a particle inside a [`ParticleSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle {
    index: u32,
    generation: u32,
}

impl ParticleHandle {
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Slot<F: Float> {
    generation: u32,
    particle: Option<Particle<F>>,
}

/// Slot arena with a free list. Iteration follows slot order, which is
/// insertion order until a slot is reused.
#[derive(Clone, Debug)]
pub struct ParticleSet<F: Float> {
    slots: AllocVec<Slot<F>>,
    free: AllocVec<u32>,
    len: usize,
}

impl<F: Float> ParticleSet<F> {
    pub fn new() -> Self {
        ParticleSet {
            slots: AllocVec::new(),
            free: AllocVec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, particle: Particle<F>) -> ParticleHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.particle = Some(particle);
            return ParticleHandle { index, generation: slot.generation };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, particle: Some(particle) });
        ParticleHandle { index, generation: 0 }
    }

    /// Remove and return the particle. The slot's generation is bumped so
    /// every outstanding copy of `handle` goes stale.
    pub fn remove(&mut self, handle: ParticleHandle) -> Option<Particle<F>> {
        let slot = self.slots.get_mut(handle.index())?;
        if slot.generation != handle.generation {
            return None;
        }
        let particle = slot.particle.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(particle)
    }

    pub fn contains(&self, handle: ParticleHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: ParticleHandle) -> Option<&Particle<F>> {
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.particle.as_ref())
    }

    pub fn get_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle<F>> {
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.particle.as_mut())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleHandle, &Particle<F>)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.particle.as_ref().map(|p| {
                (ParticleHandle { index: index as u32, generation: slot.generation }, p)
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleHandle, &mut Particle<F>)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.particle
                .as_mut()
                .map(|p| (ParticleHandle { index: index as u32, generation }, p))
        })
    }
}

impl<F: Float> Default for ParticleSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    fn ball(x: f64) -> Particle<f64> {
        Particle::with_mass(Vec3::new(x, 0.0, 0.0), 1.0, 1.0)
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut set = ParticleSet::new();
        let a = set.insert(ball(1.0));
        assert!(set.remove(a).is_some());
        let b = set.insert(ball(2.0));
        assert_eq!(a.index(), b.index());
        assert!(set.get(a).is_none());
        assert_eq!(set.get(b).map(|p| p.pos.x), Some(2.0));
        assert!(set.remove(a).is_none());
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut set = ParticleSet::new();
        for i in 0..5 {
            set.insert(ball(i as f64));
        }
        let xs: AllocVec<f64> = set.iter().map(|(_, p)| p.pos.x).collect();
        assert_eq!(xs, [0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(set.len(), 5);
    }
}
