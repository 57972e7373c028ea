use rand::Rng;

use crate::{Bounds, Particle, Point, Surface, particle_count, render, step};

/// Particle set sized for one surface. Regenerated, never resized, when the
/// surface changes.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        let particles = (0..particle_count(bounds))
            .map(|_| Particle::random(bounds, rng))
            .collect();

        Self { bounds, particles }
    }

    pub fn from_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self { bounds, particles }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn step(&mut self, pointer: Option<Point>) {
        step(&mut self.particles, pointer, self.bounds);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.particles, self.bounds, surface);
    }
}
