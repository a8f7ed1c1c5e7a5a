//! Celebration particles.
//!
//! Particles fly in a straight line at a fixed speed while their alpha fades by a
//! constant per tick; a particle dies once alpha reaches zero. With a positive
//! decay every particle dies after about `1 / decay` ticks, and the system
//! additionally caps its population at `max_particles` (oldest dropped first).

use std::collections::VecDeque;
use std::f64::consts::TAU;

use rand::Rng;

const MIN_RADIUS: f64 = 2.0;
const MAX_RADIUS: f64 = 5.0;
const MIN_SPEED: f64 = 1.0;
const MAX_SPEED: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Direction of travel in radians, fixed at spawn.
    pub angle: f64,
    pub speed: f64,
    pub alpha: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
            alpha: 1.0,
        }
    }

    /// Move one tick and fade. Returns whether the particle is still alive.
    fn tick(&mut self, decay: f64) -> bool {
        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed;
        self.alpha -= decay;
        self.alpha > 0.0
    }
}

#[derive(Debug)]
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    decay: f64,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(decay: f64, max_particles: usize) -> Self {
        Self { particles: VecDeque::new(), decay, max_particles }
    }

    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, rng: &mut R, origin: (f64, f64), count: usize) {
        let count = count.min(self.max_particles);
        let overflow = (self.particles.len() + count).saturating_sub(self.max_particles);
        if overflow > 0 {
            log::trace!("particle cap reached, dropping {overflow} oldest");
            self.particles.drain(..overflow);
        }
        self.particles
            .extend((0..count).map(|_| Particle::random(rng, origin.0, origin.1)));
    }

    /// Advance every particle one tick and drop the dead ones in the same pass.
    pub fn advance(&mut self) {
        let decay = self.decay;
        self.particles.retain_mut(|p| p.tick(decay));
    }

    /// Insert a fully specified particle (subject to the same cap).
    pub fn push(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }
}
