//! Player and target records.

use rand::Rng;

use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

/// Clamp `v` into `[radius, dim - radius]`. An axis narrower than the diameter
/// collapses to its midpoint.
pub fn clamp_axis(v: f64, radius: f64, dim: f64) -> f64 {
    if dim < radius * 2.0 {
        return dim / 2.0;
    }
    v.clamp(radius, dim - radius)
}

impl Player {
    /// Spawn at the canvas center.
    pub fn new(cfg: &GameConfig, width: f64, height: f64) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
            radius: cfg.player_radius,
            speed: cfg.player_speed,
            color: cfg.player_color.clone(),
        }
    }

    /// Discrete keyboard step: `dx`/`dy` are the held directions in {-1, 0, 1}.
    pub fn step_keys(&mut self, dx: i8, dy: i8) {
        self.x += dx as f64 * self.speed;
        self.y += dy as f64 * self.speed;
    }

    /// Move one step toward the pointer. Within one step of it nothing happens,
    /// so the player never overshoots and jitters around the cursor.
    pub fn seek(&mut self, px: f64, py: f64) {
        let dx = px - self.x;
        let dy = py - self.y;
        let distance = dx.hypot(dy);
        if distance > self.speed {
            self.x += dx / distance * self.speed;
            self.y += dy / distance * self.speed;
        }
    }

    pub fn clamp(&mut self, width: f64, height: f64) {
        self.x = clamp_axis(self.x, self.radius, width);
        self.y = clamp_axis(self.y, self.radius, height);
    }
}

impl Target {
    pub fn new<R: Rng + ?Sized>(cfg: &GameConfig, rng: &mut R, width: f64, height: f64) -> Self {
        let mut target = Self {
            x: 0.0,
            y: 0.0,
            radius: cfg.target_radius,
            color: cfg.target_color.clone(),
        };
        target.relocate(rng, width, height);
        target
    }

    /// Uniformly random position inset by the radius on both axes.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.x = random_axis(rng, self.radius, width);
        self.y = random_axis(rng, self.radius, height);
    }

    pub fn clamp(&mut self, width: f64, height: f64) {
        self.x = clamp_axis(self.x, self.radius, width);
        self.y = clamp_axis(self.y, self.radius, height);
    }
}

fn random_axis<R: Rng + ?Sized>(rng: &mut R, radius: f64, dim: f64) -> f64 {
    let lo = radius;
    let hi = dim - radius;
    if hi <= lo {
        dim / 2.0
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Centers closer than the sum of radii.
pub fn overlaps(player: &Player, target: &Target) -> bool {
    let distance = (player.x - target.x).hypot(player.y - target.y);
    distance < player.radius + target.radius
}
