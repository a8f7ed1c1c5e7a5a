//! Game state aggregate: one tick of simulation plus a pure render pass.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::entities::{Player, Target, overlaps};
use super::input::{InputEvent, InputState};
use super::particles::ParticleSystem;
use super::render::{DrawCmd, Surface, TextAlign, rgba};
use crate::config::GameConfig;

const SCORE_FONT: &str = "20px Arial";
const SCORE_COLOR: &str = "#333";
const SCORE_POS: (f64, f64) = (20.0, 40.0);
const ENCOURAGEMENT_FONT: &str = "bold 24px Arial";

/// What happened during a tick that the host cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The player reached the target; the host plays the score cue.
    pub hit: bool,
    /// A click arrived; the host starts the background track if it is paused.
    pub clicked: bool,
}

pub struct GameState {
    config: GameConfig,
    width: f64,
    height: f64,
    inbox: Vec<InputEvent>,
    pub input: InputState,
    pub player: Player,
    pub target: Target,
    pub particles: ParticleSystem,
    score: u64,
    encouragement: String,
    encouragement_alpha: f64,
    rng: SmallRng,
}

impl GameState {
    /// Seeded from the host's entropy source.
    pub fn new(config: GameConfig, width: f64, height: f64) -> Self {
        Self::from_rng(config, width, height, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_seed(config: GameConfig, width: f64, height: f64, seed: u64) -> Self {
        Self::from_rng(config, width, height, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, width: f64, height: f64, mut rng: SmallRng) -> Self {
        let mut player = Player::new(&config, width, height);
        player.clamp(width, height);
        let target = Target::new(&config, &mut rng, width, height);
        let particles = ParticleSystem::new(config.particle_decay, config.max_particles);
        Self {
            config,
            width,
            height,
            inbox: Vec::new(),
            input: InputState::new(),
            player,
            target,
            particles,
            score: 0,
            encouragement: String::new(),
            encouragement_alpha: 0.0,
            rng,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn encouragement(&self) -> Option<(&str, f64)> {
        (self.encouragement_alpha > 0.0).then_some((self.encouragement.as_str(), self.encouragement_alpha))
    }

    /// Queue an input event; it is applied at the start of the next `update`.
    pub fn push_input(&mut self, event: InputEvent) {
        self.inbox.push(event);
    }

    /// New canvas size. Entities are pulled back inside the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.player.clamp(width, height);
        self.target.clamp(width, height);
    }

    pub fn update(&mut self) -> TickOutcome {
        for event in self.inbox.drain(..) {
            self.input.apply(event);
        }
        let clicked = self.input.take_click();

        let (dx, dy) = self.input.direction();
        self.player.step_keys(dx, dy);
        if let Some((px, py)) = self.input.pointer() {
            self.player.seek(px, py);
        }
        self.player.clamp(self.width, self.height);

        let hit = self.check_collision();
        self.particles.advance();

        if self.encouragement_alpha > 0.0 {
            self.encouragement_alpha = (self.encouragement_alpha - self.config.text_decay).max(0.0);
        }

        TickOutcome { hit, clicked }
    }

    fn check_collision(&mut self) -> bool {
        if !overlaps(&self.player, &self.target) {
            return false;
        }
        self.score += 1;
        let origin = (self.target.x, self.target.y);
        self.particles.spawn_burst(&mut self.rng, origin, self.config.burst_count);
        self.target.relocate(&mut self.rng, self.width, self.height);
        let list = &self.config.encouragements;
        if !list.is_empty() {
            self.encouragement = list[self.rng.gen_range(0..list.len())].clone();
            self.encouragement_alpha = 1.0;
        }
        log::debug!("hit at ({:.1}, {:.1}), score {}", origin.0, origin.1, self.score);
        true
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw(DrawCmd::Clear { width: self.width, height: self.height });
        surface.draw(DrawCmd::Circle {
            x: self.target.x,
            y: self.target.y,
            radius: self.target.radius,
            fill: self.target.color.clone(),
        });
        surface.draw(DrawCmd::Circle {
            x: self.player.x,
            y: self.player.y,
            radius: self.player.radius,
            fill: self.player.color.clone(),
        });
        for p in self.particles.iter() {
            surface.draw(DrawCmd::Circle { x: p.x, y: p.y, radius: p.radius, fill: rgba(255, 255, 0, p.alpha) });
        }
        surface.draw(DrawCmd::Text {
            text: format!("得分: {}", self.score),
            x: SCORE_POS.0,
            y: SCORE_POS.1,
            font: SCORE_FONT,
            fill: SCORE_COLOR.to_string(),
            align: TextAlign::Left,
        });
        if let Some((text, alpha)) = self.encouragement() {
            surface.draw(DrawCmd::Text {
                text: text.to_string(),
                x: self.width / 2.0,
                y: self.height / 2.0,
                font: ENCOURAGEMENT_FONT,
                fill: rgba(255, 68, 68, alpha),
                align: TextAlign::Center,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::RecordingSurface;

    fn game() -> GameState {
        GameState::with_seed(GameConfig::default(), 800.0, 600.0, 11)
    }

    #[test]
    fn starts_centered_with_zero_score() {
        let g = game();
        assert_eq!((g.player.x, g.player.y), (400.0, 300.0));
        assert_eq!(g.score(), 0);
        assert!(g.encouragement().is_none());
    }

    #[test]
    fn held_arrow_left_moves_one_step() {
        let mut g = game();
        g.target.x = 700.0;
        g.target.y = 500.0;
        g.push_input(InputEvent::KeyDown("ArrowLeft".into()));
        g.update();
        assert_eq!(g.player.x, 395.0);
        assert_eq!(g.player.y, 300.0);
    }

    #[test]
    fn inbox_is_applied_on_update_only() {
        let mut g = game();
        g.push_input(InputEvent::KeyDown("d".into()));
        assert!(!g.input.is_held("d"));
        g.update();
        assert!(g.input.is_held("d"));
    }

    #[test]
    fn click_is_reported_once() {
        let mut g = game();
        g.target.x = 700.0;
        g.target.y = 500.0;
        g.push_input(InputEvent::Click);
        assert!(g.update().clicked);
        assert!(!g.update().clicked);
    }

    #[test]
    fn encouragement_fades_to_zero() {
        let mut g = game();
        g.player.x = 100.0;
        g.player.y = 100.0;
        g.target.x = 105.0;
        g.target.y = 100.0;
        assert!(g.update().hit);
        let (_, a) = g.encouragement().unwrap();
        assert!((a - 0.99).abs() < 1e-9);
        for _ in 0..200 {
            g.target.x = 700.0;
            g.target.y = 500.0;
            g.update();
        }
        assert!(g.encouragement().is_none());
        assert_eq!(g.encouragement_alpha, 0.0);
    }

    #[test]
    fn render_order() {
        let g = game();
        let mut s = RecordingSurface::new();
        g.render(&mut s);
        assert_eq!(s.commands[0], DrawCmd::Clear { width: 800.0, height: 600.0 });
        assert!(matches!(&s.commands[1], DrawCmd::Circle { radius, .. } if *radius == 10.0));
        assert!(matches!(&s.commands[2], DrawCmd::Circle { radius, .. } if *radius == 20.0));
        match s.commands.last().unwrap() {
            DrawCmd::Text { text, align, .. } => {
                assert_eq!(text, "得分: 0");
                assert_eq!(*align, TextAlign::Left);
            }
            other => panic!("expected score text, got {other:?}"),
        }
    }

    #[test]
    fn resize_pulls_entities_inside() {
        let mut g = game();
        g.player.x = 780.0;
        g.target.x = 790.0;
        g.resize(400.0, 300.0);
        assert_eq!(g.player.x, 380.0);
        assert_eq!(g.target.x, 390.0);
        assert!(g.target.y <= 290.0);
    }
}
