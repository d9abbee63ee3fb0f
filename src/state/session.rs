// One running game: static world, the hero, and queued input.
use crate::config::GameConfig;
use crate::model::{Bounds, Hero, Support, World};
use crate::physics::step_hero;

use super::input::{InputState, Key};

#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub bounds: Bounds,
    pub world: World,
    pub hero: Hero,
    pub input: InputState,
    /// frames stepped so far
    pub frame: u64,
}

impl Session {
    pub fn new(config: GameConfig, width: f64, height: f64) -> Self {
        let bounds = Bounds::new(width, height);
        let world = World::generate(&config, bounds);
        let hero = Hero::spawn(&config, bounds);
        Self {
            config,
            bounds,
            world,
            hero,
            input: InputState::default(),
            frame: 0,
        }
    }

    /// Apply queued input, then resolve physics. Position is committed only here.
    pub fn tick(&mut self) {
        self.input.apply(
            &mut self.hero,
            &self.world.ladder,
            self.config.run_speed,
            self.config.climb_speed,
        );
        step_hero(&mut self.hero, &self.world, self.bounds);
        self.frame += 1;
    }

    pub fn support(&self) -> Support {
        self.hero.support()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            support: self.support(),
            x: self.hero.rect.x.round() as i32,
            y: self.hero.rect.y.round() as i32,
            speed_x_tenths: (self.hero.speed_x * 10.0).round() as i32,
            speed_y_tenths: (self.hero.speed_y * 10.0).round() as i32,
            held: Key::ALL.map(|k| self.input.is_held(k)),
        }
    }
}

/// Rounded view of the hero for the overlay; compared to skip redundant re-renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudSnapshot {
    pub support: Support,
    pub x: i32,
    pub y: i32,
    pub speed_x_tenths: i32,
    pub speed_y_tenths: i32,
    /// in `Key::ALL` order
    pub held: [bool; 4],
}

impl Default for HudSnapshot {
    fn default() -> Self {
        Self {
            support: Support::Falling,
            x: 0,
            y: 0,
            speed_x_tenths: 0,
            speed_y_tenths: 0,
            held: [false; 4],
        }
    }
}
