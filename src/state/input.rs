// Keyboard intent queued by DOM listeners and applied once at the top of each frame.
use std::collections::HashSet;

use crate::model::{Hero, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

    /// Maps `KeyboardEvent.key`; anything but the four arrows is ignored.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEdge {
    Press(Key),
    Release(Key),
}

#[derive(Debug, Default)]
pub struct InputState {
    /// edges received since the last frame, in arrival order
    pending: Vec<KeyEdge>,
    held: HashSet<Key>,
}

impl InputState {
    /// Auto-repeat presses are queued too; each one re-issues the impulse.
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
        self.pending.push(KeyEdge::Press(key));
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
        self.pending.push(KeyEdge::Release(key));
    }

    /// Focus lost: forget held keys and queue a release for each.
    pub fn clear(&mut self) {
        let mut held: Vec<Key> = self.held.drain().collect();
        held.sort_by_key(|k| *k as u8);
        self.pending.extend(held.into_iter().map(KeyEdge::Release));
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drain queued edges into hero velocity. Ladder-band checks use the hero's
    /// position at the start of the frame.
    pub fn apply(&mut self, hero: &mut Hero, ladder: &Rect, run_speed: f64, climb_speed: f64) {
        for edge in self.pending.drain(..) {
            let in_band = hero.in_ladder_band(ladder);
            match edge {
                KeyEdge::Press(Key::Left) => hero.speed_x = -run_speed,
                KeyEdge::Press(Key::Right) => hero.speed_x = run_speed,
                KeyEdge::Press(Key::Up) => {
                    if in_band {
                        hero.speed_y = -climb_speed;
                    }
                }
                KeyEdge::Press(Key::Down) => {
                    if in_band {
                        hero.speed_y = climb_speed;
                    }
                }
                KeyEdge::Release(Key::Left | Key::Right) => hero.speed_x = 0.0,
                KeyEdge::Release(Key::Up | Key::Down) => {
                    // off the ladder a fall in progress is left alone
                    if in_band {
                        hero.speed_y = 0.0;
                    }
                }
            }
        }
    }
}
