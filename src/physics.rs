//! Single-pass hero resolver, run once per frame after input has been applied.

use crate::model::{Bounds, Hero, Rect, World, intersects};

/// Advance the hero by one frame against the static world.
///
/// Order matters: gravity accumulates first, platforms are scanned in sequence and the
/// first hit wins, the ladder damps (halves) vertical speed, then position is committed
/// and hard-clamped to the canvas. The canvas floor acts as an implicit platform.
pub fn step_hero(hero: &mut Hero, world: &World, bounds: Bounds) {
    hero.speed_y += hero.gravity;
    hero.on_platform = false;
    hero.on_ladder = false;

    let mut potential_y = hero.rect.y + hero.speed_y;

    let probe = Rect {
        y: potential_y,
        ..hero.rect
    };
    if let Some(platform) = world.platforms.iter().find(|p| intersects(&probe, p)) {
        hero.on_platform = true;
        potential_y = platform.y - hero.rect.height;
        hero.speed_y = 0.0;
    }

    // Uses the current position, not the probe.
    if hero.rect.overlaps_x(&world.ladder) && hero.rect.overlaps_y(&world.ladder) {
        hero.on_ladder = true;
        hero.speed_y /= 2.0;
    }

    if hero.on_platform || hero.on_ladder {
        hero.rect.y = potential_y;
    } else {
        hero.rect.y += hero.speed_y;
    }

    hero.rect.x += hero.speed_x;

    clamp_to_bounds(hero, bounds);
}

fn clamp_to_bounds(hero: &mut Hero, bounds: Bounds) {
    let max_x = (bounds.width - hero.rect.width).max(0.0);
    hero.rect.x = hero.rect.x.clamp(0.0, max_x);

    if hero.rect.bottom() > bounds.height {
        hero.rect.y = bounds.height - hero.rect.height;
        hero.on_platform = true;
        hero.speed_y = 0.0;
    }
    if hero.rect.y < 0.0 {
        hero.rect.y = 0.0;
    }
}
