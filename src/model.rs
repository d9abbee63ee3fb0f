//! Core data models for the ladder platformer.
//! Everything here is plain data in canvas pixel units (origin top-left, y grows down).

use crate::config::GameConfig;

/// Axis-aligned rectangle: top-left corner plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive overlap: rectangles whose edges just touch count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x > self.right()
            || other.right() < self.x
            || other.y > self.bottom()
            || other.bottom() < self.y)
    }

    /// Strict overlap of the horizontal extents (touching edges do not count).
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Strict overlap of the vertical extents.
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.bottom() > other.y && self.y < other.bottom()
    }
}

/// Free-function form of [`Rect::intersects`].
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Canvas size, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Degenerate viewports are raised to 1x1 so derived sizes stay finite.
    pub fn new(width: f64, height: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Static level layout. Never mutated after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    /// Ordered; the resolver scans them in this order.
    pub platforms: Vec<Rect>,
    pub ladder: Rect,
}

impl World {
    /// Deterministic layout: platforms alternate left/right edge by index parity and
    /// climb upward by `platform_height + platform_gap`; the ladder hugs the inner edge
    /// of the right-hand column and spans the full canvas height.
    pub fn generate(config: &GameConfig, bounds: Bounds) -> Self {
        let platform_width = bounds.width / config.platform_width_divisor;
        let step = config.platform_height + config.platform_gap;
        let platforms = (0..config.platform_count)
            .map(|i| {
                let x = if i % 2 == 0 {
                    0.0
                } else {
                    bounds.width - platform_width
                };
                let y = bounds.height - f64::from(i) * step;
                Rect::new(x, y, platform_width, config.platform_height)
            })
            .collect();
        let ladder = Rect::new(
            bounds.width - platform_width - config.ladder_width,
            0.0,
            config.ladder_width,
            bounds.height,
        );
        Self { platforms, ladder }
    }
}

/// What is holding the hero up this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Falling,
    OnPlatform,
    OnLadder,
}

impl Support {
    pub fn label(&self) -> &'static str {
        match self {
            Support::Falling => "Falling",
            Support::OnPlatform => "On platform",
            Support::OnLadder => "On ladder",
        }
    }
}

/// The player-controlled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    pub rect: Rect,
    /// Pixels per frame.
    pub speed_x: f64,
    pub speed_y: f64,
    /// Pixels per frame squared.
    pub gravity: f64,
    /// Recomputed by every physics step.
    pub on_platform: bool,
    pub on_ladder: bool,
}

impl Hero {
    pub fn spawn(config: &GameConfig, bounds: Bounds) -> Self {
        Self {
            rect: Rect::new(
                config.hero_start_x,
                bounds.height - config.hero_start_offset,
                config.hero_width,
                config.hero_height,
            ),
            speed_x: 0.0,
            speed_y: 0.0,
            gravity: config.gravity,
            on_platform: false,
            on_ladder: false,
        }
    }

    /// True when the hero's horizontal extent overlaps the ladder's band.
    pub fn in_ladder_band(&self, ladder: &Rect) -> bool {
        self.rect.overlaps_x(ladder)
    }

    pub fn support(&self) -> Support {
        if self.on_platform {
            Support::OnPlatform
        } else if self.on_ladder {
            Support::OnLadder
        } else {
            Support::Falling
        }
    }
}
