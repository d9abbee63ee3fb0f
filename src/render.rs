//! Flat-color scene drawing. Pure read of the session; world coordinates are screen pixels.

use web_sys::CanvasRenderingContext2d;

use crate::model::Rect;
use crate::state::Session;

/// The two drawing primitives the scene needs.
pub trait Surface {
    fn clear_area(&mut self, area: &Rect);
    fn fill_area(&mut self, rect: &Rect, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear_area(&mut self, area: &Rect) {
        self.clear_rect(area.x, area.y, area.width, area.height);
    }

    fn fill_area(&mut self, rect: &Rect, color: &str) {
        self.set_fill_style_str(color);
        self.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}

/// Clear, then platforms, ladder, hero (later draws on top).
pub fn draw_scene(surface: &mut impl Surface, session: &Session) {
    let cfg = &session.config;
    let area = session.bounds.area();
    match &cfg.background_color {
        Some(color) => surface.fill_area(&area, color),
        None => surface.clear_area(&area),
    }
    for platform in &session.world.platforms {
        surface.fill_area(platform, &cfg.platform_color);
    }
    surface.fill_area(&session.world.ladder, &cfg.ladder_color);
    surface.fill_area(&session.hero.rect, &cfg.hero_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rect),
        Fill(Rect, String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear_area(&mut self, area: &Rect) {
            self.ops.push(Op::Clear(*area));
        }
        fn fill_area(&mut self, rect: &Rect, color: &str) {
            self.ops.push(Op::Fill(*rect, color.to_string()));
        }
    }

    #[test]
    fn draws_in_layer_order() {
        let session = Session::new(GameConfig::default(), 900.0, 600.0);
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &session);

        assert_eq!(rec.ops.len(), 1 + 10 + 1 + 1);
        assert_eq!(rec.ops[0], Op::Clear(Rect::new(0.0, 0.0, 900.0, 600.0)));
        for (op, platform) in rec.ops[1..11].iter().zip(&session.world.platforms) {
            assert_eq!(*op, Op::Fill(*platform, "#8B4513".into()));
        }
        assert_eq!(rec.ops[11], Op::Fill(session.world.ladder, "#555555".into()));
        assert_eq!(rec.ops[12], Op::Fill(session.hero.rect, "#ff0000".into()));
    }

    #[test]
    fn background_color_replaces_clear() {
        let cfg = GameConfig {
            background_color: Some("#0e1116".into()),
            ..GameConfig::default()
        };
        let session = Session::new(cfg, 320.0, 240.0);
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &session);
        assert_eq!(
            rec.ops[0],
            Op::Fill(Rect::new(0.0, 0.0, 320.0, 240.0), "#0e1116".into())
        );
    }

    #[test]
    fn drawing_does_not_touch_state() {
        let mut session = Session::new(GameConfig::default(), 900.0, 600.0);
        session.tick();
        let hero = session.hero.clone();
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &session);
        draw_scene(&mut rec, &session);
        assert_eq!(session.hero, hero);
        assert_eq!(session.frame, 1);
    }
}
