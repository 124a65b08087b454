use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use content::{ImpactIntro, IntroPhase};

const TRAIL_SEGMENTS: usize = 12;
const TRAIL_LENGTH: f32 = 160.0;

/// Streaks the fireball from the top-left corner to beyond the bottom-right
/// one while the intro is in flight.
pub fn impact_intro_overlay_system(mut contexts: EguiContexts, intro: Res<ImpactIntro>) {
    if intro.phase() != IntroPhase::Flying {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let screen = ctx.viewport_rect();
    let start = egui::pos2(-150.0, -150.0);
    let end = egui::pos2(screen.width() * 1.2, screen.height() * 1.2);
    // Ease-in: slow launch, fast impact.
    let t = intro.flight_progress();
    let pos = start.lerp(end, t * t);
    let dir = (end - start).normalized();

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("impact_intro"),
    ));

    for i in (1..=TRAIL_SEGMENTS).rev() {
        let f = i as f32 / TRAIL_SEGMENTS as f32;
        let radius = 4.0 + 14.0 * (1.0 - f);
        let alpha = ((1.0 - f) * 200.0) as u8;
        painter.circle_filled(
            pos - dir * f * TRAIL_LENGTH,
            radius,
            egui::Color32::from_rgba_unmultiplied(0xf9, 0x73, 0x16, alpha),
        );
    }
    painter.circle_filled(pos, 28.0, egui::Color32::from_rgba_unmultiplied(255, 200, 0, 90));
    painter.circle_filled(pos, 16.0, egui::Color32::WHITE);

    ctx.request_repaint();
}
