use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use viewport::{HostSurface, SurfaceRect, SurfaceSize, ViewToggles};

use crate::palette::{BORDER, MUTED, PANEL};

const MARGIN: f32 = 12.0;

/// Writes the window area the panels left free, which is where the crater
/// is rendered. Must run after every panel has been laid out.
pub fn publish_host_surface(mut contexts: EguiContexts, mut host: ResMut<HostSurface>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        host.rect = None;
        return;
    };

    let rect = ctx.available_rect();
    let size = SurfaceSize::new(rect.width(), rect.height());
    host.rect = size.is_renderable().then(|| SurfaceRect {
        origin: Vec2::new(rect.min.x, rect.min.y),
        size,
    });
}

pub fn viewer_controls_system(
    mut contexts: EguiContexts,
    host: Res<HostSurface>,
    mut toggles: ResMut<ViewToggles>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(rect) = host.rect else {
        return;
    };

    let top_right = egui::pos2(
        rect.origin.x + rect.size.width - MARGIN,
        rect.origin.y + MARGIN,
    );
    egui::Area::new("viewer_controls".into())
        .fixed_pos(top_right)
        .pivot(egui::Align2::RIGHT_TOP)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(PANEL)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .corner_radius(6)
                .inner_margin(egui::Margin::same(6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let water = egui::Button::new("Water").selected(toggles.show_water);
                        if ui.add(water).clicked() {
                            toggles.toggle_water();
                        }
                        let wireframe =
                            egui::Button::new("Wireframe").selected(toggles.show_wireframe);
                        if ui.add(wireframe).clicked() {
                            toggles.toggle_wireframe();
                        }
                    });
                });
        });

    let bottom_left = egui::pos2(
        rect.origin.x + MARGIN,
        rect.origin.y + rect.size.height - MARGIN,
    );
    egui::Area::new("viewer_hint".into())
        .fixed_pos(bottom_left)
        .pivot(egui::Align2::LEFT_BOTTOM)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Left drag to rotate. Right drag to pan. Scroll to zoom.")
                    .small()
                    .color(MUTED),
            );
        });
}
