use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use viewport::{AnnotationScreens, HostSurface};

use crate::palette::{IMPACT, MUTED, PAGE, TEXT};

const DESCRIPTION_WIDTH: f32 = 220.0;

/// Paints the annotation labels over the crater view, nearest last so it
/// lands on top. Hovering a label shows its description underneath.
pub fn annotation_labels_system(
    mut contexts: EguiContexts,
    host: Res<HostSurface>,
    screens: Res<AnnotationScreens>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Some(rect) = host.rect else {
        return;
    };

    let mut visible: Vec<_> = screens
        .entries
        .iter()
        .filter_map(|(id, projection)| projection.visible().map(|p| (*id, *p)))
        .collect();
    visible.sort_by_key(|(_, p)| p.draw_order);

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("crater_annotations"),
    ));
    let hover = ctx.pointer_hover_pos();
    let origin = egui::pos2(rect.origin.x, rect.origin.y);

    for (id, screen) in visible {
        let point = id.point();
        let anchor = origin + egui::vec2(screen.pos.x, screen.pos.y);

        painter.circle_filled(anchor, 4.0, IMPACT);

        let galley = painter.layout_no_wrap(
            point.label.to_string(),
            egui::FontId::proportional(13.0),
            TEXT,
        );
        let label_rect = egui::Align2::CENTER_BOTTOM
            .anchor_size(anchor - egui::vec2(0.0, 10.0), galley.size())
            .expand(4.0);
        painter.rect_filled(label_rect, 4.0, PAGE.gamma_multiply(0.85));
        painter.galley(label_rect.min + egui::vec2(4.0, 4.0), galley, TEXT);

        if hover.is_some_and(|p| label_rect.contains(p)) {
            let description = painter.layout(
                point.description.to_string(),
                egui::FontId::proportional(12.0),
                MUTED,
                DESCRIPTION_WIDTH,
            );
            let desc_rect = egui::Align2::CENTER_TOP
                .anchor_size(anchor + egui::vec2(0.0, 10.0), description.size())
                .expand(6.0);
            painter.rect_filled(desc_rect, 4.0, PAGE.gamma_multiply(0.95));
            painter.galley(desc_rect.min + egui::vec2(6.0, 6.0), description, MUTED);
        }
    }
}
