//! The scrolling story column and the nav bar that jumps around in it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use content::charts::{self, format_quantity, log_bar_width_percent};
use content::nav::is_scrolled;
use content::{
    ChartDataPoint, DidYouMean, FaqAccordion, FaqItem, Footer, Hero, NavSection, ScenarioLab,
    ScenarioResult, ScenarioTable, ScrollSpy, SimulationStatus, SiteContent, TimelineEvent,
};
use viewport::ANNOTATIONS;

use crate::palette::{BORDER, CARD, DANGER, IMPACT, MUTED, PAGE, PANEL, SURVIVE, TAG, TEXT};

/// Gap left above a section when the column jumps to it. The nav bar is its
/// own panel and never covers the column, so no header height is needed.
pub const SECTION_MARGIN: f32 = 8.0;

/// Blocks of the story column, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryBlock {
    Hero,
    Timeline,
    CraterModel,
    DidYouMean,
    Charts,
    ScenarioLab,
    Faq,
    Footer,
}

impl StoryBlock {
    pub const ORDER: [StoryBlock; 8] = [
        StoryBlock::Hero,
        StoryBlock::Timeline,
        StoryBlock::CraterModel,
        StoryBlock::DidYouMean,
        StoryBlock::Charts,
        StoryBlock::ScenarioLab,
        StoryBlock::Faq,
        StoryBlock::Footer,
    ];

    /// Nav entry that jumps to this block, if any.
    pub fn nav_section(self) -> Option<NavSection> {
        match self {
            StoryBlock::Timeline => Some(NavSection::Timeline),
            StoryBlock::CraterModel => Some(NavSection::CraterModel),
            StoryBlock::Charts => Some(NavSection::Science),
            StoryBlock::ScenarioLab => Some(NavSection::Simulator),
            StoryBlock::Faq => Some(NavSection::Faq),
            StoryBlock::Hero | StoryBlock::DidYouMean | StoryBlock::Footer => None,
        }
    }
}

/// Reader-side state of the story column.
#[derive(Resource, Debug)]
pub struct StoryState {
    pub faq: FaqAccordion,
    pub spy: ScrollSpy,
    /// Current vertical scroll offset of the column, in points.
    pub scroll_y: f32,
}

impl Default for StoryState {
    fn default() -> Self {
        Self {
            faq: FaqAccordion::default(),
            spy: ScrollSpy::with_header_offset(SECTION_MARGIN),
            scroll_y: 0.0,
        }
    }
}

pub fn nav_bar_system(mut contexts: EguiContexts, mut story: ResMut<StoryState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let active = story.spy.active_section(story.scroll_y);
    let fill = if is_scrolled(story.scroll_y) { PAGE } else { PANEL };

    egui::TopBottomPanel::top("nav_bar")
        .frame(
            egui::Frame::new()
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("CHICXULUB").size(18.0).strong().color(IMPACT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for section in NavSection::ALL.iter().rev() {
                        let button =
                            egui::Button::new(section.label()).selected(active == Some(*section));
                        if ui.add(button).on_hover_text(section.anchor()).clicked() {
                            story.spy.request_jump(*section);
                        }
                    }
                });
            });
        });
}

pub fn story_panel_system(
    mut contexts: EguiContexts,
    content: Option<Res<SiteContent>>,
    mut story: ResMut<StoryState>,
    mut lab: ResMut<ScenarioLab>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    // Load failures are logged at startup; the viewer still runs without text.
    let Some(content) = content else {
        return;
    };
    let StoryState { faq, spy, scroll_y } = &mut *story;
    let lab = &mut *lab;

    egui::SidePanel::left("story")
        .resizable(true)
        .default_width(480.0)
        .min_width(320.0)
        .frame(egui::Frame::new().fill(PAGE).inner_margin(egui::Margin::same(16)))
        .show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical()
                .id_salt("story_scroll")
                .auto_shrink([false, false]);
            if let Some(target) = spy.take_jump() {
                area = area.vertical_scroll_offset(target);
            }

            let output = area.show(ui, |ui| {
                let origin = ui.min_rect().top();

                for block in StoryBlock::ORDER {
                    if let Some(section) = block.nav_section() {
                        spy.record_top(section, ui.cursor().top() - origin);
                    }
                    match block {
                        StoryBlock::Hero => hero(ui, &content.hero),
                        StoryBlock::Timeline => timeline(ui, &content.timeline),
                        StoryBlock::CraterModel => crater_model(ui),
                        StoryBlock::DidYouMean => did_you_mean(ui, &content.did_you_mean),
                        StoryBlock::Charts => comparison_charts(
                            ui,
                            &content.crater_diameters,
                            &content.energy_releases,
                        ),
                        StoryBlock::ScenarioLab => scenario_lab(ui, &content.scenarios, lab),
                        StoryBlock::Faq => faq_section(ui, &content.faq, faq),
                        StoryBlock::Footer => footer(ui, &content.footer),
                    }
                }
            });

            *scroll_y = output.state.offset.y;
        });
}

fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(32.0);
    ui.label(egui::RichText::new(title).size(24.0).strong().color(TEXT));
    if !subtitle.is_empty() {
        ui.label(egui::RichText::new(subtitle).color(MUTED));
    }
    ui.add_space(12.0);
}

fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(PANEL)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(8)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn tag(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(PANEL)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(TAG));
        });
}

fn hero(ui: &mut egui::Ui, hero: &Hero) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&hero.title).size(40.0).strong().color(TEXT));
        ui.label(egui::RichText::new(&hero.pronunciation).italics().color(IMPACT));
        ui.label(egui::RichText::new(&hero.search_hint).small().color(MUTED));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(&hero.tagline).size(15.0).color(TEXT));
    });
}

fn timeline(ui: &mut egui::Ui, events: &[TimelineEvent]) {
    section_heading(ui, "The Day the World Changed", "");

    for event in events {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(event.icon.glyph()).size(22.0).color(IMPACT));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&event.time).small().strong().color(IMPACT));
                    ui.label(egui::RichText::new(&event.title).size(16.0).strong().color(TEXT));
                    ui.label(egui::RichText::new(&event.description).color(MUTED));
                });
            });
        });
        ui.add_space(8.0);
    }
}

fn did_you_mean(ui: &mut egui::Ui, block: &DidYouMean) {
    ui.add_space(24.0);
    card(ui, |ui| {
        ui.label(egui::RichText::new(&block.heading).size(18.0).strong().color(IMPACT));
        for paragraph in &block.paragraphs {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(paragraph).color(TEXT));
        }
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for t in &block.tags {
                tag(ui, t);
            }
        });
    });
}

fn crater_model(ui: &mut egui::Ui) {
    section_heading(
        ui,
        "Explore the Crater",
        "A procedural model of the buried structure, shown in the viewer.",
    );

    for point in &ANNOTATIONS {
        card(ui, |ui| {
            ui.label(egui::RichText::new(point.label).strong().color(IMPACT));
            ui.label(egui::RichText::new(point.description).color(MUTED));
        });
        ui.add_space(6.0);
    }
}

fn comparison_charts(ui: &mut egui::Ui, craters: &[ChartDataPoint], energy: &[ChartDataPoint]) {
    section_heading(ui, "By the Numbers", "How Chicxulub compares.");

    card(ui, |ui| {
        ui.label(egui::RichText::new("Crater Diameter").size(16.0).strong().color(TEXT));
        ui.add_space(8.0);
        let max = charts::max_value(craters);
        for point in craters {
            bar_row(ui, point, charts::linear_bar_fraction(point.value, max));
        }
    });

    ui.add_space(12.0);

    card(ui, |ui| {
        ui.label(egui::RichText::new("Energy Release").size(16.0).strong().color(TEXT));
        ui.label(
            egui::RichText::new("Logarithmic scale, 0.01 MT to 100,000,000 MT")
                .small()
                .color(MUTED),
        );
        ui.add_space(8.0);
        for point in energy {
            bar_row(ui, point, (log_bar_width_percent(point.value) / 100.0) as f32);
        }
    });
}

fn bar_row(ui: &mut egui::Ui, point: &ChartDataPoint, fraction: f32) {
    let color = if point.is_highlighted() { IMPACT } else { BORDER };

    ui.horizontal(|ui| {
        let name_color = if point.is_highlighted() { IMPACT } else { TEXT };
        ui.label(egui::RichText::new(&point.name).color(name_color));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let value = format!("{} {}", format_quantity(point.value), point.unit);
            ui.label(egui::RichText::new(value).color(MUTED));
        });
    });

    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, 14.0), egui::Sense::hover());
    let mut bar = rect;
    bar.set_width(width * fraction.clamp(0.0, 1.0));
    ui.painter().rect_filled(rect, 4.0, CARD);
    ui.painter().rect_filled(bar, 4.0, color);

    if !point.description.is_empty() {
        response.on_hover_text(point.description.as_str());
    }
    ui.add_space(6.0);
}

fn scenario_lab(ui: &mut egui::Ui, table: &ScenarioTable, lab: &mut ScenarioLab) {
    section_heading(
        ui,
        "Scenario Lab",
        "Change the impact and see whether the dinosaurs make it.",
    );

    for scenario in table.iter() {
        let selected = lab.selected() == Some(scenario.id.key());
        let button = egui::Button::new(egui::RichText::new(&scenario.title).strong())
            .selected(selected)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            lab.select(scenario.id.key());
        }
        ui.label(egui::RichText::new(&scenario.description).small().color(MUTED));
        ui.add_space(6.0);
    }

    ui.add_space(8.0);
    card(ui, |ui| match lab.status() {
        SimulationStatus::Idle => {
            ui.label(egui::RichText::new("Select a scenario to run the simulation.").color(MUTED));
        }
        SimulationStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Simulating impact...").color(TEXT));
            });
        }
        SimulationStatus::Success => {
            if let Some(result) = lab.result() {
                scenario_result(ui, result);
            }
        }
        SimulationStatus::Error => {
            ui.label(egui::RichText::new("Unable to run this scenario.").color(DANGER));
        }
    });
}

fn scenario_result(ui: &mut egui::Ui, result: &ScenarioResult) {
    ui.label(egui::RichText::new(&result.scenario).italics().color(MUTED));
    ui.add_space(6.0);
    ui.label(egui::RichText::new(&result.outcome).color(TEXT));
    ui.add_space(10.0);

    let fill = if result.is_survivable() { SURVIVE } else { DANGER };
    ui.label(egui::RichText::new("Dinosaur survival probability").small().color(MUTED));
    ui.add(
        egui::ProgressBar::new(result.gauge_fraction())
            .fill(fill)
            .text(format!("{}%", result.survival_probability)),
    );

    ui.add_space(10.0);
    ui.horizontal_wrapped(|ui| {
        for effect in &result.environmental_effects {
            tag(ui, effect);
        }
    });
}

fn faq_section(ui: &mut egui::Ui, items: &[FaqItem], faq: &mut FaqAccordion) {
    section_heading(ui, "Frequently Asked Questions", "");

    for (i, item) in items.iter().enumerate() {
        let open = faq.is_open(i);
        card(ui, |ui| {
            let marker = if open { "-" } else { "+" };
            let color = if open { IMPACT } else { TEXT };
            let header = egui::Button::new(
                egui::RichText::new(format!("{marker}  {}", item.question))
                    .strong()
                    .color(color),
            )
            .frame(false);
            if ui.add(header).clicked() {
                faq.toggle(i);
            }
            if open {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&item.answer).color(MUTED));
            }
        });
        ui.add_space(6.0);
    }
}

fn footer(ui: &mut egui::Ui, footer: &Footer) {
    ui.add_space(32.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&footer.title).strong().color(TEXT));
        ui.label(egui::RichText::new(&footer.note).small().color(MUTED));
    });
    ui.add_space(16.0);
}
