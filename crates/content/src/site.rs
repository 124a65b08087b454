use bevy::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::charts::{ChartDataPoint, ChartsFile};
use crate::faq::{FaqFile, FaqItem};
use crate::scenarios::{ScenarioTable, ScenariosFile};
use crate::timeline::{TimelineEvent, TimelineFile};

const SITE_RON: &str = include_str!("../data/site.ron");
const TIMELINE_RON: &str = include_str!("../data/timeline.ron");
const CHARTS_RON: &str = include_str!("../data/charts.ron");
const SCENARIOS_RON: &str = include_str!("../data/scenarios.ron");
const FAQ_RON: &str = include_str!("../data/faq.ron");

#[derive(Clone, Debug, Deserialize)]
pub struct Hero {
    pub title: String,
    pub pronunciation: String,
    pub search_hint: String,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DidYouMean {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Footer {
    pub title: String,
    pub note: String,
}

#[derive(Clone, Debug, Deserialize)]
struct SiteFile {
    hero: Hero,
    did_you_mean: DidYouMean,
    footer: Footer,
}

/// All narrative text and chart data shown alongside the crater view.
#[derive(Resource, Clone, Debug)]
pub struct SiteContent {
    pub hero: Hero,
    pub timeline: Vec<TimelineEvent>,
    pub did_you_mean: DidYouMean,
    pub crater_diameters: Vec<ChartDataPoint>,
    pub energy_releases: Vec<ChartDataPoint>,
    pub scenarios: ScenarioTable,
    pub faq: Vec<FaqItem>,
    pub footer: Footer,
}

impl SiteContent {
    /// Parses and validates the tables compiled into the binary.
    pub fn load_embedded() -> Result<Self, String> {
        let site: SiteFile = parse_ron("site.ron", SITE_RON)?;
        let timeline: TimelineFile = parse_ron("timeline.ron", TIMELINE_RON)?;
        let charts: ChartsFile = parse_ron("charts.ron", CHARTS_RON)?;
        let scenarios: ScenariosFile = parse_ron("scenarios.ron", SCENARIOS_RON)?;
        let faq: FaqFile = parse_ron("faq.ron", FAQ_RON)?;

        let content = Self {
            hero: site.hero,
            timeline: timeline.events,
            did_you_mean: site.did_you_mean,
            crater_diameters: charts.crater_diameters,
            energy_releases: charts.energy_releases,
            scenarios: ScenarioTable::new(scenarios.scenarios),
            faq: faq.items,
            footer: site.footer,
        };
        content.validate()?;

        Ok(content)
    }

    pub fn validate(&self) -> Result<(), String> {
        crate::timeline::validate(&self.timeline)?;
        crate::charts::validate("crater diameter", &self.crater_diameters)?;
        crate::charts::validate("energy release", &self.energy_releases)?;
        self.scenarios.validate()?;

        if self.faq.is_empty() {
            return Err("faq must define at least one question".to_string());
        }
        if let Some(item) = self.faq.iter().find(|f| f.question.trim().is_empty()) {
            return Err(format!("faq item with answer '{}' has no question", item.answer));
        }

        Ok(())
    }
}

fn parse_ron<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, String> {
    ron::from_str(text).map_err(|e| format!("failed to parse {name}: {e}"))
}
