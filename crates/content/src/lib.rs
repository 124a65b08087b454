pub mod charts;
pub mod faq;
pub mod intro;
pub mod nav;
pub mod scenarios;
pub mod site;
pub mod timeline;

pub use charts::ChartDataPoint;
pub use faq::{FaqAccordion, FaqItem};
pub use intro::{ImpactIntro, IntroPhase};
pub use nav::{NavSection, ScrollSpy};
pub use scenarios::{
    Scenario, ScenarioError, ScenarioId, ScenarioLab, ScenarioResult, ScenarioTable,
    SimulationStatus,
};
pub use site::{DidYouMean, Footer, Hero, SiteContent};
pub use timeline::{TimelineEvent, TimelineIcon};
