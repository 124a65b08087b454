//! The scenario lab: a fixed table of "what if" impacts and the small state
//! machine that reveals a result after an artificial delay.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::Deserialize;

/// Delay before a selected scenario's result is shown.
pub const SIMULATION_DELAY_SECS: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum ScenarioId {
    Actual,
    Ocean,
    Small,
}

impl ScenarioId {
    pub fn key(self) -> &'static str {
        match self {
            ScenarioId::Actual => "actual",
            ScenarioId::Ocean => "ocean",
            ScenarioId::Small => "small",
        }
    }
}

impl FromStr for ScenarioId {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actual" => Ok(ScenarioId::Actual),
            "ocean" => Ok(ScenarioId::Ocean),
            "small" => Ok(ScenarioId::Small),
            other => Err(ScenarioError::UnknownScenario(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioError {
    UnknownScenario(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::UnknownScenario(id) => write!(f, "unknown scenario '{id}'"),
        }
    }
}

impl std::error::Error for ScenarioError {}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub outcome: String,
    /// Survival chance of large fauna, 0 to 100.
    pub survival_probability: u8,
    pub environmental_effects: Vec<String>,
}

impl ScenarioResult {
    /// Gauge fill in [0, 1].
    pub fn gauge_fraction(&self) -> f32 {
        f32::from(self.survival_probability.min(100)) / 100.0
    }

    pub fn is_survivable(&self) -> bool {
        self.survival_probability > 50
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    pub description: String,
    pub result: ScenarioResult,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ScenariosFile {
    pub(crate) scenarios: Vec<Scenario>,
}

#[derive(Clone, Debug, Default)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn run_scenario(&self, id: &str) -> Result<&ScenarioResult, ScenarioError> {
        let parsed: ScenarioId = id.parse()?;
        self.get(parsed)
            .map(|s| &s.result)
            .ok_or_else(|| ScenarioError::UnknownScenario(id.to_string()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.scenarios.is_empty() {
            return Err("scenario table must define at least one scenario".to_string());
        }

        for (i, s) in self.scenarios.iter().enumerate() {
            if s.result.survival_probability > 100 {
                return Err(format!(
                    "scenario '{}' has survival_probability={} (must be 0..=100)",
                    s.id.key(),
                    s.result.survival_probability
                ));
            }
            if self.scenarios[..i].iter().any(|prev| prev.id == s.id) {
                return Err(format!("scenario '{}' is defined twice", s.id.key()));
            }
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct ScenarioLab {
    selected: Option<String>,
    status: SimulationStatus,
    remaining_secs: f32,
    result: Option<ScenarioResult>,
}

impl ScenarioLab {
    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn result(&self) -> Option<&ScenarioResult> {
        self.result.as_ref()
    }

    /// Starts a run. Any previous result is cleared immediately.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
        self.status = SimulationStatus::Loading;
        self.remaining_secs = SIMULATION_DELAY_SECS;
        self.result = None;
    }

    pub fn tick(&mut self, dt: f32, table: &ScenarioTable) {
        if self.status != SimulationStatus::Loading {
            return;
        }

        self.remaining_secs -= dt.max(0.0);
        if self.remaining_secs > 0.0 {
            return;
        }

        let Some(id) = self.selected.as_deref() else {
            self.status = SimulationStatus::Error;
            return;
        };

        match table.run_scenario(id) {
            Ok(result) => {
                self.result = Some(result.clone());
                self.status = SimulationStatus::Success;
            }
            Err(e) => {
                warn!("{e}");
                self.status = SimulationStatus::Error;
            }
        }
    }
}
