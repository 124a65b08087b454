use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum TimelineIcon {
    Alert,
    Zap,
    Clock,
    Skull,
    Sprout,
}

impl TimelineIcon {
    /// Single glyph drawn inside the timeline marker.
    pub fn glyph(self) -> &'static str {
        match self {
            TimelineIcon::Alert => "⚠",
            TimelineIcon::Zap => "⚡",
            TimelineIcon::Clock => "⏱",
            TimelineIcon::Skull => "☠",
            TimelineIcon::Sprout => "🌱",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    pub time: String,
    pub title: String,
    pub description: String,
    pub icon: TimelineIcon,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TimelineFile {
    pub(crate) events: Vec<TimelineEvent>,
}

pub fn validate(events: &[TimelineEvent]) -> Result<(), String> {
    if events.is_empty() {
        return Err("timeline must define at least one event".to_string());
    }

    let mut last: Option<u32> = None;
    for e in events {
        if let Some(prev) = last {
            if e.id <= prev {
                return Err(format!(
                    "timeline event '{}' has id={} but previous event had id={} (must be strictly increasing)",
                    e.title, e.id, prev
                ));
            }
        }
        last = Some(e.id);
    }

    Ok(())
}
