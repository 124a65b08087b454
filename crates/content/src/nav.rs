/// Height of the fixed header the scroll targets leave room for.
pub const HEADER_OFFSET: f32 = 80.0;
/// Scroll distance after which the nav bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Timeline,
    CraterModel,
    Science,
    Simulator,
    Faq,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Timeline,
        NavSection::CraterModel,
        NavSection::Science,
        NavSection::Simulator,
        NavSection::Faq,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Timeline => "Timeline",
            NavSection::CraterModel => "3D Model",
            NavSection::Science => "Data",
            NavSection::Simulator => "Simulator",
            NavSection::Faq => "FAQ",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::Timeline => "#timeline",
            NavSection::CraterModel => "#crater-model",
            NavSection::Science => "#science",
            NavSection::Simulator => "#simulator",
            NavSection::Faq => "#faq",
        }
    }
}

pub fn is_scrolled(scroll_y: f32) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Tracks where each section starts in the scrolled column and which one
/// the reader is currently in.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    header_offset: f32,
    tops: Vec<(NavSection, f32)>,
    pending_jump: Option<NavSection>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::with_header_offset(HEADER_OFFSET)
    }
}

impl ScrollSpy {
    pub fn with_header_offset(header_offset: f32) -> Self {
        Self {
            header_offset,
            tops: Vec::new(),
            pending_jump: None,
        }
    }

    /// Records the content-space top of `section`, replacing any earlier value.
    pub fn record_top(&mut self, section: NavSection, top: f32) {
        match self.tops.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => entry.1 = top,
            None => self.tops.push((section, top)),
        }
    }

    pub fn top_of(&self, section: NavSection) -> Option<f32> {
        self.tops
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
    }

    /// Last section whose top has scrolled past the header line.
    pub fn active_section(&self, scroll_y: f32) -> Option<NavSection> {
        let line = scroll_y + self.header_offset;
        self.tops
            .iter()
            .filter(|(_, top)| *top <= line)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| *s)
    }

    /// Scroll offset that puts `section` just below the header.
    pub fn scroll_target(&self, section: NavSection) -> Option<f32> {
        self.top_of(section)
            .map(|top| (top - self.header_offset).max(0.0))
    }

    pub fn request_jump(&mut self, section: NavSection) {
        self.pending_jump = Some(section);
    }

    /// Resolves a requested jump once the section's position is known.
    pub fn take_jump(&mut self) -> Option<f32> {
        let section = self.pending_jump?;
        let target = self.scroll_target(section)?;
        self.pending_jump = None;
        Some(target)
    }
}
