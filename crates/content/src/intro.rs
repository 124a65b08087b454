use bevy::prelude::*;

pub const INTRO_DELAY_SECS: f32 = 1.0;
pub const FLIGHT_SECS: f32 = 1.5;
pub const SHAKE_SECS: f32 = 0.7;
const SHAKE_AMPLITUDE_PX: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Waiting,
    Flying,
    Shaking,
    Done,
}

/// Timer for the opening fireball that streaks across the window and
/// shakes it on impact.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ImpactIntro {
    elapsed: f32,
}

impl ImpactIntro {
    pub fn tick(&mut self, dt: f32) {
        if self.phase() != IntroPhase::Done {
            self.elapsed += dt.max(0.0);
        }
    }

    pub fn phase(&self) -> IntroPhase {
        let t = self.elapsed;
        if t < INTRO_DELAY_SECS {
            IntroPhase::Waiting
        } else if t < INTRO_DELAY_SECS + FLIGHT_SECS {
            IntroPhase::Flying
        } else if t < INTRO_DELAY_SECS + FLIGHT_SECS + SHAKE_SECS {
            IntroPhase::Shaking
        } else {
            IntroPhase::Done
        }
    }

    /// Fraction of the flight covered, 0 before launch and 1 after impact.
    pub fn flight_progress(&self) -> f32 {
        ((self.elapsed - INTRO_DELAY_SECS) / FLIGHT_SECS).clamp(0.0, 1.0)
    }

    /// Decaying screen shake, zero outside the shaking phase.
    pub fn shake_offset(&self) -> Vec2 {
        if self.phase() != IntroPhase::Shaking {
            return Vec2::ZERO;
        }
        let t = self.elapsed - INTRO_DELAY_SECS - FLIGHT_SECS;
        let amplitude = SHAKE_AMPLITUDE_PX * (1.0 - t / SHAKE_SECS);
        Vec2::new((t * 60.0).sin() * amplitude, (t * 47.0).cos() * amplitude * 0.5)
    }
}
