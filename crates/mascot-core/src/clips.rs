//! Section → animation clip mapping.
//!
//! The mascot asset ships five looping clips that are addressed by their
//! exported track names. Two sections open with an energetic clip and settle
//! into a calmer one after a delay; see [`follow_up_for_section`].

use crate::constants::FOLLOW_UP_CLIP_DELAY_MS;
use fnv::FnvHashSet;

pub const CLIP_WAVE: &str = "NlaTrack.003";
pub const CLIP_IDLE: &str = "NlaTrack.004";
pub const CLIP_HERO: &str = "NlaTrack.005";
pub const CLIP_THINK: &str = "NlaTrack.009";
pub const CLIP_JUMP: &str = "NlaTrack.010";

pub const REQUIRED_CLIPS: [&str; 5] = [CLIP_WAVE, CLIP_IDLE, CLIP_HERO, CLIP_THINK, CLIP_JUMP];

/// Clip played on entering each section, in section order.
pub const SECTION_CLIPS: [&str; 8] = [
    CLIP_HERO,  // hero
    CLIP_IDLE,  // story
    CLIP_THINK, // philosophy
    CLIP_IDLE,  // why us
    CLIP_JUMP,  // services
    CLIP_WAVE,  // testimonials
    CLIP_IDLE,  // pricing
    CLIP_JUMP,  // final cta
];

pub const SERVICES_SECTION: usize = 4;
pub const FINAL_CTA_SECTION: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowUp {
    pub clip: &'static str,
    pub delay_ms: f64,
}

#[inline]
pub fn clip_for_section(section: usize) -> Option<&'static str> {
    SECTION_CLIPS.get(section).copied()
}

pub fn follow_up_for_section(section: usize) -> Option<FollowUp> {
    let clip = match section {
        SERVICES_SECTION => CLIP_HERO,
        FINAL_CTA_SECTION => CLIP_IDLE,
        _ => return None,
    };
    Some(FollowUp {
        clip,
        delay_ms: FOLLOW_UP_CLIP_DELAY_MS,
    })
}

/// The subset of [`REQUIRED_CLIPS`] the loaded asset actually provides.
#[derive(Clone, Debug, Default)]
pub struct ClipRegistry {
    available: FnvHashSet<&'static str>,
}

impl ClipRegistry {
    pub fn from_available<S: AsRef<str>>(names: &[S]) -> Self {
        let mut available = FnvHashSet::default();
        for required in REQUIRED_CLIPS {
            if names.iter().any(|n| n.as_ref() == required) {
                log::info!("[clips] loaded {}", required);
                available.insert(required);
            } else {
                log::warn!("[clips] animation not found: {}", required);
            }
        }
        Self { available }
    }

    #[inline]
    pub fn contains(&self, clip: &str) -> bool {
        self.available.contains(clip)
    }

    /// Mapped clip for a section, if the asset has it.
    pub fn clip_for_section(&self, section: usize) -> Option<&'static str> {
        clip_for_section(section).filter(|c| self.contains(c))
    }

    pub fn follow_up_for_section(&self, section: usize) -> Option<FollowUp> {
        follow_up_for_section(section).filter(|f| self.contains(f.clip))
    }
}
