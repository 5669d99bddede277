//! Viewport tiers and the per-tier mascot pose table.
//!
//! [`layout_for_width`] is the only place a viewport width turns into poses
//! and a scale; both page load and resize go through it so the two can never
//! disagree.

use crate::constants::{
    EXTRA_SMALL_MAX_WIDTH, HANDHELD_MAX_PIXEL_RATIO, MOBILE_MAX_WIDTH, SMALL_MAX_WIDTH,
    TABLET_MAX_WIDTH,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    ExtraSmall,
    Small,
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceTier {
    pub fn from_viewport_width(width_px: f64) -> Self {
        match width_px {
            w if w <= EXTRA_SMALL_MAX_WIDTH => DeviceTier::ExtraSmall,
            w if w <= SMALL_MAX_WIDTH => DeviceTier::Small,
            w if w <= MOBILE_MAX_WIDTH => DeviceTier::Mobile,
            w if w <= TABLET_MAX_WIDTH => DeviceTier::Tablet,
            _ => DeviceTier::Desktop,
        }
    }

    /// Phones get the portrait hero video and a capped pixel ratio.
    #[inline]
    pub fn is_handheld(self) -> bool {
        matches!(
            self,
            DeviceTier::ExtraSmall | DeviceTier::Small | DeviceTier::Mobile
        )
    }

    pub fn pixel_ratio(self, device_pixel_ratio: f64) -> f64 {
        if self.is_handheld() {
            device_pixel_ratio.min(HANDHELD_MAX_PIXEL_RATIO)
        } else {
            device_pixel_ratio
        }
    }
}

const EXTRA_SMALL_POSES: [Vec3; 4] = [Vec3::new(0.6, 0.9, -1.0); 4];
const SMALL_POSES: [Vec3; 4] = [Vec3::new(0.8, 0.8, -1.2); 4];
const MOBILE_POSES: [Vec3; 4] = [Vec3::new(1.8, 1.0, -1.5); 4];
const TABLET_POSES: [Vec3; 4] = [
    Vec3::new(0.0, 0.5, -1.8),
    Vec3::new(2.0, 0.2, -1.8),
    Vec3::new(1.5, -0.5, -1.8),
    Vec3::new(-1.5, -0.5, -1.8),
];
const DESKTOP_POSES: [Vec3; 8] = [
    Vec3::new(0.0, 0.55, -2.0),  // hero
    Vec3::new(3.5, -1.2, -1.8),  // story
    Vec3::new(3.3, -2.2, -2.0),  // philosophy
    Vec3::new(1.8, 0.0, -1.3),   // why us
    Vec3::new(-1.5, 0.2, 0.0),   // services
    Vec3::new(-2.0, 0.5, -1.5),  // testimonials
    Vec3::new(-2.5, 0.8, -2.0),  // pricing
    Vec3::new(-3.0, 1.0, -2.5),  // final cta
];

/// Poses and scale for one tier. Swapped as a whole, never field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierLayout {
    pub tier: DeviceTier,
    pub poses: &'static [Vec3],
    pub scale: f32,
}

impl TierLayout {
    pub fn for_tier(tier: DeviceTier) -> Self {
        let (poses, scale): (&'static [Vec3], f32) = match tier {
            DeviceTier::ExtraSmall => (&EXTRA_SMALL_POSES, 0.3),
            DeviceTier::Small => (&SMALL_POSES, 0.35),
            DeviceTier::Mobile => (&MOBILE_POSES, 0.45),
            DeviceTier::Tablet => (&TABLET_POSES, 0.6),
            DeviceTier::Desktop => (&DESKTOP_POSES, 0.75),
        };
        Self { tier, poses, scale }
    }

    /// Sections beyond the table wrap around it.
    #[inline]
    pub fn pose_index_for_section(&self, section: usize) -> usize {
        section % self.poses.len()
    }

    #[inline]
    pub fn pose(&self, pose_index: usize) -> Option<Vec3> {
        self.poses.get(pose_index).copied()
    }
}

pub fn layout_for_width(width_px: f64) -> TierLayout {
    TierLayout::for_tier(DeviceTier::from_viewport_width(width_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(DeviceTier::from_viewport_width(320.0), DeviceTier::ExtraSmall);
        assert_eq!(DeviceTier::from_viewport_width(321.0), DeviceTier::Small);
        assert_eq!(DeviceTier::from_viewport_width(768.0), DeviceTier::Mobile);
        assert_eq!(DeviceTier::from_viewport_width(1024.0), DeviceTier::Tablet);
        assert_eq!(DeviceTier::from_viewport_width(1025.0), DeviceTier::Desktop);
    }

    #[test]
    fn every_tier_has_poses() {
        for tier in [
            DeviceTier::ExtraSmall,
            DeviceTier::Small,
            DeviceTier::Mobile,
            DeviceTier::Tablet,
            DeviceTier::Desktop,
        ] {
            let layout = TierLayout::for_tier(tier);
            assert!(!layout.poses.is_empty());
            assert!(layout.scale > 0.0);
        }
    }
}
