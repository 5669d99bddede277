// Host-side tests for viewport tiers and the pose table.

use glam::Vec3;
use mascot_core::*;

#[test]
fn breakpoints_are_inclusive_upper_bounds() {
    assert_eq!(DeviceTier::from_viewport_width(320.0), DeviceTier::ExtraSmall);
    assert_eq!(DeviceTier::from_viewport_width(321.0), DeviceTier::Small);
    assert_eq!(DeviceTier::from_viewport_width(460.0), DeviceTier::Small);
    assert_eq!(DeviceTier::from_viewport_width(768.0), DeviceTier::Mobile);
    assert_eq!(DeviceTier::from_viewport_width(1024.0), DeviceTier::Tablet);
    assert_eq!(DeviceTier::from_viewport_width(1025.0), DeviceTier::Desktop);
    assert_eq!(DeviceTier::from_viewport_width(0.0), DeviceTier::ExtraSmall);
}

#[test]
fn handheld_tiers_cap_pixel_ratio() {
    assert_eq!(DeviceTier::Mobile.pixel_ratio(3.0), 2.0);
    assert_eq!(DeviceTier::Small.pixel_ratio(1.5), 1.5);
    assert_eq!(DeviceTier::Tablet.pixel_ratio(3.0), 3.0);
    assert_eq!(DeviceTier::Desktop.pixel_ratio(2.5), 2.5);
}

#[test]
fn desktop_has_one_pose_per_section() {
    let layout = layout_for_width(1920.0);
    assert_eq!(layout.tier, DeviceTier::Desktop);
    assert_eq!(layout.poses.len(), SECTION_COUNT);
    assert_eq!(layout.pose(0), Some(Vec3::new(0.0, 0.55, -2.0)));
    assert_eq!(layout.pose(7), Some(Vec3::new(-3.0, 1.0, -2.5)));
    assert_eq!(layout.pose(8), None);
}

#[test]
fn smaller_tiers_wrap_sections_onto_four_poses() {
    let layout = layout_for_width(900.0);
    assert_eq!(layout.tier, DeviceTier::Tablet);
    assert_eq!(layout.poses.len(), 4);
    assert_eq!(layout.pose_index_for_section(5), 1);
    assert_eq!(layout.pose_index_for_section(7), 3);
}

#[test]
fn scale_grows_with_viewport() {
    let widths = [300.0, 400.0, 700.0, 900.0, 1400.0];
    let scales: Vec<f32> = widths.iter().map(|&w| layout_for_width(w).scale).collect();
    assert!(scales.windows(2).all(|w| w[0] < w[1]), "{:?}", scales);
}

#[test]
fn load_and_resize_use_the_same_layout() {
    // resize goes through layout_for_width too, so equal widths agree
    for w in [320.0, 460.0, 768.0, 1024.0, 1600.0] {
        assert_eq!(layout_for_width(w), TierLayout::for_tier(DeviceTier::from_viewport_width(w)));
    }
}
