//! Mascot choreography: pose tweening, clip switching and pointer tracking.
//!
//! The controller owns every piece of mascot state and pushes the result to a
//! [`MascotRig`] (the scene host in the browser, a recorder in tests). Body
//! rotation is recomputed from scratch once per frame by [`body_rotation`];
//! nothing else writes it.

use crate::camera::Camera;
use crate::clips::{ClipRegistry, CLIP_HERO};
use crate::constants::{
    BASE_ROTATION_Y, BODY_LEAN_PITCH_GAIN, BODY_LEAN_YAW_GAIN, HEAD_PITCH_SMOOTHING,
    HEAD_YAW_GAIN, HEAD_YAW_SMOOTHING, MASCOT_TWEEN_MS,
};
use crate::tier::TierLayout;
use crate::tween::PositionTween;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Name fragments that identify the head when searching the asset.
pub const HEAD_TOKENS: [&str; 3] = ["head", "skull", "cranium"];

/// Capabilities the controller needs from whatever renders the mascot.
pub trait MascotRig {
    /// Rewind `clip` to its first frame and play it looping.
    fn play_clip(&mut self, clip: &str);
    fn stop_clip(&mut self, clip: &str);
    fn advance_mixer(&mut self, dt_sec: f32);
    fn set_transform(&mut self, transform: &MascotTransform);
    fn set_head_rotation(&mut self, pitch: f32, yaw: f32);
}

/// Flat transform handed to the scene host as seven floats.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MascotTransform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
}

impl MascotTransform {
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

/// What the scene host found in the loaded asset.
#[derive(Clone, Debug, Default)]
pub struct RigReport {
    pub clips: Vec<String>,
    /// Bone and mesh names in traversal order.
    pub nodes: Vec<String>,
    /// Bones of the first skinned mesh's skeleton, in skeleton order.
    pub skeleton_bones: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadSource {
    NamedNode,
    NamedBone,
    LastBone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTarget {
    pub name: String,
    pub source: HeadSource,
    /// Position in [`RigReport::nodes`] for [`HeadSource::NamedNode`],
    /// otherwise in [`RigReport::skeleton_bones`]. Names may repeat, so the
    /// host binds by this index.
    pub index: usize,
}

impl HeadTarget {
    #[inline]
    pub fn in_skeleton(&self) -> bool {
        self.source != HeadSource::NamedNode
    }
}

#[inline]
fn looks_like_head(name: &str) -> bool {
    let lower = name.to_lowercase();
    HEAD_TOKENS.iter().any(|t| lower.contains(t))
}

/// Pick the node to steer toward the pointer.
///
/// A named node wins; the last match in traversal order is used. Otherwise a
/// named skeleton bone, otherwise the skeleton's last bone.
pub fn resolve_head(nodes: &[String], skeleton_bones: &[String]) -> Option<HeadTarget> {
    let pick = |list: &[String], index: usize, source| HeadTarget {
        name: list[index].clone(),
        source,
        index,
    };
    if let Some(index) = nodes.iter().rposition(|n| looks_like_head(n)) {
        return Some(pick(nodes, index, HeadSource::NamedNode));
    }
    if let Some(index) = skeleton_bones.iter().position(|n| looks_like_head(n)) {
        return Some(pick(skeleton_bones, index, HeadSource::NamedBone));
    }
    skeleton_bones
        .len()
        .checked_sub(1)
        .map(|index| pick(skeleton_bones, index, HeadSource::LastBone))
}

/// Head pitch bias by mascot height: look down when high, up when low.
pub fn head_pitch_offset(height: f32) -> f32 {
    match height {
        y if y >= 0.5 => -0.7,
        y if y >= 0.0 => -0.4,
        y if y >= -1.0 => -0.1,
        y if y >= -1.5 => 0.4,
        _ => 0.7,
    }
}

/// Body rotation for one frame.
///
/// While a move is in flight the body holds its base facing; otherwise it
/// leans toward the pointer offset (`rel`, NDC units relative to the mascot).
pub fn body_rotation(tween_in_flight: bool, rel: Vec2) -> Vec3 {
    let base = Vec3::new(0.0, BASE_ROTATION_Y, 0.0);
    if tween_in_flight {
        return base;
    }
    base + Vec3::new(rel.y * BODY_LEAN_PITCH_GAIN, rel.x * BODY_LEAN_YAW_GAIN, 0.0)
}

/// Exponentially smoothed head rotation. The per-frame fractions are not
/// scaled by frame time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadTracking {
    pub pitch: f32,
    pub yaw: f32,
}

impl HeadTracking {
    pub fn target(rel: Vec2, height: f32) -> (f32, f32) {
        (rel.y + head_pitch_offset(height), rel.x * HEAD_YAW_GAIN)
    }

    pub fn step(&mut self, rel: Vec2, height: f32) {
        let (target_pitch, target_yaw) = Self::target(rel, height);
        self.yaw += (target_yaw - self.yaw) * HEAD_YAW_SMOOTHING;
        self.pitch += (target_pitch - self.pitch) * HEAD_PITCH_SMOOTHING;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingClip {
    generation: u64,
    due_at_ms: f64,
    clip: &'static str,
}

pub struct MascotController {
    layout: TierLayout,
    loaded: bool,
    clips: ClipRegistry,
    head_target: Option<HeadTarget>,
    section: usize,
    generation: u64,
    position: Vec3,
    rotation: Vec3,
    tween: Option<PositionTween>,
    current_clip: Option<&'static str>,
    pending: Option<PendingClip>,
    head: HeadTracking,
}

impl MascotController {
    pub fn new(layout: TierLayout) -> Self {
        Self {
            layout,
            loaded: false,
            clips: ClipRegistry::default(),
            head_target: None,
            section: 0,
            generation: 0,
            position: layout.poses[0],
            rotation: Vec3::new(0.0, BASE_ROTATION_Y, 0.0),
            tween: None,
            current_clip: None,
            pending: None,
            head: HeadTracking::default(),
        }
    }

    /// Bind the loaded asset: pick clips and head, place the mascot at the
    /// current pose and start the hero clip.
    pub fn attach(&mut self, report: &RigReport, rig: &mut dyn MascotRig) {
        self.clips = ClipRegistry::from_available(&report.clips);
        self.head_target = resolve_head(&report.nodes, &report.skeleton_bones);
        match &self.head_target {
            Some(h) => log::info!("[mascot] head target {} ({:?})", h.name, h.source),
            None => log::warn!("[mascot] no head or skeleton found; head tracking disabled"),
        }
        self.loaded = true;
        if let Some(pose) = self.layout.pose(self.section) {
            self.position = pose;
        }
        if self.clips.contains(CLIP_HERO) {
            rig.play_clip(CLIP_HERO);
            self.current_clip = Some(CLIP_HERO);
            log::info!("[mascot] started hero animation {}", CLIP_HERO);
        }
        rig.set_transform(&self.transform());
    }

    /// Retarget to `index` in the current pose table. Returns `false` (and
    /// changes nothing) before the asset is attached or when out of range.
    pub fn move_to_section(&mut self, index: usize, now_ms: f64, rig: &mut dyn MascotRig) -> bool {
        if !self.loaded || index >= self.layout.poses.len() {
            return false;
        }
        self.section = index;
        self.start_section_clip(index, now_ms, rig);

        let target = self.layout.poses[index];
        self.tween = Some(PositionTween::new(
            self.position,
            target,
            now_ms,
            MASCOT_TWEEN_MS,
        ));
        true
    }

    fn start_section_clip(&mut self, index: usize, now_ms: f64, rig: &mut dyn MascotRig) {
        // any follow-up scheduled for an earlier move is now stale
        self.generation += 1;
        self.pending = None;

        let Some(clip) = self.clips.clip_for_section(index) else {
            return;
        };
        if let Some(current) = self.current_clip {
            rig.stop_clip(current);
        }
        rig.play_clip(clip);
        self.current_clip = Some(clip);
        log::info!("[mascot] section {}: playing {}", index, clip);

        if let Some(follow_up) = self.clips.follow_up_for_section(index) {
            self.pending = Some(PendingClip {
                generation: self.generation,
                due_at_ms: now_ms + follow_up.delay_ms,
                clip: follow_up.clip,
            });
        }
    }

    /// One rendered frame: mixer, due follow-up clip, tween, rotation, head.
    pub fn frame(
        &mut self,
        now_ms: f64,
        dt_sec: f32,
        pointer_ndc: Vec2,
        camera: &Camera,
        rig: &mut dyn MascotRig,
    ) {
        if !self.loaded {
            return;
        }
        rig.advance_mixer(dt_sec);
        self.fire_due_follow_up(now_ms, rig);

        let tween_in_flight = self.tween.is_some();
        if let Some(tween) = self.tween {
            let (pos, finished) = tween.sample(now_ms);
            self.position = pos;
            if finished {
                self.tween = None;
            }
        }

        let rel = if self.head_target.is_some() {
            pointer_ndc - camera.project(self.position)
        } else {
            Vec2::ZERO
        };
        self.rotation = body_rotation(tween_in_flight, rel);

        if self.head_target.is_some() {
            self.head.step(rel, self.position.y);
            rig.set_head_rotation(self.head.pitch, self.head.yaw);
        }
        rig.set_transform(&self.transform());
    }

    fn fire_due_follow_up(&mut self, now_ms: f64, rig: &mut dyn MascotRig) {
        let Some(pending) = self.pending else {
            return;
        };
        if now_ms < pending.due_at_ms {
            return;
        }
        self.pending = None;
        if pending.generation != self.generation {
            return;
        }
        if let Some(current) = self.current_clip {
            rig.stop_clip(current);
        }
        rig.play_clip(pending.clip);
        self.current_clip = Some(pending.clip);
        log::info!("[mascot] section {}: switched to {}", self.section, pending.clip);
    }

    /// Swap to a new tier layout and snap to the pose for `section`.
    /// Returns `false` when the tier is unchanged.
    ///
    /// When the new table maps `section` to a different pose, that pose's
    /// clip starts over with a fresh follow-up. Otherwise the running clip
    /// and any pending follow-up are kept.
    pub fn apply_layout(
        &mut self,
        layout: TierLayout,
        section: usize,
        now_ms: f64,
        rig: &mut dyn MascotRig,
    ) -> bool {
        if layout.tier == self.layout.tier {
            return false;
        }
        let pose_index = layout.pose_index_for_section(section);
        if self.loaded && pose_index != self.section {
            self.start_section_clip(pose_index, now_ms, rig);
        }
        log::info!(
            "[mascot] tier {:?} -> {:?}, scale {}",
            self.layout.tier,
            layout.tier,
            layout.scale
        );
        self.layout = layout;
        self.section = pose_index;
        self.tween = None;
        self.position = layout.poses[pose_index];
        if self.loaded {
            rig.set_transform(&self.transform());
        }
        true
    }

    pub fn transform(&self) -> MascotTransform {
        MascotTransform {
            position: self.position.to_array(),
            rotation: self.rotation.to_array(),
            scale: self.layout.scale,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
    pub fn layout(&self) -> &TierLayout {
        &self.layout
    }
    pub fn section(&self) -> usize {
        self.section
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn position(&self) -> Vec3 {
        self.position
    }
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
    pub fn current_clip(&self) -> Option<&'static str> {
        self.current_clip
    }
    pub fn head_target(&self) -> Option<&HeadTarget> {
        self.head_target.as_ref()
    }
    pub fn head(&self) -> HeadTracking {
        self.head
    }
    pub fn tween_in_flight(&self) -> bool {
        self.tween.is_some()
    }
    pub fn has_pending_clip(&self) -> bool {
        self.pending.is_some()
    }
}
