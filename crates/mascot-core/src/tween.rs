//! Easing curves and the time-bounded position tween used for mascot moves.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `t²(3 − 2t)`
    Smoothstep,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionTween {
    pub from: Vec3,
    pub to: Vec3,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl PositionTween {
    pub fn new(from: Vec3, to: Vec3, started_at_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms,
            easing: Easing::Smoothstep,
        }
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)) as f32
    }

    /// Position at `now_ms` and whether the tween has run its full duration.
    pub fn sample(&self, now_ms: f64) -> (Vec3, bool) {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return (self.to, true);
        }
        let e = self.easing.apply(p);
        (self.from + (self.to - self.from) * e, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_pin_endpoints() {
        for e in [Easing::Linear, Easing::Smoothstep] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(-0.5), 0.0);
            assert_eq!(e.apply(1.5), 1.0);
        }
    }

    #[test]
    fn linear_tween_is_halfway_at_half_time() {
        let mut tween = PositionTween::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 100.0, 200.0);
        tween.easing = Easing::Linear;
        let (pos, done) = tween.sample(200.0);
        assert!((pos.x - 1.0).abs() < 1e-6);
        assert!(!done);
        assert_eq!(tween.sample(300.0), (Vec3::new(2.0, 0.0, 0.0), true));
    }

    #[test]
    fn smoothstep_midpoint() {
        assert!((Easing::Smoothstep.apply(0.5) - 0.5).abs() < 1e-6);
    }
}
