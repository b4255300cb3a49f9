//! Fixed motion -> animation timing table.

use crate::{
    animation::ease::Easing,
    foundation::math::fmt_num,
    registry::stage::MotionKind,
};

/// How many times an animation cycle runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Iterations {
    Infinite,
    /// One-shot; the final keyframe is held afterwards.
    Once,
}

/// Animation timing for one motion kind.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTiming {
    pub motion: MotionKind,
    /// `@keyframes` rule name.
    pub keyframes: &'static str,
    pub start_offset_s: f64,
    pub duration_s: f64,
    pub easing: Easing,
    pub iterations: Iterations,
}

impl MotionTiming {
    pub fn for_motion(motion: MotionKind) -> Self {
        let (keyframes, start_offset_s, duration_s, easing, iterations) = match motion {
            MotionKind::RadialPulse => ("pulse", 0.0, 3.0, Easing::EaseInOut, Iterations::Infinite),
            MotionKind::DriftOscillate => {
                ("drift", 0.25, 4.0, Easing::EaseInOut, Iterations::Infinite)
            }
            MotionKind::ScanPattern => ("scan", 0.5, 2.5, Easing::Linear, Iterations::Infinite),
            MotionKind::ShatterScatter => ("scatter", 0.75, 1.2, Easing::EaseOut, Iterations::Once),
            MotionKind::ConvergeInward => {
                ("converge", 1.0, 3.0, Easing::EaseInOut, Iterations::Infinite)
            }
            MotionKind::Solidify => ("solidify", 1.25, 5.0, Easing::EaseInOut, Iterations::Infinite),
            MotionKind::ExpandOutward => ("expand", 1.5, 4.0, Easing::EaseOut, Iterations::Infinite),
            MotionKind::Contract => ("contract", 1.75, 3.0, Easing::EaseInOut, Iterations::Infinite),
        };
        Self {
            motion,
            keyframes,
            start_offset_s,
            duration_s,
            easing,
            iterations,
        }
    }

    /// CSS `animation` shorthand: name, duration, easing, delay, iteration count.
    pub fn css_shorthand(&self) -> String {
        let mut s = format!(
            "{} {}s {} {}s",
            self.keyframes,
            fmt_num(self.duration_s),
            self.easing.css_name(),
            fmt_num(self.start_offset_s),
        );
        match self.iterations {
            Iterations::Infinite => s.push_str(" infinite"),
            Iterations::Once => s.push_str(" 1 forwards"),
        }
        s
    }

    /// The `@keyframes` rule body for this motion.
    pub fn keyframes_css(&self) -> &'static str {
        match self.motion {
            MotionKind::RadialPulse => {
                "0%, 100% { transform: scale(1); } 50% { transform: scale(1.15); }"
            }
            MotionKind::DriftOscillate => {
                "0%, 100% { transform: translateY(0); } 50% { transform: translateY(-12px); }"
            }
            MotionKind::ScanPattern => {
                "0%, 100% { transform: translateX(-5px); } 50% { transform: translateX(5px); }"
            }
            MotionKind::ShatterScatter => {
                "0% { transform: scale(1); opacity: 1; } 100% { transform: scale(1.35); opacity: 0.35; }"
            }
            MotionKind::ConvergeInward => {
                "0%, 100% { transform: scale(1); } 50% { transform: scale(0.9); }"
            }
            MotionKind::Solidify => "0%, 100% { opacity: 0.7; } 50% { opacity: 1; }",
            MotionKind::ExpandOutward => {
                "0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); }"
            }
            MotionKind::Contract => {
                "0%, 100% { transform: scale(1); } 50% { transform: scale(0.92); }"
            }
        }
    }

    /// Eased progress through the current cycle at `t_s` seconds after document start.
    ///
    /// `0` before the start offset. One-shot motions hold `1` once complete.
    pub fn progress_at(&self, t_s: f64) -> f64 {
        let local = t_s - self.start_offset_s;
        if !local.is_finite() || local <= 0.0 {
            return 0.0;
        }
        let u = match self.iterations {
            Iterations::Once => (local / self.duration_s).min(1.0),
            Iterations::Infinite => local.rem_euclid(self.duration_s) / self.duration_s,
        };
        self.easing.apply(u)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
