//! Boundary times: linear projection, optionally refined by Newton steps
//! against the ephemeris.
//!
//! A boundary is the instant a [`RelativeMotion`] angle reaches a target
//! degree. Each step evaluates the angle and its instantaneous rate and moves
//! by `-offset / rate`. Steps are bounded, so the cost per boundary is fixed.

use log::{debug, trace, warn};
use panchang_ephem::{AyanamshaSystem, LuniSolar, MOON_MEAN_DAILY_RATE, RateModel, SUN_MEAN_DAILY_RATE};
use panchang_vedic_base::{RelativeMotion, Segment, TransitionWindow, linear_transition};

use crate::config::{EngineConfig, TransitionModel};
use crate::error::PanchangError;

/// Newton steps allowed per element boundary.
pub const MAX_REFINE_STEPS: usize = 4;

/// Newton steps allowed when locating a new moon from a mean-rate guess.
const NEW_MOON_STEPS: usize = 8;

/// One second, in days.
const CONVERGED_DAYS: f64 = 1.0 / 86_400.0;

/// A single step longer than this means the guess was on the wrong crossing.
const MAX_STEP_DAYS: f64 = 2.0;

/// Synodic rate used to seed new-moon searches.
const SYNODIC_MEAN_RATE: f64 = MOON_MEAN_DAILY_RATE - SUN_MEAN_DAILY_RATE;

/// Newton iteration for the instant `motion` reaches `target_deg`.
///
/// Returns `None` when a step diverges (non-positive rate, non-finite or
/// overlong step). Running out of steps without reaching one second is not
/// divergence: the last iterate is returned.
pub fn refine_crossing(
    motion: RelativeMotion,
    target_deg: f64,
    guess_jd: f64,
    system: AyanamshaSystem,
    max_steps: usize,
) -> Option<f64> {
    let mut jd = guess_jd;
    for step in 0..max_steps {
        let ls = LuniSolar::at(jd, system, RateModel::True);
        let rate = motion.rate(&ls);
        let offset = motion.offset_from(&ls, target_deg);
        let delta = -offset / rate;
        trace!("{motion:?} -> {target_deg:.4}: step {step} jd {jd:.6} offset {offset:.6} rate {rate:.4}");
        if rate.is_nan() || rate <= 0.0 || !delta.is_finite() || delta.abs() > MAX_STEP_DAYS {
            return None;
        }
        jd += delta;
        if delta.abs() < CONVERGED_DAYS {
            return Some(jd);
        }
    }
    debug!("{motion:?} -> {target_deg:.4}: stopped after {max_steps} steps at {jd:.6}");
    Some(jd)
}

/// Element boundary search for one panchang computation.
///
/// Counts boundaries where refinement diverged and the linear estimate
/// was kept.
#[derive(Debug)]
pub(crate) struct BoundarySearch<'a> {
    config: &'a EngineConfig,
    fallbacks: u8,
}

impl<'a> BoundarySearch<'a> {
    pub(crate) fn new(config: &'a EngineConfig) -> Self {
        Self { config, fallbacks: 0 }
    }

    pub(crate) fn fallbacks(&self) -> u8 {
        self.fallbacks
    }

    /// Start and end of the bucket `segment` that `motion` occupies at
    /// `reference`.
    pub(crate) fn window(
        &mut self,
        motion: RelativeMotion,
        segment: &Segment,
        reference: &LuniSolar,
    ) -> Result<TransitionWindow, PanchangError> {
        let linear = linear_transition(segment, motion.rate(reference), reference.jd_ut)?;
        if self.config.transition != TransitionModel::Refined {
            return Ok(linear);
        }
        Ok(TransitionWindow {
            start_jd: self.refine_or_keep(motion, segment.start_deg(), linear.start_jd),
            end_jd: self.refine_or_keep(motion, segment.end_deg(), linear.end_jd),
        })
    }

    fn refine_or_keep(&mut self, motion: RelativeMotion, target_deg: f64, linear_jd: f64) -> f64 {
        match refine_crossing(motion, target_deg, linear_jd, self.config.ayanamsha, MAX_REFINE_STEPS) {
            Some(jd) => jd,
            None => {
                warn!("{motion:?} crossing {target_deg:.3} deg diverged; keeping linear estimate {linear_jd:.6}");
                self.fallbacks = self.fallbacks.saturating_add(1);
                linear_jd
            }
        }
    }
}

/// Most recent Sun-Moon conjunction at or before `jd_ut`.
pub fn previous_new_moon(jd_ut: f64, system: AyanamshaSystem) -> Result<f64, PanchangError> {
    let ls = LuniSolar::at(jd_ut, system, RateModel::True);
    let guess = jd_ut - ls.elongation_deg() / SYNODIC_MEAN_RATE;
    refine_crossing(RelativeMotion::Elongation, 0.0, guess, system, NEW_MOON_STEPS)
        .ok_or(PanchangError::NoConvergence("previous new moon"))
}

/// First Sun-Moon conjunction after `jd_ut`.
pub fn next_new_moon(jd_ut: f64, system: AyanamshaSystem) -> Result<f64, PanchangError> {
    let ls = LuniSolar::at(jd_ut, system, RateModel::True);
    let guess = jd_ut + (360.0 - ls.elongation_deg()) / SYNODIC_MEAN_RATE;
    refine_crossing(RelativeMotion::Elongation, 0.0, guess, system, NEW_MOON_STEPS)
        .ok_or(PanchangError::NoConvergence("next new moon"))
}
