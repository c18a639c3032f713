//! Launcher facade
//!
//! The high-level surface the front-ends drive: move the turret by alias,
//! fire one or more missiles with a pause between shots, stop. Stateless
//! from our side - the device's own firmware tracks turret position and
//! which bay fires next.

use protocol::{Action, BAY_CAPACITY, DEFAULT_H_AMP, DEFAULT_V_AMP, encode_command};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;
use crate::transport::Transport;

/// Default pause between shots, in seconds.
pub const DEFAULT_FIRE_DELAY_SECS: u64 = 5;

/// Random delays are picked from this range (seconds), fresh per pause.
const RANDOM_DELAY_SECS: std::ops::Range<u64> = 5..30;

/// Movement amplitudes and bay capacity for one turret.
///
/// The amplitude bytes are opaque to us; the defaults match the vendor
/// software's capture. Bay capacity caps how many shots a single `fire`
/// can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurretProfile {
    pub h_amp: u8,
    pub v_amp: u8,
    pub bay_capacity: u8,
}

impl Default for TurretProfile {
    fn default() -> Self {
        Self {
            h_amp: DEFAULT_H_AMP,
            v_amp: DEFAULT_V_AMP,
            bay_capacity: BAY_CAPACITY,
        }
    }
}

/// How many missiles to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireCount {
    /// A specific number of shots, capped at the bay capacity.
    Shots(u8),
    /// Everything the bay holds.
    All,
}

impl From<u8> for FireCount {
    fn from(n: u8) -> Self {
        FireCount::Shots(n)
    }
}

/// Pause between consecutive shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDelay {
    /// A fixed pause.
    Seconds(u64),
    /// A fresh pick from [5, 30) seconds before each pause.
    Random,
}

impl FireDelay {
    /// Resolve the next pause. `Random` re-picks every call.
    fn pick(self, rng: &mut impl Rng) -> Duration {
        match self {
            FireDelay::Seconds(secs) => Duration::from_secs(secs),
            FireDelay::Random => Duration::from_secs(rng.random_range(RANDOM_DELAY_SECS)),
        }
    }
}

impl Default for FireDelay {
    fn default() -> Self {
        FireDelay::Seconds(DEFAULT_FIRE_DELAY_SECS)
    }
}

/// High-level control over one launcher.
///
/// Generic over [`Transport`] so tests can record commands instead of
/// touching hardware. The inter-shot sleep is injectable for the same
/// reason and defaults to [`std::thread::sleep`].
pub struct Launcher<T: Transport> {
    transport: T,
    profile: TurretProfile,
    sleep: Box<dyn FnMut(Duration) + Send>,
}

impl<T: Transport> Launcher<T> {
    /// Launcher with default amplitudes and bay capacity.
    pub fn new(transport: T) -> Self {
        Self::with_profile(transport, TurretProfile::default())
    }

    /// Launcher with an explicit turret profile.
    pub fn with_profile(transport: T, profile: TurretProfile) -> Self {
        Self {
            transport,
            profile,
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Replace the inter-shot sleep. Test seam.
    pub fn with_sleep_hook(mut self, sleep: Box<dyn FnMut(Duration) + Send>) -> Self {
        self.sleep = sleep;
        self
    }

    /// Move the turret towards a direction given by alias.
    ///
    /// Unresolvable aliases are silently ignored - zero transmissions, no
    /// error. The physical device is just as permissive and the quirk is
    /// kept on purpose.
    pub fn move_to(&mut self, direction: &str) -> Result<()> {
        match Action::from_alias(direction) {
            Some(action) => self.send(action),
            None => {
                debug!("ignoring unknown direction {direction:?}");
                Ok(())
            }
        }
    }

    /// Fire missiles, pausing between consecutive shots but never after
    /// the last one.
    ///
    /// The shot count is capped at the bay capacity. The device cycles
    /// through its bays on its own and silently skips empty ones, so an
    /// over-count or an empty bay is not an error here.
    pub fn fire(&mut self, count: impl Into<FireCount>, delay: FireDelay) -> Result<()> {
        let shots = match count.into() {
            FireCount::All => self.profile.bay_capacity,
            FireCount::Shots(n) => n.min(self.profile.bay_capacity),
        };

        for shot in 0..shots {
            debug!("firing shot {}/{}", shot + 1, shots);
            self.send(Action::Fire)?;
            if shot + 1 != shots {
                let pause = delay.pick(&mut rand::rng());
                if !pause.is_zero() {
                    (self.sleep)(pause);
                }
            }
        }
        Ok(())
    }

    /// Fire everything the bay holds.
    pub fn fire_all(&mut self, delay: FireDelay) -> Result<()> {
        self.fire(FireCount::All, delay)
    }

    /// Halt any in-progress movement.
    pub fn stop(&mut self) -> Result<()> {
        self.send(Action::Stop)
    }

    /// Send one resolved action to the device.
    pub fn send(&mut self, action: Action) -> Result<()> {
        let command = encode_command(action, self.profile.h_amp, self.profile.v_amp);
        self.transport.send(&command)
    }

    /// Close the underlying transport, releasing the device.
    pub fn close(self) -> Result<()> {
        self.transport.shutdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fixed_delay_pick_is_constant() {
        let mut rng = StdRng::seed_from_u64(7);
        let delay = FireDelay::Seconds(9);
        assert_eq!(delay.pick(&mut rng), Duration::from_secs(9));
        assert_eq!(delay.pick(&mut rng), Duration::from_secs(9));
    }

    #[test]
    fn test_random_delay_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let pause = FireDelay::Random.pick(&mut rng);
            assert!(pause >= Duration::from_secs(5));
            assert!(pause < Duration::from_secs(30));
        }
    }

    #[test]
    fn test_random_delay_varies_between_picks() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<Duration> = (0..50).map(|_| FireDelay::Random.pick(&mut rng)).collect();
        assert!(picks.iter().any(|p| p != &picks[0]));
    }

    #[test]
    fn test_fire_count_from_u8() {
        assert_eq!(FireCount::from(2), FireCount::Shots(2));
    }
}
