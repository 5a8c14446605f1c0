//! # Phase Resolver
//!
//! Pure mapping from `(config, now)` to a [`Phase`]. No state is stored or
//! cached: every entry point re-resolves the phase from the ledger timestamp
//! it was invoked at, so there is no transition step to miss and no scheduler
//! to run. The cost is that every caller supplies a trustworthy `now` — on
//! Soroban that is the ledger close time.

use crate::types::{CampaignConfig, Phase};
use crate::Error;

/// Resolve the campaign phase at `now`.
///
/// Windows are half-open: `request_start <= now < request_end` is
/// `RequestOpen`, and so on. Because the config orders the four boundaries,
/// the result is monotonically non-decreasing in `now`.
pub fn resolve(config: &CampaignConfig, now: u64) -> Phase {
    if now < config.request_start {
        Phase::Pending
    } else if now < config.request_end {
        Phase::RequestOpen
    } else if now < config.crowd_start {
        Phase::RequestClosed
    } else if now < config.crowd_end {
        Phase::CrowdOpen
    } else {
        Phase::CrowdClosed
    }
}

/// Fail with `PhaseViolation` unless the campaign is in `expected` at `now`.
pub fn require(config: &CampaignConfig, now: u64, expected: Phase) -> Result<(), Error> {
    if resolve(config, now) == expected {
        Ok(())
    } else {
        Err(Error::PhaseViolation)
    }
}

/// Seconds until the request window closes. Only answerable while the window
/// is open.
pub fn time_left_request(config: &CampaignConfig, now: u64) -> Result<u64, Error> {
    require(config, now, Phase::RequestOpen)?;
    Ok(config.request_end - now)
}

/// Seconds until the crowd window closes. Only answerable while the window is
/// open.
pub fn time_left_crowd(config: &CampaignConfig, now: u64) -> Result<u64, Error> {
    require(config, now, Phase::CrowdOpen)?;
    Ok(config.crowd_end - now)
}

/// Validate window ordering at construction:
/// `request_start < request_end <= crowd_start < crowd_end`.
pub fn validate_windows(config: &CampaignConfig) -> Result<(), Error> {
    if config.request_start < config.request_end
        && config.request_end <= config.crowd_start
        && config.crowd_start < config.crowd_end
    {
        Ok(())
    } else {
        Err(Error::InvalidConfig)
    }
}
