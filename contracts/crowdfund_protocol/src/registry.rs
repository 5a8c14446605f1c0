//! # Creator Registry
//!
//! Eligibility whitelist and per-creator fund requests. A creator only
//! becomes a valid funding target for the contribution ledger after a
//! successful [`request_funds`].

use soroban_sdk::{Address, Env};

use crate::types::{CampaignConfig, Creator, Phase};
use crate::{events, phase, storage, Error};

/// Whitelist `creator`. Idempotent: granting an already-eligible creator is a
/// no-op success. Caller authorization is checked at the entry point.
pub fn grant_eligibility(env: &Env, creator: &Address) {
    let record = match storage::load_creator(env, creator) {
        Some(mut record) => {
            if record.eligible {
                return;
            }
            record.eligible = true;
            record
        }
        None => Creator::new_eligible(),
    };
    storage::save_creator(env, creator, &record);
    events::eligibility_granted(env, creator);
}

pub fn is_eligible(env: &Env, creator: &Address) -> bool {
    storage::load_creator(env, creator)
        .map(|record| record.eligible)
        .unwrap_or(false)
}

/// Set a creator's funding target. Allowed once, during the request window,
/// for whitelisted creators only.
pub fn request_funds(
    env: &Env,
    config: &CampaignConfig,
    creator: &Address,
    amount: i128,
    now: u64,
) -> Result<(), Error> {
    phase::require(config, now, Phase::RequestOpen)?;

    let mut record = storage::load_creator(env, creator).ok_or(Error::NotEligible)?;
    if !record.eligible {
        return Err(Error::NotEligible);
    }
    if record.requested_funds.is_some() {
        return Err(Error::AlreadyRequested);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    record.requested_funds = Some(amount);
    record.total_funds = 0;
    record.distributed = false;
    storage::save_creator(env, creator, &record);

    events::funds_requested(env, creator, amount);
    Ok(())
}
