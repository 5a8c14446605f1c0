//! # Settlement Engine
//!
//! Post-close distribution and refunds. Runs only once the campaign phase is
//! `CrowdClosed`; by then no contribution can change any total, so the
//! threshold comparison in [`distribute`] is final and a `ThresholdNotMet`
//! outcome is terminal for that creator.

use soroban_sdk::{token, Address, Env};

use crate::types::{CampaignConfig, Phase, ReservePolicy};
use crate::{events, phase, storage, Error};

/// Pay out a creator that cleared their threshold. Returns the amount paid.
///
/// Pull-style: callable by any party, so a creator cannot be held hostage by
/// an absent admin. `distributed` flips exactly once; a second call fails
/// with `AlreadyDistributed`.
pub fn distribute(
    env: &Env,
    config: &CampaignConfig,
    creator: &Address,
    now: u64,
) -> Result<i128, Error> {
    phase::require(config, now, Phase::CrowdClosed)?;

    let mut record = storage::load_creator(env, creator).ok_or(Error::UnknownTarget)?;
    let requested = record.requested_funds.ok_or(Error::UnknownTarget)?;
    if record.distributed {
        return Err(Error::AlreadyDistributed);
    }
    if record.total_funds < requested {
        return Err(Error::ThresholdNotMet);
    }

    let payout = record.total_funds;
    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        creator,
        &payout,
    );

    record.distributed = true;
    storage::save_creator(env, creator, &record);

    events::creator_paid(env, creator, payout);
    Ok(payout)
}

/// Refund every backer whose target creator missed their threshold.
///
/// Sweeps the backer index in insertion order. Backers already refunded and
/// backers of distributed creators are skipped, so re-invoking is a safe
/// no-op. The reserve portion is never returned. Returns the number of
/// backers refunded by this call.
pub fn refund_backers(env: &Env, config: &CampaignConfig, now: u64) -> Result<u32, Error> {
    phase::require(config, now, Phase::CrowdClosed)?;

    let token_client = token::Client::new(env, &config.token);
    let contract = env.current_contract_address();
    let mut refunded: u32 = 0;

    for backer in storage::load_backers(env).iter() {
        let mut record = match storage::load_contribution(env, &backer) {
            Some(record) => record,
            None => continue,
        };
        if record.refunded {
            continue;
        }
        // The target always exists: `fund` required a registered creator.
        let target = match storage::load_creator(env, &record.target_creator) {
            Some(target) => target,
            None => continue,
        };
        if target.distributed {
            // Their funds already moved out during distribution.
            continue;
        }

        let payout = record.total_locked - record.reserved;
        if payout > 0 {
            token_client.transfer(&contract, &backer, &payout);
        }
        record.refunded = true;
        record.total_locked = 0;
        storage::save_contribution(env, &backer, &record);

        events::backer_refunded(env, &backer, payout);
        refunded += 1;
    }

    Ok(refunded)
}

/// Sweep the accumulated reserve after close, per the configured policy.
/// Returns the amount swept; zero if already swept. Admin gating happens at
/// the entry point.
pub fn withdraw_reserve(
    env: &Env,
    config: &CampaignConfig,
    admin: &Address,
    now: u64,
) -> Result<i128, Error> {
    phase::require(config, now, Phase::CrowdClosed)?;

    let amount = storage::load_reserve_total(env);
    if amount == 0 {
        return Ok(0);
    }

    let token_client = token::Client::new(env, &config.token);
    let contract = env.current_contract_address();
    let burned = match config.reserve_policy {
        ReservePolicy::Treasury => {
            token_client.transfer(&contract, admin, &amount);
            false
        }
        ReservePolicy::Burn => {
            token_client.burn(&contract, &amount);
            true
        }
    };
    storage::save_reserve_total(env, 0);

    events::reserve_swept(env, amount, burned);
    Ok(amount)
}
