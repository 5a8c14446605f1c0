//! # Contribution Ledger
//!
//! Per-backer contribution bookkeeping and per-creator aggregates.
//!
//! Every accepted contribution splits in two: `min_contribution` goes to the
//! non-refundable reserve, the remainder is credited to the target creator's
//! distributable total. Both splits are tracked so that settlement can pay
//! out or refund without re-deriving anything from history.

use soroban_sdk::{token, Address, Env};

use crate::types::{CampaignConfig, Contribution, Phase};
use crate::{events, phase, storage, Error};

/// Is `asset` an accepted funding asset under `config`?
///
/// An empty allow-list means only the settlement token itself is accepted.
fn asset_allowed(config: &CampaignConfig, asset: &Address) -> bool {
    if config.allowed_assets.is_empty() {
        *asset == config.token
    } else {
        config.allowed_assets.contains(asset)
    }
}

/// Lock `amount` from `backer` toward `creator`.
///
/// All validation runs before any write; a failed call leaves every record
/// untouched. On success the custody transfer and all bookkeeping updates
/// apply within the same invocation, so they commit or abort together.
pub fn fund(
    env: &Env,
    config: &CampaignConfig,
    backer: &Address,
    creator: &Address,
    amount: i128,
    asset: &Address,
    now: u64,
) -> Result<(), Error> {
    phase::require(config, now, Phase::CrowdOpen)?;

    let mut creator_record = storage::load_creator(env, creator).ok_or(Error::UnknownTarget)?;
    if creator_record.requested_funds.is_none() {
        return Err(Error::UnknownTarget);
    }
    if amount < config.min_contribution {
        return Err(Error::BelowMinimum);
    }
    if !asset_allowed(config, asset) {
        return Err(Error::UnsupportedAsset);
    }

    // Custody transfer: backer -> contract, in the settlement token.
    token::Client::new(env, &config.token).transfer(
        backer,
        &env.current_contract_address(),
        &amount,
    );

    let net = amount - config.min_contribution;

    let record = match storage::load_contribution(env, backer) {
        Some(mut record) => {
            record.total_locked += amount;
            record.reserved += config.min_contribution;
            record.asset = asset.clone();
            // Last-target-wins: a repeat contribution to a different creator
            // retargets the backer.
            record.target_creator = creator.clone();
            record
        }
        None => {
            storage::push_backer(env, backer);
            Contribution {
                total_locked: amount,
                reserved: config.min_contribution,
                asset: asset.clone(),
                target_creator: creator.clone(),
                refunded: false,
            }
        }
    };
    storage::save_contribution(env, backer, &record);

    creator_record.total_funds += net;
    storage::save_creator(env, creator, &creator_record);

    storage::push_fan_club(env, creator, backer);
    storage::save_reserve_total(env, storage::load_reserve_total(env) + config.min_contribution);

    events::contribution_locked(env, backer, creator, amount, net);
    Ok(())
}
