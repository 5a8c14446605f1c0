//! # Crowdfund Protocol Contract
//!
//! A time-phased crowdfunding escrow: whitelisted creators request a funding
//! target during a request window, backers lock contributions during a crowd
//! window, and after close each creator's pool is either distributed (target
//! met) or refunded to its backers (target missed). A fixed slice of every
//! contribution is withheld as a non-refundable reserve.
//!
//! | Phase         | Entry Point(s)                                        |
//! |---------------|-------------------------------------------------------|
//! | Bootstrap     | [`CrowdfundProtocol::initialize`]                     |
//! | Any           | `grant_eligibility`, queries                          |
//! | RequestOpen   | [`CrowdfundProtocol::request_funds`]                  |
//! | CrowdOpen     | [`CrowdfundProtocol::fund`]                           |
//! | CrowdClosed   | `distribute`, `refund_backers`, `withdraw_reserve`    |
//!
//! ## Architecture
//!
//! The phase gate is fully delegated to [`phase`] — a pure function of the
//! config windows and the ledger timestamp, re-resolved on every call and
//! never cached. Eligibility and requests live in [`registry`], contribution
//! bookkeeping in [`ledger`], post-close payouts in [`settlement`], storage
//! access in [`storage`]. This file contains **only** the public entry
//! points: authorization, config loading, and delegation.
//!
//! Every entry point returns `Result`; a rejected call leaves state
//! untouched. The ledger close time is the only time source — the contract
//! never reads a wall clock.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Vec};

mod ledger;
mod phase;
mod registry;
mod settlement;
mod storage;

pub mod events;
pub mod types;

#[cfg(test)]
mod test_phase;

pub use types::{CampaignConfig, Contribution, Creator, Phase, ReservePolicy};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    NotAuthorized = 4,
    PhaseViolation = 5,
    NotEligible = 6,
    AlreadyRequested = 7,
    InvalidAmount = 8,
    UnknownTarget = 9,
    BelowMinimum = 10,
    UnsupportedAsset = 11,
    AlreadyDistributed = 12,
    /// Terminal business outcome, not a bug: the creator's pool never reached
    /// their target and cannot anymore.
    ThresholdNotMet = 13,
}

#[contract]
pub struct CrowdfundProtocol;

#[contractimpl]
impl CrowdfundProtocol {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the campaign: admin, settlement token, minimum
    /// contribution, accepted assets, the two time windows, and the reserve
    /// policy.
    ///
    /// Must be called exactly once after deployment. Window ordering
    /// (`request_start < request_end <= crowd_start < crowd_end`) and a
    /// non-negative minimum are validated here; violating configs are
    /// rejected with `InvalidConfig`.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        min_contribution: i128,
        allowed_assets: Vec<Address>,
        request_start: u64,
        request_end: u64,
        crowd_start: u64,
        crowd_end: u64,
        reserve_policy: ReservePolicy,
    ) -> Result<(), Error> {
        admin.require_auth();
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        let config = CampaignConfig {
            token,
            min_contribution,
            allowed_assets,
            request_start,
            request_end,
            crowd_start,
            crowd_end,
            reserve_policy,
        };
        phase::validate_windows(&config)?;
        if config.min_contribution < 0 {
            return Err(Error::InvalidConfig);
        }
        storage::save_config(&env, &admin, &config);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Creator registry
    // ─────────────────────────────────────────────────────────

    /// Whitelist `creator` to request funds. Admin only; idempotent.
    pub fn grant_eligibility(env: Env, caller: Address, creator: Address) -> Result<(), Error> {
        caller.require_auth();
        if caller != storage::load_admin(&env)? {
            return Err(Error::NotAuthorized);
        }
        registry::grant_eligibility(&env, &creator);
        Ok(())
    }

    /// Has `creator` been whitelisted?
    pub fn is_creator_eligible(env: Env, creator: Address) -> bool {
        registry::is_eligible(&env, &creator)
    }

    /// Set the caller's funding target. Only during the request window, only
    /// for whitelisted creators, and only once.
    pub fn request_funds(env: Env, creator: Address, amount: i128) -> Result<(), Error> {
        creator.require_auth();
        let config = storage::load_config(&env)?;
        let now = env.ledger().timestamp();
        registry::request_funds(&env, &config, &creator, amount, now)
    }

    // ─────────────────────────────────────────────────────────
    // Contribution ledger
    // ─────────────────────────────────────────────────────────

    /// Lock `amount` of value from `backer` toward `creator`. Only during the
    /// crowd window, only toward creators that requested funds, and only at
    /// or above the configured minimum. A repeat contribution to a different
    /// creator retargets the backer (last-target-wins).
    pub fn fund(
        env: Env,
        backer: Address,
        creator: Address,
        amount: i128,
        asset: Address,
    ) -> Result<(), Error> {
        backer.require_auth();
        let config = storage::load_config(&env)?;
        let now = env.ledger().timestamp();
        ledger::fund(&env, &config, &backer, &creator, amount, &asset, now)
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Pay out `creator`'s accumulated pool if their threshold was met.
    /// Callable by anyone once the crowd window has closed. Returns the
    /// amount paid.
    pub fn distribute(env: Env, creator: Address) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        let now = env.ledger().timestamp();
        settlement::distribute(&env, &config, &creator, now)
    }

    /// Refund every backer whose target creator missed their threshold.
    /// Callable by anyone once the crowd window has closed; safe to call
    /// repeatedly. Returns the number of backers refunded by this call.
    pub fn refund_backers(env: Env) -> Result<u32, Error> {
        let config = storage::load_config(&env)?;
        let now = env.ledger().timestamp();
        settlement::refund_backers(&env, &config, now)
    }

    /// Sweep the accumulated non-refundable reserve after close, either to
    /// the admin or to the burn address depending on the configured policy.
    /// Admin only. Returns the amount swept.
    pub fn withdraw_reserve(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let admin = storage::load_admin(&env)?;
        if caller != admin {
            return Err(Error::NotAuthorized);
        }
        let config = storage::load_config(&env)?;
        let now = env.ledger().timestamp();
        settlement::withdraw_reserve(&env, &config, &admin, now)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Current campaign phase at the ledger close time.
    pub fn get_phase(env: Env) -> Result<Phase, Error> {
        let config = storage::load_config(&env)?;
        Ok(phase::resolve(&config, env.ledger().timestamp()))
    }

    /// Seconds until the request window closes. Fails with `PhaseViolation`
    /// unless the request window is open.
    pub fn time_left_request_window(env: Env) -> Result<u64, Error> {
        let config = storage::load_config(&env)?;
        phase::time_left_request(&config, env.ledger().timestamp())
    }

    /// Seconds until the crowd window closes. Fails with `PhaseViolation`
    /// unless the crowd window is open.
    pub fn time_left_crowd_window(env: Env) -> Result<u64, Error> {
        let config = storage::load_config(&env)?;
        phase::time_left_crowd(&config, env.ledger().timestamp())
    }

    pub fn get_campaign_config(env: Env) -> Result<CampaignConfig, Error> {
        storage::load_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::load_admin(&env)
    }

    /// A creator's record, or `None` if they were never granted eligibility.
    pub fn get_creator(env: Env, creator: Address) -> Option<Creator> {
        storage::load_creator(&env, &creator)
    }

    /// A backer's contribution record, or `None` if they never contributed.
    pub fn get_contribution(env: Env, backer: Address) -> Option<Contribution> {
        storage::load_contribution(&env, &backer)
    }

    /// Ordered list of backers that targeted `creator`, one entry per
    /// contribution.
    pub fn get_fan_club(env: Env, creator: Address) -> Vec<Address> {
        storage::load_fan_club(&env, &creator)
    }

    /// Reserve currently held in custody.
    pub fn get_reserve_total(env: Env) -> i128 {
        storage::load_reserve_total(&env)
    }
}
