//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type             | Description                          |
//! |----------------|------------------|--------------------------------------|
//! | `Admin`        | `Address`        | Campaign admin (eligibility grants)  |
//! | `Config`       | `CampaignConfig` | Immutable campaign configuration     |
//! | `ReserveTotal` | `i128`           | Accumulated non-refundable reserve   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type           | Description                     |
//! |-------------------------|----------------|---------------------------------|
//! | `Creator(addr)`         | `Creator`      | Per-creator record              |
//! | `Contribution(addr)`    | `Contribution` | Per-backer record               |
//! | `FanClub(addr)`         | `Vec<Address>` | Backers that targeted a creator |
//! | `Backers`               | `Vec<Address>` | All backers, insertion order    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{CampaignConfig, Contribution, Creator};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Admin`, `Config`, `ReserveTotal`) live as long as the
/// contract and are extended together. Persistent-tier keys hold per-party
/// records with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Campaign admin address (Instance).
    Admin,
    /// Immutable campaign configuration (Instance).
    Config,
    /// Accumulated non-refundable reserve held in custody (Instance).
    ReserveTotal,
    /// Per-creator record keyed by address (Persistent).
    Creator(Address),
    /// Per-backer contribution record keyed by address (Persistent).
    Contribution(Address),
    /// Ordered fan club for a creator (Persistent).
    FanClub(Address),
    /// Insertion-ordered index of all backers (Persistent).
    Backers,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Store the admin and immutable campaign configuration. Written once.
pub fn save_config(env: &Env, admin: &Address, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::ReserveTotal, &0i128);
    bump_instance(env);
}

/// Load the campaign configuration, failing if the contract was never
/// initialized.
pub fn load_config(env: &Env) -> Result<CampaignConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn load_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn load_reserve_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ReserveTotal)
        .unwrap_or(0)
}

pub fn save_reserve_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::ReserveTotal, &total);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Load a creator record, or `None` if the creator was never granted
/// eligibility.
pub fn load_creator(env: &Env, creator: &Address) -> Option<Creator> {
    let key = DataKey::Creator(creator.clone());
    let record: Option<Creator> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn save_creator(env: &Env, creator: &Address, record: &Creator) {
    let key = DataKey::Creator(creator.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load a backer's contribution record, or `None` if the backer never
/// contributed.
pub fn load_contribution(env: &Env, backer: &Address) -> Option<Contribution> {
    let key = DataKey::Contribution(backer.clone());
    let record: Option<Contribution> = env.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(env, &key);
    }
    record
}

pub fn save_contribution(env: &Env, backer: &Address, record: &Contribution) {
    let key = DataKey::Contribution(backer.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load a creator's fan club; empty if nobody targeted them yet.
pub fn load_fan_club(env: &Env, creator: &Address) -> Vec<Address> {
    let key = DataKey::FanClub(creator.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

/// Append a backer to a creator's fan club. Duplicates are allowed; the fan
/// club records contribution order, not membership.
pub fn push_fan_club(env: &Env, creator: &Address, backer: &Address) {
    let key = DataKey::FanClub(creator.clone());
    let mut club = load_fan_club(env, creator);
    club.push_back(backer.clone());
    env.storage().persistent().set(&key, &club);
    bump_persistent(env, &key);
}

/// Load the insertion-ordered index of all backers.
pub fn load_backers(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Backers)
        .unwrap_or_else(|| Vec::new(env))
}

/// Record a first-time backer in the global index.
pub fn push_backer(env: &Env, backer: &Address) {
    let mut backers = load_backers(env);
    backers.push_back(backer.clone());
    env.storage().persistent().set(&DataKey::Backers, &backers);
    bump_persistent(env, &DataKey::Backers);
}
