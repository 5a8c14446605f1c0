//! # Types
//!
//! Shared data structures used across all modules of the crowdfund protocol.
//!
//! ## Design decisions
//!
//! ### Phase is computed, never stored
//!
//! [`Phase`] is derived from the immutable [`CampaignConfig`] windows and the
//! current ledger timestamp on every call (see [`crate::phase`]). There is no
//! stored transition state, so two calls at different timestamps can observe
//! different phases without any explicit transition step.
//!
//! ```text
//! Pending ──► RequestOpen ──► RequestClosed ──► CrowdOpen ──► CrowdClosed
//! ```
//!
//! ### Record / fan-club split
//!
//! A creator's fan club (the ordered list of backers that targeted them) is
//! stored under its own key rather than inside [`Creator`], so the hot `fund`
//! path appends to a small entry instead of rewriting the whole record.
//!
//! ### Per-creator lifecycle
//!
//! ```text
//! (absent) ──► eligible ──► requested ──► distributed
//!                                    └──► failed threshold (terminal; backers refunded)
//! ```
//!
//! All transitions are forward-only. `requested_funds` is set at most once,
//! `distributed` and a backer's `refunded` flip false→true at most once.

use soroban_sdk::{contracttype, Address, Vec};

/// Campaign phase derived from the config windows and the ledger timestamp.
///
/// Windows are half-open: a boundary timestamp belongs to the later phase.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Phase {
    /// Before the request window opens.
    Pending,
    /// Creators may request funds.
    RequestOpen,
    /// Between the request and crowd windows.
    RequestClosed,
    /// Backers may contribute.
    CrowdOpen,
    /// Funding is over; settlement may run.
    CrowdClosed,
}

/// Disposition of the accumulated non-refundable reserve after the crowd
/// window closes.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReservePolicy {
    /// The admin sweeps the reserve to their own address.
    Treasury,
    /// The reserve is burned on sweep.
    Burn,
}

/// Immutable campaign configuration, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Settlement token. All custody moves through this token contract.
    pub token: Address,
    /// Smallest accepted contribution; also the per-contribution reserve
    /// withheld from the creator's distributable total.
    pub min_contribution: i128,
    /// Accepted funding asset identifiers. Empty means only the settlement
    /// token itself is accepted.
    pub allowed_assets: Vec<Address>,
    /// Request window `[request_start, request_end)`.
    pub request_start: u64,
    pub request_end: u64,
    /// Crowd window `[crowd_start, crowd_end)`. Must not start before the
    /// request window ends.
    pub crowd_start: u64,
    pub crowd_end: u64,
    /// What happens to the reserve once the crowd window closes.
    pub reserve_policy: ReservePolicy,
}

/// Per-creator record, created on first eligibility grant. Never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Creator {
    /// Whitelisted by the admin to request funds.
    pub eligible: bool,
    /// Funding target, set exactly once during the request window.
    pub requested_funds: Option<i128>,
    /// Accumulated net contributions (each contribution minus the reserve).
    pub total_funds: i128,
    /// True once the threshold was met and funds were paid out.
    pub distributed: bool,
}

impl Creator {
    /// Fresh record for a creator that has just been granted eligibility.
    pub fn new_eligible() -> Self {
        Creator {
            eligible: true,
            requested_funds: None,
            total_funds: 0,
            distributed: false,
        }
    }
}

/// Per-backer contribution record, created on first `fund` call. Never
/// deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Cumulative amount locked by this backer.
    pub total_locked: i128,
    /// Cumulative non-refundable reserve withheld from this backer.
    /// Refunds pay `total_locked - reserved`.
    pub reserved: i128,
    /// Declared funding asset of the most recent contribution.
    pub asset: Address,
    /// Last creator this backer funded. A later contribution to a different
    /// creator overwrites this (last-target-wins, single-target model).
    pub target_creator: Address,
    /// True once this backer has been refunded.
    pub refunded: bool,
}
