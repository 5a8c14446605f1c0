//! Typed contract events, one per state mutation.
//!
//! Each event is published with a short-symbol topic plus the affected party,
//! and a `#[contracttype]` payload an off-chain indexer can decode.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A creator was whitelisted by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EligibilityGranted {
    pub creator: Address,
}

/// A creator set their funding target.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsRequested {
    pub creator: Address,
    pub amount: i128,
}

/// A backer locked a contribution toward a creator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionLocked {
    pub backer: Address,
    pub creator: Address,
    /// Gross amount moved into custody.
    pub amount: i128,
    /// Amount credited to the creator after the reserve was withheld.
    pub net: i128,
}

/// A creator cleared their threshold and was paid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorPaid {
    pub creator: Address,
    pub amount: i128,
}

/// A backer of a failed creator was refunded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackerRefunded {
    pub backer: Address,
    pub amount: i128,
}

/// The accumulated reserve was swept after close.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveSwept {
    pub amount: i128,
    pub burned: bool,
}

pub fn eligibility_granted(env: &Env, creator: &Address) {
    env.events().publish(
        (symbol_short!("eligible"), creator.clone()),
        EligibilityGranted {
            creator: creator.clone(),
        },
    );
}

pub fn funds_requested(env: &Env, creator: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("requested"), creator.clone()),
        FundsRequested {
            creator: creator.clone(),
            amount,
        },
    );
}

pub fn contribution_locked(env: &Env, backer: &Address, creator: &Address, amount: i128, net: i128) {
    env.events().publish(
        (symbol_short!("funded"), creator.clone()),
        ContributionLocked {
            backer: backer.clone(),
            creator: creator.clone(),
            amount,
            net,
        },
    );
}

pub fn creator_paid(env: &Env, creator: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("paid"), creator.clone()),
        CreatorPaid {
            creator: creator.clone(),
            amount,
        },
    );
}

pub fn backer_refunded(env: &Env, backer: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), backer.clone()),
        BackerRefunded {
            backer: backer.clone(),
            amount,
        },
    );
}

pub fn reserve_swept(env: &Env, amount: i128, burned: bool) {
    env.events()
        .publish((symbol_short!("reserve"),), ReserveSwept { amount, burned });
}
