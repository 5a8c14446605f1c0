extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, Vec,
};

use crate::invariants;
use crate::{CrowdfundProtocol, CrowdfundProtocolClient, Error, Phase, ReservePolicy};

const REQUEST_START: u64 = 1_000;
const REQUEST_END: u64 = 2_000;
const CROWD_START: u64 = 3_000;
const CROWD_END: u64 = 4_000;

fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

fn setup() -> (Env, CrowdfundProtocolClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdfundProtocol, ());
    let client = CrowdfundProtocolClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let token = Address::generate(&env);
    client.initialize(
        &admin,
        &token,
        &10i128,
        &Vec::new(&env),
        &REQUEST_START,
        &REQUEST_END,
        &CROWD_START,
        &CROWD_END,
        &ReservePolicy::Treasury,
    );
    (env, client)
}

#[test]
fn test_phase_progression_over_timeline() {
    let (env, client) = setup();

    let timeline = [
        0u64,
        REQUEST_START - 1,
        REQUEST_START,
        REQUEST_END - 1,
        REQUEST_END,
        CROWD_START - 1,
        CROWD_START,
        CROWD_END - 1,
        CROWD_END,
        CROWD_END + 10_000,
    ];
    let expected = [
        Phase::Pending,
        Phase::Pending,
        Phase::RequestOpen,
        Phase::RequestOpen,
        Phase::RequestClosed,
        Phase::RequestClosed,
        Phase::CrowdOpen,
        Phase::CrowdOpen,
        Phase::CrowdClosed,
        Phase::CrowdClosed,
    ];

    let mut observed = std::vec::Vec::new();
    for (now, want) in timeline.iter().zip(expected.iter()) {
        set_time(&env, *now);
        let got = client.get_phase();
        assert_eq!(got, *want, "phase mismatch at t={}", now);
        observed.push(got);
    }
    invariants::assert_phase_monotonic(&observed);
}

#[test]
fn test_window_boundaries_are_half_open() {
    let (env, client) = setup();

    // A boundary timestamp always belongs to the later phase.
    set_time(&env, REQUEST_START);
    assert_eq!(client.get_phase(), Phase::RequestOpen);
    set_time(&env, REQUEST_END);
    assert_eq!(client.get_phase(), Phase::RequestClosed);
    set_time(&env, CROWD_START);
    assert_eq!(client.get_phase(), Phase::CrowdOpen);
    set_time(&env, CROWD_END);
    assert_eq!(client.get_phase(), Phase::CrowdClosed);
}

#[test]
fn test_time_left_request_window() {
    let (env, client) = setup();

    set_time(&env, REQUEST_START);
    assert_eq!(client.time_left_request_window(), REQUEST_END - REQUEST_START);

    set_time(&env, REQUEST_END - 1);
    assert_eq!(client.time_left_request_window(), 1);

    // Out of phase in every other period.
    for now in [0u64, REQUEST_END, CROWD_START, CROWD_END] {
        set_time(&env, now);
        assert_eq!(
            client.try_time_left_request_window(),
            Err(Ok(Error::PhaseViolation)),
            "expected PhaseViolation at t={}",
            now
        );
    }
}

#[test]
fn test_time_left_crowd_window() {
    let (env, client) = setup();

    set_time(&env, CROWD_START);
    assert_eq!(client.time_left_crowd_window(), CROWD_END - CROWD_START);

    set_time(&env, CROWD_END - 1);
    assert_eq!(client.time_left_crowd_window(), 1);

    for now in [0u64, REQUEST_START, REQUEST_END, CROWD_END, CROWD_END + 999] {
        set_time(&env, now);
        assert_eq!(
            client.try_time_left_crowd_window(),
            Err(Ok(Error::PhaseViolation)),
            "expected PhaseViolation at t={}",
            now
        );
    }
}

#[test]
fn test_phase_is_recomputed_per_call() {
    let (env, client) = setup();

    // No mutating call in between: two reads at different times observe
    // different phases purely from the timestamp.
    set_time(&env, REQUEST_START + 1);
    assert_eq!(client.get_phase(), Phase::RequestOpen);
    set_time(&env, CROWD_END + 1);
    assert_eq!(client.get_phase(), Phase::CrowdClosed);
}
