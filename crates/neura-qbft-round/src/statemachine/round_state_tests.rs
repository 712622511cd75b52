use crate::messagewrappers::{Commit, Prepare, Proposal};
use crate::mocks::{MockMessageValidator, ValidationCall};
use crate::payload::PreparePayload;
use crate::statemachine::RoundState;
use crate::testing_helpers::{message_factory, test_block};
use crate::types::{ConsensusRoundIdentifier, QbftBlock, RlpSignature, SignedData};
use alloy_primitives::{Signature, B256, U256};
use rand::seq::SliceRandom;
use rand::thread_rng;

fn round() -> ConsensusRoundIdentifier {
    ConsensusRoundIdentifier::new(1, 0)
}

fn block() -> QbftBlock {
    test_block(&round(), 1_000)
}

fn proposal_from(seed: u8, block: &QbftBlock) -> Proposal {
    message_factory(seed).create_proposal(round(), block.clone(), vec![], vec![]).unwrap()
}

fn prepare_from(seed: u8, digest: B256) -> Prepare {
    message_factory(seed).create_prepare(round(), digest).unwrap()
}

fn commit_from(seed: u8, digest: B256) -> Commit {
    let factory = message_factory(seed);
    let seal = factory.create_commit_seal(digest).unwrap();
    factory.create_commit(round(), digest, seal).unwrap()
}

/// A prepare whose signature scalars are zero, so no author can be recovered.
fn unsigned_prepare(digest: B256) -> Prepare {
    let signature = RlpSignature(Signature::new(U256::ZERO, U256::ZERO, false));
    Prepare::new(SignedData::new(PreparePayload::new(round(), digest), signature))
}

fn round_state(required: usize) -> (RoundState<MockMessageValidator>, MockMessageValidator) {
    let validator = MockMessageValidator::new();
    (RoundState::new(round(), required, validator.clone()), validator)
}

#[test]
fn default_round_is_not_prepared_or_committed_and_has_no_certificate() {
    let (state, _) = round_state(1);

    assert!(!state.is_prepared());
    assert!(!state.is_committed());
    assert!(state.construct_prepared_certificate().is_none());
    assert!(state.commit_seals().is_empty());
    assert!(state.proposal().is_none());
}

#[test_log::test]
fn proposal_failing_validation_returns_false() {
    let (mut state, validator) = round_state(1);
    validator.set_defaults(false, true, true);

    assert!(!state.set_proposed_block(proposal_from(1, &block())));
    assert!(state.proposal().is_none());
    assert!(!state.is_prepared());
    assert!(!state.is_committed());
    assert!(state.construct_prepared_certificate().is_none());
}

#[test]
fn rejected_proposal_decides_the_slot() {
    let (mut state, validator) = round_state(1);
    let block = block();
    let rejected = proposal_from(1, &block);
    validator.answer_proposal(&rejected, false);

    assert!(!state.set_proposed_block(rejected));
    assert!(!state.set_proposed_block(proposal_from(2, &block)));

    assert_eq!(validator.proposal_calls(), 1);
    assert!(state.proposal().is_none());

    // Nothing can drain the buffer any more, and commits never complete the round.
    state.add_prepare_message(prepare_from(2, block.hash()));
    state.add_prepare_message(prepare_from(3, block.hash()));
    state.add_commit_message(commit_from(2, block.hash()));
    assert_eq!(state.buffered_prepare_count(), 0);
    assert!(validator.prepare_calls().is_empty());
    assert!(!state.is_prepared());
    assert!(!state.is_committed());
}

#[test]
fn second_proposal_is_rejected_without_validation() {
    let (mut state, validator) = round_state(1);
    let first_block = block();
    let second_block = test_block(&round(), 2_000);

    assert!(state.set_proposed_block(proposal_from(1, &first_block)));
    assert!(!state.set_proposed_block(proposal_from(1, &second_block)));

    assert_eq!(validator.proposal_calls(), 1);
    assert_eq!(state.proposed_block(), Some(&first_block));
}

#[test_log::test]
fn single_validator_requires_commit_message_to_be_committed() {
    let (mut state, _) = round_state(1);
    let block = block();

    assert!(state.set_proposed_block(proposal_from(1, &block)));
    assert!(!state.is_prepared());
    assert!(!state.is_committed());
    assert!(state.construct_prepared_certificate().is_none());

    state.add_commit_message(commit_from(1, block.hash()));

    assert!(state.is_committed());
    assert!(!state.is_prepared());
    assert!(state.construct_prepared_certificate().is_none());
}

#[test_log::test]
fn prepare_messages_can_be_received_prior_to_proposal() {
    let (mut state, validator) = round_state(3);
    let block = block();

    for seed in 2..=4 {
        state.add_prepare_message(prepare_from(seed, block.hash()));
        assert!(!state.is_prepared());
        assert!(!state.is_committed());
    }
    assert!(validator.calls().is_empty());
    assert_eq!(state.buffered_prepare_count(), 3);

    assert!(state.set_proposed_block(proposal_from(1, &block)));

    assert!(state.is_prepared());
    assert!(!state.is_committed());
    assert_eq!(validator.prepare_calls().len(), 3);
    assert_eq!(state.buffered_prepare_count(), 0);

    let certificate = state.construct_prepared_certificate().expect("round is prepared");
    assert_eq!(certificate.block(), &block);
    assert_eq!(certificate.round(), round().round_number);
    assert_eq!(certificate.prepares().len(), 3);
}

#[test]
fn buffered_prepares_are_not_validated_before_proposal() {
    let (mut state, validator) = round_state(2);
    let digest = block().hash();

    state.add_prepare_message(prepare_from(2, digest));
    state.add_prepare_message(prepare_from(3, digest));
    state.add_commit_message(commit_from(2, digest));

    let calls = validator.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], ValidationCall::Commit(_)));
}

#[test]
fn invalid_prior_prepare_messages_are_discarded_upon_subsequent_proposal() {
    let (mut state, validator) = round_state(2);
    let block = block();
    let valid = prepare_from(2, block.hash());
    let invalid = prepare_from(3, block.hash());
    validator.answer_prepare(&invalid, false);

    state.add_prepare_message(valid);
    state.add_prepare_message(invalid.clone());
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    assert!(!state.is_prepared());
    assert_eq!(state.prepare_count(), 1);
    assert!(state.construct_prepared_certificate().is_none());

    // The rejected message stays out, but its author can still vote with a valid one.
    state.add_prepare_message(invalid);
    assert!(!state.is_prepared());
    let other_round = ConsensusRoundIdentifier::new(round().sequence_number, 9);
    let valid_from_same_author = message_factory(3).create_prepare(other_round, block.hash()).unwrap();
    state.add_prepare_message(valid_from_same_author);

    assert!(state.is_prepared());
    assert_eq!(validator.prepare_calls().len(), 4);
}

#[test]
fn prepare_message_is_validated_against_existing_proposal() {
    let (mut state, validator) = round_state(2);
    let block = block();
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    let invalid = prepare_from(2, B256::repeat_byte(0xee));
    validator.answer_prepare(&invalid, false);
    state.add_prepare_message(invalid);
    assert!(!state.is_prepared());

    state.add_prepare_message(prepare_from(3, block.hash()));
    assert!(!state.is_prepared());

    state.add_prepare_message(prepare_from(4, block.hash()));
    assert!(state.is_prepared());
    assert_eq!(validator.prepare_calls().len(), 3);
}

#[test]
fn prepared_exactly_at_the_required_count() {
    let required = 4;
    let (mut state, _) = round_state(required);
    let block = block();
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    for seed in 1..=required as u8 {
        assert!(!state.is_prepared());
        state.add_prepare_message(prepare_from(seed, block.hash()));
    }
    assert!(state.is_prepared());
    assert_eq!(state.prepare_count(), required);
}

#[test_log::test]
fn commit_seals_are_extracted_from_received_messages() {
    let (mut state, _) = round_state(2);
    let block = block();
    let first = commit_from(2, block.hash());
    let second = commit_from(3, block.hash());

    assert!(state.set_proposed_block(proposal_from(1, &block)));
    state.add_commit_message(first.clone());
    assert!(!state.is_committed());
    state.add_commit_message(second.clone());

    assert!(state.is_committed());
    let seals = state.commit_seals();
    assert_eq!(seals.len(), 2);
    assert!(seals.contains(&first.commit_seal()));
    assert!(seals.contains(&second.commit_seal()));
}

#[test]
fn commits_are_validated_before_proposal_but_do_not_commit_the_round() {
    let (mut state, validator) = round_state(1);
    let block = block();

    state.add_commit_message(commit_from(2, block.hash()));
    assert_eq!(validator.commit_calls().len(), 1);
    assert_eq!(state.commit_count(), 1);
    assert!(!state.is_committed());

    assert!(state.set_proposed_block(proposal_from(1, &block)));
    assert!(state.is_committed());
}

#[test]
fn invalid_commit_is_discarded() {
    let (mut state, validator) = round_state(1);
    let block = block();
    let commit = commit_from(2, block.hash());
    validator.answer_commit(&commit, false);

    assert!(state.set_proposed_block(proposal_from(1, &block)));
    state.add_commit_message(commit);

    assert!(!state.is_committed());
    assert!(state.commit_seals().is_empty());
}

#[test]
fn duplicate_prepares_are_not_included_in_certificate() {
    let (mut state, validator) = round_state(2);
    let block = block();
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    let first = prepare_from(3, block.hash());
    let second = prepare_from(2, block.hash());
    state.add_prepare_message(first.clone());
    state.add_prepare_message(first.clone());
    let other_round = ConsensusRoundIdentifier::new(round().sequence_number, 4);
    state.add_prepare_message(message_factory(3).create_prepare(other_round, block.hash()).unwrap());
    state.add_prepare_message(second.clone());

    // Duplicates from an accepted author never reach the validator.
    assert_eq!(validator.prepare_calls(), vec![first.clone(), second.clone()]);

    let certificate = state.construct_prepared_certificate().expect("round is prepared");
    assert_eq!(certificate.prepares(), &[first.signed_payload().clone(), second.signed_payload().clone()]);
}

#[test]
fn duplicate_commits_count_once() {
    let (mut state, validator) = round_state(2);
    let block = block();
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    let commit = commit_from(2, block.hash());
    state.add_commit_message(commit.clone());
    state.add_commit_message(commit);

    assert_eq!(state.commit_count(), 1);
    assert!(!state.is_committed());
    assert_eq!(validator.commit_calls().len(), 1);
}

#[test]
fn identical_buffered_prepare_is_validated_once() {
    let (mut state, validator) = round_state(1);
    let block = block();
    let prepare = prepare_from(2, block.hash());

    state.add_prepare_message(prepare.clone());
    state.add_prepare_message(prepare);
    assert_eq!(state.buffered_prepare_count(), 1);

    assert!(state.set_proposed_block(proposal_from(1, &block)));
    assert_eq!(validator.prepare_calls().len(), 1);
    assert!(state.is_prepared());
}

#[test]
fn later_buffered_prepare_from_accepted_author_is_not_validated() {
    let (mut state, validator) = round_state(2);
    let block = block();
    let first = prepare_from(2, block.hash());
    let other_round = ConsensusRoundIdentifier::new(round().sequence_number, 6);
    let second = message_factory(2).create_prepare(other_round, block.hash()).unwrap();

    state.add_prepare_message(first.clone());
    state.add_prepare_message(second);
    assert_eq!(state.buffered_prepare_count(), 2);

    assert!(state.set_proposed_block(proposal_from(1, &block)));

    assert_eq!(validator.prepare_calls(), vec![first.clone()]);
    assert_eq!(state.prepare_count(), 1);
    assert!(!state.is_prepared());

    state.add_prepare_message(prepare_from(3, block.hash()));
    let certificate = state.construct_prepared_certificate().expect("round is prepared");
    assert_eq!(certificate.prepares()[0], first.signed_payload().clone());
    assert_eq!(certificate.prepares().len(), 2);
}

#[test]
fn rejected_buffered_prepare_does_not_block_a_later_one_from_same_author() {
    let (mut state, validator) = round_state(1);
    let block = block();
    let rejected = prepare_from(2, B256::repeat_byte(0xab));
    let accepted = prepare_from(2, block.hash());
    validator.answer_prepare(&rejected, false);

    state.add_prepare_message(rejected);
    state.add_prepare_message(accepted.clone());
    assert!(state.set_proposed_block(proposal_from(1, &block)));

    assert_eq!(validator.prepare_calls().len(), 2);
    assert!(state.is_prepared());
    let certificate = state.construct_prepared_certificate().expect("round is prepared");
    assert_eq!(certificate.prepares(), &[accepted.signed_payload().clone()]);
}

#[test_log::test]
fn votes_with_unrecoverable_author_are_dropped() {
    let (mut state, validator) = round_state(1);
    let block = block();

    state.add_prepare_message(unsigned_prepare(block.hash()));
    assert!(state.set_proposed_block(proposal_from(1, &block)));
    state.add_prepare_message(unsigned_prepare(block.hash()));

    assert!(validator.prepare_calls().is_empty());
    assert_eq!(state.prepare_count(), 0);
    assert!(!state.is_prepared());
}

#[test]
fn accepted_authors_are_queryable() {
    let (mut state, _) = round_state(2);
    let block = block();
    assert!(state.set_proposed_block(proposal_from(1, &block)));
    state.add_prepare_message(prepare_from(2, block.hash()));
    state.add_commit_message(commit_from(3, block.hash()));

    let two = message_factory(2).local_address();
    let three = message_factory(3).local_address();
    assert!(state.has_accepted_prepare_from(&two));
    assert!(!state.has_accepted_prepare_from(&three));
    assert!(state.has_accepted_commit_from(&three));
    assert!(!state.has_accepted_commit_from(&two));
}

#[test]
fn replaying_the_same_inputs_reproduces_the_same_certificate() {
    let block = block();
    let mut prepares: Vec<Prepare> = (2..=7).map(|seed| prepare_from(seed, block.hash())).collect();
    prepares.shuffle(&mut thread_rng());
    let (before, after) = prepares.split_at(3);

    let run = || {
        let (mut state, _) = round_state(4);
        for prepare in before {
            state.add_prepare_message(prepare.clone());
        }
        assert!(state.set_proposed_block(proposal_from(1, &block)));
        for prepare in after {
            state.add_prepare_message(prepare.clone());
        }
        state.construct_prepared_certificate()
    };

    let first = run().expect("round is prepared");
    let second = run().expect("round is prepared");
    assert_eq!(first, second);

    let expected: Vec<_> = prepares.iter().map(|prepare| prepare.signed_payload().clone()).collect();
    assert_eq!(first.prepares(), expected.as_slice());
}
