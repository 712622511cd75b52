use std::sync::Arc;

use crate::messagewrappers::{Commit, Prepare, Proposal};
use crate::error::QbftError;
use crate::types::{recover_address, ConsensusRoundIdentifier};
use crate::validation::MessageValidator;
use alloy_primitives::{Address, B256 as Hash};

/// Read-only view of the committee for the height being decided.
/// Computing it is the caller's job; the validator only asks questions.
pub trait ValidatorSetView: Send + Sync {
    fn is_validator(&self, address: Address) -> bool;

    fn get_proposer_for_round(&self, round: &ConsensusRoundIdentifier) -> Address;
}

/// Validates messages for one round against the committee and, for prepares
/// and commits, against the block of the proposal it accepted.
///
/// Re-proposals in later rounds carry round-change and prepare justifications;
/// checking those belongs to the round-change layer and is not done here.
pub struct SignedMessageValidator {
    round_identifier: ConsensusRoundIdentifier,
    validator_set: Arc<dyn ValidatorSetView>,
    accepted_proposal_digest: Option<Hash>,
}

impl SignedMessageValidator {
    pub fn new(round_identifier: ConsensusRoundIdentifier, validator_set: Arc<dyn ValidatorSetView>) -> Self {
        Self { round_identifier, validator_set, accepted_proposal_digest: None }
    }

    pub fn accepted_proposal_digest(&self) -> Option<Hash> {
        self.accepted_proposal_digest
    }

    /// Checks shared by every message type; returns the recovered author.
    fn validate_envelope(
        &self,
        kind: &str,
        round_identifier: &ConsensusRoundIdentifier,
        author: Result<Address, QbftError>,
    ) -> Option<Address> {
        if *round_identifier != self.round_identifier {
            log::warn!(
                "{kind} for round {round_identifier} does not target current round {}. Ignoring.",
                self.round_identifier
            );
            return None;
        }
        let author = match author {
            Ok(author) => author,
            Err(e) => {
                log::warn!("{kind} for round {round_identifier} has an unrecoverable author: {e}. Ignoring.");
                return None;
            }
        };
        if !self.validator_set.is_validator(author) {
            log::warn!("{kind} from non-validator {author}. Ignoring.");
            return None;
        }
        Some(author)
    }

    fn matches_accepted_digest(&self, kind: &str, author: Address, digest: Hash) -> bool {
        match self.accepted_proposal_digest {
            None => {
                log::warn!("{kind} from {author} arrived before any proposal was accepted. Ignoring.");
                false
            }
            Some(expected) if expected != digest => {
                log::warn!("{kind} from {author} is for digest {digest:?}, expected {expected:?}. Ignoring.");
                false
            }
            Some(_) => true,
        }
    }
}

impl MessageValidator for SignedMessageValidator {
    fn validate_proposal(&mut self, proposal: &Proposal) -> bool {
        let Some(author) = self.validate_envelope(
            "Proposal",
            proposal.round_identifier(),
            proposal.author(),
        ) else {
            return false;
        };

        let expected_proposer = self.validator_set.get_proposer_for_round(&self.round_identifier);
        if author != expected_proposer {
            log::warn!(
                "Proposal from unexpected proposer {author} for round {}. Expected {expected_proposer}. Ignoring.",
                self.round_identifier
            );
            return false;
        }

        let block = proposal.block();
        if block.number() != self.round_identifier.sequence_number {
            log::warn!(
                "Proposal block number {} does not match round sequence number {}.",
                block.number(),
                self.round_identifier.sequence_number
            );
            return false;
        }

        if self.round_identifier.round_number == 0
            && (!proposal.round_changes().is_empty() || !proposal.prepares().is_empty())
        {
            log::warn!("Proposal for round 0 from {author} carries a round-change justification. Ignoring.");
            return false;
        }

        let digest = block.hash();
        log::debug!("Proposal from {author} for round {} accepted, digest {digest:?}", self.round_identifier);
        self.accepted_proposal_digest = Some(digest);
        true
    }

    fn validate_prepare(&mut self, prepare: &Prepare) -> bool {
        let Some(author) = self.validate_envelope(
            "Prepare",
            prepare.round_identifier(),
            prepare.author(),
        ) else {
            return false;
        };
        self.matches_accepted_digest("Prepare", author, prepare.digest())
    }

    fn validate_commit(&mut self, commit: &Commit) -> bool {
        let Some(author) = self.validate_envelope(
            "Commit",
            commit.round_identifier(),
            commit.author(),
        ) else {
            return false;
        };
        if !self.matches_accepted_digest("Commit", author, commit.digest()) {
            return false;
        }

        match recover_address(&commit.commit_seal(), commit.digest()) {
            Ok(sealer) if sealer == author => true,
            Ok(sealer) => {
                log::warn!("Commit from {author} carries a seal signed by {sealer}. Ignoring.");
                false
            }
            Err(e) => {
                log::warn!("Commit from {author} carries an unrecoverable seal: {e}. Ignoring.");
                false
            }
        }
    }
}
