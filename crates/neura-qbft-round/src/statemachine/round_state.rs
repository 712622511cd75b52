use crate::messagewrappers::{Commit, Prepare, Proposal};
use crate::payload::PreparePayload;
use crate::statemachine::prepared_certificate::PreparedCertificate;
use crate::types::{ConsensusRoundIdentifier, QbftBlock, SignedData};
use crate::validation::MessageValidator;
use alloy_primitives::{Address, Signature};
use indexmap::IndexMap;

/// Vote tally for a single consensus round.
///
/// Owned and driven by exactly one round manager. Every ingestion call either
/// accepts the vote or silently drops it; rejection is a normal outcome for
/// late, duplicate or byzantine votes, so nothing here returns an error.
///
/// Prepares that arrive before the round has a proposal are buffered without
/// validation and only checked once a proposal is accepted. Accepted prepares
/// and commits are keyed by author and keep first-seen order, which makes the
/// prepared certificate deterministic for a given input sequence.
pub struct RoundState<V> {
    round_identifier: ConsensusRoundIdentifier,
    required_message_count: usize,
    validator: V,

    proposal: Option<Proposal>,
    // Set by the first call to set_proposed_block, whatever its outcome.
    proposal_slot_decided: bool,
    // Received before a proposal existed; never validated until one does.
    pending_prepares: Vec<Prepare>,
    prepare_messages: IndexMap<Address, Prepare>,
    commit_messages: IndexMap<Address, Commit>,
}

impl<V: MessageValidator> RoundState<V> {
    pub fn new(round_identifier: ConsensusRoundIdentifier, required_message_count: usize, validator: V) -> Self {
        Self {
            round_identifier,
            required_message_count,
            validator,
            proposal: None,
            proposal_slot_decided: false,
            pending_prepares: Vec::new(),
            prepare_messages: IndexMap::new(),
            commit_messages: IndexMap::new(),
        }
    }

    pub fn round_identifier(&self) -> &ConsensusRoundIdentifier {
        &self.round_identifier
    }

    pub fn required_message_count(&self) -> usize {
        self.required_message_count
    }

    /// Offers `proposal` as the round's proposal. Only the first offer is
    /// considered; buffered prepares are validated once each if it is accepted.
    ///
    /// Returns whether the proposal was accepted. A rejected proposal stores
    /// nothing, but the round will not consider any later proposal either.
    pub fn set_proposed_block(&mut self, proposal: Proposal) -> bool {
        log::trace!("RoundState ({}): set_proposed_block", self.round_identifier);
        if self.proposal_slot_decided {
            log::debug!("RoundState ({}): proposal slot already decided, ignoring", self.round_identifier);
            return false;
        }
        self.proposal_slot_decided = true;
        if !self.validator.validate_proposal(&proposal) {
            log::debug!("RoundState ({}): proposal rejected by validator", self.round_identifier);
            return false;
        }

        log::debug!(
            "RoundState ({}): accepted proposal for block {:?}",
            self.round_identifier,
            proposal.block().hash()
        );
        self.proposal = Some(proposal);

        let pending = std::mem::take(&mut self.pending_prepares);
        log::trace!("RoundState ({}): validating {} buffered prepares", self.round_identifier, pending.len());
        for prepare in pending {
            self.accept_prepare(prepare);
        }
        true
    }

    /// Records a Prepare vote. Without a proposal the vote is buffered and not
    /// validated; otherwise it is validated now and kept if valid. Once a
    /// proposal has been rejected nothing can drain the buffer, so the vote is
    /// dropped.
    pub fn add_prepare_message(&mut self, prepare: Prepare) {
        log::trace!("RoundState ({}): add_prepare_message", self.round_identifier);
        if self.proposal_slot_decided && self.proposal.is_none() {
            log::trace!("RoundState ({}): proposal was rejected, dropping prepare", self.round_identifier);
            return;
        }
        if self.proposal.is_none() {
            if !self.pending_prepares.contains(&prepare) {
                self.pending_prepares.push(prepare);
            }
            return;
        }
        self.accept_prepare(prepare);
    }

    /// Records a Commit vote. Commits are validated immediately whether or not
    /// a proposal is set.
    pub fn add_commit_message(&mut self, commit: Commit) {
        log::trace!("RoundState ({}): add_commit_message", self.round_identifier);
        let Some(author) = self.resolve_author(commit.author(), "commit") else {
            return;
        };
        if self.commit_messages.contains_key(&author) {
            log::trace!("RoundState ({}): duplicate commit from {author}", self.round_identifier);
            return;
        }
        if !self.validator.validate_commit(&commit) {
            log::debug!("RoundState ({}): commit from {author} rejected by validator", self.round_identifier);
            return;
        }
        self.commit_messages.insert(author, commit);
        log::debug!(
            "RoundState ({}): accepted commit from {author} ({}/{})",
            self.round_identifier,
            self.commit_messages.len(),
            self.required_message_count
        );
    }

    /// True once a proposal is set and enough distinct authors sent valid prepares.
    pub fn is_prepared(&self) -> bool {
        self.proposal.is_some() && self.prepare_messages.len() >= self.required_message_count
    }

    /// True once a proposal is set and enough distinct authors sent valid commits.
    ///
    /// Independent of [`is_prepared`](Self::is_prepared): a single-validator
    /// round commits without ever seeing a prepare.
    pub fn is_committed(&self) -> bool {
        self.proposal.is_some() && self.commit_messages.len() >= self.required_message_count
    }

    pub fn construct_prepared_certificate(&self) -> Option<PreparedCertificate> {
        if !self.is_prepared() {
            return None;
        }
        let proposal = self.proposal.as_ref()?;
        Some(PreparedCertificate::new(
            self.round_identifier,
            proposal.block().clone(),
            self.prepare_messages().cloned().collect(),
        ))
    }

    /// Commit seals of every accepted commit, one per author.
    pub fn commit_seals(&self) -> Vec<Signature> {
        self.commit_messages.values().map(Commit::commit_seal).collect()
    }

    pub fn proposal(&self) -> Option<&Proposal> {
        self.proposal.as_ref()
    }

    pub fn proposed_block(&self) -> Option<&QbftBlock> {
        self.proposal.as_ref().map(Proposal::block)
    }

    pub fn prepare_count(&self) -> usize {
        self.prepare_messages.len()
    }

    pub fn commit_count(&self) -> usize {
        self.commit_messages.len()
    }

    pub fn buffered_prepare_count(&self) -> usize {
        self.pending_prepares.len()
    }

    /// Signed payloads of accepted prepares, in first-accepted order.
    pub fn prepare_messages(&self) -> impl Iterator<Item = &SignedData<PreparePayload>> {
        self.prepare_messages.values().map(|prepare| prepare.signed_payload())
    }

    pub fn commit_messages(&self) -> impl Iterator<Item = &Commit> {
        self.commit_messages.values()
    }

    pub fn has_accepted_prepare_from(&self, author: &Address) -> bool {
        self.prepare_messages.contains_key(author)
    }

    pub fn has_accepted_commit_from(&self, author: &Address) -> bool {
        self.commit_messages.contains_key(author)
    }

    fn accept_prepare(&mut self, prepare: Prepare) {
        let Some(author) = self.resolve_author(prepare.author(), "prepare") else {
            return;
        };
        if self.prepare_messages.contains_key(&author) {
            log::trace!("RoundState ({}): duplicate prepare from {author}", self.round_identifier);
            return;
        }
        if !self.validator.validate_prepare(&prepare) {
            log::debug!("RoundState ({}): prepare from {author} rejected by validator", self.round_identifier);
            return;
        }
        self.prepare_messages.insert(author, prepare);
        log::debug!(
            "RoundState ({}): accepted prepare from {author} ({}/{})",
            self.round_identifier,
            self.prepare_messages.len(),
            self.required_message_count
        );
    }

    fn resolve_author<E: std::fmt::Display>(&self, author: Result<Address, E>, kind: &str) -> Option<Address> {
        author
            .map_err(|e| log::warn!("RoundState ({}): dropping {kind} with unrecoverable author: {e}", self.round_identifier))
            .ok()
    }
}
