use crate::messagewrappers::{Commit, Prepare, Proposal};

/// Decides whether a vote may be counted in the current round.
///
/// A [`RoundState`](crate::statemachine::RoundState) asks its validator about
/// every message before counting it. Answers must be deterministic for a given
/// round context. Implementations may keep state (for instance the digest of
/// the accepted proposal) but the round state never depends on it.
pub trait MessageValidator {
    fn validate_proposal(&mut self, proposal: &Proposal) -> bool;

    /// Only called once the round has accepted a proposal.
    fn validate_prepare(&mut self, prepare: &Prepare) -> bool;

    fn validate_commit(&mut self, commit: &Commit) -> bool;
}

impl<T: MessageValidator + ?Sized> MessageValidator for Box<T> {
    fn validate_proposal(&mut self, proposal: &Proposal) -> bool {
        (**self).validate_proposal(proposal)
    }

    fn validate_prepare(&mut self, prepare: &Prepare) -> bool {
        (**self).validate_prepare(prepare)
    }

    fn validate_commit(&mut self, commit: &Commit) -> bool {
        (**self).validate_commit(commit)
    }
}

impl<T: MessageValidator + ?Sized> MessageValidator for &mut T {
    fn validate_proposal(&mut self, proposal: &Proposal) -> bool {
        (**self).validate_proposal(proposal)
    }

    fn validate_prepare(&mut self, prepare: &Prepare) -> bool {
        (**self).validate_prepare(prepare)
    }

    fn validate_commit(&mut self, commit: &Commit) -> bool {
        (**self).validate_commit(commit)
    }
}
