use std::sync::{Arc, Mutex};

use crate::messagewrappers::{Commit, Prepare, Proposal};
use crate::validation::MessageValidator;

/// One call made into a [`MockMessageValidator`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationCall {
    Proposal(Proposal),
    Prepare(Prepare),
    Commit(Commit),
}

struct ScriptedAnswers {
    proposal_default: bool,
    prepare_default: bool,
    commit_default: bool,
    proposals: Vec<(Proposal, bool)>,
    prepares: Vec<(Prepare, bool)>,
    commits: Vec<(Commit, bool)>,
    calls: Vec<ValidationCall>,
}

impl Default for ScriptedAnswers {
    fn default() -> Self {
        Self {
            proposal_default: true,
            prepare_default: true,
            commit_default: true,
            proposals: Vec::new(),
            prepares: Vec::new(),
            commits: Vec::new(),
            calls: Vec::new(),
        }
    }
}

fn scripted<M: PartialEq>(answers: &[(M, bool)], message: &M, default: bool) -> bool {
    answers.iter().find(|(scripted, _)| scripted == message).map_or(default, |(_, answer)| *answer)
}

/// Scriptable validator. Clones share their answers and call log, so a test
/// keeps one handle and gives the other to the round state.
///
/// Accepts everything unless told otherwise.
#[derive(Clone, Default)]
pub struct MockMessageValidator {
    state: Arc<Mutex<ScriptedAnswers>>,
}

impl MockMessageValidator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn rejecting_all() -> Self {
        let mock = Self::new();
        mock.set_defaults(false, false, false);
        mock
    }

    pub fn set_defaults(&self, proposal: bool, prepare: bool, commit: bool) {
        let mut state = self.state.lock().unwrap();
        state.proposal_default = proposal;
        state.prepare_default = prepare;
        state.commit_default = commit;
    }

    pub fn answer_proposal(&self, proposal: &Proposal, answer: bool) {
        self.state.lock().unwrap().proposals.push((proposal.clone(), answer));
    }

    pub fn answer_prepare(&self, prepare: &Prepare, answer: bool) {
        self.state.lock().unwrap().prepares.push((prepare.clone(), answer));
    }

    pub fn answer_commit(&self, commit: &Commit, answer: bool) {
        self.state.lock().unwrap().commits.push((commit.clone(), answer));
    }

    pub fn calls(&self) -> Vec<ValidationCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn proposal_calls(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, ValidationCall::Proposal(_))).count()
    }

    pub fn prepare_calls(&self) -> Vec<Prepare> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ValidationCall::Prepare(prepare) => Some(prepare),
                _ => None,
            })
            .collect()
    }

    pub fn commit_calls(&self) -> Vec<Commit> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ValidationCall::Commit(commit) => Some(commit),
                _ => None,
            })
            .collect()
    }
}

impl MessageValidator for MockMessageValidator {
    fn validate_proposal(&mut self, proposal: &Proposal) -> bool {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ValidationCall::Proposal(proposal.clone()));
        let answer = scripted(&state.proposals, proposal, state.proposal_default);
        log::debug!("MockMessageValidator: proposal for round {} -> {answer}", proposal.round_identifier());
        answer
    }

    fn validate_prepare(&mut self, prepare: &Prepare) -> bool {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ValidationCall::Prepare(prepare.clone()));
        let answer = scripted(&state.prepares, prepare, state.prepare_default);
        log::debug!("MockMessageValidator: prepare for round {} -> {answer}", prepare.round_identifier());
        answer
    }

    fn validate_commit(&mut self, commit: &Commit) -> bool {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ValidationCall::Commit(commit.clone()));
        let answer = scripted(&state.commits, commit, state.commit_default);
        log::debug!("MockMessageValidator: commit for round {} -> {answer}", commit.round_identifier());
        answer
    }
}
