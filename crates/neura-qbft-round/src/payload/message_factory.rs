use crate::error::QbftError;
use crate::messagewrappers::{Commit, Prepare, Proposal, RoundChange};
use crate::payload::{CommitPayload, PreparePayload, ProposalPayload, RoundChangePayload};
use crate::statemachine::PreparedCertificate;
use crate::types::{address_of, sign_prehash, ConsensusRoundIdentifier, NodeKey, QbftBlock, RlpSignature, SignedData};

use alloy_primitives::{Address, Signature, B256 as Hash};
use std::sync::Arc;

/// Builds messages signed by the local node key.
pub struct MessageFactory {
    node_key: Arc<NodeKey>,
    local_address: Address,
}

impl MessageFactory {
    pub fn new(node_key: Arc<NodeKey>) -> Self {
        let local_address = address_of(node_key.verifying_key());
        Self { node_key, local_address }
    }

    pub fn local_address(&self) -> Address {
        self.local_address
    }

    pub fn create_proposal(
        &self,
        round_identifier: ConsensusRoundIdentifier,
        proposed_block: QbftBlock,
        round_changes: Vec<SignedData<RoundChangePayload>>,
        prepares: Vec<SignedData<PreparePayload>>,
    ) -> Result<Proposal, QbftError> {
        let payload = ProposalPayload::new(round_identifier, proposed_block);
        let signed_payload = SignedData::sign(payload, &self.node_key)?;
        Ok(Proposal::new(signed_payload, round_changes, prepares))
    }

    pub fn create_prepare(&self, round_identifier: ConsensusRoundIdentifier, digest: Hash) -> Result<Prepare, QbftError> {
        let signed_payload = SignedData::sign(PreparePayload::new(round_identifier, digest), &self.node_key)?;
        Ok(Prepare::new(signed_payload))
    }

    pub fn create_commit(
        &self,
        round_identifier: ConsensusRoundIdentifier,
        digest: Hash,
        commit_seal: Signature,
    ) -> Result<Commit, QbftError> {
        let payload = CommitPayload::new(round_identifier, digest, RlpSignature(commit_seal));
        let signed_payload = SignedData::sign(payload, &self.node_key)?;
        Ok(Commit::new(signed_payload))
    }

    /// Signs a block digest directly. The seal ends up in the finalized block's
    /// extra data, so it is not wrapped in a payload.
    pub fn create_commit_seal(&self, digest: Hash) -> Result<Signature, QbftError> {
        sign_prehash(&self.node_key, digest)
    }

    /// Creates a RoundChange for `target_round`. When the node prepared a block
    /// earlier, the certificate's round, block and prepares travel with it.
    pub fn create_round_change(
        &self,
        target_round: ConsensusRoundIdentifier,
        prepared_certificate: Option<&PreparedCertificate>,
    ) -> Result<RoundChange, QbftError> {
        let metadata = prepared_certificate.map(PreparedCertificate::prepared_round_metadata);
        let signed_payload = SignedData::sign(RoundChangePayload::new(target_round, metadata), &self.node_key)?;

        let (prepared_block, prepares) = match prepared_certificate {
            Some(certificate) => (Some(certificate.block().clone()), certificate.prepares().to_vec()),
            None => (None, Vec::new()),
        };
        Ok(RoundChange::new(signed_payload, prepared_block, prepares))
    }
}
