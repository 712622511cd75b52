use alloy_primitives::Address;

use crate::types::ConsensusRoundIdentifier;
use crate::validation::ValidatorSetView;

/// Fixed committee with round-robin proposer selection over the sorted
/// addresses, offset by height and round.
#[derive(Debug, Clone)]
pub struct MockValidatorSet {
    sorted_validators: Vec<Address>,
}

impl MockValidatorSet {
    pub fn new(validators: impl IntoIterator<Item = Address>) -> Self {
        let mut sorted_validators: Vec<Address> = validators.into_iter().collect();
        sorted_validators.sort();
        sorted_validators.dedup();
        assert!(!sorted_validators.is_empty(), "MockValidatorSet needs at least one validator");
        Self { sorted_validators }
    }
}

impl ValidatorSetView for MockValidatorSet {
    fn is_validator(&self, address: Address) -> bool {
        self.sorted_validators.binary_search(&address).is_ok()
    }

    fn get_proposer_for_round(&self, round: &ConsensusRoundIdentifier) -> Address {
        let offset = round.sequence_number.wrapping_add(u64::from(round.round_number));
        self.sorted_validators[(offset % self.sorted_validators.len() as u64) as usize]
    }
}
