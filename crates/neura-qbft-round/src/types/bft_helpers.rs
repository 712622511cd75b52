//! Quorum arithmetic for a validator set of size `n`.

/// Maximum number of faulty validators tolerated by `n` validators: `(n - 1) / 3`.
pub fn byzantine_fault_tolerance(validator_count: usize) -> usize {
    validator_count.saturating_sub(1) / 3
}

/// `ceil(2n / 3)`, the quorum Besu-compatible QBFT networks use.
pub fn calculate_required_validator_quorum(validator_count: usize) -> usize {
    (2 * validator_count).div_ceil(3)
}

/// `2f + 1` with `f = (n - 1) / 3`.
pub fn two_f_plus_one(validator_count: usize) -> usize {
    2 * byzantine_fault_tolerance(validator_count) + 1
}
