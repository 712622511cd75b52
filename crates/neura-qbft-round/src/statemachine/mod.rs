pub mod prepared_certificate;
pub mod round_state;

#[cfg(test)]
mod round_state_tests;

pub use prepared_certificate::PreparedCertificate;
pub use round_state::RoundState;
