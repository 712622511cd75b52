// crates/neura-qbft-round/src/messagedata/qbft_v1.rs

//! Wire codes for QBFT version 1 messages.

pub const PROPOSAL: u8 = 0x12;
pub const PREPARE: u8 = 0x13;
pub const COMMIT: u8 = 0x14;
pub const ROUND_CHANGE: u8 = 0x15;

pub fn message_name(code: u8) -> &'static str {
    match code {
        PROPOSAL => "Proposal",
        PREPARE => "Prepare",
        COMMIT => "Commit",
        ROUND_CHANGE => "RoundChange",
        _ => "<Invalid/Unknown QBFT Message Code>",
    }
}
