pub mod qbft_v1;
