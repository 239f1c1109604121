pub mod hts_tst;
pub mod tx_ml;
