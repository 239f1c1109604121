pub mod forms;
pub mod health;
pub mod hts_tst;
pub mod tx_ml;
