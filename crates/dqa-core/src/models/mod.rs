pub mod checklist;
pub mod common;
pub mod table;
pub mod visit;
