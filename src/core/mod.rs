pub mod backup;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod identity;
pub mod log;
pub mod logic;
pub mod report;
