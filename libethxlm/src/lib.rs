pub mod accounts;
pub mod commitment;
pub mod helpers;
pub mod hex_string;
pub mod ids;
pub mod state;
pub mod storage;
pub mod timelocks;
