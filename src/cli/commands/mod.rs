mod command_result;
pub mod generate;
pub mod helper;
pub mod init;
pub mod lint;
pub mod prune;
pub mod rekey;
pub mod sort;
pub mod usage;

pub use command_result::*;
