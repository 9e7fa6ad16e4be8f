pub mod gate;
pub mod init;
pub mod report;
