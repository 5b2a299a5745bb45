pub mod init;
pub mod read;
pub mod write;
