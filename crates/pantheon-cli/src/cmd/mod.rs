pub mod hooks;
pub mod init;
pub mod integrate;
pub mod quality;
pub mod rollback;
pub mod validate;
