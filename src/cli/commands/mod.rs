pub mod info;
pub mod init;
pub mod inspect;
pub mod strip;
