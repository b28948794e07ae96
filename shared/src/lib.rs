pub mod encoding;
pub mod protocol;
pub mod signature;
