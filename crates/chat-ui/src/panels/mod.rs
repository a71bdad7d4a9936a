pub mod chat;
pub mod composer;
pub mod header;
