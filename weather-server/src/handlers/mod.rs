pub mod chat;
pub mod page;
pub mod weather;
