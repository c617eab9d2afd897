pub mod book;
pub mod session;
