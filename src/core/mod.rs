pub mod add;
pub mod check;
pub mod config;
pub mod del;
pub mod list;
pub mod projects;
pub mod session;
pub mod template;
