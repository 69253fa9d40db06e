pub mod init;
pub mod open;
pub mod projects;
pub mod route;
