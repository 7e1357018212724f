pub mod auth;
pub mod cli;
mod de;
pub mod device;
pub mod pagination;
