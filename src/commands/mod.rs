//! Command implementations for the relcheck CLI

mod check;
mod init;
mod remind;

pub use check::check;
pub use init::init;
pub use remind::remind;
