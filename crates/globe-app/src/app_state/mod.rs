//! Host side of the globe: owns the marker store, the mounted globe and
//! the presence feed, and drives them from one event loop.

mod core;
mod init;
mod presence_handlers;
mod run;

pub use run::run;
