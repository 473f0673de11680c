pub mod config;
pub mod countdown;
pub mod error;
pub mod find_dups;

pub use countdown::{Countdown, CountdownQueue, CountdownReport, Pause, ThreadPause};
pub use error::{CodesError, Result};
pub use find_dups::{duplicates, find_dups, DistinctWords, DupsReport};
