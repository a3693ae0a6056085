pub mod cli;
pub mod compare;
pub mod config;
pub mod matcher;
pub mod orb;
pub mod score;
pub mod status;
pub mod utils;
pub mod watcher;

pub use compare::{Compare, Comparator, Outcome};
pub use watcher::{Job, Watcher};
