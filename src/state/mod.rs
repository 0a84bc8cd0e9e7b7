mod manager;
mod persistence;

pub use manager::JournalManager;
pub use persistence::{load_journal, save_journal, Journal};
