//! History domain module

mod history_item;

pub use history_item::HistoryItem;
