//! sea-orm entities for the inventory database.

pub mod item_logs;
pub mod items;
pub mod users;
