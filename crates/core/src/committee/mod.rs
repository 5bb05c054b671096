mod actions;
mod operations;
mod types;

pub use actions::StoreAction;
pub use operations::filter_special;
pub use types::Committee;
