//! CLI command handlers.

mod fetch;
mod list;

pub use fetch::run_fetch;
#[cfg(test)]
pub(crate) use fetch::describe;
pub use list::run_list;
