pub mod api;
pub mod health;
pub mod state;
pub mod store;
pub mod ui;
pub mod workflow;

#[cfg(test)]
mod fake;
