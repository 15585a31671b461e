pub mod bridge;
pub mod controller;
pub mod state;

#[cfg(test)]
mod tests;

pub use bridge::{NavigationBridge, Renderer};
pub use controller::TourController;
pub use state::{TourState, TourView};
