//! Create Point UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: CreatePointState, pure view state and update rules
//! - model.rs: API functions
//! - view_model.rs: CreatePointViewModel with commands
//! - view.rs: Main component CreatePoint

mod model;
mod state;
mod view;
mod view_model;

pub use view::CreatePoint;
