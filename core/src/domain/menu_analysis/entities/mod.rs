pub mod dish_assessment;
pub mod errors;

pub use dish_assessment::*;
pub use errors::*;
