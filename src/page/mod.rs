pub mod compile;
pub mod locator;
pub mod model;
