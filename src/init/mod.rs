pub mod defaults;
pub mod initializer;
