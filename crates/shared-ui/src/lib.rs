pub mod class_names;
pub mod components;

#[cfg(test)]
mod test_support;

pub use class_names::class_names;
pub use components::*;
