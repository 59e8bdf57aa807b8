pub mod components;
#[cfg(test)]
pub(crate) mod test_render;

pub use components::*;
