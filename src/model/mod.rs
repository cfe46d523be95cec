mod component;
mod scene;

pub use component::*;
pub use scene::*;
