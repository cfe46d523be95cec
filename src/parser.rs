pub mod animations;
pub mod scene;

pub use animations::extract_animations;
pub use scene::read_scene_reference;
