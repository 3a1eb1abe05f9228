//! Data loading and saving

pub mod scene;

pub use scene::{SceneFile, SceneObjectData};
