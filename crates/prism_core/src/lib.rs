//! Prism Core - Editable scene model and scene file format.
//!
//! This crate provides:
//!
//! - **Scene model**: `Scene` with its camera, materials, geometry and lights
//! - **Scene files**: the keyed text codec and load/save helpers
//! - **Configuration**: `EditorConfig`
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_scene_file, Scene};
//!
//! let mut scene = Scene::new("spheres");
//! load_scene_file(&mut scene, "scenes/spheres.p3")?;
//! println!("Loaded {} spheres", scene.geometry().len());
//! ```

pub mod codec;
pub mod config;
pub mod entity;
pub mod file;
pub mod scene;

// Re-export commonly used types
pub use codec::{decode_scene, encode_scene, FormatVersion};
pub use config::{ConfigError, EditorConfig};
pub use entity::{
    Camera, Color, EntityId, Geometry, GeometryKind, Light, LightKind, LightSource, Material,
    Shape, SphereShape,
};
pub use file::{load_scene_file, save_scene_file, scene_path, SceneFileError, SceneFileResult};
pub use scene::{Scene, SceneError, SceneResult, DEFAULT_OUTPUT};
