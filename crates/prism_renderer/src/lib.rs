//! Prism Renderer - CPU hit/miss ray caster.
//!
//! Casts one ray per pixel from the scene camera, resolves the nearest
//! intersection against the scene's spheres and writes a two-tone image:
//! hit color where something was hit, background everywhere else.
//!
//! Shading is not implemented. Materials and lights are carried into the
//! render-time data but do not affect pixel colors.

mod camera;
mod hittable;
mod material;
mod renderer;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitInformation, Hittable, Primitive, PrimitiveList};
pub use material::{Color, Material};
pub use renderer::{
    color_to_rgb, render, render_scene, render_to_file, ImageBuffer, RenderConfig, RenderError,
    RenderResult,
};
pub use sphere::Sphere;
pub use world::World;

/// Re-export common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3};
