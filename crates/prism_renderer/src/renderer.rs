//! Hit/miss ray casting and raster output.
//!
//! One ray per pixel. A pixel whose ray hits any primitive is painted with
//! the hit color; every other pixel keeps the camera background. Materials
//! and lights are not consulted.

use std::path::{Path, PathBuf};
use std::time::Instant;

use prism_core::Scene;
use prism_math::Interval;
use thiserror::Error;

use crate::{Camera, Color, PrimitiveList, World};

/// Errors that can occur while producing an image file.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No output image path set")]
    NoOutputPath,

    #[error("Cannot render an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color written where a ray hits geometry
    pub hit_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hit_color: Color::ONE,
        }
    }
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |x: f32| (255.0 * Interval::UNIT.clamp(x)).round() as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }

    /// Write the buffer to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }

        image::save_buffer(
            path.as_ref(),
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}

/// Cast one ray per pixel and record hit or miss.
pub fn render(camera: &Camera, world: &PrimitiveList, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height, camera.background);

    for i in 0..camera.image_width {
        for j in 0..camera.image_height {
            let ray = camera.get_ray(i, j);
            if world.find_nearest(&ray).is_some() {
                image.set(i, j, config.hit_color);
            }
        }
    }

    image
}

/// Render a scene into a buffer.
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let world = World::from_scene(scene);
    render(&world.camera, &world.primitives, config)
}

/// Render a scene and write it to the scene's output path.
///
/// Returns the path written.
pub fn render_to_file(scene: &Scene, config: &RenderConfig) -> RenderResult<PathBuf> {
    if scene.output.is_empty() {
        return Err(RenderError::NoOutputPath);
    }

    let start = Instant::now();
    let image = render_scene(scene, config);
    log::info!(
        "Rendered {}x{} ({} primitives) in {:?}",
        image.width,
        image.height,
        scene.geometry().len(),
        start.elapsed()
    );

    let path = PathBuf::from(&scene.output);
    image.save(&path)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
