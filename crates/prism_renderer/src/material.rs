//! Render-time material values.
//!
//! At render time a material is just constant values copied out of the
//! scene; nothing refers back to the editable entity.

use prism_core::entity;

/// Color type alias (RGB values typically 0-1)
pub type Color = prism_core::Color;

/// Phong material constants carried by each primitive.
///
/// The hit/miss renderer does not shade, so these are carried but not read
/// when coloring pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub transmissive: Color,
    pub phong: f32,
    pub ior: f32,
}

impl From<&entity::Material> for Material {
    fn from(from: &entity::Material) -> Self {
        Self {
            ambient: from.ambient,
            diffuse: from.diffuse,
            specular: from.specular,
            transmissive: from.transmissive,
            phong: from.phong,
            ior: from.ior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::EntityId;

    #[test]
    fn test_from_scene_material() {
        let mut source = entity::Material::new(EntityId(0));
        source.diffuse = Color::new(0.2, 0.4, 0.6);
        source.phong = 12.0;
        source.ior = 1.33;

        let material = Material::from(&source);
        assert_eq!(material.diffuse, Color::new(0.2, 0.4, 0.6));
        assert_eq!(material.phong, 12.0);
        assert_eq!(material.ior, 1.33);
        assert_eq!(material.ambient, Color::ZERO);
    }
}
