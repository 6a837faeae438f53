//! Editable scene entities.
//!
//! These are the values the editor mutates and the scene file stores. The
//! renderer converts them into its own immutable primitives before a render.

use std::fmt;

use prism_math::Vec3;

/// Color type alias (RGB, nominally 0-1 but never clamped here)
pub type Color = Vec3;

/// Stable identity of a scene entity.
///
/// Ids survive a change of kind (see `Scene::replace_geometry`) and are never
/// handed out twice between resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source owned by a scene.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Hand out the next id.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Restart numbering at zero.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// The id the next call to `allocate` will return.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next)
    }
}

/// User-facing camera parameters.
///
/// Only the inputs are stored; the orthonormal frame is derived at render
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub id: EntityId,
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    /// Half of the vertical field of view, in degrees
    pub half_vfov: f32,
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub max_depth: u32,
}

impl Camera {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: Vec3::ZERO,
            forward: Vec3::Z,
            up: Vec3::Y,
            half_vfov: 45.0,
            width: 640,
            height: 480,
            background: Color::ZERO,
            max_depth: 5,
        }
    }

    /// Resolution as `(width, height)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Phong-style surface description.
///
/// Materials are shared: geometry refers to them by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: EntityId,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub transmissive: Color,
    pub phong: f32,
    pub ior: f32,
}

impl Material {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            transmissive: Color::ZERO,
            phong: 0.0,
            ior: 0.0,
        }
    }
}

/// Discriminant used when creating or replacing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Sphere,
}

/// Sphere parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    pub center: Vec3,
    pub radius: f32,
}

impl Default for SphereShape {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

/// The concrete shape of a geometry entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(SphereShape),
}

impl Shape {
    /// A default-constructed shape of the given kind.
    pub fn new(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Sphere => Shape::Sphere(SphereShape::default()),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Sphere(_) => GeometryKind::Sphere,
        }
    }
}

/// A shape bound to a material.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub id: EntityId,
    /// Id of the (shared) material in the owning scene
    pub material: EntityId,
    pub shape: Shape,
}

impl Geometry {
    pub fn new(id: EntityId, kind: GeometryKind, material: EntityId) -> Self {
        Self {
            id,
            material,
            shape: Shape::new(kind),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        self.shape.kind()
    }
}

/// Discriminant used when creating or replacing lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Point,
    Spot,
    Directional,
}

/// Variant-specific light parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    Ambient,
    Point {
        position: Vec3,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        angle1: f32,
        angle2: f32,
    },
    Directional {
        direction: Vec3,
    },
}

impl LightSource {
    pub fn new(kind: LightKind) -> Self {
        match kind {
            LightKind::Ambient => LightSource::Ambient,
            LightKind::Point => LightSource::Point {
                position: Vec3::ZERO,
            },
            LightKind::Spot => LightSource::Spot {
                position: Vec3::ZERO,
                direction: Vec3::ZERO,
                angle1: 0.0,
                angle2: 0.0,
            },
            LightKind::Directional => LightSource::Directional {
                direction: Vec3::ZERO,
            },
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            LightSource::Ambient => LightKind::Ambient,
            LightSource::Point { .. } => LightKind::Point,
            LightSource::Spot { .. } => LightKind::Spot,
            LightSource::Directional { .. } => LightKind::Directional,
        }
    }
}

/// A colored light of some kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: EntityId,
    pub color: Color,
    pub source: LightSource,
}

impl Light {
    pub fn new(id: EntityId, kind: LightKind) -> Self {
        Self {
            id,
            color: Color::ZERO,
            source: LightSource::new(kind),
        }
    }

    pub fn kind(&self) -> LightKind {
        self.source.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_allocator_is_monotonic() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.allocate(), EntityId(0));
        assert_eq!(ids.allocate(), EntityId(1));
        assert_eq!(ids.peek(), EntityId(2));

        ids.reset();
        assert_eq!(ids.allocate(), EntityId(0));
    }

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::new(EntityId(1));
        assert_eq!(camera.forward, Vec3::Z);
        assert_eq!(camera.up, Vec3::Y);
        assert_eq!(camera.half_vfov, 45.0);
        assert_eq!(camera.resolution(), (640, 480));
        assert_eq!(camera.max_depth, 5);
    }

    #[test]
    fn test_sphere_default_radius() {
        let geometry = Geometry::new(EntityId(3), GeometryKind::Sphere, EntityId(0));
        match geometry.shape {
            Shape::Sphere(sphere) => {
                assert_eq!(sphere.center, Vec3::ZERO);
                assert_eq!(sphere.radius, 1.0);
            }
        }
        assert_eq!(geometry.kind(), GeometryKind::Sphere);
    }

    #[test]
    fn test_light_kinds() {
        for kind in [
            LightKind::Ambient,
            LightKind::Point,
            LightKind::Spot,
            LightKind::Directional,
        ] {
            let light = Light::new(EntityId(7), kind);
            assert_eq!(light.kind(), kind);
            assert_eq!(light.color, Color::ZERO);
        }
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "#42");
    }
}
