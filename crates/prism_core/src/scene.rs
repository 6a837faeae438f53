//! The editable scene aggregate.
//!
//! A `Scene` owns one camera and the material, geometry and light
//! collections, together with the id counter that names them. Collections
//! are small and kept in creation order, so lookups are linear scans.

use thiserror::Error;

use crate::entity::{
    Camera, EntityId, Geometry, GeometryKind, IdAllocator, Light, LightKind, Material,
};

/// Output image written by a render unless the scene names another one.
pub const DEFAULT_OUTPUT: &str = "raytraced.bmp";

/// Errors reported by scene edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("{kind} {id} not found in scene")]
    NotFound { kind: &'static str, id: EntityId },
}

/// Result type for scene edits.
pub type SceneResult<T> = Result<T, SceneError>;

/// A complete editable scene.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (the file stem under the scenes directory)
    pub name: String,

    /// Where a render writes its image
    pub output: String,

    camera: Camera,
    materials: Vec<Material>,
    geometry: Vec<Geometry>,
    lights: Vec<Light>,
    ids: IdAllocator,
    default_output: String,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("")
    }
}

impl Scene {
    /// Create a scene in its reset state.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_default_output(name, DEFAULT_OUTPUT)
    }

    /// Create a scene whose resets restore `default_output` as the image path.
    pub fn with_default_output(name: impl Into<String>, default_output: impl Into<String>) -> Self {
        let mut ids = IdAllocator::default();
        let materials = vec![Material::new(ids.allocate())];
        let camera = Camera::new(ids.allocate());
        let default_output = default_output.into();

        Self {
            name: name.into(),
            output: default_output.clone(),
            camera,
            materials,
            geometry: Vec::new(),
            lights: Vec::new(),
            ids,
            default_output,
        }
    }

    /// Discard every entity and return to one default material and a
    /// default camera. Ids restart at zero; the name is kept.
    pub fn reset(&mut self) {
        self.ids.reset();
        self.geometry.clear();
        self.lights.clear();
        self.materials.clear();
        self.materials.push(Material::new(self.ids.allocate()));
        self.camera = Camera::new(self.ids.allocate());
        self.output = self.default_output.clone();
    }

    /// The id the next created entity will receive.
    pub fn next_id(&self) -> EntityId {
        self.ids.peek()
    }

    // --- Camera ---

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // --- Materials ---

    /// Create a default material. It becomes the material bound to
    /// geometry created afterwards.
    pub fn create_material(&mut self) -> EntityId {
        let id = self.ids.allocate();
        self.materials.push(Material::new(id));
        id
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn material(&self, id: EntityId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn material_mut(&mut self, id: EntityId) -> Option<&mut Material> {
        self.materials.iter_mut().find(|m| m.id == id)
    }

    /// Resolve the material a geometry is bound to.
    pub fn material_for(&self, geometry: &Geometry) -> Option<&Material> {
        self.material(geometry.material)
    }

    /// The most recently created material, creating one if none exist.
    fn current_material(&mut self) -> EntityId {
        match self.materials.last() {
            Some(material) => material.id,
            None => self.create_material(),
        }
    }

    /// Give a geometry its own copy of its material.
    ///
    /// Returns the id of the new material. Other geometry sharing the old
    /// material keeps it.
    pub fn make_material_unique(&mut self, geometry_id: EntityId) -> SceneResult<EntityId> {
        let index = self.geometry_index(geometry_id)?;
        let source = self.geometry[index].material;
        let mut copy = match self.material(source) {
            Some(material) => material.clone(),
            None => {
                log::warn!(
                    "Material {} of geometry {} is missing, using defaults",
                    source,
                    geometry_id
                );
                Material::new(source)
            }
        };

        copy.id = self.ids.allocate();
        let new_id = copy.id;
        self.materials.push(copy);
        self.geometry[index].material = new_id;
        Ok(new_id)
    }

    // --- Geometry ---

    /// Create geometry of the given kind bound to the current material.
    pub fn create_geometry(&mut self, kind: GeometryKind) -> EntityId {
        let id = self.ids.allocate();
        let material = self.current_material();
        self.geometry.push(Geometry::new(id, kind, material));
        id
    }

    /// Shorthand for `create_geometry(GeometryKind::Sphere)`.
    pub fn create_sphere(&mut self) -> EntityId {
        self.create_geometry(GeometryKind::Sphere)
    }

    pub fn geometry(&self) -> &[Geometry] {
        &self.geometry
    }

    pub fn geometry_by_id(&self, id: EntityId) -> Option<&Geometry> {
        self.geometry.iter().find(|g| g.id == id)
    }

    pub fn geometry_mut(&mut self, id: EntityId) -> Option<&mut Geometry> {
        self.geometry.iter_mut().find(|g| g.id == id)
    }

    fn geometry_index(&self, id: EntityId) -> SceneResult<usize> {
        self.geometry
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| not_found("Geometry", id))
    }

    /// Swap the geometry with `id` for a fresh one of `kind`, keeping the id
    /// and position. The replacement binds the current material.
    pub fn replace_geometry(&mut self, id: EntityId, kind: GeometryKind) -> SceneResult<()> {
        let index = self.geometry_index(id)?;
        let material = self.current_material();
        self.geometry[index] = Geometry::new(id, kind, material);
        Ok(())
    }

    /// Remove the geometry with `id`; the rest keep their order.
    pub fn delete_geometry(&mut self, id: EntityId) -> SceneResult<Geometry> {
        let index = self.geometry_index(id)?;
        Ok(self.geometry.remove(index))
    }

    // --- Lights ---

    pub fn create_light(&mut self, kind: LightKind) -> EntityId {
        let id = self.ids.allocate();
        self.lights.push(Light::new(id, kind));
        id
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light(&self, id: EntityId) -> Option<&Light> {
        self.lights.iter().find(|l| l.id == id)
    }

    pub fn light_mut(&mut self, id: EntityId) -> Option<&mut Light> {
        self.lights.iter_mut().find(|l| l.id == id)
    }

    fn light_index(&self, id: EntityId) -> SceneResult<usize> {
        self.lights
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| not_found("Light", id))
    }

    /// Swap the light with `id` for a fresh one of `kind`, keeping the id
    /// and position.
    pub fn replace_light(&mut self, id: EntityId, kind: LightKind) -> SceneResult<()> {
        let index = self.light_index(id)?;
        self.lights[index] = Light::new(id, kind);
        Ok(())
    }

    /// Remove the light with `id`; the rest keep their order.
    pub fn delete_light(&mut self, id: EntityId) -> SceneResult<Light> {
        let index = self.light_index(id)?;
        Ok(self.lights.remove(index))
    }

    /// Number of entities of every kind, camera included.
    pub fn entity_count(&self) -> usize {
        1 + self.materials.len() + self.geometry.len() + self.lights.len()
    }
}

fn not_found(kind: &'static str, id: EntityId) -> SceneError {
    log::warn!("{} {} not found in scene", kind, id);
    SceneError::NotFound { kind, id }
}
