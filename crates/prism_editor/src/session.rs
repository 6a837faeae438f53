//! The editing session driven by the panel UI.
//!
//! A `Session` owns the scene being edited and exposes the four top-level
//! actions: reset, load, save and render. Load and save never fail loudly:
//! a missing file or empty name leaves the scene in a safe state, logs a
//! warning and reports `false`.

use std::path::{Path, PathBuf};

use prism_core::{
    load_scene_file, save_scene_file, scene_path, EditorConfig, Scene, SceneFileError,
};
use prism_renderer::{render_to_file, Color, RenderConfig, RenderResult};

/// An editing session over one scene.
#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    config: EditorConfig,
    last_image: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::with_default_output("", config.default_output.clone()),
            config,
            last_image: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Direct access for create/replace/delete edits.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Image written by the last successful render.
    pub fn last_image(&self) -> Option<&Path> {
        self.last_image.as_deref()
    }

    /// Path of the scene file called `name`, if the name is usable.
    pub fn scene_file(&self, name: &str) -> Option<PathBuf> {
        scene_path(&self.config.scenes_dir, name, &self.config.scene_extension).ok()
    }

    /// Discard everything and start from the default scene.
    pub fn reset(&mut self) {
        self.scene.reset();
        log::info!("Scene reset");
    }

    /// Reset, then load the scene called `name`.
    ///
    /// Returns false (leaving the default scene) when the name is empty or
    /// the file cannot be read.
    pub fn load(&mut self, name: &str) -> bool {
        self.scene.name = name.to_string();

        let result = scene_path(&self.config.scenes_dir, name, &self.config.scene_extension)
            .and_then(|path| load_scene_file(&mut self.scene, path));

        match result {
            Ok(_) => true,
            Err(SceneFileError::EmptyName) => {
                self.scene.reset();
                log::warn!("Load skipped: no scene name given");
                false
            }
            Err(e) => {
                // load_scene_file reset before failing
                log::warn!("Load of {:?} skipped: {}", name, e);
                false
            }
        }
    }

    /// Save the scene as `name` in the configured format.
    ///
    /// Returns false when the name is empty or the file cannot be written.
    pub fn save(&mut self, name: &str) -> bool {
        let result = scene_path(&self.config.scenes_dir, name, &self.config.scene_extension)
            .and_then(|path| save_scene_file(&self.scene, path, self.config.format_version));

        match result {
            Ok(()) => {
                self.scene.name = name.to_string();
                true
            }
            Err(e) => {
                log::warn!("Save of {:?} skipped: {}", name, e);
                false
            }
        }
    }

    /// Render the scene to its output image.
    pub fn render(&mut self) -> RenderResult<PathBuf> {
        let config = RenderConfig {
            hit_color: Color::from_array(self.config.hit_color),
        };

        match render_to_file(&self.scene, &config) {
            Ok(path) => {
                self.last_image = Some(path.clone());
                Ok(path)
            }
            Err(e) => {
                log::warn!("Render failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{EntityId, FormatVersion, GeometryKind, LightKind, Shape, SphereShape};
    use prism_math::Vec3;
    use std::fs;

    fn session_in(tag: &str) -> (Session, PathBuf) {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = std::env::temp_dir().join(format!("prism_editor_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = EditorConfig {
            scenes_dir: dir.join("scenes"),
            default_output: dir.join("out.bmp").to_string_lossy().into_owned(),
            ..Default::default()
        };
        (Session::new(config), dir)
    }

    #[test]
    fn test_empty_name_is_noop() {
        let (mut session, dir) = session_in("empty");
        session.scene_mut().create_sphere();

        assert!(!session.save(""));
        assert!(!dir.join("scenes").exists());

        assert!(!session.load(""));
        assert!(session.scene().geometry().is_empty());
    }

    #[test]
    fn test_load_missing_gives_default_state() {
        let (mut session, dir) = session_in("missing");
        session.scene_mut().create_sphere();
        session.scene_mut().create_light(LightKind::Spot);

        assert!(!session.load("does_not_exist"));

        let scene = session.scene();
        assert_eq!(scene.materials().len(), 1);
        assert_eq!(scene.camera().id, EntityId(1));
        assert_eq!(scene.camera().resolution(), (640, 480));
        assert!(scene.geometry().is_empty());
        assert!(scene.lights().is_empty());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_load_cycle() {
        let (mut session, dir) = session_in("cycle");
        let id = session.scene_mut().create_sphere();
        if let Some(g) = session.scene_mut().geometry_mut(id) {
            g.shape = Shape::Sphere(SphereShape {
                center: Vec3::new(0.0, 0.0, -5.0),
                radius: 2.0,
            });
        }
        session.scene_mut().create_light(LightKind::Directional);

        assert!(session.save("cycle"));
        let file = session.scene_file("cycle").unwrap();
        assert!(file.ends_with("cycle.p3"));
        assert!(file.is_file());

        session.reset();
        assert!(session.scene().geometry().is_empty());

        assert!(session.load("cycle"));
        assert_eq!(session.scene().name, "cycle");
        assert_eq!(session.scene().geometry().len(), 1);
        assert_eq!(session.scene().lights().len(), 1);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_legacy_save_format() {
        let (session, dir) = session_in("legacy");
        let mut config = session.config().clone();
        config.format_version = FormatVersion::Legacy;
        let mut session = Session::new(config);
        session.scene_mut().create_light(LightKind::Spot);

        assert!(session.save("legacy"));
        let text = fs::read_to_string(session.scene_file("legacy").unwrap()).unwrap();
        assert!(!text.contains("format_version"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_render_records_last_image() {
        let (mut session, dir) = session_in("render");
        fs::create_dir_all(&dir).unwrap();
        session.scene_mut().camera_mut().width = 8;
        session.scene_mut().camera_mut().height = 8;
        session.scene_mut().create_geometry(GeometryKind::Sphere);

        assert!(session.last_image().is_none());
        let path = session.render().unwrap();
        assert!(path.is_file());
        assert_eq!(session.last_image(), Some(path.as_path()));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_render_failure_is_reported() {
        let (mut session, _dir) = session_in("render_fail");
        session.scene_mut().output.clear();
        assert!(session.render().is_err());
        assert!(session.last_image().is_none());
    }
}
