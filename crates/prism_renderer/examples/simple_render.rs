//! Simple hit/miss render example.
//!
//! Builds a row of spheres in front of the camera and writes `simple.bmp`.

use prism_core::{Scene, Shape, SphereShape};
use prism_renderer::{render_to_file, Color, RenderConfig, Vec3};

fn main() {
    println!("Prism Ray Caster - Simple Example");
    println!("=================================");

    let mut scene = build_scene();
    scene.output = "simple.bmp".to_string();

    let config = RenderConfig {
        hit_color: Color::new(1.0, 1.0, 1.0),
    };

    let camera = scene.camera();
    println!("Rendering {}x{}...", camera.width, camera.height);

    let start = std::time::Instant::now();
    match render_to_file(&scene, &config) {
        Ok(path) => println!("Rendered in {:?}, saved to {}", start.elapsed(), path.display()),
        Err(e) => eprintln!("Render failed: {}", e),
    }
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple");
    {
        let camera = scene.camera_mut();
        camera.width = 320;
        camera.height = 240;
        camera.background = Color::new(0.1, 0.1, 0.2);
    }

    // Rays leave the camera against its forward axis, so place the row at -Z.
    for k in 0..5 {
        let id = scene.create_sphere();
        if let Some(geometry) = scene.geometry_mut(id) {
            geometry.shape = Shape::Sphere(SphereShape {
                center: Vec3::new(-4.0 + 2.0 * k as f32, 0.0, -12.0),
                radius: 0.75,
            });
        }
    }

    println!("Created {} spheres", scene.geometry().len());
    scene
}
