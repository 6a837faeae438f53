//! Prism command line.
//!
//! Run with: cargo run -- [--config prism.json] <command> <scene>

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use prism_core::{EditorConfig, Shape, SphereShape};
use prism_editor::Session;
use prism_math::Vec3;

const USAGE: &str = "\
Usage: prism [--config <file>] <command>

Commands:
  render <scene>            Load a scene and render it to its output image
  info <scene>              Print a summary of a scene
  new <scene> [spheres]     Create a scene with a row of spheres and save it
  resave <scene>            Load a scene and save it in the current format";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Render(String),
    Info(String),
    New { name: String, spheres: usize },
    Resave(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut config = None;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().context("--config needs a file path")?;
            config = Some(PathBuf::from(path));
        } else {
            rest.push(arg.as_str());
        }
    }

    let command = match rest.as_slice() {
        ["render", name] => Command::Render(name.to_string()),
        ["info", name] => Command::Info(name.to_string()),
        ["resave", name] => Command::Resave(name.to_string()),
        ["new", name] => Command::New {
            name: name.to_string(),
            spheres: 3,
        },
        ["new", name, count] => Command::New {
            name: name.to_string(),
            spheres: count
                .parse()
                .with_context(|| format!("Invalid sphere count {:?}", count))?,
        },
        [] => bail!("No command given"),
        other => bail!("Unrecognised arguments: {}", other.join(" ")),
    };

    Ok(Args { config, command })
}

fn load_config(path: Option<&PathBuf>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}

fn load_existing(session: &mut Session, name: &str) -> Result<()> {
    if !session.load(name) {
        bail!("Could not load scene {:?}", name);
    }
    Ok(())
}

/// Reset and lay `count` unit spheres out in a row ten units in front of the camera.
fn populate(session: &mut Session, count: usize) {
    session.reset();
    let scene = session.scene_mut();

    let material = scene.create_material();
    if let Some(material) = scene.material_mut(material) {
        material.ambient = Vec3::splat(0.1);
        material.diffuse = Vec3::new(0.8, 0.3, 0.3);
    }

    let camera = scene.camera();
    // Rays leave against the forward vector.
    let center = camera.position - 10.0 * camera.forward.normalize_or_zero();
    let spacing = 2.5;
    let first = -(count.saturating_sub(1) as f32) * spacing / 2.0;

    for k in 0..count {
        let id = scene.create_sphere();
        if let Some(geometry) = scene.geometry_mut(id) {
            geometry.shape = Shape::Sphere(SphereShape {
                center: center + Vec3::X * (first + k as f32 * spacing),
                radius: 1.0,
            });
        }
    }
}

fn print_info(session: &Session) {
    let scene = session.scene();
    let camera = scene.camera();

    println!("=== Scene: {} ===", scene.name);
    println!("Output: {}", scene.output);
    println!(
        "Camera {}: {}x{} at ({:.2}, {:.2}, {:.2}), half fov {:.1}",
        camera.id,
        camera.width,
        camera.height,
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.half_vfov
    );
    println!("Materials: {}", scene.materials().len());
    println!("Geometry: {}", scene.geometry().len());
    for geometry in scene.geometry() {
        match geometry.shape {
            Shape::Sphere(sphere) => println!(
                "  {} sphere at ({:.2}, {:.2}, {:.2}) r={:.2}, material {}",
                geometry.id,
                sphere.center.x,
                sphere.center.y,
                sphere.center.z,
                sphere.radius,
                geometry.material
            ),
        }
    }
    println!("Lights: {}", scene.lights().len());
    for light in scene.lights() {
        println!("  {} {:?}", light.id, light.kind());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut session = Session::new(config);

    match args.command {
        Command::Render(name) => {
            load_existing(&mut session, &name)?;
            let path = session.render()?;
            println!("Rendered {}", path.display());
        }
        Command::Info(name) => {
            load_existing(&mut session, &name)?;
            print_info(&session);
        }
        Command::New { name, spheres } => {
            populate(&mut session, spheres);
            if !session.save(&name) {
                bail!("Could not save scene {:?}", name);
            }
            println!("Created {} with {} spheres", name, spheres);
        }
        Command::Resave(name) => {
            load_existing(&mut session, &name)?;
            if !session.save(&name) {
                bail!("Could not save scene {:?}", name);
            }
            println!("Resaved {}", name);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    log::info!("Starting Prism: {:?}", args.command);
    run(args)
}
