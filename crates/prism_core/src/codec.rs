//! Keyed text encoding of scene entities.
//!
//! Every record is one line: a literal key such as `sphere: `, followed by
//! whitespace-separated fields. The camera spreads over several fixed keys.
//! A geometry record is written as two lines, its material first, and a
//! decoded sphere binds the material decoded just before it.
//!
//! Decoding is forgiving: unknown lines are skipped, and a field that fails
//! to parse leaves it and every later field of that record at its default.

use std::str::SplitWhitespace;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::{Camera, Geometry, Light, LightKind, LightSource, Material, Shape};
use crate::scene::Scene;

/// Record keys, including the `": "` separator.
pub mod keys {
    pub const CAMERA_POS: &str = "camera_pos: ";
    pub const CAMERA_FWD: &str = "camera_fwd: ";
    pub const CAMERA_UP: &str = "camera_up: ";
    pub const CAMERA_FOV_HA: &str = "camera_fov_ha: ";
    pub const FILM_RESOLUTION: &str = "film_resolution: ";
    pub const OUTPUT_IMAGE: &str = "output_image: ";
    pub const BACKGROUND: &str = "background: ";
    pub const MAX_DEPTH: &str = "max_depth: ";
    pub const MATERIAL: &str = "material: ";
    pub const SPHERE: &str = "sphere: ";
    pub const AMBIENT_LIGHT: &str = "ambient_light: ";
    pub const POINT_LIGHT: &str = "point_light: ";
    pub const DIRECTIONAL_LIGHT: &str = "directional_light: ";
    pub const SPOT_LIGHT: &str = "spot_light: ";
    pub const FORMAT_VERSION: &str = "format_version: ";
}

/// Scene file format revision.
///
/// `Legacy` files were written without a separator between a spot light's
/// position and direction, so `... 3.000000 0.000000` came out as
/// `... 3.0000000.000000`. `V2` writes the separator and announces itself
/// with a `format_version: 2` line. Both decode the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormatVersion {
    Legacy,
    #[default]
    V2,
}

impl FormatVersion {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(FormatVersion::Legacy),
            2 => Some(FormatVersion::V2),
            _ => None,
        }
    }

    fn number(self) -> u32 {
        match self {
            FormatVersion::Legacy => 1,
            FormatVersion::V2 => 2,
        }
    }
}

/// Return what follows `key` on `line`, if the line starts with it and
/// something follows.
pub fn rest_after_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key).filter(|rest| !rest.is_empty())
}

// --- Field reading ---

/// Sequential reader over the fields of one record.
///
/// Once a token is missing or malformed the reader stops assigning, so the
/// remaining targets keep whatever defaults they had.
pub struct FieldReader<'a> {
    tokens: SplitWhitespace<'a>,
    failed: bool,
}

impl<'a> FieldReader<'a> {
    pub fn new(fields: &'a str) -> Self {
        Self {
            tokens: fields.split_whitespace(),
            failed: false,
        }
    }

    /// True while every field so far parsed.
    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    fn next_token(&mut self) -> Option<&'a str> {
        if self.failed {
            return None;
        }
        let token = self.tokens.next();
        if token.is_none() {
            self.failed = true;
        }
        token
    }

    fn parse<T: std::str::FromStr>(&mut self, target: &mut T) {
        if let Some(token) = self.next_token() {
            match token.parse() {
                Ok(value) => *target = value,
                Err(_) => {
                    log::debug!("Malformed field {:?}, keeping defaults", token);
                    self.failed = true;
                }
            }
        }
    }

    pub fn f32(&mut self, target: &mut f32) -> &mut Self {
        self.parse(target);
        self
    }

    pub fn u32(&mut self, target: &mut u32) -> &mut Self {
        self.parse(target);
        self
    }

    pub fn vec3(&mut self, target: &mut Vec3) -> &mut Self {
        self.f32(&mut target.x).f32(&mut target.y).f32(&mut target.z)
    }

    pub fn word(&mut self, target: &mut String) -> &mut Self {
        if let Some(token) = self.next_token() {
            *target = token.to_string();
        }
        self
    }
}

// --- Field writing ---

fn fmt_f32(v: f32) -> String {
    format!("{:.6}", v)
}

fn fmt_vec3(v: Vec3) -> String {
    format!("{:.6} {:.6} {:.6}", v.x, v.y, v.z)
}

// --- Camera ---

/// Encode the camera block, including the output image line.
pub fn encode_camera(camera: &Camera, output: &str) -> String {
    let lines = [
        format!("{}{}", keys::CAMERA_POS, fmt_vec3(camera.position)),
        format!("{}{}", keys::CAMERA_FWD, fmt_vec3(camera.forward)),
        format!("{}{}", keys::CAMERA_UP, fmt_vec3(camera.up)),
        format!("{}{}", keys::CAMERA_FOV_HA, fmt_f32(camera.half_vfov)),
        format!("{}{} {}", keys::FILM_RESOLUTION, camera.width, camera.height),
        format!("{}{}", keys::OUTPUT_IMAGE, output),
        format!("{}{}", keys::BACKGROUND, fmt_vec3(camera.background)),
        format!("{}{}", keys::MAX_DEPTH, camera.max_depth),
    ];
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// Apply one line to the camera (or output path) if it carries a camera key.
///
/// Returns true when a camera key matched.
pub fn decode_camera_line(line: &str, camera: &mut Camera, output: &mut String) -> bool {
    if let Some(rest) = rest_after_key(line, keys::CAMERA_POS) {
        FieldReader::new(rest).vec3(&mut camera.position);
    } else if let Some(rest) = rest_after_key(line, keys::CAMERA_FWD) {
        FieldReader::new(rest).vec3(&mut camera.forward);
    } else if let Some(rest) = rest_after_key(line, keys::CAMERA_UP) {
        FieldReader::new(rest).vec3(&mut camera.up);
    } else if let Some(rest) = rest_after_key(line, keys::CAMERA_FOV_HA) {
        FieldReader::new(rest).f32(&mut camera.half_vfov);
    } else if let Some(rest) = rest_after_key(line, keys::FILM_RESOLUTION) {
        FieldReader::new(rest)
            .u32(&mut camera.width)
            .u32(&mut camera.height);
    } else if let Some(rest) = rest_after_key(line, keys::OUTPUT_IMAGE) {
        FieldReader::new(rest).word(output);
    } else if let Some(rest) = rest_after_key(line, keys::BACKGROUND) {
        FieldReader::new(rest).vec3(&mut camera.background);
    } else if let Some(rest) = rest_after_key(line, keys::MAX_DEPTH) {
        FieldReader::new(rest).u32(&mut camera.max_depth);
    } else {
        return false;
    }
    true
}

// --- Materials ---

/// Encode a material as a single `material:` line (no newline).
pub fn encode_material(material: &Material) -> String {
    format!(
        "{}{} {} {} {} {} {}",
        keys::MATERIAL,
        fmt_vec3(material.ambient),
        fmt_vec3(material.diffuse),
        fmt_vec3(material.specular),
        fmt_f32(material.phong),
        fmt_vec3(material.transmissive),
        fmt_f32(material.ior),
    )
}

/// Read material fields (the text after the key).
pub fn decode_material(fields: &str, material: &mut Material) {
    FieldReader::new(fields)
        .vec3(&mut material.ambient)
        .vec3(&mut material.diffuse)
        .vec3(&mut material.specular)
        .f32(&mut material.phong)
        .vec3(&mut material.transmissive)
        .f32(&mut material.ior);
}

// --- Geometry ---

/// Encode a geometry as its material line followed by its shape line.
pub fn encode_geometry(geometry: &Geometry, material: &Material) -> String {
    let shape = match &geometry.shape {
        Shape::Sphere(sphere) => format!(
            "{}{} {}",
            keys::SPHERE,
            fmt_vec3(sphere.center),
            fmt_f32(sphere.radius)
        ),
    };
    format!("{}\n{}", encode_material(material), shape)
}

/// Read shape fields (the text after the shape key).
pub fn decode_shape(fields: &str, shape: &mut Shape) {
    match shape {
        Shape::Sphere(sphere) => {
            FieldReader::new(fields)
                .vec3(&mut sphere.center)
                .f32(&mut sphere.radius);
        }
    }
}

// --- Lights ---

fn light_key(kind: LightKind) -> &'static str {
    match kind {
        LightKind::Ambient => keys::AMBIENT_LIGHT,
        LightKind::Point => keys::POINT_LIGHT,
        LightKind::Spot => keys::SPOT_LIGHT,
        LightKind::Directional => keys::DIRECTIONAL_LIGHT,
    }
}

/// Encode a light as a single line (no newline).
pub fn encode_light(light: &Light, version: FormatVersion) -> String {
    let mut out = format!("{}{}", light_key(light.kind()), fmt_vec3(light.color));
    match light.source {
        LightSource::Ambient => {}
        LightSource::Point { position } => {
            out.push_str(&format!(" {}", fmt_vec3(position)));
        }
        LightSource::Directional { direction } => {
            out.push_str(&format!(" {}", fmt_vec3(direction)));
        }
        LightSource::Spot {
            position,
            direction,
            angle1,
            angle2,
        } => {
            let separator = match version {
                FormatVersion::Legacy => "",
                FormatVersion::V2 => " ",
            };
            out.push_str(&format!(
                " {}{}{} {} {}",
                fmt_vec3(position),
                separator,
                fmt_vec3(direction),
                fmt_f32(angle1),
                fmt_f32(angle2)
            ));
        }
    }
    out
}

/// Read light fields (the text after the key) into `light`, whose source
/// variant selects the layout.
pub fn decode_light(fields: &str, light: &mut Light) {
    let mut reader = FieldReader::new(fields);
    reader.vec3(&mut light.color);
    match &mut light.source {
        LightSource::Ambient => {}
        LightSource::Point { position } => {
            reader.vec3(position);
        }
        LightSource::Directional { direction } => {
            reader.vec3(direction);
        }
        LightSource::Spot {
            position,
            direction,
            angle1,
            angle2,
        } => {
            reader.vec3(position).vec3(direction).f32(angle1).f32(angle2);
        }
    }
}

/// Match a line against the light keys, in decode priority order.
fn match_light_key(line: &str) -> Option<(LightKind, &str)> {
    [
        LightKind::Ambient,
        LightKind::Directional,
        LightKind::Point,
        LightKind::Spot,
    ]
    .into_iter()
    .find_map(|kind| rest_after_key(line, light_key(kind)).map(|rest| (kind, rest)))
}

// --- Whole scenes ---

/// Encode the scene body: camera block, then geometry, then lights.
pub fn encode_scene(scene: &Scene, version: FormatVersion) -> String {
    let mut out = String::new();
    if version != FormatVersion::Legacy {
        out.push_str(&format!("{}{}\n", keys::FORMAT_VERSION, version.number()));
    }
    out.push_str(&encode_camera(scene.camera(), &scene.output));
    out.push('\n');

    for geometry in scene.geometry() {
        let material = match scene.material_for(geometry) {
            Some(material) => material.clone(),
            None => {
                log::warn!(
                    "Geometry {} refers to missing material {}, writing defaults",
                    geometry.id,
                    geometry.material
                );
                Material::new(geometry.material)
            }
        };
        out.push_str(&encode_geometry(geometry, &material));
        out.push('\n');
    }

    for light in scene.lights() {
        out.push_str(&encode_light(light, version));
        out.push('\n');
    }

    out
}

/// Decode scene text into `scene`, appending to its collections.
///
/// The caller decides whether to reset first. Returns the format version
/// the text announced (`Legacy` when it announced none).
pub fn decode_scene(text: &str, scene: &mut Scene) -> FormatVersion {
    let mut version = FormatVersion::Legacy;

    for (line_no, line) in text.lines().enumerate() {
        let mut output = std::mem::take(&mut scene.output);
        let camera_line = decode_camera_line(line, scene.camera_mut(), &mut output);
        scene.output = output;
        if camera_line {
            continue;
        }

        if let Some(rest) = rest_after_key(line, keys::SPHERE) {
            let id = scene.create_sphere();
            if let Some(geometry) = scene.geometry_mut(id) {
                decode_shape(rest, &mut geometry.shape);
            }
        } else if let Some(rest) = rest_after_key(line, keys::MATERIAL) {
            let id = scene.create_material();
            if let Some(material) = scene.material_mut(id) {
                decode_material(rest, material);
            }
        } else if let Some((kind, rest)) = match_light_key(line) {
            let id = scene.create_light(kind);
            if let Some(light) = scene.light_mut(id) {
                decode_light(rest, light);
            }
        } else if let Some(rest) = rest_after_key(line, keys::FORMAT_VERSION) {
            let mut number = 0;
            FieldReader::new(rest).u32(&mut number);
            match FormatVersion::from_number(number) {
                Some(v) => version = v,
                None => log::warn!("Unknown scene format version {:?}", rest.trim()),
            }
        } else if !line.trim().is_empty() {
            log::debug!("Skipping unrecognised line {}: {:?}", line_no + 1, line);
        }
    }

    version
}
