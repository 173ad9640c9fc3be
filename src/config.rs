// src/config.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-run configuration. The pipeline itself reads `filter_iterations`
/// and `isosurface_value`; everything else belongs to the exporter and
/// renderer and rides along untouched. Field names mirror the JSON keys
/// an external loader hands over; keys nobody declares land in `extra`
/// and are never an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Smoothing pass count, 0 disables smoothing
    #[serde(default = "default_filter_iterations")]
    pub filter_iterations: u32,
    /// Scalar threshold the isosurface is extracted at
    #[serde(default = "default_isosurface_value")]
    pub isosurface_value: f64,

    // Exporter/renderer keys: validated and passed through, not
    // interpreted by the pipeline
    #[serde(default = "default_delete_obj_file", rename = "deleteOBJFile")]
    pub delete_obj_file: bool,
    #[serde(default = "default_path_to_obj_file", rename = "pathToOBJFile")]
    pub path_to_obj_file: String,
    #[serde(default = "default_focal_length")]
    pub focal_length: u32,
    #[serde(default = "default_camera_location")]
    pub camera_location: String,
    #[serde(default = "default_image_path")]
    pub image_path: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn default_filter_iterations() -> u32 {
    1
}
fn default_isosurface_value() -> f64 {
    0.001
}
fn default_delete_obj_file() -> bool {
    true
}
fn default_path_to_obj_file() -> String {
    "/tmp/tmp.obj".to_string()
}
fn default_focal_length() -> u32 {
    25
}
fn default_camera_location() -> String {
    "-y".to_string()
}
fn default_image_path() -> String {
    "./cubeFileRender.png".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filter_iterations: default_filter_iterations(),
            isosurface_value: default_isosurface_value(),
            delete_obj_file: default_delete_obj_file(),
            path_to_obj_file: default_path_to_obj_file(),
            focal_length: default_focal_length(),
            camera_location: default_camera_location(),
            image_path: default_image_path(),
            extra: HashMap::new(),
        }
    }
}

impl RenderConfig {
    /// Build from a JSON mapping produced by an external loader.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| format!("invalid config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.isosurface_value.is_finite() {
            return Err("isosurfaceValue must be finite".to_string());
        }
        if self.focal_length == 0 {
            return Err("focalLength must be greater than 0".to_string());
        }
        const LOCATIONS: [&str; 6] = ["-x", "+x", "-y", "+y", "-z", "+z"];
        if !LOCATIONS.contains(&self.camera_location.as_str()) {
            return Err(format!(
                "cameraLocation must be one of {:?}, got '{}'",
                LOCATIONS, self.camera_location
            ));
        }
        Ok(())
    }
}
