//! JSON scene description for the viewer binary.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_json::from_reader;

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    pub model: String,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default = "default_ssaa")]
    pub ssaa: usize,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            position: [0.0, 1.0, 6.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

fn default_ssaa() -> usize {
    1
}

pub fn load_scene(path: &Path) -> Result<SceneConfig, Box<dyn Error>> {
    let file = File::open(path)?;
    let config: SceneConfig = from_reader(file)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scene() {
        let json = r#"{
            "model": "cube.model",
            "camera": { "position": [0, 2, 8], "target": [0, 0, 0] },
            "ssaa": 2
        }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.model, "cube.model");
        assert_eq!(config.camera.position, [0.0, 2.0, 8.0]);
        assert_eq!(config.ssaa, 2);
    }

    #[test]
    fn camera_and_ssaa_are_optional() {
        let config: SceneConfig = serde_json::from_str(r#"{ "model": "a.model" }"#).unwrap();
        assert_eq!(config.ssaa, 1);
        assert_eq!(config.camera.position, [0.0, 1.0, 6.0]);
    }
}
