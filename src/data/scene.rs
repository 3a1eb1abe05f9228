//! JSON scene files
//!
//! A scene file is the headless stand-in for the host scene: a list of
//! objects with location, dimensions and selection state, the 3D cursor and
//! the host version.

use crate::editing::cursor::{Cursor3d, HostVersion, LegacyCursorLocation};
use crate::editing::selection::{Dimensions, SceneObject, Selected};
use anyhow::{Context, Result};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_selected() -> bool {
    true
}

/// One object in a scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObjectData {
    pub name: String,
    pub location: [f32; 3],
    #[serde(default)]
    pub dimensions: [f32; 3],
    #[serde(default = "default_selected")]
    pub selected: bool,
}

/// Contents of a scene file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub host_version: HostVersion,
    #[serde(default)]
    pub cursor: [f32; 3],
    pub objects: Vec<SceneObjectData>,
}

impl SceneFile {
    /// Load a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let scene = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse scene file {}", path.display()))?;
        debug!(
            "Loaded {} objects from {:?}",
            scene.objects.len(),
            path
        );
        Ok(scene)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(contents)?;
        for object in &scene.objects {
            if object.dimensions.iter().any(|size| *size < 0.0) {
                anyhow::bail!("Object '{}' has negative dimensions", object.name);
            }
        }
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the scene as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write scene file {}", path.display()))?;
        debug!("Saved scene to {:?}", path);
        Ok(())
    }

    /// Number of objects marked as selected
    pub fn selected_count(&self) -> usize {
        self.objects.iter().filter(|object| object.selected).count()
    }

    /// Spawn the objects and install the cursor resources
    ///
    /// Returns the spawned entities in file order.
    pub fn spawn_into(&self, world: &mut World) -> Vec<Entity> {
        let cursor = Vec3::from_array(self.cursor);
        world.insert_resource(self.host_version);
        if self.host_version.uses_legacy_cursor() {
            world.insert_resource(LegacyCursorLocation(cursor));
        } else {
            world.insert_resource(Cursor3d { location: cursor });
        }

        self.objects
            .iter()
            .map(|object| {
                let mut entity = world.spawn((
                    SceneObject::new(object.name.clone()),
                    Transform::from_translation(Vec3::from_array(object.location)),
                    Dimensions(Vec3::from_array(object.dimensions)),
                ));
                if object.selected {
                    entity.insert(Selected);
                }
                entity.id()
            })
            .collect()
    }

    /// Copy object locations back from the entities returned by [`Self::spawn_into`]
    pub fn read_back(&mut self, world: &World, entities: &[Entity]) {
        for (object, entity) in self.objects.iter_mut().zip(entities) {
            match world.get::<Transform>(*entity) {
                Some(transform) => object.location = transform.translation.to_array(),
                None => warn!("Object '{}' has no transform, keeping its location", object.name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "host_version": [2, 79, 0],
        "cursor": [1.0, 2.0, 3.0],
        "objects": [
            { "name": "Cube", "location": [0.0, 0.0, 0.0], "dimensions": [2.0, 2.0, 2.0] },
            { "name": "Lamp", "location": [4.0, 1.0, 0.0], "selected": false }
        ]
    }"#;

    #[test]
    fn test_parse_with_defaults() {
        let scene = SceneFile::from_json(SCENE).unwrap();
        assert_eq!(scene.host_version, HostVersion::new(2, 79, 0));
        assert_eq!(scene.objects.len(), 2);
        assert!(scene.objects[0].selected);
        assert!(!scene.objects[1].selected);
        assert_eq!(scene.objects[1].dimensions, [0.0; 3]);
        assert_eq!(scene.selected_count(), 1);

        let minimal = SceneFile::from_json(r#"{ "objects": [] }"#).unwrap();
        assert_eq!(minimal.host_version, HostVersion::new(2, 80, 0));
        assert_eq!(minimal.cursor, [0.0; 3]);
    }

    #[test]
    fn test_negative_dimensions_are_rejected() {
        let json = r#"{ "objects": [ { "name": "Bad", "location": [0, 0, 0], "dimensions": [1, -1, 1] } ] }"#;
        assert!(SceneFile::from_json(json).is_err());
    }

    #[test]
    fn test_spawn_and_read_back() {
        let mut scene = SceneFile::from_json(SCENE).unwrap();
        let mut world = World::new();
        let entities = scene.spawn_into(&mut world);

        assert_eq!(entities.len(), 2);
        assert!(world.get::<Selected>(entities[0]).is_some());
        assert!(world.get::<Selected>(entities[1]).is_none());
        assert_eq!(
            world.get::<Dimensions>(entities[0]),
            Some(&Dimensions::new(2.0, 2.0, 2.0))
        );
        // 2.79 only has the legacy cursor
        assert_eq!(
            world.get_resource::<LegacyCursorLocation>(),
            Some(&LegacyCursorLocation(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert!(world.get_resource::<Cursor3d>().is_none());

        world
            .get_mut::<Transform>(entities[1])
            .unwrap()
            .translation
            .z = 9.0;
        scene.read_back(&world, &entities);
        assert_eq!(scene.objects[1].location, [4.0, 1.0, 9.0]);
        assert_eq!(scene.objects[0].location, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scene.json");
        let scene = SceneFile::from_json(SCENE).unwrap();

        scene.save(&path).unwrap();
        assert_eq!(SceneFile::load(&path).unwrap(), scene);
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = SceneFile::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("here.json"));
    }
}
