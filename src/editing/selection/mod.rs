//! Scene object selection
//!
//! Components that describe a scene object as far as alignment cares
//! (its name, its size and whether it is selected) and the sorter that fixes
//! layout order before any coordinate is rewritten.

use crate::geometry::Axis;
use bevy::prelude::*;
use std::cmp::Ordering;

/// Marker for objects in the current selection
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Selected;

/// Human readable object name, as shown by the host
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SceneObject {
    pub name: String,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// World-space bounding box size of an object, one non-negative value per axis
///
/// Objects without this component are treated as points.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Dimensions(pub Vec3);

impl Dimensions {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Size along one axis
    pub fn along(&self, axis: Axis) -> f32 {
        axis.get(self.0)
    }
}

/// Sort objects by ascending coordinate on `axis`
///
/// The sort is stable: objects sharing a coordinate keep their input order.
/// Values that cannot be compared (NaN) are treated as equal.
pub fn sort_by_axis<T>(objects: &mut [T], axis: Axis, location: impl Fn(&T) -> Vec3) {
    objects.sort_by(|a, b| {
        axis.get(location(a))
            .partial_cmp(&axis.get(location(b)))
            .unwrap_or(Ordering::Equal)
    });
}

/// Plugin registering selection components for reflection
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Selected>()
            .register_type::<SceneObject>()
            .register_type::<Dimensions>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_axis_orders_ascending() {
        let mut objects = vec![
            ("a", Vec3::new(3.0, 0.0, 0.0)),
            ("b", Vec3::new(-1.0, 0.0, 0.0)),
            ("c", Vec3::new(2.0, 0.0, 0.0)),
        ];
        sort_by_axis(&mut objects, Axis::X, |(_, loc)| *loc);
        let names: Vec<_> = objects.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_axis_is_stable() {
        let mut objects = vec![
            ("first", Vec3::new(0.0, 1.0, 0.0)),
            ("second", Vec3::new(9.0, 1.0, 0.0)),
            ("low", Vec3::new(5.0, 0.0, 0.0)),
            ("third", Vec3::new(-4.0, 1.0, 0.0)),
        ];
        sort_by_axis(&mut objects, Axis::Y, |(_, loc)| *loc);
        let names: Vec<_> = objects.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_by_axis_ignores_other_axes() {
        let mut objects = vec![Vec3::new(0.0, 0.0, 2.0), Vec3::new(100.0, -50.0, 1.0)];
        sort_by_axis(&mut objects, Axis::Z, |loc| *loc);
        assert_eq!(objects[0].z, 1.0);
        assert_eq!(objects[1].z, 2.0);
    }

    #[test]
    fn test_sort_treats_negative_zero_as_equal() {
        let mut objects = vec![("pos", 0.0_f32), ("neg", -0.0_f32)];
        sort_by_axis(&mut objects, Axis::X, |(_, x)| Vec3::new(*x, 0.0, 0.0));
        assert_eq!(objects[0].0, "pos");
    }

    #[test]
    fn test_dimensions_along_axis() {
        let dims = Dimensions::new(1.0, 2.0, 3.0);
        assert_eq!(dims.along(Axis::X), 1.0);
        assert_eq!(dims.along(Axis::Z), 3.0);
        assert_eq!(Dimensions::default().along(Axis::Y), 0.0);
    }
}
