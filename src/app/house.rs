//! Demo House Scene
//!
//! A headless stand-in for the loaded building model: the structural
//! geometry of a small house expressed as named bounding volumes, plus the
//! protective walls that fence the camera into the lot. Dimensions mirror
//! the house the default tour was authored against.

use glam::Vec3;

use crate::collision::{Aabb, ProtectiveWall};
use crate::scene::GeometryObject;

/// The demo house as collider-index input.
///
/// Mixes structural meshes (picked up by the size heuristic), small décor
/// (ignored unless the fallback rescan runs), explicitly marked colliders,
/// and one hazard-colored divider.
pub fn demo_house_objects() -> Vec<GeometryObject> {
    let mut objects = Vec::new();

    // Structural shell
    objects.push(
        GeometryObject::new("floor_slab").with_bounds(Aabb::from_center_size(
            Vec3::new(-15.0, -0.25, 25.0),
            Vec3::new(120.0, 0.5, 110.0),
        )),
    );
    objects.push(
        GeometryObject::new("north_wall").with_bounds(Aabb::from_center_size(
            Vec3::new(-15.0, 4.0, -20.0),
            Vec3::new(60.0, 8.0, 0.4),
        )),
    );
    objects.push(
        GeometryObject::new("south_wall").with_bounds(Aabb::from_center_size(
            Vec3::new(-15.0, 4.0, 70.0),
            Vec3::new(60.0, 8.0, 0.4),
        )),
    );
    objects.push(
        GeometryObject::new("west_wall").with_bounds(Aabb::from_center_size(
            Vec3::new(-45.0, 4.0, 25.0),
            Vec3::new(0.4, 8.0, 90.0),
        )),
    );
    objects.push(
        GeometryObject::new("east_wall").with_bounds(Aabb::from_center_size(
            Vec3::new(15.0, 4.0, 25.0),
            Vec3::new(0.4, 8.0, 90.0),
        )),
    );

    // Interior partitions
    objects.push(
        GeometryObject::new("kitchen_partition").with_bounds(Aabb::from_center_size(
            Vec3::new(-8.0, 2.5, 22.0),
            Vec3::new(0.3, 5.0, 18.0),
        )),
    );
    objects.push(
        GeometryObject::new("dining_partition").with_bounds(Aabb::from_center_size(
            Vec3::new(-2.0, 2.5, -5.0),
            Vec3::new(14.0, 5.0, 0.3),
        )),
    );

    // Hazard-colored safety divider by the pool, thin but always indexed
    objects.push(
        GeometryObject::new("pool_safety_divider")
            .with_bounds(Aabb::from_center_size(
                Vec3::new(-24.0, 1.5, 30.0),
                Vec3::new(0.1, 3.0, 12.0),
            ))
            .with_color([0.85, 0.1, 0.1]),
    );

    // Explicitly tagged collider, below the size threshold on every axis
    objects.push(
        GeometryObject::new("glass_railing")
            .with_bounds(Aabb::from_center_size(
                Vec3::new(-11.0, 1.0, 10.0),
                Vec3::new(0.9, 0.9, 0.9),
            ))
            .marked_collider(),
    );

    // Small décor, only indexed by the fallback rescan
    objects.push(
        GeometryObject::new("table_lamp").with_bounds(Aabb::from_center_size(
            Vec3::new(-3.0, 1.0, 8.0),
            Vec3::new(0.3, 0.6, 0.3),
        )),
    );
    objects.push(
        GeometryObject::new("vase").with_bounds(Aabb::from_center_size(
            Vec3::new(-12.0, 0.9, 24.0),
            Vec3::new(0.2, 0.5, 0.2),
        )),
    );

    objects
}

/// Protective walls fencing the camera into the lot.
///
/// Sized well past the house footprint so free-roam exploration can leave
/// the building without ever leaving the scene.
pub fn house_protective_walls() -> Vec<ProtectiveWall> {
    vec![
        ProtectiveWall::new(
            Vec3::new(-85.0, 10.0, 30.0),
            Vec3::new(5.0, 20.0, 60.0),
            "boundary_left",
        ),
        ProtectiveWall::new(
            Vec3::new(50.0, 10.0, 20.0),
            Vec3::new(5.0, 20.0, 60.0),
            "boundary_right",
        ),
        ProtectiveWall::new(
            Vec3::new(-15.0, 10.0, 85.0),
            Vec3::new(100.0, 20.0, 5.0),
            "boundary_front",
        ),
        ProtectiveWall::new(
            Vec3::new(-15.0, 10.0, -35.0),
            Vec3::new(100.0, 20.0, 5.0),
            "boundary_back",
        ),
        ProtectiveWall::new(
            Vec3::new(0.0, 20.0, 0.0),
            Vec3::new(200.0, 2.0, 200.0),
            "boundary_ceiling",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ColliderIndex;

    #[test]
    fn test_structural_geometry_is_indexed() {
        let mut index = ColliderIndex::default();
        index.rebuild(&demo_house_objects());

        assert!(index.is_ready());
        let names: Vec<_> = index.volumes().iter().map(|v| v.name.as_str()).collect();
        assert!(names.contains(&"floor_slab"));
        assert!(names.contains(&"north_wall"));
        assert!(names.contains(&"pool_safety_divider"));
        assert!(names.contains(&"glass_railing"));
    }

    #[test]
    fn test_protective_walls_enclose_house() {
        let walls = house_protective_walls();
        assert_eq!(walls.len(), 5);

        // Every structural object sits inside the fence
        for object in demo_house_objects() {
            let center = object.bounding_box().unwrap().center();
            assert!(center.x > -82.5 && center.x < 47.5, "{}", object.name);
            assert!(center.z > -32.5 && center.z < 82.5, "{}", object.name);
        }
    }
}
