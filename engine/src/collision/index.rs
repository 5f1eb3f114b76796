//! Scene Collider Index
//!
//! Scans the scene's geometry once and distills it into an immutable set of
//! [`ColliderVolume`]s that every collision query runs against. The scan is
//! deliberately conservative: big objects are always included, small décor is
//! filtered out, and a couple of safety nets (hazard-colored surfaces, a
//! low-threshold re-scan, synthetic protective walls) catch the geometry that
//! real-world models reliably get wrong.
//!
//! Rebuilding replaces the snapshot in a single assignment, so queries never
//! observe a half-built collection. Until the first rebuild the index is
//! empty and all queries fail open.

use glam::Vec3;
use log::{debug, info};

use crate::collision::Aabb;
use crate::scene::GeometryObject;

/// One solid region of the scene, as used by collision queries.
///
/// Immutable once computed for a given scene snapshot; a rebuild discards and
/// recomputes the whole set, volumes are never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderVolume {
    /// Name of the owning geometry (or wall label), for diagnostics
    pub name: String,
    /// World-space bounds
    pub aabb: Aabb,
}

/// A synthetic oversized volume covering a known structural boundary.
///
/// Exterior walls and ceilings are often modeled as thin single-sided planes
/// that the geometry scan misses; protective walls paper over that. They are
/// re-injected on every rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectiveWall {
    /// Center of the wall volume in world space
    pub center: Vec3,
    /// Full extents along each axis
    pub size: Vec3,
    /// Label carried into the collider volume for diagnostics
    pub label: String,
}

impl ProtectiveWall {
    /// Creates a protective wall from center, full size, and a label.
    pub fn new(center: Vec3, size: Vec3, label: impl Into<String>) -> Self {
        Self {
            center,
            size,
            label: label.into(),
        }
    }
}

/// Tuning knobs for the scene scan.
#[derive(Debug, Clone, Copy)]
pub struct IndexConfig {
    /// An object qualifies as a collider when any AABB dimension exceeds this
    pub min_size: f32,
    /// Lower threshold used by the re-scan when too few colliders were found
    pub fallback_min_size: f32,
    /// Minimum acceptable collider count before the re-scan kicks in
    pub min_collider_count: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_size: 1.0,
            fallback_min_size: 0.5,
            min_collider_count: 10,
        }
    }
}

/// Returns true for surface colors treated as "hazard" geometry.
///
/// Historically the troublesome walls in scanned interiors were bright red
/// and too thin to pass the size filter, so reddish surfaces are always
/// collected regardless of size.
pub fn is_hazard_color(color: [f32; 3]) -> bool {
    color[0] > 0.7 && color[1] < 0.3 && color[2] < 0.3
}

/// The queryable collection of collider volumes for the current scene.
#[derive(Debug, Clone, Default)]
pub struct ColliderIndex {
    /// Current snapshot; replaced wholesale on rebuild
    volumes: Vec<ColliderVolume>,
    /// Synthetic walls re-injected on every rebuild
    walls: Vec<ProtectiveWall>,
    /// Scan thresholds
    pub config: IndexConfig,
    /// Whether a rebuild has completed at least once
    built: bool,
}

impl ColliderIndex {
    /// Creates an empty index with the given scan configuration.
    ///
    /// The index stays empty (and queries fail open) until [`rebuild`] runs.
    ///
    /// [`rebuild`]: ColliderIndex::rebuild
    pub fn new(config: IndexConfig) -> Self {
        Self {
            volumes: Vec::new(),
            walls: Vec::new(),
            config,
            built: false,
        }
    }

    /// Installs the set of protective walls injected on every rebuild.
    ///
    /// Takes effect on the next [`rebuild`](ColliderIndex::rebuild).
    pub fn set_protective_walls(&mut self, walls: Vec<ProtectiveWall>) {
        self.walls = walls;
    }

    /// Scans the given geometry and replaces the collider snapshot.
    ///
    /// Inclusion rules, in order: objects whose bounds exceed `min_size` in
    /// any dimension, objects explicitly marked as colliders, and objects
    /// with a hazard surface color. If that yields fewer than
    /// `min_collider_count` volumes, a second pass re-admits objects above
    /// `fallback_min_size`. Objects with no obtainable bounds are skipped.
    /// Protective walls are appended last.
    pub fn rebuild(&mut self, objects: &[GeometryObject]) {
        let mut volumes: Vec<ColliderVolume> = Vec::new();
        // Indices of objects already collected, so the re-scan never duplicates
        let mut included = vec![false; objects.len()];

        for (i, obj) in objects.iter().enumerate() {
            let Some(aabb) = obj.bounding_box() else {
                debug!("skipping '{}': no bounds available", obj.name);
                continue;
            };

            let big_enough = aabb.any_dimension_exceeds(self.config.min_size);
            let hazard = obj.color.is_some_and(is_hazard_color);

            if big_enough || obj.is_collider || hazard {
                debug!(
                    "collider '{}': size {:?} (marked: {}, hazard: {})",
                    obj.name,
                    aabb.size(),
                    obj.is_collider,
                    hazard
                );
                volumes.push(ColliderVolume {
                    name: obj.name.clone(),
                    aabb,
                });
                included[i] = true;
            }
        }

        // Under-collection guard: thin scenes get a second, more permissive pass
        if volumes.len() < self.config.min_collider_count {
            info!(
                "only {} colliders found, re-scanning with lower size threshold",
                volumes.len()
            );
            for (i, obj) in objects.iter().enumerate() {
                if included[i] {
                    continue;
                }
                let Some(aabb) = obj.bounding_box() else {
                    continue;
                };
                if aabb.any_dimension_exceeds(self.config.fallback_min_size) {
                    debug!("re-scan collider '{}': size {:?}", obj.name, aabb.size());
                    volumes.push(ColliderVolume {
                        name: obj.name.clone(),
                        aabb,
                    });
                }
            }
        }

        for wall in &self.walls {
            volumes.push(ColliderVolume {
                name: wall.label.clone(),
                aabb: Aabb::from_center_size(wall.center, wall.size),
            });
        }

        info!(
            "collider index rebuilt: {} volumes ({} protective walls)",
            volumes.len(),
            self.walls.len()
        );

        // Single assignment: queries never see a half-built snapshot
        self.volumes = volumes;
        self.built = true;
    }

    /// Whether the initial build has completed.
    pub fn is_ready(&self) -> bool {
        self.built
    }

    /// The current collider snapshot.
    pub fn volumes(&self) -> &[ColliderVolume] {
        &self.volumes
    }

    /// Number of collider volumes in the snapshot.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Returns true if the snapshot holds no volumes.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Casts a ray against all volumes and returns the nearest hit distance.
    ///
    /// Brute-force iteration; the volume counts in an interior walkthrough
    /// are far too small to justify spatial partitioning.
    pub fn ray_cast(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<f32> {
        let mut closest: Option<f32> = None;
        let mut closest_dist = max_dist;

        for volume in &self.volumes {
            if let Some(t) = volume.aabb.ray_intersect(origin, dir) {
                if t < closest_dist {
                    closest = Some(t);
                    closest_dist = t;
                }
            }
        }

        closest
    }

    /// Checks whether a ray hits any volume within `max_dist`.
    ///
    /// Faster than [`ray_cast`](ColliderIndex::ray_cast) when only the
    /// yes/no answer matters: returns on the first qualifying hit.
    pub fn ray_test(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> bool {
        for volume in &self.volumes {
            if let Some(t) = volume.aabb.ray_intersect(origin, dir) {
                if t < max_dist {
                    return true;
                }
            }
        }
        false
    }
}
