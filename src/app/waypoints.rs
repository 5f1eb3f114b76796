//! Waypoint List and Persistence
//!
//! The ordered list of named viewpoints a tour steps through. Lists are
//! edited externally (waypoint editor, hand-authored JSON) and persisted as
//! a plain JSON array for human-inspectability.

use std::path::Path;

use glam::Vec3;
use log::info;

use crate::camera::Waypoint;

/// Errors that can occur during waypoint file save/load.
#[derive(Debug)]
pub enum WaypointFileError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for WaypointFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaypointFileError::IoError(e) => write!(f, "IO error: {e}"),
            WaypointFileError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for WaypointFileError {}

impl From<std::io::Error> for WaypointFileError {
    fn from(e: std::io::Error) -> Self {
        WaypointFileError::IoError(e)
    }
}

impl From<serde_json::Error> for WaypointFileError {
    fn from(e: serde_json::Error) -> Self {
        WaypointFileError::JsonError(e)
    }
}

/// An ordered, editable list of waypoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointList {
    waypoints: Vec<Waypoint>,
}

impl WaypointList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock tour of the demo house.
    pub fn default_house_tour() -> Self {
        let mut list = Self::new();
        list.add(Waypoint::new(
            Vec3::new(12.36, 5.34, -14.79),
            Vec3::new(-9.04, -0.63, -13.08),
            "Exterior View",
        ));
        list.add(Waypoint::new(
            Vec3::new(-10.54, 3.76, -29.27),
            Vec3::new(-9.29, 0.03, -3.57),
            "Back",
        ));
        list.add(Waypoint::new(
            Vec3::new(-11.79, 2.01, 27.0),
            Vec3::new(-11.78, 1.99, 26.61),
            "Kitchen",
        ));
        list.add(Waypoint::new(
            Vec3::new(0.0, 1.6, -10.0),
            Vec3::new(0.0, 1.0, 0.0),
            "Dining Room",
        ));
        list.add(Waypoint::new(
            Vec3::new(-15.19, 5.98, 83.66),
            Vec3::new(0.0, 1.0, 0.0),
            "Front Door",
        ));
        list.add(Waypoint::new(
            Vec3::new(0.0, 1.6, 2.0),
            Vec3::new(0.0, 1.6, 0.0),
            "Entrance Hall",
        ));
        list.add(Waypoint::new(
            Vec3::new(-28.04, 5.46, 30.67),
            Vec3::new(-28.04, 5.42, 30.58),
            "Picina",
        ));
        list
    }

    /// Appends a waypoint.
    pub fn add(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Removes and returns the waypoint at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Waypoint> {
        if index < self.waypoints.len() {
            Some(self.waypoints.remove(index))
        } else {
            None
        }
    }

    /// The waypoint at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Iterates over the waypoints in tour order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Writes the list to `path` as a pretty-printed JSON array.
    pub fn save(&self, path: &Path) -> Result<(), WaypointFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.waypoints)?;
        std::fs::write(path, json)?;
        info!("saved {} waypoints to {}", self.waypoints.len(), path.display());
        Ok(())
    }

    /// Loads a list from a JSON array at `path`.
    ///
    /// Waypoints with non-finite coordinates are replaced by the fallback
    /// viewpoint rather than rejected, so a damaged file still yields a
    /// usable tour.
    pub fn load(path: &Path) -> Result<Self, WaypointFileError> {
        let json = std::fs::read_to_string(path)?;
        let waypoints: Vec<Waypoint> = serde_json::from_str(&json)?;
        let waypoints = waypoints.into_iter().map(Waypoint::sanitized).collect();
        Ok(Self { waypoints })
    }
}
