/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Native types described by `input/symbols.json`.
//!
//! Method names follow the generated call targets: snake_case of the declared name, or the `native` entry of the symbol.

use std::fmt;

use glam::Vec3;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Vector3

#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        self.to_glam().length()
    }

    /// Zero vectors stay zero.
    pub fn normalize(&mut self) {
        *self = Self::from_glam(self.to_glam().normalize_or_zero());
    }

    pub fn scale(&mut self, factor: f32) {
        *self = Self::from_glam(self.to_glam() * factor);
    }

    /// Component-wise scaling.
    pub fn scale_by(&mut self, factors: &Vector3) {
        *self = Self::from_glam(self.to_glam() * factors.to_glam());
    }

    pub fn dot(a: &Vector3, b: &Vector3) -> f32 {
        a.to_glam().dot(b.to_glam())
    }

    fn to_glam(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    fn from_glam(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Transform

#[derive(Clone, PartialEq, Debug)]
pub struct Transform {
    pub position: Vector3,
    pub scale: f32,
    pub name: String,
    pub origin: Vector3,
    pub tags: Vec<String>,
}

impl Transform {
    pub fn translate(&mut self, offset: &Vector3) {
        self.position.x += offset.x;
        self.position.y += offset.y;
        self.position.z += offset.z;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            scale: 1.0,
            name: String::new(),
            origin: Vector3::ZERO,
            tags: Vec::new(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Entity

#[derive(Clone, Default, PartialEq, Debug)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    secret: i32,
}

impl Entity {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            secret: 0,
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn describe(&self) -> String {
        format!("Entity #{} ({})", self.id, self.name)
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn set_secret(&mut self, secret: i32) {
        self.secret = secret;
    }

    // Not scriptable.
    pub fn hidden(&mut self) {
        self.secret = 0;
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Payload

/// Marshalled opaquely: `cache` is invisible to scripts, but survives a trip through a handle.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Payload {
    pub size: i32,
    cache: Vec<u8>,
}

impl Payload {
    /// Fills the cache with `count` bytes `0, 1, 2, ...` (wrapping). Negative counts empty it.
    pub fn fill(&mut self, count: i32) {
        let count = count.max(0);
        self.cache = (0..count).map(|i| (i % 256) as u8).collect();
        self.size = count;
    }

    pub fn checksum(&self) -> i32 {
        self.cache.iter().map(|&byte| i32::from(byte)).sum()
    }

    pub fn cache(&self) -> &[u8] {
        &self.cache
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Marker

/// No fields; handles carry only the prototype.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Marker;

impl Marker {
    pub fn kind(&self) -> String {
        "marker".to_string()
    }
}
