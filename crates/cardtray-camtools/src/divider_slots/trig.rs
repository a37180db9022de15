//! Angle-keyed trigonometry cache
//!
//! Every slot on an edge shares the same angle, so `1/cos` and `tan` are
//! computed once per distinct angle and read back afterwards.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
struct TrigEntry {
    cos_recip: f64,
    tan: f64,
}

/// Read-through cache of `1/cos(angle)` and `tan(angle)` for angles in degrees.
#[derive(Debug, Default)]
pub struct TrigCache {
    entries: RwLock<HashMap<u64, TrigEntry>>,
}

impl TrigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache shared by all slot descriptions of the process.
    pub fn shared() -> &'static TrigCache {
        static SHARED: OnceLock<TrigCache> = OnceLock::new();
        SHARED.get_or_init(TrigCache::new)
    }

    /// `1 / cos(angle)`, angle in degrees.
    pub fn cos_recip(&self, angle: f64) -> f64 {
        self.entry(angle).cos_recip
    }

    /// `tan(angle)`, angle in degrees.
    pub fn tan(&self, angle: f64) -> f64 {
        self.entry(angle).tan
    }

    /// Number of distinct angles computed so far.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn entry(&self, angle: f64) -> TrigEntry {
        let key = Self::key(angle);
        if let Some(entry) = self.entries.read().get(&key) {
            return *entry;
        }

        let radians = angle.to_radians();
        let entry = TrigEntry {
            cos_recip: 1.0 / radians.cos(),
            tan: radians.tan(),
        };
        *self.entries.write().entry(key).or_insert(entry)
    }

    // -0.0 and 0.0 share an entry.
    fn key(angle: f64) -> u64 {
        if angle == 0.0 {
            0.0f64.to_bits()
        } else {
            angle.to_bits()
        }
    }
}
