//! Crane construction options and the geometry derived from them.
//!
//! Dimensions are never validated. Zero, negative or non-finite values still
//! produce a crane; the geometry is simply degenerate. [`CraneDimensions::degenerate_fields`]
//! lets callers (and the spawn path's logging) notice such values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_CANTILEVER, DEFAULT_HOIST_HEIGHT, DEFAULT_RAIL_SPAN, DEFAULT_TROLLEY_WIDTH,
    HOIST_SAFETY_MARGIN, LEG_CLEARANCE, SPREADER_DROP, SPREADER_HEIGHT,
};
use crate::error::CraneConfigError;

/// Dimensional parameters of one crane, fixed at construction.
///
/// Field names serialize in camelCase (`railSpan`, `hoistHeight`, ...) and any
/// missing field falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CraneDimensions {
    /// Distance between the two rail-supported legs.
    pub rail_span: f32,
    /// Rated hoisting height.
    pub hoist_height: f32,
    /// Crossbeam overhang beyond the span, toward +X.
    pub cantilever: f32,
    /// Trolley width along X.
    pub trolley_width: f32,
}

impl Default for CraneDimensions {
    fn default() -> Self {
        Self {
            rail_span: DEFAULT_RAIL_SPAN,
            hoist_height: DEFAULT_HOIST_HEIGHT,
            cantilever: DEFAULT_CANTILEVER,
            trolley_width: DEFAULT_TROLLEY_WIDTH,
        }
    }
}

impl CraneDimensions {
    /// Parse dimensions from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, CraneConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read dimensions from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CraneConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn half_span(&self) -> f32 {
        self.rail_span / 2.0
    }

    /// Height of the crossbeam centre line above the ground.
    pub fn crossbeam_elevation(&self) -> f32 {
        self.hoist_height + LEG_CLEARANCE
    }

    pub fn max_hoist_depth(&self) -> f32 {
        self.crossbeam_elevation() - HOIST_SAFETY_MARGIN
    }

    /// Total crossbeam length: the span plus the cantilever.
    pub fn beam_length(&self) -> f32 {
        self.rail_span + self.cantilever
    }

    /// Trolley travel limits `(min, max)` along X.
    pub fn trolley_limits(&self) -> (f32, f32) {
        let limit = self.half_span();
        (-limit, limit + self.cantilever)
    }

    /// Distance from the hoist origin down to the spreader underside.
    pub fn spreader_bottom_offset(&self) -> f32 {
        SPREADER_DROP + SPREADER_HEIGHT / 2.0
    }

    /// Names of the parameters that are zero, negative or not finite.
    pub fn degenerate_fields(&self) -> Vec<&'static str> {
        [
            ("rail_span", self.rail_span),
            ("hoist_height", self.hoist_height),
            ("cantilever", self.cantilever),
            ("trolley_width", self.trolley_width),
        ]
        .into_iter()
        .filter(|&(_, v)| !v.is_finite() || v <= 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}
