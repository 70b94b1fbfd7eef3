//! Bloch-sphere figure geometry.
//!
//! JSON-serializable trace data for a 3-D plotting frontend: a translucent
//! unit sphere, the equator, labeled poles and axis markers, and state
//! vectors added one by one. The types here are plain DTOs; rendering is
//! the frontend's business.

use serde::Serialize;
use std::f64::consts::{PI, TAU};
use tracing::debug;

use crate::coords::BlochVector;
use crate::error::BlochResult;

/// Mesh resolution of the sphere surface (points per axis).
const SURFACE_POINTS: usize = 100;
/// Number of points on the equator circle.
const EQUATOR_POINTS: usize = 401;

/// Figure layout.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    /// Figure title.
    pub title: String,
    /// Fixed-size figure, no autosizing.
    pub autosize: bool,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Margins in pixels.
    pub margin: Margin,
}

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    /// Left.
    pub l: u32,
    /// Right.
    pub r: u32,
    /// Bottom.
    pub b: u32,
    /// Top.
    pub t: u32,
}

/// Shared color axis for vector markers, symmetric over the z range.
#[derive(Debug, Clone, Serialize)]
pub struct ColorAxis {
    /// Lower bound of the color range.
    pub cmin: f64,
    /// Upper bound of the color range.
    pub cmax: f64,
    /// Named colorscale.
    pub colorscale: String,
}

/// A single figure trace.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trace {
    /// A 2-D mesh surface.
    Surface {
        /// Mesh x coordinates, row per θ sample.
        x: Vec<Vec<f64>>,
        /// Mesh y coordinates.
        y: Vec<Vec<f64>>,
        /// Mesh z coordinates.
        z: Vec<Vec<f64>>,
        /// Uniform surface color.
        color: String,
        /// Surface opacity in [0, 1].
        opacity: f64,
    },
    /// A polyline in 3-D.
    Line {
        /// x coordinates.
        x: Vec<f64>,
        /// y coordinates.
        y: Vec<f64>,
        /// z coordinates.
        z: Vec<f64>,
        /// Line color.
        color: String,
    },
    /// A labeled point marker.
    LabeledMarker {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// z coordinate.
        z: f64,
        /// Marker color.
        color: String,
        /// Marker size.
        size: u32,
        /// Label text.
        text: String,
        /// Label placement hint, if not the default.
        #[serde(skip_serializing_if = "Option::is_none")]
        text_position: Option<String>,
    },
    /// A state-vector marker colored through the shared color axis by its
    /// z component.
    VectorMarker {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// z coordinate.
        z: f64,
        /// Color-axis input value.
        color_value: f64,
        /// Marker size.
        size: u32,
    },
}

/// A Bloch-sphere figure: layout, color axis, and traces.
#[derive(Debug, Clone, Serialize)]
pub struct BlochFigure {
    /// Figure layout.
    pub layout: Layout,
    /// Color axis shared by vector markers.
    pub color_axis: ColorAxis,
    /// All traces, sphere scaffolding first.
    pub traces: Vec<Trace>,
}

impl BlochFigure {
    /// Produce a blank Bloch sphere with basic labels.
    pub fn new() -> Self {
        let mut traces = vec![sphere_surface(), equator()];
        traces.push(pole_marker(1.0, "0", None));
        traces.push(pole_marker(-1.0, "1", Some("bottom center")));
        traces.push(axis_marker(1.0, 0.0, "x"));
        traces.push(axis_marker(0.0, 1.0, "y"));

        Self {
            layout: Layout {
                title: "Bloch sphere".to_string(),
                autosize: false,
                width: 500,
                height: 500,
                margin: Margin {
                    l: 65,
                    r: 50,
                    b: 65,
                    t: 90,
                },
            },
            color_axis: ColorAxis {
                cmin: -1.0,
                cmax: 1.0,
                colorscale: "bluered_r".to_string(),
            },
            traces,
        }
    }

    /// Draw the given vector on the figure.
    pub fn add_vector(&mut self, vec: &BlochVector) {
        self.traces.push(Trace::VectorMarker {
            x: vec.x,
            y: vec.y,
            z: vec.z,
            color_value: vec.z,
            size: 2,
        });
    }

    /// Number of state-vector markers on the figure.
    pub fn num_vectors(&self) -> usize {
        self.traces
            .iter()
            .filter(|t| matches!(t, Trace::VectorMarker { .. }))
            .count()
    }

    /// Serialize the figure to a JSON string.
    pub fn to_json(&self) -> BlochResult<String> {
        debug!(
            traces = self.traces.len(),
            vectors = self.num_vectors(),
            "serializing Bloch figure"
        );
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for BlochFigure {
    fn default() -> Self {
        Self::new()
    }
}

/// The translucent unit sphere as an outer-product mesh.
fn sphere_surface() -> Trace {
    let thetas: Vec<f64> = linspace(0.0, TAU, SURFACE_POINTS);
    let phis: Vec<f64> = linspace(0.0, PI, SURFACE_POINTS);

    let mut x = Vec::with_capacity(SURFACE_POINTS);
    let mut y = Vec::with_capacity(SURFACE_POINTS);
    let mut z = Vec::with_capacity(SURFACE_POINTS);
    for th in &thetas {
        x.push(phis.iter().map(|p| th.cos() * p.sin()).collect());
        y.push(phis.iter().map(|p| th.sin() * p.sin()).collect());
        z.push(phis.iter().map(|p| p.cos()).collect());
    }

    Trace::Surface {
        x,
        y,
        z,
        color: "grey".to_string(),
        opacity: 0.25,
    }
}

/// The equator circle in the z = 0 plane.
fn equator() -> Trace {
    let phis = linspace(0.0, TAU, EQUATOR_POINTS);
    Trace::Line {
        x: phis.iter().map(|p| p.cos()).collect(),
        y: phis.iter().map(|p| p.sin()).collect(),
        z: vec![0.0; EQUATOR_POINTS],
        color: "grey".to_string(),
    }
}

fn pole_marker(z: f64, text: &str, text_position: Option<&str>) -> Trace {
    Trace::LabeledMarker {
        x: 0.0,
        y: 0.0,
        z,
        color: "black".to_string(),
        size: 2,
        text: text.to_string(),
        text_position: text_position.map(str::to_string),
    }
}

fn axis_marker(x: f64, y: f64, text: &str) -> Trace {
    Trace::LabeledMarker {
        x,
        y,
        z: 0.0,
        color: "black".to_string(),
        size: 2,
        text: text.to_string(),
        text_position: None,
    }
}

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}
