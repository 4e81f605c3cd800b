use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;

const NODES_PER_MIN_DIM_PX: f64 = 22.0;
const NODES_MIN: usize = 16;
const NODES_MAX: usize = 64;

/// Edge formation distance threshold in unit-square space.
pub(crate) const EDGE_DISTANCE_THRESHOLD: f64 = 0.28;
/// Probability an in-range pair actually keeps its edge.
pub(crate) const EDGE_KEEP_PROBABILITY: f64 = 0.55;

/// A node of the pulsing neural graph, placed in the unit square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NeuralNode {
    /// Position in `[0, 1] x [0, 1]`, scaled by the scene at draw time.
    pub(crate) pos: Point,
    pub(crate) size: f64,
    pub(crate) pulse_phase: f64,
    pub(crate) pulse_speed: f64,
}

impl NeuralNode {
    /// Pulse brightness in `[0.3, 1.0]` at `elapsed_ms`.
    pub(crate) fn pulse(&self, elapsed_ms: f64) -> f64 {
        let s = (elapsed_ms * 0.001 * self.pulse_speed + self.pulse_phase).sin();
        0.65 + 0.35 * s
    }
}

/// Sparse, locally clustered graph: edges form only between node pairs
/// within [`EDGE_DISTANCE_THRESHOLD`] that also pass a keep-probability
/// draw, so it is never a complete graph.
#[derive(Clone, Debug, Default)]
pub(crate) struct NeuralPool {
    pub(crate) nodes: Vec<NeuralNode>,
    /// Index pairs into `nodes`, `a < b`.
    pub(crate) edges: Vec<(u16, u16)>,
}

impl NeuralPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let count = min_dim_scaled_count(viewport, NODES_PER_MIN_DIM_PX, NODES_MIN, NODES_MAX);
        let count = count.min(u16::MAX as usize);
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            nodes.push(NeuralNode {
                pos: Point::new(rng.next_f64(), rng.next_f64()),
                size: rng.in_range(1.2, 3.2),
                pulse_phase: rng.in_range(0.0, std::f64::consts::TAU),
                pulse_speed: rng.in_range(0.6, 2.0),
            });
        }

        let mut edges = Vec::new();
        for a in 0..nodes.len() {
            for b in (a + 1)..nodes.len() {
                if nodes[a].pos.distance(nodes[b].pos) > EDGE_DISTANCE_THRESHOLD {
                    continue;
                }
                if !rng.chance(EDGE_KEEP_PROBABILITY) {
                    continue;
                }
                edges.push((a as u16, b as u16));
            }
        }

        Self { nodes, edges }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/neural.rs"]
mod tests;
