use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::orbit::OrbitPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// Distance below which two orbit nodes get a connecting line, as a
/// fraction of the min viewport dimension.
const LINK_DISTANCE_FRAC: f64 = 0.22;

/// The opening orbit/particle "lines" sequence: guide rings, orbiting
/// nodes with fading trails, and proximity links between nodes.
pub(crate) struct OrbitLinesScene {
    seed: u64,
    knees: (f64, f64),
    pool: OrbitPool,
}

impl OrbitLinesScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            pool: OrbitPool::default(),
        }
    }
}

impl SceneRenderer for OrbitLinesScene {
    fn name(&self) -> &'static str {
        "orbit-lines"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.pool = OrbitPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let center = frame.viewport.center();
        let scale = frame.viewport.min_dim();

        // Faint guide rings appear first.
        let ring_gate = window(0.0, 0.2, frame.progress);
        for node in &self.pool.nodes {
            let r = node.radius_frac * scale;
            painter.stroke_circle(
                center,
                r,
                1.0,
                Rgba8::from_hsla(node.hue, 0.5, 0.6, 0.06 * ring_gate * env),
            );
        }

        // Nodes and trails.
        let node_gate = window(0.1, 0.35, frame.progress);
        if node_gate > 0.0 {
            for node in &mut self.pool.nodes {
                let pos = node.position(center, scale, frame.elapsed_ms);
                node.trail.push(pos);
                node.trail.decay();

                let mut prev = None;
                for point in node.trail.live() {
                    if let Some(prev) = prev {
                        painter.stroke_line(
                            prev,
                            point.pos,
                            1.2,
                            Rgba8::from_hsla(
                                node.hue,
                                0.7,
                                0.6,
                                0.35 * point.life * node_gate * env,
                            ),
                        );
                    }
                    prev = Some(point.pos);
                }

                painter.fill_circle(
                    pos,
                    node.size,
                    Rgba8::from_hsla(node.hue, 0.8, 0.72, 0.9 * node_gate * env),
                );
            }
        }

        // Proximity links between nodes.
        let link_gate = window(0.25, 0.5, frame.progress);
        if link_gate > 0.0 {
            let threshold = LINK_DISTANCE_FRAC * scale;
            let positions: Vec<_> = self
                .pool
                .nodes
                .iter()
                .map(|n| n.position(center, scale, frame.elapsed_ms))
                .collect();
            for a in 0..positions.len() {
                for b in (a + 1)..positions.len() {
                    let d = positions[a].distance(positions[b]);
                    if d > threshold {
                        continue;
                    }
                    let near = 1.0 - d / threshold;
                    painter.stroke_line(
                        positions[a],
                        positions[b],
                        1.0,
                        Rgba8::from_hsla(210.0, 0.6, 0.7, 0.28 * near * link_gate * env),
                    );
                }
            }
        }

        Ok(())
    }
}
