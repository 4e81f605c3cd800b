use crate::foundation::core::{Point, Rect, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::neural::NeuralPool;
use crate::pool::stream::StreamPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// Starlight abstracted into data: falling glyph columns, a scan line, and
/// a constellation graph assembling out of the noise. The bridge between
/// the optical scenes and the cosmos.
pub(crate) struct DatastreamScene {
    seed: u64,
    knees: (f64, f64),
    columns: StreamPool,
    graph: NeuralPool,
}

impl DatastreamScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            columns: StreamPool::default(),
            graph: NeuralPool::default(),
        }
    }
}

impl SceneRenderer for DatastreamScene {
    fn name(&self) -> &'static str {
        "datastream"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.columns = StreamPool::generate(viewport, &mut rng);
        self.graph = NeuralPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let w = f64::from(frame.viewport.width);
        let h = f64::from(frame.viewport.height);

        // Falling glyph columns.
        let column_gate = window(0.0, 0.2, frame.progress);
        // Columns thin out as the graph takes over.
        let column_fade = 1.0 - window(0.55, 0.85, frame.progress) * 0.8;
        if column_gate > 0.0 {
            for col in &self.columns.columns {
                let head = col.head_frac(frame.elapsed_ms) * h;
                let x = col.x_frac * w;
                for g in 0..col.glyphs {
                    let y = head - g as f64 * col.glyph_size * 3.2;
                    if y < 0.0 || y > h {
                        continue;
                    }
                    let fall_off = 1.0 - g as f64 / col.glyphs as f64;
                    painter.fill_rect(
                        Rect::new(
                            x - col.glyph_size * 0.5,
                            y - col.glyph_size,
                            x + col.glyph_size * 0.5,
                            y + col.glyph_size,
                        ),
                        Rgba8::from_hsla(
                            col.hue,
                            0.7,
                            0.6,
                            0.5 * fall_off * column_gate * column_fade * env,
                        ),
                    );
                }
            }
        }

        // Horizontal scan line sweeping down on its own cadence.
        let scan_gate = window(0.15, 0.35, frame.progress);
        if scan_gate > 0.0 {
            let y = (frame.elapsed_ms * 0.00022).fract() * h;
            painter.fill_rect(
                Rect::new(0.0, y - 1.0, w, y + 1.0),
                Rgba8::from_hsla(165.0, 0.7, 0.65, 0.3 * scan_gate * env),
            );
        }

        // Constellation graph condensing out of the stream.
        let graph_gate = window(0.35, 0.7, frame.progress);
        if graph_gate > 0.0 {
            let margin = 0.12;
            let to_screen = |p: Point| {
                Point::new(
                    (margin + p.x * (1.0 - 2.0 * margin)) * w,
                    (margin + p.y * (1.0 - 2.0 * margin)) * h,
                )
            };
            for &(a, b) in &self.graph.edges {
                let pa = to_screen(self.graph.nodes[a as usize].pos);
                let pb = to_screen(self.graph.nodes[b as usize].pos);
                painter.stroke_line(
                    pa,
                    pb,
                    1.0,
                    Rgba8::from_hsla(175.0, 0.6, 0.65, 0.3 * graph_gate * env),
                );
            }
            for node in &self.graph.nodes {
                let pulse = node.pulse(frame.elapsed_ms);
                painter.fill_circle(
                    to_screen(node.pos),
                    node.size * 0.9,
                    Rgba8::from_hsla(175.0, 0.7, 0.7, 0.8 * pulse * graph_gate * env),
                );
            }
        }

        Ok(())
    }
}
