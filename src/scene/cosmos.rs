use crate::foundation::core::{Point, Rect, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{ease_out, fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::celestial::{CelestialPool, COMET_TAIL_SAMPLES};
use crate::pool::galaxy::GalaxyPool;
use crate::pool::market::MarketPool;
use crate::pool::neural::NeuralPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// Star pairs closer than this (fraction of min dimension) get a filament.
const FILAMENT_DISTANCE_FRAC: f64 = 0.085;
const GALAXY_RADIUS_FRAC: f64 = 0.34;
const GALAXY_ROTATION_RAD_PER_SEC: f64 = 0.05;

/// Periodic-effect timing. These key off absolute elapsed time, not local
/// progress, so a mid-scene pool rebuild never re-phases the pulses.
pub(crate) struct CosmosPeriods {
    pub(crate) shockwave_ms: f64,
    pub(crate) flash_ms: f64,
    pub(crate) ripple_ms: f64,
}

/// The financial cosmos: a spiral galaxy whose structure is market data.
/// Sub-effects activate in a staggered sequence, each through its own
/// smoothstep window of local progress.
pub(crate) struct CosmosScene {
    seed: u64,
    knees: (f64, f64),
    periods: CosmosPeriods,
    galaxy: GalaxyPool,
    market: MarketPool,
    neural: NeuralPool,
    celestial: CelestialPool,
}

impl CosmosScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64), periods: CosmosPeriods) -> Self {
        Self {
            seed,
            knees,
            periods,
            galaxy: GalaxyPool::default(),
            market: MarketPool::default(),
            neural: NeuralPool::default(),
            celestial: CelestialPool::default(),
        }
    }

    fn draw_galaxy(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let radius = frame.viewport.min_dim() * GALAXY_RADIUS_FRAC;
        let rotation = frame.elapsed_ms * 0.001 * GALAXY_ROTATION_RAD_PER_SEC;
        for star in &self.galaxy.stars {
            let pos = star.position(center, radius, rotation);
            let pulse = 0.75 + 0.25 * (frame.elapsed_ms * 0.001 + star.pulse_phase).sin();
            painter.fill_circle(
                pos,
                star.size,
                Rgba8::from_hsla(star.hue, 0.7, 0.7, 0.85 * pulse * gate * env),
            );
        }
    }

    fn draw_filaments(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let radius = frame.viewport.min_dim() * GALAXY_RADIUS_FRAC;
        let rotation = frame.elapsed_ms * 0.001 * GALAXY_ROTATION_RAD_PER_SEC;
        let threshold = frame.viewport.min_dim() * FILAMENT_DISTANCE_FRAC;
        let positions: Vec<Point> = self
            .galaxy
            .stars
            .iter()
            .map(|s| s.position(center, radius, rotation))
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
                    0.8,
                    Rgba8::from_hsla(220.0, 0.5, 0.72, 0.22 * near * gate * env),
                );
            }
        }
    }

    fn draw_candles(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let min_dim = frame.viewport.min_dim();
        let column_h = min_dim * 0.3;
        let candle_w = min_dim * 0.012;
        let n = self.market.candles.len().max(1) as f64;
        // Two mirrored columns flanking the core.
        for mirror in [-1.0, 1.0] {
            let x0 = center.x + mirror * min_dim * 0.42;
            for (i, candle) in self.market.candles.iter().enumerate() {
                let s = candle.sample(frame.elapsed_ms);
                let x = x0 + mirror * (i as f64 / n) * min_dim * 0.05;
                let y_of = |price: f64| center.y + column_h * 0.5 - price * column_h;
                let up = s.close >= s.open;
                let hue = if up { 145.0 } else { 5.0 };
                painter.stroke_line(
                    Point::new(x, y_of(s.high)),
                    Point::new(x, y_of(s.low)),
                    1.0,
                    Rgba8::from_hsla(hue, 0.6, 0.6, 0.5 * gate * env),
                );
                let (top, bottom) = if up { (s.close, s.open) } else { (s.open, s.close) };
                painter.fill_rect(
                    Rect::new(
                        x - candle_w * 0.5,
                        y_of(top),
                        x + candle_w * 0.5,
                        y_of(bottom),
                    ),
                    Rgba8::from_hsla(hue, 0.65, 0.55, 0.7 * gate * env),
                );
            }
        }
    }

    fn draw_order_book(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let min_dim = frame.viewport.min_dim();
        let bar_h = min_dim * 0.008;
        let max_w = min_dim * 0.12;
        let mut bid_row = 0.0;
        let mut ask_row = 0.0;
        for bar in &self.market.bars {
            let depth = bar.depth_at(frame.elapsed_ms);
            let row = if bar.bid { &mut bid_row } else { &mut ask_row };
            let y = center.y + min_dim * 0.28 + *row * bar_h * 1.6;
            *row += 1.0;
            let (hue, dir) = if bar.bid { (150.0, -1.0) } else { (8.0, 1.0) };
            let x0 = center.x + dir * min_dim * 0.02;
            painter.fill_rect(
                Rect::new(
                    x0.min(x0 + dir * depth * max_w),
                    y,
                    x0.max(x0 + dir * depth * max_w),
                    y + bar_h,
                ),
                Rgba8::from_hsla(hue, 0.6, 0.55, 0.55 * gate * env),
            );
        }
    }

    fn draw_comets(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let scale = frame.viewport.min_dim();
        for comet in &self.celestial.comets {
            let head_angle = comet.angle(frame.elapsed_ms);
            // Tail: step backward along the orbit path.
            for i in 1..=COMET_TAIL_SAMPLES {
                let back = head_angle
                    - comet.tail_step * i as f64 * comet.angular_speed.signum();
                let pos = comet.at_angle(center, scale, back);
                let fade = 1.0 - i as f64 / COMET_TAIL_SAMPLES as f64;
                painter.fill_circle(
                    pos,
                    comet.size * (0.3 + fade * 0.7),
                    Rgba8::from_hsla(comet.hue, 0.7, 0.65, 0.3 * fade * gate * env),
                );
            }
            let head = comet.position(center, scale, frame.elapsed_ms);
            painter.fill_circle(
                head,
                comet.size,
                Rgba8::from_hsla(comet.hue, 0.8, 0.78, 0.9 * gate * env),
            );
        }
    }

    fn draw_neural(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let span = frame.viewport.min_dim() * 0.5;
        let to_screen = |p: Point| {
            Point::new(
                center.x + (p.x - 0.5) * span,
                center.y + (p.y - 0.5) * span * 0.8,
            )
        };
        for &(a, b) in &self.neural.edges {
            painter.stroke_line(
                to_screen(self.neural.nodes[a as usize].pos),
                to_screen(self.neural.nodes[b as usize].pos),
                0.8,
                Rgba8::from_hsla(265.0, 0.5, 0.68, 0.18 * gate * env),
            );
        }
        for node in &self.neural.nodes {
            let pulse = node.pulse(frame.elapsed_ms);
            painter.fill_circle(
                to_screen(node.pos),
                node.size,
                Rgba8::from_hsla(270.0, 0.6, 0.72, 0.5 * pulse * gate * env),
            );
        }
    }

    fn draw_shockwave(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        if self.neural.nodes.is_empty() {
            return;
        }
        let period = self.periods.shockwave_ms;
        let cycle = (frame.elapsed_ms / period).floor() as usize;
        let t = (frame.elapsed_ms % period) / period;
        // Ring origin walks the node list one firing at a time.
        let node = &self.neural.nodes[cycle % self.neural.nodes.len()];
        let center = frame.viewport.center();
        let span = frame.viewport.min_dim() * 0.5;
        let origin = Point::new(
            center.x + (node.pos.x - 0.5) * span,
            center.y + (node.pos.y - 0.5) * span * 0.8,
        );
        let radius = ease_out(t) * frame.viewport.min_dim() * 0.22;
        painter.stroke_circle(
            origin,
            radius,
            2.0,
            Rgba8::from_hsla(275.0, 0.7, 0.75, 0.5 * (1.0 - t) * gate * env),
        );
    }

    fn draw_flash(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        if self.galaxy.stars.is_empty() {
            return;
        }
        let period = self.periods.flash_ms;
        let cycle = (frame.elapsed_ms / period).floor() as usize;
        let t = (frame.elapsed_ms % period) / period;
        // Flashes are short: only the first fifth of each cycle lights up.
        if t > 0.2 {
            return;
        }
        let spike = 1.0 - t / 0.2;
        let star = &self.galaxy.stars[cycle % self.galaxy.stars.len()];
        let center = frame.viewport.center();
        let radius = frame.viewport.min_dim() * GALAXY_RADIUS_FRAC;
        let rotation = frame.elapsed_ms * 0.001 * GALAXY_ROTATION_RAD_PER_SEC;
        let pos = star.position(center, radius, rotation);
        painter.fill_circle(
            pos,
            star.size * (2.0 + spike * 5.0),
            Rgba8::from_hsla(star.hue, 0.5, 0.9, 0.6 * spike * gate * env),
        );
    }

    fn draw_ripple(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let period = self.periods.ripple_ms;
        let t = (frame.elapsed_ms % period) / period;
        let center = frame.viewport.center();
        let radius = ease_out(t) * frame.viewport.min_dim() * 0.55;
        painter.stroke_circle(
            center,
            radius,
            1.4,
            Rgba8::from_hsla(210.0, 0.5, 0.7, 0.25 * (1.0 - t) * gate * env),
        );
    }

    fn draw_systems(&self, painter: &mut Painter, frame: SceneFrame, gate: f64, env: f64) {
        let center = frame.viewport.center();
        let scale = frame.viewport.min_dim();
        for system in &self.celestial.systems {
            let bary = system.barycenter(center, scale, frame.elapsed_ms);
            painter.fill_circle(
                bary,
                system.star_size,
                Rgba8::from_hsla(system.hue, 0.8, 0.72, 0.85 * gate * env),
            );
            for &(orbit_frac, speed, phase) in &system.planets {
                let r = orbit_frac * scale;
                painter.stroke_circle(
                    bary,
                    r,
                    0.6,
                    Rgba8::from_hsla(system.hue, 0.4, 0.6, 0.12 * gate * env),
                );
                let a = phase + frame.elapsed_ms * 0.001 * speed;
                painter.fill_circle(
                    Point::new(bary.x + a.cos() * r, bary.y + a.sin() * r),
                    1.1,
                    Rgba8::from_hsla(system.hue, 0.5, 0.8, 0.8 * gate * env),
                );
            }
        }
    }
}

impl SceneRenderer for CosmosScene {
    fn name(&self) -> &'static str {
        "cosmos"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.galaxy = GalaxyPool::generate(viewport, &mut rng);
        self.market = MarketPool::generate(viewport, &mut rng);
        self.neural = NeuralPool::generate(viewport, &mut rng);
        self.celestial = CelestialPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let center = frame.viewport.center();
        let min_dim = frame.viewport.min_dim();
        let p = frame.progress;

        // Central glow first, everything else stacks over it.
        let glow_gate = window(0.0, 0.08, p);
        if glow_gate > 0.0 {
            for (mult, alpha) in [(0.16, 0.25), (0.08, 0.45), (0.035, 0.85)] {
                painter.fill_circle(
                    center,
                    min_dim * mult,
                    Rgba8::from_hsla(45.0, 0.8, 0.72, alpha * glow_gate * env),
                );
            }
        }

        let halo_gate = window(0.04, 0.12, p);
        if halo_gate > 0.0 {
            for halo in &self.celestial.halos {
                painter.stroke_circle(
                    center,
                    halo.radius_frac * min_dim,
                    halo.width,
                    Rgba8::from_hsla(50.0, 0.6, 0.68, halo.alpha(frame.elapsed_ms) * halo_gate * env),
                );
            }
        }

        let galaxy_gate = window(0.06, 0.18, p);
        if galaxy_gate > 0.0 {
            self.draw_galaxy(painter, frame, galaxy_gate, env);
        }

        let filament_gate = window(0.14, 0.26, p);
        if filament_gate > 0.0 {
            self.draw_filaments(painter, frame, filament_gate, env);
        }

        let candle_gate = window(0.22, 0.34, p);
        if candle_gate > 0.0 {
            self.draw_candles(painter, frame, candle_gate, env);
        }

        let book_gate = window(0.3, 0.42, p);
        if book_gate > 0.0 {
            self.draw_order_book(painter, frame, book_gate, env);
        }

        let binary_gate = window(0.36, 0.48, p);
        if binary_gate > 0.0 {
            for pair in &self.celestial.binaries {
                let (a, b) = pair.positions(center, min_dim, frame.elapsed_ms);
                painter.stroke_line(
                    a,
                    b,
                    0.7,
                    Rgba8::from_hsla(pair.hue, 0.4, 0.6, 0.2 * binary_gate * env),
                );
                for pos in [a, b] {
                    painter.fill_circle(
                        pos,
                        pair.size,
                        Rgba8::from_hsla(pair.hue, 0.7, 0.75, 0.8 * binary_gate * env),
                    );
                }
            }
        }

        let comet_gate = window(0.42, 0.54, p);
        if comet_gate > 0.0 {
            self.draw_comets(painter, frame, comet_gate, env);
        }

        let neural_gate = window(0.5, 0.62, p);
        if neural_gate > 0.0 {
            self.draw_neural(painter, frame, neural_gate, env);
        }

        let shockwave_gate = window(0.54, 0.66, p);
        if shockwave_gate > 0.0 {
            self.draw_shockwave(painter, frame, shockwave_gate, env);
        }

        let flash_gate = window(0.6, 0.72, p);
        if flash_gate > 0.0 {
            self.draw_flash(painter, frame, flash_gate, env);
        }

        let ripple_gate = window(0.64, 0.78, p);
        if ripple_gate > 0.0 {
            self.draw_ripple(painter, frame, ripple_gate, env);
        }

        let system_gate = window(0.7, 0.85, p);
        if system_gate > 0.0 {
            self.draw_systems(painter, frame, system_gate, env);
        }

        // Sparks fly throughout once the galaxy is lit.
        let spark_gate = window(0.2, 0.4, p);
        if spark_gate > 0.0 {
            for spark in &self.celestial.sparks {
                let cycle = spark.cycle(frame.elapsed_ms);
                let dist = cycle * spark.reach_frac * min_dim;
                let dir = Point::new(spark.direction.cos(), spark.direction.sin());
                let head = Point::new(center.x + dir.x * dist, center.y + dir.y * dist);
                let tail = Point::new(
                    head.x - dir.x * spark.length,
                    head.y - dir.y * spark.length,
                );
                painter.stroke_line(
                    tail,
                    head,
                    1.0,
                    Rgba8::from_hsla(spark.hue, 0.7, 0.72, 0.4 * (1.0 - cycle) * spark_gate * env),
                );
            }
        }

        Ok(())
    }
}
