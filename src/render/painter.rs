use crate::foundation::core::{BezPath, FrameRGBA, Point, Rect, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use kurbo::Shape;

/// CPU painter over `vello_cpu`, owned by whichever sequence is active.
///
/// Scene code builds geometry in crate `kurbo` types and straight-alpha
/// [`Rgba8`]; conversion to `vello_cpu` types and premultiplication happen
/// here, at the boundary. All strokes are expanded to fills with
/// `kurbo::stroke` so the raster side only ever fills paths.
///
/// A degenerate viewport (zero width or height) produces a painter with no
/// raster target: every draw call is a deterministic no-op and
/// [`Painter::finish_frame`] returns an empty frame.
pub struct Painter {
    viewport: Viewport,
    target: Option<Target>,
}

struct Target {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl Painter {
    /// Create a painter for `viewport`.
    pub fn new(viewport: Viewport) -> StarglassResult<Self> {
        let target = if viewport.is_degenerate() {
            None
        } else {
            let (w, h) = viewport.as_u16()?;
            Some(Target {
                ctx: vello_cpu::RenderContext::new(w, h),
                pixmap: vello_cpu::Pixmap::new(w, h),
            })
        };
        Ok(Self { viewport, target })
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recreate the raster target for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) -> StarglassResult<()> {
        *self = Self::new(viewport)?;
        Ok(())
    }

    /// Start a frame: reset the context and fill the whole surface with
    /// `clear`.
    pub fn begin_frame(&mut self, clear: Rgba8) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        target.ctx.reset();
        target
            .ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        target.ctx.set_paint(color_to_cpu(clear));
        let w = f64::from(self.viewport.width);
        let h = f64::from(self.viewport.height);
        target
            .ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some(target) = self.target.as_mut() else {
            return;
        };
        target.ctx.set_paint(color_to_cpu(color));
        target
            .ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }

    /// Fill an arbitrary path.
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some(target) = self.target.as_mut() else {
            return;
        };
        target.ctx.set_paint(color_to_cpu(color));
        target.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if radius <= 0.0 {
            return;
        }
        let path = kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE);
        self.fill_path(&path, color);
    }

    /// Stroke a circle outline with `width`.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba8) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let path = kurbo::Circle::new(center, radius).to_path(PATH_TOLERANCE);
        self.stroke_path(&path, width, color);
    }

    /// Stroke a straight segment from `a` to `b`.
    pub fn stroke_line(&mut self, a: Point, b: Point, width: f64, color: Rgba8) {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        self.stroke_path(&path, width, color);
    }

    /// Stroke an arbitrary path by expanding it to a fill.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if width <= 0.0 || color.a == 0 {
            return;
        }
        let style = kurbo::Stroke::new(width);
        let filled = kurbo::stroke(
            path.iter(),
            &style,
            &kurbo::StrokeOpts::default(),
            PATH_TOLERANCE,
        );
        self.fill_path(&filled, color);
    }

    /// Paint everything outside the circular aperture solid `color`.
    ///
    /// True clipping, not dimming: the covered region is an annulus from the
    /// aperture radius out past the farthest viewport corner, produced by
    /// stroke expansion (the stroker emits correctly wound inner/outer
    /// contours, so no fill-rule gymnastics are needed).
    pub fn fill_outside_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        let w = f64::from(self.viewport.width);
        let h = f64::from(self.viewport.height);
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(0.0, h),
            Point::new(w, h),
        ];
        let outer = corners
            .iter()
            .map(|c| center.distance(*c))
            .fold(0.0_f64, f64::max)
            + 2.0;
        if outer <= radius {
            return;
        }
        let radius = radius.max(0.0);
        let mid = (radius + outer) / 2.0;
        let band = outer - radius;
        self.stroke_circle(center, mid, band, color);
    }

    /// Resolve the queued paints and read back the finished frame.
    pub fn finish_frame(&mut self) -> StarglassResult<FrameRGBA> {
        let Some(target) = self.target.as_mut() else {
            return Ok(FrameRGBA {
                width: self.viewport.width,
                height: self.viewport.height,
                data: Vec::new(),
                premultiplied: true,
            });
        };
        target.ctx.flush();
        target.ctx.render_to_pixmap(&mut target.pixmap);
        Ok(FrameRGBA {
            width: self.viewport.width,
            height: self.viewport.height,
            data: target.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

const PATH_TOLERANCE: f64 = 0.1;

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
