//! Render sampled frames of the default intro to PNG files.
//!
//! ```text
//! cargo run --example dump_frames -- [out_dir]
//! ```

use starglass::{
    FrameRGBA, IntroConfig, SequenceController, TickHandle, TickScheduler, Viewport,
};

/// Minimal pump: one pending slot, fired immediately by the drive loop.
struct ImmediateScheduler {
    next: u64,
    pending: Option<TickHandle>,
}

impl TickScheduler for ImmediateScheduler {
    fn request(&mut self) -> TickHandle {
        let handle = TickHandle(self.next);
        self.next += 1;
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

fn save_png(frame: &FrameRGBA, path: &std::path::Path) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| anyhow::anyhow!("frame buffer size mismatch"))?;
    img.save(path)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "intro_frames".to_string());
    let out_dir = std::path::PathBuf::from(out_dir);
    std::fs::create_dir_all(&out_dir)?;

    let config = IntroConfig::default();
    let total_ms = config.total_ms;
    let mut controller = SequenceController::new(config)?;
    let mut scheduler = ImmediateScheduler {
        next: 0,
        pending: None,
    };

    controller.start(Viewport::new(960, 540), &mut scheduler, || {
        println!("intro complete");
    })?;

    // Drive at 60fps, saving one frame per second of animation time.
    let mut now = 0.0;
    let mut saved = 0_u32;
    let mut next_save = 0.0;
    while scheduler.pending.take().is_some() {
        if let Some(frame) = controller.on_frame(&mut scheduler, now)? {
            if now >= next_save {
                let path = out_dir.join(format!("frame_{saved:03}.png"));
                save_png(&frame, &path)?;
                saved += 1;
                next_save += 1_000.0;
            }
        }
        now += 1_000.0 / 60.0;
    }

    println!("wrote {saved} frames ({:.0}ms of animation) to {}", total_ms, out_dir.display());
    Ok(())
}
