//! Starglass renders a timed, multi-phase decorative intro animation and a
//! persistent ambient background, entirely on the CPU.
//!
//! The engine is a phased sequencer: scenes occupy overlapping time windows,
//! derive a local progress from the shared clock, and blend purely through
//! their own smoothstep fade envelopes; compositing order is the listed
//! window order, and there is no separate blending step. Particle pools are
//! generated from a seeded deterministic RNG so resizes and replays keep a
//! stable visual character.
//!
//! The public API is host-driven:
//!
//! - Build an [`IntroConfig`] (or take the defaults) and a
//!   [`SequenceController`]
//! - Drive it from the host's animation-frame callback via a
//!   [`TickScheduler`]
//! - `skip`/`resize`/`stop` are safe at any point; the completion callback
//!   fires exactly once
//! - [`PageFlow`] wraps the landing → main-site transition and the
//!   never-ending [`AmbientController`] background
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod pool;
mod render;

pub(crate) mod scene;

/// Timing configuration and named default constants.
pub mod config;
/// Sequence orchestration: intro controller, ambient loop, page flow.
pub mod sequence;
/// Phase windows and the default intro schedule.
pub mod timeline;

pub use crate::config::IntroConfig;
pub use crate::foundation::core::{
    Affine, BezPath, Circle, FrameRGBA, Point, Rect, Rgba8, Vec2, Viewport,
};
pub use crate::foundation::error::{StarglassError, StarglassResult};
pub use crate::foundation::math::{ease_in, ease_in_out, ease_out, fade_envelope, lerp, smoothstep};
pub use crate::foundation::rng::SeededRng;
pub use crate::render::painter::Painter;
pub use crate::scene::{SceneFrame, SceneRenderer};
pub use crate::sequence::ambient_loop::AmbientController;
pub use crate::sequence::controller::{
    SequenceController, SequenceState, TickHandle, TickScheduler,
};
pub use crate::sequence::page::{InputEvent, PageFlow, PagePhase, PageTick};
pub use crate::timeline::intro_timeline;
pub use crate::timeline::phase::{PhaseWindow, Timeline, TimelineEntry};
