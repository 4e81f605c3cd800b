//! The phase table and the default intro schedule.

/// Phase windows, entries and the timeline compositing pass.
pub mod phase;

use crate::config::IntroConfig;
use crate::foundation::error::StarglassResult;
use crate::scene::cosmos::{CosmosPeriods, CosmosScene};
use crate::scene::datastream::DatastreamScene;
use crate::scene::exterior::ExteriorScene;
use crate::scene::eyepiece::EyepieceScene;
use crate::scene::interior::InteriorScene;
use crate::scene::optics::OpticsScene;
use crate::scene::orbit_lines::OrbitLinesScene;
use phase::{PhaseWindow, Timeline, TimelineEntry};

// Per-scene seed offsets keep pool streams independent while every scene
// still derives from the one configured base seed.
const SEED_ORBIT: u64 = 0x0101;
const SEED_EXTERIOR: u64 = 0x0211;
const SEED_INTERIOR: u64 = 0x0323;
const SEED_EYEPIECE: u64 = 0x0437;
const SEED_OPTICS: u64 = 0x0541;
const SEED_DATASTREAM: u64 = 0x0653;
const SEED_COSMOS: u64 = 0x0761;

/// Build the default seven-scene intro timeline from `config`, in
/// back-to-front compositing order.
pub fn intro_timeline(config: &IntroConfig) -> StarglassResult<Timeline> {
    config.validate()?;
    let knees = (config.fade_knee_in, config.fade_knee_out);
    let seed = config.seed;
    let window = |[start, end]: [f64; 2]| PhaseWindow::new(start, end);

    Ok(Timeline::new(vec![
        TimelineEntry {
            scene: Box::new(OrbitLinesScene::new(seed.wrapping_add(SEED_ORBIT), knees)),
            window: window(config.orbit_lines_ms)?,
        },
        TimelineEntry {
            scene: Box::new(ExteriorScene::new(seed.wrapping_add(SEED_EXTERIOR), knees)),
            window: window(config.exterior_ms)?,
        },
        TimelineEntry {
            scene: Box::new(InteriorScene::new(seed.wrapping_add(SEED_INTERIOR), knees)),
            window: window(config.interior_ms)?,
        },
        TimelineEntry {
            scene: Box::new(EyepieceScene::new(seed.wrapping_add(SEED_EYEPIECE), knees)),
            window: window(config.eyepiece_ms)?,
        },
        TimelineEntry {
            scene: Box::new(OpticsScene::new(seed.wrapping_add(SEED_OPTICS), knees)),
            window: window(config.optics_ms)?,
        },
        TimelineEntry {
            scene: Box::new(DatastreamScene::new(
                seed.wrapping_add(SEED_DATASTREAM),
                knees,
            )),
            window: window(config.data_transform_ms)?,
        },
        TimelineEntry {
            scene: Box::new(CosmosScene::new(
                seed.wrapping_add(SEED_COSMOS),
                knees,
                CosmosPeriods {
                    shockwave_ms: config.shockwave_period_ms,
                    flash_ms: config.flash_period_ms,
                    ripple_ms: config.ripple_period_ms,
                },
            )),
            window: window(config.cosmos_ms)?,
        },
    ]))
}
