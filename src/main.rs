//! Hit The Island entry point
//!
//! Native builds run a headless demo session: the autopilot plays until the
//! balls run out or the frame budget is spent, then the final frame is
//! logged as JSON.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Hit The Island (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser drives the library directly; nothing to do here
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;

    use hit_island::consts::FRAME_MS;
    use hit_island::sim::{GameEvent, GameState, TickInput, tick};
    use hit_island::{DifficultyPreset, FrameView, Tuning};

    const DEFAULT_SEED: u64 = 0x15_1A_4D;
    /// One minute of frames
    const DEFAULT_FRAMES: u64 = 60_000 / FRAME_MS;

    pub fn run() -> anyhow::Result<()> {
        let tuning = load_tuning()?;
        let seed = env_number("HIT_ISLAND_SEED")?.unwrap_or(DEFAULT_SEED);
        let frames = env_number("HIT_ISLAND_FRAMES")?.unwrap_or(DEFAULT_FRAMES);

        let mut state = GameState::with_tuning(seed, tuning);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let mut collected = 0u32;
        let mut frame = 0;
        while frame < frames && !state.is_game_over() {
            for event in tick(&mut state, &input, FRAME_MS) {
                match event {
                    GameEvent::BonusCollected(_) => collected += 1,
                    GameEvent::SpeedUp { hits } => log::info!("Speed up after {} hits", hits),
                    _ => {}
                }
            }
            frame += 1;
        }

        log::info!(
            "Finished after {} frames ({} ms): {}, {} bonuses collected, game over: {}",
            frame,
            state.time_ms,
            state.score_text(),
            collected,
            state.is_game_over()
        );

        let view = FrameView::capture(&state)
            .to_json()
            .context("serializing final frame")?;
        println!("{}", view);
        Ok(())
    }

    /// Tuning from the JSON file given as the first argument, else from the
    /// `HIT_ISLAND_PRESET` preset, else defaults
    fn load_tuning() -> anyhow::Result<Tuning> {
        if let Some(path) = std::env::args().nth(1) {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {}", path))?;
            let tuning =
                Tuning::from_json(&json).with_context(|| format!("parsing tuning file {}", path))?;
            log::info!("Loaded tuning from {}", path);
            return Ok(tuning);
        }

        match std::env::var("HIT_ISLAND_PRESET") {
            Ok(name) => match DifficultyPreset::from_str(&name) {
                Some(preset) => {
                    log::info!("Using {} preset", preset.as_str());
                    Ok(Tuning::from_preset(preset))
                }
                None => {
                    log::warn!("Unknown preset '{}', using defaults", name);
                    Ok(Tuning::default())
                }
            },
            Err(_) => Ok(Tuning::default()),
        }
    }

    fn env_number(key: &str) -> anyhow::Result<Option<u64>> {
        match std::env::var(key) {
            Ok(value) => value
                .parse()
                .map(Some)
                .with_context(|| format!("{} must be a number, got '{}'", key, value)),
            Err(_) => Ok(None),
        }
    }
}
