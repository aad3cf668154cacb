//! Cube Runner entry point.
//!
//! The game is headless: it fills a sprite-instance buffer and sound/event
//! queues each frame for a host renderer to consume. Run standalone, this
//! binary drives a scripted session at a fixed 60 Hz so the whole loop
//! (menus, world build, simulation, HUD) can be exercised and inspected
//! from the log.

use std::path::Path;

use cuberun_engine::{AssetManifest, GameRunner, InputEvent};
use cuberun_game::actions::keys;
use cuberun_game::audio;
use cuberun_game::consts::FIXED_DT;
use cuberun_game::{CubeRunner, Settings};

const SETTINGS_PATH: &str = "settings.json";
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_PATH));
    log::info!(
        "settings: volume {:.1}, cube {}",
        settings.sound_volume,
        settings.cube_color.label()
    );

    let manifest = match AssetManifest::from_json(audio::MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            log::error!("asset manifest is broken: {e}");
            return;
        }
    };
    log::info!(
        "assets: {} atlases, {} sprites, {} sounds",
        manifest.atlases.len(),
        manifest.sprites.len(),
        manifest.sounds.len()
    );

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut runner = GameRunner::new(CubeRunner::new(settings));
    runner.init();

    // Scripted session: confirm into the game on the first frame, then hop
    // every second and a half.
    for frame in 0..frames {
        match frame {
            1 => runner.push_input(InputEvent::KeyDown { key_code: keys::CONFIRM }),
            2 => runner.push_input(InputEvent::KeyUp { key_code: keys::CONFIRM }),
            _ => {
                if frame > 2 && frame % 90 == 0 {
                    runner.push_input(InputEvent::KeyDown { key_code: keys::CONFIRM });
                }
                if frame > 2 && frame % 90 == 10 {
                    runner.push_input(InputEvent::KeyUp { key_code: keys::CONFIRM });
                }
            }
        }

        runner.tick(FIXED_DT);

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} instances, {} sounds queued",
                runner.render_buffer().instance_count(),
                runner.sounds().len()
            );
        }
    }

    let game = runner.game();
    log::info!(
        "done after {frames} frames: screen {:?}, health {:?}",
        game.screen_id(),
        game.health()
    );

    if let Err(e) = game.settings().save(Path::new(SETTINGS_PATH)) {
        log::warn!("could not save settings: {e}");
    }
}
