//! The top-level screen state machine.
//!
//! Exactly one screen is active per frame. Transitions run the outgoing
//! screen's `exit` before the incoming screen's `enter`, so every screen
//! frees exactly what it acquired. The play session is owned separately
//! from the active screen because it stays resident while the pause and
//! options screens sit on top of it.

use cuberun_engine::{EngineContext, FontConfig, Game, GameConfig, InputQueue, RenderContext};

use crate::actions::{ActionState, InputTracker};
use crate::consts;
use crate::screens::finish::FinishScreen;
use crate::screens::frontend::{FrontendAction, FrontendMenu};
use crate::screens::options::OptionsMenu;
use crate::screens::pause::{PauseAction, PauseMenu};
use crate::screens::play::{PlayOutcome, PlaySession};
use crate::screens::ScreenId;
use crate::settings::Settings;

enum Screen {
    Frontend(FrontendMenu),
    Play,
    Options(OptionsMenu),
    Pause(PauseMenu),
    Finish(FinishScreen),
}

impl Screen {
    fn id(&self) -> ScreenId {
        match self {
            Screen::Frontend(_) => ScreenId::Frontend,
            Screen::Play => ScreenId::Play,
            Screen::Options(_) => ScreenId::Options,
            Screen::Pause(_) => ScreenId::Pause,
            Screen::Finish(_) => ScreenId::Finish,
        }
    }
}

pub struct CubeRunner {
    settings: Settings,
    tracker: InputTracker,
    /// None until `init` runs; update/render outside the bracket is a bug.
    screen: Option<Screen>,
    /// The live play state. Survives Pause and Options-from-pause.
    session: Option<PlaySession>,
    /// Whether the menu currently on screen sits on top of a paused session.
    paused_session: bool,
    font: FontConfig,
}

impl CubeRunner {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tracker: InputTracker::new(),
            screen: None,
            session: None,
            paused_session: false,
            font: FontConfig::default(),
        }
    }

    pub fn screen_id(&self) -> Option<ScreenId> {
        self.screen.as_ref().map(Screen::id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Player health of the live session, if any.
    pub fn health(&self) -> Option<u32> {
        self.session.as_ref().map(PlaySession::health)
    }

    fn advance(&mut self, screen: Screen, ctx: &mut EngineContext, actions: &ActionState) -> Screen {
        match screen {
            Screen::Frontend(mut menu) => match menu.update(actions) {
                Some(FrontendAction::Start) => {
                    menu.exit(ctx);
                    log::info!("screen: frontend -> play");
                    self.session = Some(PlaySession::enter(ctx, &self.settings));
                    Screen::Play
                }
                Some(FrontendAction::Options) => {
                    menu.exit(ctx);
                    log::info!("screen: frontend -> options");
                    Screen::Options(OptionsMenu::enter(ctx))
                }
                None => Screen::Frontend(menu),
            },

            Screen::Play => {
                let session = self
                    .session
                    .as_mut()
                    .expect("play screen requires a session");
                match session.update(ctx, actions) {
                    PlayOutcome::Running => Screen::Play,
                    PlayOutcome::PauseRequested => {
                        log::info!("screen: play -> pause");
                        self.paused_session = true;
                        session.set_visible(ctx, false);
                        Screen::Pause(PauseMenu::enter(ctx))
                    }
                    PlayOutcome::Finished => {
                        log::info!("screen: play -> finish");
                        Screen::Finish(FinishScreen::enter(ctx))
                    }
                }
            }

            Screen::Options(mut menu) => {
                if menu.update(actions, &mut self.settings, ctx) {
                    menu.exit(ctx);
                    if self.paused_session {
                        log::info!("screen: options -> pause");
                        Screen::Pause(PauseMenu::enter(ctx))
                    } else {
                        log::info!("screen: options -> frontend");
                        Screen::Frontend(FrontendMenu::enter(ctx))
                    }
                } else {
                    Screen::Options(menu)
                }
            }

            Screen::Pause(mut menu) => match menu.update(actions) {
                Some(PauseAction::Continue) => {
                    menu.exit(ctx);
                    log::info!("screen: pause -> play");
                    // Continue re-enters the play state from scratch: the
                    // paused session is released and a fresh one built.
                    if let Some(old) = self.session.take() {
                        old.exit(ctx);
                    }
                    self.session = Some(PlaySession::enter(ctx, &self.settings));
                    self.paused_session = false;
                    Screen::Play
                }
                Some(PauseAction::Options) => {
                    menu.exit(ctx);
                    log::info!("screen: pause -> options");
                    Screen::Options(OptionsMenu::enter(ctx))
                }
                Some(PauseAction::Quit) => {
                    menu.exit(ctx);
                    log::info!("screen: pause -> frontend");
                    if let Some(session) = self.session.take() {
                        session.exit(ctx);
                    }
                    self.paused_session = false;
                    Screen::Frontend(FrontendMenu::enter(ctx))
                }
                None => Screen::Pause(menu),
            },

            // Reserved: the finish screen accepts no transitions.
            Screen::Finish(screen) => Screen::Finish(screen),
        }
    }
}

impl Game for CubeRunner {
    fn config(&self) -> GameConfig {
        consts::play_config()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!("screen: frontend");
        self.screen = Some(Screen::Frontend(FrontendMenu::enter(ctx)));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let actions = self.tracker.snapshot(input);
        let Some(screen) = self.screen.take() else {
            debug_assert!(false, "update called before init");
            return;
        };
        let next = self.advance(screen, ctx, &actions);
        self.screen = Some(next);
    }

    fn render(&self, rc: &mut RenderContext) {
        let Some(screen) = self.screen.as_ref() else {
            debug_assert!(false, "render called before init");
            return;
        };
        match screen {
            Screen::Frontend(menu) => menu.render(rc, &self.font),
            Screen::Play => {
                if let Some(session) = self.session.as_ref() {
                    session.render(rc, &self.font);
                }
            }
            Screen::Options(menu) => menu.render(rc, &self.font, &self.settings),
            Screen::Pause(menu) => menu.render(rc, &self.font),
            Screen::Finish(screen) => screen.render(rc, &self.font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::keys;
    use crate::screens::TAG_UI_ICON;
    use crate::world::{TAG_GROUND, TAG_PLATFORM, TAG_PLAYER};
    use cuberun_engine::{GameRunner, InputEvent};

    const DT: f32 = 1.0 / 60.0;

    fn runner() -> GameRunner<CubeRunner> {
        let mut runner = GameRunner::new(CubeRunner::new(Settings::default()));
        runner.init();
        runner
    }

    fn tap(runner: &mut GameRunner<CubeRunner>, key: u32) {
        runner.push_input(InputEvent::KeyDown { key_code: key });
        runner.tick(DT);
        runner.push_input(InputEvent::KeyUp { key_code: key });
        runner.tick(DT);
    }

    #[test]
    fn init_lands_on_the_frontend() {
        let runner = runner();
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Frontend));
        assert_eq!(runner.context().scene.count_by_tag(TAG_UI_ICON), 1);
    }

    #[test]
    fn confirm_on_start_builds_the_play_world() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);

        assert_eq!(runner.game().screen_id(), Some(ScreenId::Play));
        let ctx = runner.context();
        assert_eq!(ctx.scene.count_by_tag(TAG_PLAYER), 1);
        assert_eq!(ctx.scene.count_by_tag(TAG_GROUND), 2);
        assert_eq!(ctx.scene.count_by_tag(TAG_PLATFORM), 10);
        assert_eq!(ctx.physics.body_count(), 13);
        // The frontend released its icon on the way out.
        assert_eq!(ctx.scene.count_by_tag(TAG_UI_ICON), 0);
    }

    #[test]
    fn frontend_to_options_and_back() {
        let mut runner = runner();
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::CONFIRM);
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Options));
        assert_eq!(runner.context().scene.count_by_tag(TAG_UI_ICON), 1);

        tap(&mut runner, keys::CANCEL);
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Frontend));
        // One icon at a time: the options icon was released, the frontend's
        // re-acquired.
        assert_eq!(runner.context().scene.count_by_tag(TAG_UI_ICON), 1);
    }

    #[test]
    fn pause_keeps_the_session_resident() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);
        tap(&mut runner, keys::PAUSE);

        assert_eq!(runner.game().screen_id(), Some(ScreenId::Pause));
        // Bodies survive the pause; the level is only hidden.
        assert_eq!(runner.context().physics.body_count(), 13);
        assert!(runner.context().scene.iter().all(|e| !e.active));
    }

    #[test]
    fn continue_reenters_play_with_a_fresh_session() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);
        // Run a while so the session has visible wear.
        for _ in 0..300 {
            runner.tick(DT);
        }
        let worn_health = runner.game().health().unwrap();
        assert!(worn_health < 100);

        tap(&mut runner, keys::PAUSE);
        tap(&mut runner, keys::CONFIRM); // Continue is the default cursor

        assert_eq!(runner.game().screen_id(), Some(ScreenId::Play));
        assert_eq!(runner.context().physics.body_count(), 13);
        assert_eq!(runner.game().health(), Some(100));
    }

    #[test]
    fn quit_releases_the_session() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);
        tap(&mut runner, keys::PAUSE);
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::CONFIRM); // Quit

        assert_eq!(runner.game().screen_id(), Some(ScreenId::Frontend));
        assert_eq!(runner.context().physics.body_count(), 0);
        assert!(runner.game().health().is_none());
    }

    #[test]
    fn options_from_pause_returns_to_pause() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);
        tap(&mut runner, keys::PAUSE);
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::CONFIRM); // Options
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Options));

        tap(&mut runner, keys::CANCEL);
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Pause));
        // The session is still there to continue into.
        assert_eq!(runner.context().physics.body_count(), 13);
    }

    #[test]
    fn options_from_frontend_does_not_remember_a_stale_pause() {
        let mut runner = runner();
        // Pause once, quit out, then open options from the frontend.
        tap(&mut runner, keys::CONFIRM);
        tap(&mut runner, keys::PAUSE);
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::CONFIRM); // Quit

        tap(&mut runner, keys::DOWN);
        tap(&mut runner, keys::CONFIRM); // Options from frontend
        tap(&mut runner, keys::CANCEL);
        assert_eq!(runner.game().screen_id(), Some(ScreenId::Frontend));
    }

    #[test]
    fn render_fills_the_buffer_once_initialized() {
        let mut runner = runner();
        runner.tick(DT);
        // Frontend: icon sprite + menu text glyphs.
        assert!(runner.render_buffer().instance_count() > 1);
    }

    #[test]
    fn exactly_one_screen_is_active_each_frame() {
        let mut runner = runner();
        tap(&mut runner, keys::CONFIRM);
        for _ in 0..120 {
            runner.tick(DT);
            assert!(runner.game().screen_id().is_some());
        }
    }
}
