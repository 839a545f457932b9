//! Lane Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlImageElement, MouseEvent, TouchEvent};

    use lane_runner::platform::{LocalStore, LoopControl, TickSource};
    use lane_runner::renderer::{CanvasSurface, SpriteId, SpriteSet};
    use lane_runner::sim::{GamePhase, InputEvent, Intent, Key, Viewport};
    use lane_runner::{FrameOutcome, Game, GameConfig, GameError, GameOverReport};

    /// `requestAnimationFrame`-driven tick source
    struct AnimationFrames;

    impl TickSource for AnimationFrames {
        fn drive<F>(self, frame: F)
        where
            F: FnMut() -> LoopControl + 'static,
        {
            schedule(frame);
        }
    }

    fn schedule<F>(mut frame: F)
    where
        F: FnMut() -> LoopControl + 'static,
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move |_time: f64| {
            if frame() == LoopControl::Continue {
                schedule(frame);
            }
        });
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    /// Overlay and score elements
    struct Hud {
        hud: Element,
        score: Element,
        start_overlay: Element,
        game_over_overlay: Element,
        final_score: Element,
        high_score: Element,
    }

    impl Hud {
        fn find(document: &Document) -> Result<Self, GameError> {
            let get = |id: &'static str| {
                document
                    .get_element_by_id(id)
                    .ok_or(GameError::MissingElement(id))
            };
            Ok(Self {
                hud: get("hud")?,
                score: get("score")?,
                start_overlay: get("startOverlay")?,
                game_over_overlay: get("gameOverOverlay")?,
                final_score: get("finalScore")?,
                high_score: get("highScore")?,
            })
        }

        fn show_high(&self, high: u64) {
            self.hud.set_text_content(Some(&format!("High: {}", high)));
        }

        fn show_score(&self, score: u64) {
            self.score.set_text_content(Some(&format!("Score: {}", score)));
        }

        fn on_start(&self) {
            let _ = self.start_overlay.class_list().add_1("hidden");
            let _ = self.game_over_overlay.class_list().add_1("hidden");
            self.show_score(0);
        }

        fn show_results(&self, report: &GameOverReport) {
            self.show_high(report.high_score);
            self.final_score
                .set_text_content(Some(&format!("Score: {}", report.score)));
            self.high_score
                .set_text_content(Some(&format!("High Score: {}", report.high_score)));
        }

        fn reveal_game_over(&self) {
            let _ = self.game_over_overlay.class_list().remove_1("hidden");
        }
    }

    /// Everything the browser callbacks share
    struct App {
        game: Game<LocalStore>,
        surface: CanvasSurface,
        sprites: SpriteSet<HtmlImageElement>,
        hud: Hud,
    }

    fn viewport_of(canvas: &HtmlCanvasElement) -> Viewport {
        let rect = canvas.get_bounding_client_rect();
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        Viewport::new(rect.width() as f32, rect.height() as f32, dpr as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Lane Runner starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str(&GameError::MissingElement("game").to_string()))?
            .dyn_into()?;
        let hud = Hud::find(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let viewport = viewport_of(&canvas);
        let mut surface =
            CanvasSurface::new(canvas.clone()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        surface.resize(viewport);

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(GameConfig::load(), viewport, seed, LocalStore::open());
        hud.show_high(game.high_score());
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            sprites: SpriteSet::new(),
            hud,
        }));

        load_sprites(&app)?;
        setup_resize(&app, &canvas);
        setup_keyboard(&app, &document);
        setup_touch(&app, &canvas);
        setup_click(&app, &canvas);
        setup_buttons(&app, &document);

        log::info!("Lane Runner ready");
        Ok(())
    }

    fn load_sprites(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
        for id in SpriteId::all() {
            let image = HtmlImageElement::new()?;

            let onload = {
                let app = app.clone();
                let handle = image.clone();
                Closure::once_into_js(move || {
                    app.borrow_mut().sprites.mark_ready(id, handle);
                })
            };
            let onerror = Closure::once_into_js(move || {
                log::warn!("Failed to load {} - using placeholder", id.path());
            });
            image.set_onload(Some(onload.unchecked_ref()));
            image.set_onerror(Some(onerror.unchecked_ref()));
            image.set_src(id.path());
        }
        Ok(())
    }

    /// Kick off the frame loop for a freshly started session
    fn start_loop(app: Rc<RefCell<App>>) {
        AnimationFrames.drive(move || {
            let outcome = {
                let mut guard = app.borrow_mut();
                let App {
                    game,
                    surface,
                    sprites,
                    hud,
                } = &mut *guard;
                let outcome = game.frame(sprites, surface);
                match outcome {
                    FrameOutcome::Running {
                        score_changed: Some(score),
                    } => hud.show_score(score),
                    FrameOutcome::GameOver(report) => hud.show_results(&report),
                    _ => {}
                }
                outcome
            };
            if let FrameOutcome::GameOver(_) = outcome {
                schedule_game_over_overlay(app.clone());
            }
            outcome.control()
        });
    }

    /// Show the overlay after a short delay so the crash frame stays visible
    fn schedule_game_over_overlay(app: Rc<RefCell<App>>) {
        let delay = app.borrow().game.session().config.game_over_delay_ms;
        let callback = Closure::once_into_js(move || {
            let app = app.borrow();
            // A quick restart may have happened in the meantime
            if app.game.phase() == GamePhase::GameOver {
                app.hud.reveal_game_over();
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            );
        }
    }

    /// Route an input event; start the loop if it began a new session
    fn dispatch(app: &Rc<RefCell<App>>, event: InputEvent) {
        let started = {
            let mut app = app.borrow_mut();
            let started = app.game.handle_input(event) == Some(Intent::Start);
            if started {
                app.hud.on_start();
            }
            started
        };
        if started {
            start_loop(app.clone());
        }
    }

    fn setup_resize(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app = app.clone();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let viewport = viewport_of(&canvas);
            let mut app = app.borrow_mut();
            app.surface.resize(viewport);
            app.game.resize(viewport);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(app: &Rc<RefCell<App>>, document: &Document) {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = Key::from_code(&event.code());
            if key != Key::Other {
                dispatch(&app, InputEvent::KeyDown(key));
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        // Touch start: begins a swipe, or starts the game
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    dispatch(&app, InputEvent::TouchStart { x });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: completes the swipe
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    dispatch(&app, InputEvent::TouchEnd { x });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_click(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        let app = app.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            dispatch(&app, InputEvent::Click { x });
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(app: &Rc<RefCell<App>>, document: &Document) {
        for id in ["startBtn", "restartBtn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("{}", GameError::MissingElement(id));
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&app, InputEvent::StartButton);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Runner (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let report = demo::run(seed, 20_000);
    println!(
        "Demo finished: {} ticks, score {}{}",
        report.ticks,
        report.score,
        if report.crashed { " (crashed)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a simple autopilot dodges obstacles until it crashes
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use lane_runner::platform::{ManualTicks, MemoryStore};
    use lane_runner::sim::{GameSession, LaneShift, Viewport, apply_shift};
    use lane_runner::{FrameOutcome, Game, GameConfig};

    pub struct DemoReport {
        pub ticks: u64,
        pub score: u64,
        pub crashed: bool,
    }

    /// Obstacle nearest above the player in `lane`, as its bottom edge
    fn threat_in_lane(session: &GameSession, lane: usize) -> Option<f32> {
        let lane_x = session.layout.lane_x(lane);
        let half = session.layout.lane_width / 2.0;
        session
            .obstacles
            .iter()
            .filter(|o| (o.rect.pos.x + o.rect.size.x / 2.0 - lane_x).abs() < half)
            .map(|o| o.rect.bottom())
            .filter(|bottom| *bottom < session.player.y + session.player.size.y / 2.0)
            .max_by(|a, b| a.total_cmp(b))
    }

    fn steer(session: &mut GameSession) {
        let lane = session.player.lane;
        let danger_line = session.player.y - session.player.size.y * 3.0;
        if threat_in_lane(session, lane).is_none_or(|b| b < danger_line) {
            return;
        }
        let last = session.layout.lane_count().saturating_sub(1);
        let left_clear = lane > 0 && threat_in_lane(session, lane - 1).is_none_or(|b| b < danger_line);
        let right_clear = lane < last && threat_in_lane(session, lane + 1).is_none_or(|b| b < danger_line);
        if left_clear {
            apply_shift(session, LaneShift::Left);
        } else if right_clear {
            apply_shift(session, LaneShift::Right);
        }
    }

    pub fn run(seed: u64, max_ticks: u64) -> DemoReport {
        let mut game = Game::new(
            GameConfig::default(),
            Viewport::new(480.0, 800.0, 1.0),
            seed,
            MemoryStore::default(),
        );
        game.start();
        log::info!("Demo seed: {}", seed);

        let mut crashed = false;
        let ticks = ManualTicks::new(max_ticks).run(|| {
            steer(game.session_mut());
            let outcome = game.step();
            if let FrameOutcome::GameOver(_) = outcome {
                crashed = true;
            }
            outcome.control()
        });

        DemoReport {
            ticks,
            score: game.session().floored_score(),
            crashed,
        }
    }
}
