//! Powder Run entry point
//!
//! Handles platform-specific initialization and runs the frame loop. The
//! simulation itself lives in `powder_run::sim`; this file only schedules
//! ticks, draws the scene to a 2D canvas, and wires up the DOM controls.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, HtmlInputElement};

    use powder_run::consts::*;
    use powder_run::renderer::{Overlay, Scene};
    use powder_run::sim::{FixedStepDriver, GameState, TerrainConfig};
    use powder_run::ui::Hud;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: FixedStepDriver,
        last_time: f64,
        ctx: CanvasRenderingContext2d,
        sprite: HtmlImageElement,
    }

    impl Game {
        fn new(terrain: TerrainConfig, ctx: CanvasRenderingContext2d, sprite: HtmlImageElement) -> Self {
            Self {
                state: GameState::new(terrain),
                driver: FixedStepDriver::new(),
                last_time: 0.0,
                ctx,
                sprite,
            }
        }

        /// Run simulation ticks for the elapsed wall time
        fn update(&mut self, dt: f32) {
            self.driver.advance(&mut self.state, dt);
        }

        /// Draw the current frame
        fn render(&self) {
            let scene = Scene::build(&self.state);
            let ctx = &self.ctx;
            let (w, h) = (WORLD_WIDTH as f64, WORLD_HEIGHT as f64);

            ctx.clear_rect(0.0, 0.0, w, h);

            // Terrain as a filled polygon down to the bottom edge
            ctx.set_fill_style_str("#FFFFFF");
            ctx.begin_path();
            ctx.move_to(0.0, h);
            for p in &scene.terrain {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.line_to(w, h);
            ctx.close_path();
            ctx.fill();

            // Holes
            ctx.set_fill_style_str("#4169E1");
            for marker in &scene.holes {
                ctx.begin_path();
                let _ = ctx.arc(
                    marker.center.x as f64,
                    marker.center.y as f64,
                    marker.radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }

            // Lodge
            ctx.set_text_align("left");
            ctx.set_font("40px Arial");
            ctx.set_fill_style_str("#000000");
            let _ = ctx.fill_text("\u{1F3E0}", scene.goal.x as f64, (scene.goal.y + 40.0) as f64);

            // Rider, rotated to the board angle
            ctx.save();
            let _ = ctx.translate(scene.rider.pos.x as f64, scene.rider.pos.y as f64);
            let _ = ctx.rotate(scene.rider.angle as f64);
            let (rw, rh) = (RIDER_WIDTH as f64, RIDER_HEIGHT as f64);
            if self.sprite.complete() {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &self.sprite,
                    -rw / 2.0,
                    -rh / 2.0,
                    rw,
                    rh,
                );
            } else {
                ctx.set_fill_style_str("#000000");
                ctx.fill_rect(-rw / 2.0, -rh / 2.0, rw, rh);
            }
            ctx.restore();

            // Trail
            ctx.set_stroke_style_str(if scene.rider.on_ground {
                "rgba(100, 100, 255, 0.3)"
            } else {
                "rgba(255, 100, 100, 0.3)"
            });
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, p) in scene.trail.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(p.x as f64, p.y as f64);
                } else {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
            }
            ctx.stroke();

            // Terminal banner
            match scene.overlay {
                Some(Overlay::Crashed) => {
                    ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_fill_style_str("#FFFFFF");
                    ctx.set_font("48px Arial");
                    ctx.set_text_align("center");
                    let _ = ctx.fill_text("\u{1F4A5} Crashed! Press Reset", w / 2.0, h / 2.0);
                }
                Some(Overlay::Won) => {
                    ctx.set_fill_style_str("rgba(0, 255, 0, 0.3)");
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_fill_style_str("#FFFFFF");
                    ctx.set_font("48px Arial");
                    ctx.set_text_align("center");
                    let _ = ctx.fill_text("\u{1F389} You reached the lodge!", w / 2.0, h / 2.0);
                }
                None => {}
            }
        }

        /// Push the status readout into the DOM
        fn update_hud(&self) {
            let hud = Hud::build(&self.state);
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("speed") {
                el.set_text_content(Some(&format!("{} {}", hud.speed, hud.mode)));
            }
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("lrValue") {
                el.set_text_content(Some(&hud.learning_rate));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Powder Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Optional rider sprite; render() falls back to a rectangle until
        // (or unless) it loads
        let sprite = HtmlImageElement::new().expect("image element");
        sprite.set_src("snowboarder.png");

        // `#random` in the URL plays a seeded random course instead of the
        // canonical layout
        let terrain = match window.location().hash() {
            Ok(hash) if hash == "#random" => {
                let seed = js_sys::Date::now() as u64;
                log::info!("Random course, seed {seed}");
                TerrainConfig::generate(seed)
            }
            _ => TerrainConfig::default(),
        };

        let game = Rc::new(RefCell::new(Game::new(terrain, ctx, sprite)));
        setup_controls(&document, game.clone());
        request_animation_frame(game);

        log::info!("Powder Run running!");
    }

    fn setup_controls(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Learning-rate slider
        if let Some(slider) = document.get_element_by_id("learningRate") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                // Non-numeric input never reaches the sim
                if let Ok(rate) = input.value().parse::<f32>() {
                    game.borrow_mut().state.set_learning_rate(rate);
                }
            });
            let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("no #learningRate slider found");
        }

        // Reset button
        if let Some(btn) = document.get_element_by_id("resetBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().state.reset();
                log::info!("Game reset");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("no #resetBtn button found");
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use powder_run::sim::{GameState, TerrainConfig, tick};
    use powder_run::ui::Hud;

    env_logger::init();

    // Optional course seed on the command line; default is the canonical
    // layout (holes at 300 and 500)
    let terrain = match std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok()) {
        Some(seed) => {
            log::info!("Generating course from seed {seed}");
            TerrainConfig::generate(seed)
        }
        None => TerrainConfig::default(),
    };

    let mut state = GameState::new(terrain);
    log::info!("Powder Run (headless) starting...");

    let max_frames: u64 = 10_000;
    while !state.finished() && state.time_ticks < max_frames {
        tick(&mut state);
    }

    let hud = Hud::build(&state);
    if state.won {
        log::info!("Reached the lodge in {} frames, score {}", state.time_ticks, hud.score);
    } else if state.game_over {
        log::info!(
            "Crashed at x={:.1} after {} frames, score {}",
            state.rider.pos.x,
            state.time_ticks,
            hud.score
        );
    } else {
        log::info!("No terminal state after {max_frames} frames");
    }

    match serde_json::to_string_pretty(&state) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
