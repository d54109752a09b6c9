//! Block Breaker entry point
//!
//! The wasm build wires the DOM, the tick timer, and the input listeners
//! around a `GameSession`; the native build runs a headless demo round.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use block_breaker::GameSession;
    use block_breaker::consts::TICK_MS;
    use block_breaker::sim::GamePhase;
    use block_breaker::ui::dom::DomView;

    /// The session plus everything that must be torn down when it ends
    struct Shell {
        session: GameSession<DomView>,
        interval_id: Option<i32>,
        pointer_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
    }

    impl Shell {
        /// Cancel the tick timer and unsubscribe the pointer listener.
        /// Only a full reload brings either back.
        fn teardown(&mut self) {
            let window = web_sys::window().expect("no window");
            if let Some(id) = self.interval_id.take() {
                window.clear_interval_with_handle(id);
            }
            if let Some(listener) = self.pointer_listener.take() {
                let document = window.document().expect("no document");
                let _ = document.remove_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );
            }
            log::info!("timer and pointer listener torn down");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Block Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let view = DomView::new(document);
        let shell = Rc::new(RefCell::new(Shell {
            session: GameSession::new(view),
            interval_id: None,
            pointer_listener: None,
        }));

        setup_start_button(shell.clone());
        setup_cancel_buttons(shell.clone());
        setup_restart_buttons();

        log::info!("Block Breaker ready");
    }

    /// Start button: kick off the session, the tick timer, and pointer
    /// tracking
    fn setup_start_button(shell: Rc<RefCell<Shell>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.query_selector(".start-button").ok().flatten() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut s = shell.borrow_mut();
                    if s.session.phase() != GamePhase::Idle {
                        return;
                    }
                    s.session.start();
                }
                begin_ticking(shell.clone());
                begin_pointer_tracking(shell.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Fixed-interval simulation driver; tears itself down once the phase
    /// turns terminal
    fn begin_ticking(shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();
        let tick_shell = shell.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut s = tick_shell.borrow_mut();
            if s.session.advance().is_terminal() {
                s.teardown();
            }
        });
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_MS,
            )
            .expect("failed to set interval");
        shell.borrow_mut().interval_id = Some(id);
        closure.forget();
    }

    /// Pointer x arrives in viewport coordinates; convert to playfield
    /// coordinates before handing it to the session. The closure is stored
    /// (not forgotten) so teardown can unsubscribe it.
    fn begin_pointer_tracking(shell: Rc<RefCell<Shell>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let move_shell = shell.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let document = web_sys::window().unwrap().document().unwrap();
            let Some(grid) = document.query_selector(".grid").ok().flatten() else {
                return;
            };
            let left = grid.get_bounding_client_rect().left() as f32;
            let pointer_x = event.client_x() as f32 - left;
            move_shell.borrow_mut().session.pointer_moved(pointer_x);
        });
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        shell.borrow_mut().pointer_listener = Some(closure);
    }

    /// Cancel buttons live on the start, win, and game-over overlays
    fn setup_cancel_buttons(shell: Rc<RefCell<Shell>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Ok(buttons) = document.query_selector_all(".cancel-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                shell.borrow_mut().session.cancel();
            });
            for i in 0..buttons.length() {
                if let Some(btn) = buttons.item(i) {
                    let _ = btn
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                }
            }
            closure.forget();
        }
    }

    /// Restart is a full reload; nothing is carried over
    fn setup_restart_buttons() {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Ok(buttons) = document.query_selector_all(".restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                log::info!("restarting");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            for i in 0..buttons.length() {
                if let Some(btn) = buttons.item(i) {
                    let _ = btn
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                }
            }
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Breaker (native) starting...");
    log::info!("Run with `trunk serve` for the web version");

    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless round with the paddle chasing the ball, as a quick sanity run
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use block_breaker::consts::BALL_DIAMETER;
    use block_breaker::sim::{GamePhase, GameState, place_blocks, tick};

    let mut state = GameState::new();
    place_blocks(&mut state);
    state.phase = GamePhase::Running;

    let mut ticks = 0u32;
    while state.phase == GamePhase::Running && ticks < 200_000 {
        let target = state.ball.pos.x + BALL_DIAMETER / 2.0;
        state.paddle.track_pointer(target);
        tick(&mut state);
        ticks += 1;
    }

    println!(
        "demo round: {:?} after {} ticks, score {}",
        state.phase, ticks, state.score
    );
}
