//! Replays a short scripted session through a [`ManualHost`] and logs the
//! pressed inputs after each step. Run with `RUST_LOG=debug` (or `trace`) to
//! see the library's own events.

use ::padmap::{
    host::ManualHost,
    input::keyboard::{InteractiveElement, KeyEventKind, Modifier, ModifierState},
    service::{Builder, KEYBOARD},
};
use ::tracing::{info, warn};
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// One scripted host event.
enum Step {
    Press(&'static str),
    Release(&'static str),
    Chord(&'static str, Modifier),
    Focus(Option<InteractiveElement>),
}

const SCRIPT: &[Step] = &[
    Step::Press("KeyW"),
    Step::Press("KeyD"),
    Step::Press("Space"),
    Step::Release("Space"),
    Step::Chord("KeyX", Modifier::Control),
    Step::Focus(Some(InteractiveElement::Input)),
    Step::Press("KeyX"),
    Step::Focus(None),
    Step::Press("KeyX"),
    Step::Release("KeyW"),
];

pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let host = ManualHost::shared();
    let mut service = Builder::new()
        .with_host(host.clone())
        .build()
        .expect("Failed to build input service");
    service.enable().expect("Failed to enable input service");

    for step in SCRIPT {
        let evt = match *step {
            Step::Press(code) => host.press(code),
            Step::Release(code) => host.release(code),
            Step::Chord(code, modifier) => {
                host.press_with(code, ModifierState::none().with(modifier))
            }
            Step::Focus(element) => {
                info!(focus = ?element, "Change focus");
                host.set_focus(element.map(Into::into));
                continue;
            }
        };

        let state = service.keyboard_state();
        let pressed = state.pressed();
        let (x, y) = state.left_stick();
        info!(
            code = %evt.code(),
            kind = %evt.kind(),
            handled = evt.default_prevented(),
            ?pressed,
            left_stick = ?(x, y),
            "Step"
        );
    }

    if let Err(e) = service.disable() {
        warn!(error = %e, "Failed to disable input service");
    }
    assert_eq!(host.listener_count(KeyEventKind::Press), 0);

    match service.state() {
        Ok(state) => info!(keyboard = ?state[KEYBOARD], "Final state"),
        Err(e) => warn!(error = %e, "Failed to read final state"),
    }
}
