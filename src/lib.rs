//! Normalizes physical keyboard input into a fixed set of gamepad-style
//! logical inputs.
//!
//! A [`KeyboardInputSource`] subscribes to an [`EventHost`], drops key events
//! that belong to the surrounding UI (typing into a text field, triggering a
//! shortcut) and records the rest against a [`BindingTable`]. Reading the
//! source yields a [`StateSnapshot`] with one [`InputValue`] per
//! [`LogicalInput`].
//!
//! Most applications start from an [`InputService`], which wires a keyboard
//! with the default keymap:
//!
//! ```
//! use ::padmap::host::ManualHost;
//! use ::padmap::input::{InputValue, LogicalInput};
//! use ::padmap::service::Builder;
//!
//! let host = ManualHost::shared();
//! let mut service = Builder::new().with_host(host.clone()).build().unwrap();
//! service.enable().unwrap();
//!
//! host.press("KeyW");
//! host.press("Space");
//! host.release("Space");
//!
//! let state = service.keyboard_state();
//! assert_eq!(state[LogicalInput::LeftAnalogUp], InputValue::Pressed);
//! assert_eq!(state[LogicalInput::Special], InputValue::Released);
//! assert_eq!(state[LogicalInput::A], InputValue::Unset);
//! ```
//!
//! [`KeyboardInputSource`]: crate::input::keyboard::KeyboardInputSource
//! [`EventHost`]: crate::host::EventHost
//! [`BindingTable`]: crate::input::BindingTable
//! [`StateSnapshot`]: crate::input::StateSnapshot
//! [`InputValue`]: crate::input::InputValue
//! [`LogicalInput`]: crate::input::LogicalInput
//! [`InputService`]: crate::service::InputService

pub mod errors;
pub mod host;
pub mod input;
pub mod service;
