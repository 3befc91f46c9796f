use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use wasm_bindgen::prelude::*;

use crate::error::SurfaceError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Shared stop flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
	/// Returns `true` only for the call that actually stopped the token.
	pub fn stop(&self) -> bool {
		!self.0.swap(true, Ordering::Relaxed)
	}

	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// What a self-owning callback should do when invoked.
#[derive(Debug, PartialEq)]
enum Wake<T> {
	Run,
	/// The token was stopped. Carries the callback taken out of its own
	/// cell, or `None` if an earlier wake already took it.
	Released(Option<T>),
}

/// Once `token` is stopped, empty `cell` so the callback's `Rc` cycle
/// through that cell is broken.
fn wake<T>(token: &StopToken, cell: &RefCell<Option<T>>) -> Wake<T> {
	if token.is_stopped() {
		Wake::Released(cell.borrow_mut().take())
	} else {
		Wake::Run
	}
}

/// Handle to a self-rescheduling `requestAnimationFrame` loop.
///
/// The loop runs `tick` once per display refresh until [`FrameLoop::stop`]
/// is called. The frame already scheduled at that point drops the loop's
/// closure instead of ticking, which frees everything `tick` captured.
/// Window listeners registered through [`FrameLoop::on_resize`] detach the
/// same way. The handle is `Send + Sync` so it can be moved into reactive
/// cleanup hooks.
#[derive(Clone, Debug)]
pub struct FrameLoop {
	token: StopToken,
}

impl FrameLoop {
	pub fn start(mut tick: impl FnMut() + 'static) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let token = StopToken::default();
		let animate: FrameCallback = Rc::new(RefCell::new(None));

		let (animate_inner, token_inner) = (animate.clone(), token.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Wake::Released(cb) = wake(&token_inner, &animate_inner) {
				drop(cb);
				info!("frame loop released");
				return;
			}
			tick();
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			window.request_animation_frame(cb.as_ref().unchecked_ref())?;
		}

		info!("frame loop started");
		Ok(Self { token })
	}

	/// Call `f` on every window resize while the loop runs.
	///
	/// The listener owns itself and is removed from the window on the first
	/// resize after [`FrameLoop::stop`], so it never outlives its closure.
	pub fn on_resize(&self, mut f: impl FnMut() + 'static) -> Result<(), SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let listener: FrameCallback = Rc::new(RefCell::new(None));

		let (listener_inner, token) = (listener.clone(), self.token.clone());
		*listener.borrow_mut() = Some(Closure::new(move || {
			match wake(&token, &listener_inner) {
				Wake::Run => f(),
				Wake::Released(Some(cb)) => {
					if let Some(win) = web_sys::window() {
						let _ = win
							.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
					}
					drop(cb);
				}
				Wake::Released(None) => {}
			}
		}));
		if let Some(ref cb) = *listener.borrow() {
			window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
		}
		Ok(())
	}

	pub fn stop(&self) {
		if self.token.stop() {
			info!("frame loop stopped");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn handles_can_move_into_cleanup_hooks() {
		assert_send_sync::<StopToken>();
		assert_send_sync::<FrameLoop>();
	}

	#[test]
	fn stop_reports_only_the_first_transition() {
		let token = StopToken::default();
		let seen_by_loop = token.clone();
		assert!(!seen_by_loop.is_stopped());
		assert!(token.stop());
		assert!(!token.stop());
		assert!(seen_by_loop.is_stopped());
	}

	#[test]
	fn running_callback_keeps_its_cell() {
		let token = StopToken::default();
		let cell = RefCell::new(Some("callback"));
		assert_eq!(wake(&token, &cell), Wake::Run);
		assert!(cell.borrow().is_some());
	}

	#[test]
	fn stopped_callback_is_released_once() {
		let token = StopToken::default();
		let cell = Rc::new(RefCell::new(Some("callback")));
		let held_by_closure = cell.clone();
		token.stop();

		assert_eq!(wake(&token, &held_by_closure), Wake::Released(Some("callback")));
		assert!(cell.borrow().is_none());
		assert_eq!(wake(&token, &held_by_closure), Wake::Released(None));
	}

	#[test]
	fn releasing_frees_what_the_callback_captured() {
		let token = StopToken::default();
		let captured = Rc::new(());
		let cell = RefCell::new(Some(Box::new({
			let captured = captured.clone();
			move || drop(captured.clone())
		}) as Box<dyn Fn()>));
		assert_eq!(Rc::strong_count(&captured), 2);

		token.stop();
		if let Wake::Released(cb) = wake(&token, &cell) {
			drop(cb);
		}
		assert_eq!(Rc::strong_count(&captured), 1);
	}
}
