/// Size of a drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Surface {
	/// Creates a surface; negative sizes collapse to zero.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}

	/// Whether nothing can be drawn.
	pub fn is_empty(&self) -> bool {
		self.width < 1.0 || self.height < 1.0
	}

	/// Area in square CSS pixels.
	pub fn area(&self) -> f64 {
		self.width * self.height
	}
}

/// What the frame callback should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
	/// Step and draw, then request another frame if `schedule_next`.
	Draw {
		/// Keep the loop going.
		schedule_next: bool,
	},
	/// Draw nothing and stop requesting frames until resumed.
	Pause,
}

/// Scheduling policy of one animated surface.
///
/// Reduced motion draws one static frame; a hidden page or an off-screen
/// surface stops the loop until it becomes visible again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopState {
	reduced_motion: bool,
	page_visible: bool,
	on_screen: bool,
	static_drawn: bool,
}

impl LoopState {
	/// A visible, on-screen surface.
	pub fn new(reduced_motion: bool) -> Self {
		Self {
			reduced_motion,
			page_visible: true,
			on_screen: true,
			static_drawn: false,
		}
	}

	/// Records the document's visibility.
	pub fn set_page_visible(&mut self, visible: bool) {
		self.page_visible = visible;
	}

	/// Records whether the surface intersects the viewport.
	pub fn set_on_screen(&mut self, on_screen: bool) {
		self.on_screen = on_screen;
	}

	/// Layout changed; a reduced-motion surface needs its static frame again.
	pub fn invalidate(&mut self) {
		self.static_drawn = false;
	}

	/// Whether a continuous loop should be running.
	pub fn wants_frames(&self) -> bool {
		self.page_visible && self.on_screen && !self.reduced_motion
	}

	/// Whether motion is reduced for this surface.
	pub fn reduced_motion(&self) -> bool {
		self.reduced_motion
	}

	/// Decides the current frame.
	pub fn next_frame(&mut self) -> Frame {
		if !self.page_visible || !self.on_screen {
			return Frame::Pause;
		}
		if self.reduced_motion {
			if self.static_drawn {
				return Frame::Pause;
			}
			self.static_drawn = true;
			return Frame::Draw {
				schedule_next: false,
			};
		}
		Frame::Draw {
			schedule_next: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn animated_surface_keeps_scheduling() {
		let mut state = LoopState::new(false);
		for _ in 0..3 {
			assert_eq!(state.next_frame(), Frame::Draw { schedule_next: true });
		}
	}

	#[test]
	fn reduced_motion_draws_exactly_once() {
		let mut state = LoopState::new(true);
		assert_eq!(state.next_frame(), Frame::Draw { schedule_next: false });
		assert_eq!(state.next_frame(), Frame::Pause);
		assert!(!state.wants_frames());
		state.invalidate();
		assert_eq!(state.next_frame(), Frame::Draw { schedule_next: false });
	}

	#[test]
	fn hidden_page_pauses_until_visible() {
		let mut state = LoopState::new(false);
		state.set_page_visible(false);
		assert_eq!(state.next_frame(), Frame::Pause);
		assert!(!state.wants_frames());
		state.set_page_visible(true);
		assert!(state.wants_frames());
		state.set_on_screen(false);
		assert_eq!(state.next_frame(), Frame::Pause);
	}

	#[test]
	fn empty_surface() {
		assert!(Surface::new(-4.0, 300.0).is_empty());
		assert!(!Surface::new(2.0, 2.0).is_empty());
	}
}
