use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, PickerOptions};
use crate::provider::MediaProvider;
use crate::types::PickOutcome;

/// Construct an [`App`] over the provider and run it to completion.
pub fn run(provider: Box<dyn MediaProvider>, options: PickerOptions) -> Result<PickOutcome> {
	let mut app = App::new(provider, options);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		// Initial feed for the startup tab and mode.
		self.activate_key();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<PickOutcome> = 'event_loop: loop {
			self.pump_fetch_results();
			self.poll_debouncer(Instant::now());
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			terminal.draw(|frame| self.draw(frame))?;

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key)? {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Resize(_, _) => {}
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::provider::stub::StubProvider;
	use crate::ui::state::tests::settle;

	#[test]
	fn trending_results_render_into_the_grid() {
		let mut app = App::new(Box::new(StubProvider::new(20)), PickerOptions::default());
		app.activate_key();
		settle(&mut app);

		let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();

		let view = terminal.backend().to_string();
		assert!(view.contains("Trending >"), "header prompt missing: {view}");
		assert!(view.contains("gifs-trending"), "grid rows missing: {view}");
	}

	#[test]
	fn empty_feed_renders_the_placeholder() {
		let provider = StubProvider::new(20).failing();
		let mut app = App::new(Box::new(provider), PickerOptions::default());
		app.activate_key();
		settle(&mut app);

		let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();

		let view = terminal.backend().to_string();
		assert!(view.contains("No results"), "placeholder missing: {view}");
	}
}
