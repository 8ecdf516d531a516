/// Single-line query editor with end-of-line editing.
pub(crate) struct QueryInput {
	text: String,
}

impl QueryInput {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			text: initial.into(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	pub fn insert(&mut self, ch: char) {
		self.text.push(ch);
	}

	/// Remove the last character. Returns whether anything changed.
	pub fn backspace(&mut self) -> bool {
		self.text.pop().is_some()
	}

	/// Drop all text. Returns whether anything changed.
	pub fn clear(&mut self) -> bool {
		if self.text.is_empty() {
			false
		} else {
			self.text.clear();
			true
		}
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn editing_round_trip() {
		let mut input = QueryInput::new("");
		input.insert('h');
		input.insert('i');
		assert_eq!(input.text(), "hi");
		assert!(input.backspace());
		assert_eq!(input.text(), "h");
		assert!(input.clear());
		assert!(!input.clear());
		assert!(input.is_empty());
	}
}
