/// Sentinel token marking the beginning of every token stream.
///
/// Injected by the tokenizer ahead of the first word. It may appear in the
/// model as a context key but is never emitted as generated output.
pub const START_TOKEN: &str = "|START|";

/// Produces the word stream for a body of text.
///
/// Returns a lazy iterator yielding the sentinel first, then the words of
/// the text. Each call returns a fresh iterator over the same text.
///
/// # Notes
/// - Splitting is on the literal space character only: tabs and other
///   whitespace are not separators and stay inside tokens.
/// - Newlines separate words and never appear inside a token.
/// - Byte order marks are removed, so a BOM at the start of a file does
///   not end up glued to its first word.
/// - Consecutive spaces and empty lines yield empty-string tokens, which
///   the model counts like any other token.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
	let words = text
		.split('\n')
		.flat_map(|line| line.split(' '))
		.map(|raw| raw.replace('\u{feff}', ""));

	std::iter::once(START_TOKEN.to_owned()).chain(words)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(text: &str) -> Vec<String> {
		tokens(text).collect()
	}

	#[test]
	fn stream_starts_with_the_sentinel() {
		assert_eq!(collect("one two"), vec![START_TOKEN, "one", "two"]);
	}

	#[test]
	fn splits_on_the_space_character_only() {
		// A tab is not a separator and stays inside its token.
		assert_eq!(collect("a\tb c"), vec![START_TOKEN, "a\tb", "c"]);
	}

	#[test]
	fn newlines_separate_words() {
		assert_eq!(collect("one\ntwo three"), vec![START_TOKEN, "one", "two", "three"]);
	}

	#[test]
	fn strips_the_byte_order_mark() {
		assert_eq!(collect("\u{feff}one two"), vec![START_TOKEN, "one", "two"]);
	}

	#[test]
	fn consecutive_spaces_yield_empty_tokens() {
		assert_eq!(collect("a  b"), vec![START_TOKEN, "a", "", "b"]);
	}

	#[test]
	fn each_call_restarts_the_stream() {
		let text = "one two\nthree";
		let first: Vec<String> = tokens(text).collect();
		let second: Vec<String> = tokens(text).collect();
		assert_eq!(first, second);
	}
}
