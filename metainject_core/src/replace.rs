use std::borrow::Cow;

/// Replace every non-overlapping occurrence of `query` in `text` with
/// `replacement`.
///
/// Matching is an exact, case-sensitive substring search; no character in
/// `query` has special meaning. Scanning resumes after the inserted
/// replacement so a replacement that contains `query` is never re-matched.
/// When nothing matches (or `query` is empty) the input is returned
/// borrowed.
///
/// ```rust
/// use metainject_core::replace;
///
/// let text = "{{ hero }} is pretty great. I'm {{ hero }}!";
/// assert_eq!(
/// 	replace("{{ hero }}", "Batman", text),
/// 	"Batman is pretty great. I'm Batman!"
/// );
/// assert_eq!(replace("X", "XX", "X"), "XX");
/// ```
pub fn replace<'a>(query: &str, replacement: &str, text: &'a str) -> Cow<'a, str> {
	if query.is_empty() {
		return Cow::Borrowed(text);
	}

	let Some(first) = text.find(query) else {
		return Cow::Borrowed(text);
	};

	let mut result = String::with_capacity(text.len() + replacement.len());
	let mut cursor = 0;
	let mut next = Some(first);

	while let Some(start) = next {
		result.push_str(&text[cursor..start]);
		result.push_str(replacement);
		cursor = start + query.len();
		next = text[cursor..].find(query).map(|offset| cursor + offset);
	}

	result.push_str(&text[cursor..]);
	Cow::Owned(result)
}

/// Byte-wise counterpart of [`replace`] for file contents.
///
/// Searching raw bytes leaves invalid UTF-8 untouched. For valid UTF-8 input
/// the result is identical to decoding, calling [`replace`] and re-encoding.
pub fn replace_bytes<'a>(query: &[u8], replacement: &[u8], bytes: &'a [u8]) -> Cow<'a, [u8]> {
	if query.is_empty() {
		return Cow::Borrowed(bytes);
	}

	let Some(first) = find_bytes(bytes, query) else {
		return Cow::Borrowed(bytes);
	};

	let mut result = Vec::with_capacity(bytes.len() + replacement.len());
	let mut cursor = 0;
	let mut next = Some(first);

	while let Some(start) = next {
		result.extend_from_slice(&bytes[cursor..start]);
		result.extend_from_slice(replacement);
		cursor = start + query.len();
		next = find_bytes(&bytes[cursor..], query).map(|offset| cursor + offset);
	}

	result.extend_from_slice(&bytes[cursor..]);
	Cow::Owned(result)
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.len() > haystack.len() {
		return None;
	}

	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}
