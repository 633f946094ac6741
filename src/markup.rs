//! Conversion of the tab host's inline markup into renderable HTML.
//!
//! The raw tab text uses a private markup language: `[ch]...[/ch]` wraps a
//! chord symbol, `[tab]`/`[/tab]` delimit fixed-width tab blocks, and line
//! breaks are carried as the literal two-character sequences `\r` and `\n`
//! (the host JSON-escapes them twice, so they arrive as text, not control
//! bytes). One forward scan emits the HTML fragment the host's own player
//! renders, class names included, so existing stylesheets apply unchanged.

use thiserror::Error;

/// Opening wrapper emitted around every transformed tab.
pub const TAB_CONTAINER_OPEN: &str = "<section class=\"_3cXAr _1G5k-\"><code class=\"_3enQP\"><pre class=\"_3F2CP _3hukP\" style=\"font-size: 13px; font-family: Roboto Mono, Courier New, monospace;\"><span class=\"_3rlxz\">";

/// Closing wrapper.
pub const TAB_CONTAINER_CLOSE: &str = "</section>";

/// Errors from malformed tab markup.
///
/// These indicate the upstream page broke its own format; the caller is
/// expected to drop the page rather than render a mangled tab.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// A `[ch]` opener with no later `[` to stop the chord scan.
    #[error("chord annotation at offset {offset} has no terminating '['")]
    UnterminatedChord { offset: usize },
}

/// Render one chord symbol as the host player's inline chord element.
pub fn chord_span(chord: &str) -> String {
    format!(
        "<span class=\"_3PpPJ OrSDI\" data-name=\"{}\" style=\"color: rgb(0, 0, 0);\">{}</span>",
        chord, chord
    )
}

/// Transform raw tab markup into an HTML fragment.
///
/// Single pass, character by character. Whitespace and ordering of the
/// input are preserved exactly; only the four token classes are rewritten.
pub fn transform(raw: &str) -> Result<String, MarkupError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut html = String::with_capacity(
        raw.len() + TAB_CONTAINER_OPEN.len() + TAB_CONTAINER_CLOSE.len(),
    );
    html.push_str(TAB_CONTAINER_OPEN);

    let mut i = 0;
    while i < chars.len() {
        if matches_at(&chars, i, "\\r") {
            // Escaped carriage return: dropped entirely
            i += 2;
        } else if matches_at(&chars, i, "\\n") {
            // Escaped newline becomes a real one
            html.push('\n');
            i += 2;
        } else if matches_at(&chars, i, "[/tab]") {
            i += 6;
        } else if matches_at(&chars, i, "[tab]") {
            i += 5;
        } else if matches_at(&chars, i, "[ch]") {
            let (chord, consumed) = scan_chord(&chars, i)?;
            html.push_str(&chord_span(&chord));
            i += consumed;
        } else {
            html.push(chars[i]);
            i += 1;
        }
    }

    html.push_str(TAB_CONTAINER_CLOSE);
    Ok(html)
}

/// Whether `pattern` occurs in `chars` starting at `i`.
fn matches_at(chars: &[char], i: usize, pattern: &str) -> bool {
    pattern
        .chars()
        .enumerate()
        .all(|(offset, expected)| chars.get(i + offset) == Some(&expected))
}

/// Scan a chord annotation starting at a `[ch]` opener.
///
/// Returns the chord name and the total number of characters consumed.
/// The chord name is the character right after the opener plus everything
/// up to the next `[`; consumption is 10 plus the scanned tail, which
/// walks straight over the `[/ch]` closer without matching it explicitly.
/// This reproduces the host player's own scanner, quirks included.
fn scan_chord(chars: &[char], start: usize) -> Result<(String, usize), MarkupError> {
    let mut chord = String::new();
    match chars.get(start + 4) {
        Some(first) => chord.push(*first),
        None => return Err(MarkupError::UnterminatedChord { offset: start }),
    }

    let mut consumed = 10;
    let mut i = start + 5;
    loop {
        match chars.get(i) {
            None => return Err(MarkupError::UnterminatedChord { offset: start }),
            Some('[') => break,
            Some(c) => {
                chord.push(*c);
                consumed += 1;
                i += 1;
            }
        }
    }

    Ok((chord, consumed))
}
