//! Numbered document chooser
//!
//! Cloud documents are offered as a numbered list in a prompt; the user
//! answers with the 1-based number of an entry.

use cloud::CloudDocument;

/// Render the chooser prompt for a listing
pub fn render_listing(verb: &str, documents: &[CloudDocument]) -> String {
    let mut text = format!("Enter the number of the file to {}:\n\n", verb);
    for (i, document) in documents.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, document.title));
    }
    text
}

/// Parse a 1-based choice into a 0-based index into a list of `len` entries
///
/// Anything that is not a number between 1 and `len` yields `None`.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}
