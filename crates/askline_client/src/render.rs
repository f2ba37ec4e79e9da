use askline_core::domain::{Answer, Citation};

use crate::surface::DisplaySurface;

/// Answer text shown when the service could not ground an answer and sent no
/// status explanation either.
const NO_ANSWER_FALLBACK: &str = "No answer available";

/// The answer region text: answer, blank line, confidence label.
///
/// Confidence is stringified through `f64`'s `Display` (`0.97` renders as
/// `0.97`, `0.0` as `0`). A null answer falls back to the service status.
pub fn format_answer_block(answer: &Answer) -> String {
    let text = match (&answer.answer, &answer.status) {
        (Some(text), _) => text.as_str(),
        (None, Some(status)) => status.as_str(),
        (None, None) => NO_ANSWER_FALLBACK,
    };
    format!("{}\n\nConfidence: {}", text, answer.confidence)
}

/// One citations-region entry.
pub fn format_citation(citation: &Citation) -> String {
    format!("[{}] {}", citation.topic, citation.chunk)
}

/// Write one answer into the surface as a single state transition: the answer
/// region is overwritten and the citations region is replaced. Absent
/// citations leave the region empty.
pub fn render(answer: &Answer, surface: &mut dyn DisplaySurface) {
    let block = format_answer_block(answer);
    let citations = answer
        .citations
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(format_citation)
        .collect();

    surface.set_answer(block);
    surface.set_citations(citations);
}
