use askline_client::render::{format_citation, render};
use askline_client::surface::MemorySurface;
use askline_core::domain::{Answer, Citation};
use pretty_assertions::assert_eq;

fn answer(text: &str, confidence: f64, citations: Option<Vec<Citation>>) -> Answer {
    Answer {
        answer: Some(text.to_string()),
        confidence,
        status: None,
        citations,
    }
}

fn citation(topic: &str, chunk: &str) -> Citation {
    Citation {
        topic: topic.to_string(),
        chunk: chunk.to_string(),
    }
}

#[test]
fn renders_literal_capital_of_france_scenario() {
    let mut surface = MemorySurface::new();
    let a = answer(
        "Paris",
        0.97,
        Some(vec![citation("geography", "Paris is the capital of France.")]),
    );

    render(&a, &mut surface);

    assert_eq!(surface.answer(), "Paris\n\nConfidence: 0.97");
    assert_eq!(
        surface.citations(),
        ["[geography] Paris is the capital of France."]
    );
}

#[test]
fn renders_no_citation_scenario_with_integer_confidence() {
    let mut surface = MemorySurface::new();
    let a = answer("Unknown", 0.0, None);

    render(&a, &mut surface);

    assert_eq!(surface.answer(), "Unknown\n\nConfidence: 0");
    assert!(surface.citations().is_empty());
}

#[test]
fn absent_citations_produce_zero_entries() {
    let mut surface = MemorySurface::new();
    render(&answer("x", 0.5, None), &mut surface);
    assert!(surface.citations().is_empty());

    render(&answer("x", 0.5, Some(vec![])), &mut surface);
    assert!(surface.citations().is_empty());
}

#[test]
fn n_citations_render_in_received_order() {
    let mut surface = MemorySurface::new();
    let a = answer(
        "x",
        0.5,
        Some(vec![
            citation("zebra", "last alphabetically, first received"),
            citation("apple", "first alphabetically, second received"),
            citation("mango", "third received"),
        ]),
    );

    render(&a, &mut surface);

    assert_eq!(
        surface.citations(),
        [
            "[zebra] last alphabetically, first received",
            "[apple] first alphabetically, second received",
            "[mango] third received",
        ]
    );
}

#[test]
fn rerender_clears_previous_citations_unconditionally() {
    let mut surface = MemorySurface::new();
    render(
        &answer("first", 0.8, Some(vec![citation("a", "one"), citation("b", "two")])),
        &mut surface,
    );
    assert_eq!(surface.citations().len(), 2);

    render(&answer("second", 0.3, None), &mut surface);

    assert_eq!(surface.answer(), "second\n\nConfidence: 0.3");
    assert!(surface.citations().is_empty());
}

#[test]
fn last_render_wins_wholesale() {
    let mut racing = MemorySurface::new();
    let b = answer("B", 0.2, Some(vec![citation("b", "from b")]));
    let a = answer("A", 0.9, Some(vec![citation("a", "from a")]));

    // B's response lands first, A's later; the surface must reflect A alone.
    render(&b, &mut racing);
    render(&a, &mut racing);

    let mut expected = MemorySurface::new();
    render(&a, &mut expected);
    assert_eq!(racing, expected);
}

#[test]
fn null_answer_falls_back_to_status() {
    let mut surface = MemorySurface::new();
    let a = Answer {
        answer: None,
        confidence: 0.0,
        status: Some("Low retrieval confidence".to_string()),
        citations: None,
    };

    render(&a, &mut surface);

    assert_eq!(surface.answer(), "Low retrieval confidence\n\nConfidence: 0");
    assert!(surface.citations().is_empty());
}

#[test]
fn null_answer_without_status_uses_placeholder() {
    let mut surface = MemorySurface::new();
    let a = Answer {
        answer: None,
        confidence: 0.0,
        status: None,
        citations: None,
    };

    render(&a, &mut surface);

    assert_eq!(surface.answer(), "No answer available\n\nConfidence: 0");
}

#[test]
fn citation_format_is_topic_in_brackets_then_chunk() {
    let c = citation("geography", "Paris is the capital of France.");
    assert_eq!(
        format_citation(&c),
        "[geography] Paris is the capital of France."
    );
}
