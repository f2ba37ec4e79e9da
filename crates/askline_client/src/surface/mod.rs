/// Addressable presentation regions the client reads from and writes to.
///
/// Three regions, mirroring the service frontend: a readable question input
/// field, an answer text region that is overwritten wholesale on each render,
/// and a citations region that is cleared and repopulated on each render.
pub trait DisplaySurface {
    /// Current contents of the question input field.
    fn question(&self) -> String;

    /// Overwrite the answer region.
    fn set_answer(&mut self, text: String);

    /// Replace the citations region: clear it, then append one entry per
    /// citation in the given order.
    fn set_citations(&mut self, entries: Vec<String>);
}

/// In-memory display surface backing the terminal frontend and the tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    question: String,
    answer: String,
    citations: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn citations(&self) -> &[String] {
        &self.citations
    }
}

impl DisplaySurface for MemorySurface {
    fn question(&self) -> String {
        self.question.clone()
    }

    fn set_answer(&mut self, text: String) {
        self.answer = text;
    }

    fn set_citations(&mut self, entries: Vec<String>) {
        self.citations = entries;
    }
}
