//! Rolling window of prior exchanges sent back as `vText` fields.

/// Escaped questions and answers, oldest first.
///
/// Entries always come in (question, answer) pairs and are dropped a pair at a
/// time, so the window never holds an answer without its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cap: usize,
}

impl History {
    /// `cap` is the maximum number of entries, i.e. twice the number of turns.
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap + 2),
            cap,
        }
    }

    /// Append one turn and drop the oldest turns beyond the cap.
    pub fn push_turn(&mut self, question: String, answer: String) {
        self.entries.push(question);
        self.entries.push(answer);
        while self.entries.len() > self.cap {
            self.entries.drain(..2);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries most recent first: last answer, last question, previous answer...
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
