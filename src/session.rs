//! Line-mode calculator session.
//!
//! A session remembers the last successful answer. Typing the recall key
//! `p` where an operand may start (beginning of the line, after an
//! operator or after `(`) inserts that answer into the expression.

use tracing::debug;

use crate::calculator::{CalcResult, DisplayOptions, Operator, evaluate_expression};

/// Key that stands for the previous answer.
pub const RECALL_KEY: char = 'p';

#[derive(Clone, Debug, Default)]
pub struct Session {
    options: DisplayOptions,
    previous_answer: Option<String>,
}

impl Session {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options,
            previous_answer: None,
        }
    }

    /// The last successful answer, rounded and without separators.
    pub fn previous_answer(&self) -> Option<&str> {
        self.previous_answer.as_deref()
    }

    /// Replace recall keys in operand position with the previous answer.
    ///
    /// A negative answer is inserted in brackets so it stays a single
    /// operand. Without a previous answer the line is returned unchanged.
    pub fn expand_recall(&self, line: &str) -> String {
        let Some(answer) = self.previous_answer.as_deref() else {
            return line.to_string();
        };

        let recalled = if answer.starts_with('-') {
            format!("({answer})")
        } else {
            answer.to_string()
        };

        let mut expanded = String::with_capacity(line.len() + recalled.len());
        let mut previous: Option<char> = None;

        for c in line.chars() {
            let operand_position = match previous {
                None => true,
                Some(prev) => prev == '(' || Operator::is_symbol(prev),
            };

            if c == RECALL_KEY && operand_position {
                expanded.push_str(&recalled);
                previous = recalled.chars().last();
            } else {
                expanded.push(c);
                if !c.is_whitespace() {
                    previous = Some(c);
                }
            }
        }

        expanded
    }

    /// Evaluate one line, remembering the answer when it succeeds.
    pub fn submit(&mut self, line: &str) -> CalcResult {
        let expanded = self.expand_recall(line);
        let result = evaluate_expression(&expanded, &self.options);

        if let Some(answer) = result.clipboard() {
            debug!(answer, "storing previous answer");
            self.previous_answer = Some(answer.to_string());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recall_without_answer_is_untouched() {
        let session = Session::default();
        assert_eq!(session.expand_recall("p*2"), "p*2");
        assert_eq!(session.previous_answer(), None);
    }

    #[test]
    fn test_submit_stores_answer() {
        let mut session = Session::default();
        let result = session.submit("2+3*4");
        assert!(result.is_success());
        assert_eq!(session.previous_answer(), Some("14"));

        let result = session.submit("p/7");
        assert_eq!(result.display(), "2");
        assert_eq!(session.previous_answer(), Some("2"));
    }

    #[test]
    fn test_failure_keeps_previous_answer() {
        let mut session = Session::default();
        session.submit("1/4");
        let result = session.submit("3**2");
        assert!(!result.is_success());
        assert_eq!(session.previous_answer(), Some("0.25"));
    }

    #[test]
    fn test_recall_positions() {
        let mut session = Session::default();
        session.submit("14");

        assert_eq!(session.expand_recall("p"), "14");
        assert_eq!(session.expand_recall("1+p"), "1+14");
        assert_eq!(session.expand_recall("(p)*2"), "(14)*2");
        assert_eq!(session.expand_recall("3 * p"), "3 * 14");
        // Not in operand position.
        assert_eq!(session.expand_recall("2p"), "2p");
        assert_eq!(session.expand_recall("pp"), "14p");
    }

    #[test]
    fn test_negative_answer_is_bracketed() {
        let mut session = Session::default();
        session.submit("2-5");
        assert_eq!(session.previous_answer(), Some("-3"));
        assert_eq!(session.expand_recall("p*2"), "(-3)*2");
        assert_eq!(session.submit("p*2").display(), "-6");
    }

    #[test]
    fn test_recall_in_wrong_position_fails() {
        let mut session = Session::default();
        session.submit("5");
        let result = session.submit("2p");
        assert_eq!(result.display(), "Malformed number: 2p");
    }
}
