/// Number of characters of the unparsed input kept in a syntax error.
const EXCERPT_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Neither a term nor an operator could be read at `position`.
    #[error("parse error at position {position} - '{excerpt}'")]
    Syntax { position: usize, excerpt: String },

    #[error("parse error at end - expression cannot end with an operator")]
    TrailingOperator,

    #[error("expression is empty")]
    Empty,
}

impl ParseError {
    pub(crate) fn syntax(source: &str, rest: &str) -> Self {
        ParseError::Syntax {
            position: source.len() - rest.len(),
            excerpt: rest.chars().take(EXCERPT_LENGTH).collect(),
        }
    }

    /// Offset from the start of the expression where parsing stopped, if the
    /// error is tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { position, .. } => Some(*position),
            ParseError::TrailingOperator | ParseError::Empty => None,
        }
    }
}
