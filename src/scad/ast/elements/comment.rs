//! Comment element definition
//!
//! Line comments keep their text as one string. Block comments are split on every
//! line-break variant into one string per line.

use super::super::error::AstError;
use super::super::fields::Field;
use super::super::fragment::Fragment;
use super::super::position::split_lines;

/// Comment content: a single string or one string per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentText {
    Single(String),
    Lines(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    text: CommentText,
    pub(crate) fragment: Fragment,
}

impl Comment {
    pub fn single(text: impl Into<String>) -> Self {
        Self::from_text(CommentText::Single(text.into()))
    }

    /// Split text into one entry per physical line
    pub fn split(text: &str) -> Self {
        Self::from_text(CommentText::Lines(
            split_lines(text).into_iter().map(str::to_string).collect(),
        ))
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::from_text(CommentText::Lines(lines))
    }

    fn from_text(text: CommentText) -> Self {
        Self {
            text,
            fragment: Fragment::new(),
        }
    }

    pub fn text(&self) -> &CommentText {
        &self.text
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Comment content as lines, whichever form it is stored in
    pub fn lines(&self) -> Vec<&str> {
        match &self.text {
            CommentText::Single(text) => vec![text.as_str()],
            CommentText::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// Read a comment value; text is split when `split_text` is set
    pub(crate) fn from_field(
        kind: &'static str,
        field: Field,
        split_text: bool,
    ) -> Result<Self, AstError> {
        match field {
            Field::Text(text) if split_text => Ok(Self::split(&text)),
            Field::Text(text) => Ok(Self::single(text)),
            Field::List(items) => {
                let lines = items
                    .into_iter()
                    .map(|item| match item {
                        Field::Text(line) => Ok(line),
                        other => Err(AstError::InvalidChildType {
                            kind,
                            field: "value".to_string(),
                            expected: "a list of strings",
                            found: other.describe(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::from_lines(lines))
            }
            other => Err(AstError::InvalidChildType {
                kind,
                field: "value".to_string(),
                expected: "a string or list of strings",
                found: other.describe(),
            }),
        }
    }

    pub(crate) fn to_field(&self) -> Field {
        match &self.text {
            CommentText::Single(text) => Field::Text(text.clone()),
            CommentText::Lines(lines) => Field::from(lines.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_crlf() {
        let comment = Comment::split("a\r\nmulti\r\nline\r\ncomment");
        assert_eq!(comment.lines(), vec!["a", "multi", "line", "comment"]);
    }

    #[test]
    fn test_list_of_non_strings_is_rejected() {
        let field = Field::List(vec![Field::from("ok"), Field::Number(1.0)]);
        assert!(matches!(
            Comment::from_field("block_comment", field, true),
            Err(AstError::InvalidChildType { .. })
        ));
    }

    #[test]
    fn test_single_text_is_kept_whole() {
        let comment = Comment::from_field("line_comment", Field::from(" note"), false).unwrap();
        assert_eq!(comment.text(), &CommentText::Single(" note".to_string()));
    }
}
