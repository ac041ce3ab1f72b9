use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Data produced by a successful parse
///
/// Leaves are text (normally slices of the source, owned once a
/// [`modify`](crate::modify) transform builds new text). Inner nodes are
/// ordered lists. There is no "absent" payload: nothing matched is the
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Payload<'src> {
    Text(Cow<'src, str>),
    List(Vec<Payload<'src>>),
}

impl<'src> Payload<'src> {
    pub fn text(text: impl Into<Cow<'src, str>>) -> Self {
        Payload::Text(text.into())
    }

    pub fn list(items: impl IntoIterator<Item = Payload<'src>>) -> Self {
        Payload::List(items.into_iter().collect())
    }

    /// The empty list
    pub fn empty() -> Self {
        Payload::List(Vec::new())
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Payload::List(items) if items.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Payload<'src>]> {
        match self {
            Payload::Text(_) => None,
            Payload::List(items) => Some(items),
        }
    }

    /// Concatenate every leaf, depth first
    pub fn concat(&self) -> String {
        let mut out = String::new();
        self.concat_into(&mut out);
        out
    }

    fn concat_into(&self, out: &mut String) {
        match self {
            Payload::Text(text) => out.push_str(text),
            Payload::List(items) => items.iter().for_each(|item| item.concat_into(out)),
        }
    }

    /// Detach the payload from the source text
    pub fn into_owned(self) -> Payload<'static> {
        match self {
            Payload::Text(text) => Payload::Text(Cow::Owned(text.into_owned())),
            Payload::List(items) => {
                Payload::List(items.into_iter().map(Payload::into_owned).collect())
            }
        }
    }

    /// Leaves joined with commas, used inside failure descriptions
    pub(crate) fn to_plain_string(&self) -> String {
        match self {
            Payload::Text(text) => text.to_string(),
            Payload::List(items) => items
                .iter()
                .map(Payload::to_plain_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Render as compact JSON
    pub fn to_json(&self) -> String {
        // Strings and arrays of strings always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl<'src> From<&'src str> for Payload<'src> {
    fn from(text: &'src str) -> Self {
        Payload::text(text)
    }
}

impl From<String> for Payload<'_> {
    fn from(text: String) -> Self {
        Payload::text(text)
    }
}

impl<'src> From<Vec<Payload<'src>>> for Payload<'src> {
    fn from(items: Vec<Payload<'src>>) -> Self {
        Payload::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_rendering() {
        let payload = Payload::list([
            Payload::text("a"),
            Payload::list([Payload::text("b"), Payload::empty()]),
        ]);
        assert_eq!(payload.to_json(), r#"["a",["b",[]]]"#);
        assert_eq!(payload.to_string(), r#"["a",["b",[]]]"#);
    }

    #[test]
    fn test_json_escapes_text() {
        let payload = Payload::text("say \"hi\"\n");
        assert_eq!(payload.to_json(), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_concat() {
        let payload = Payload::list([
            Payload::text("1"),
            Payload::list([Payload::text("2"), Payload::text("3")]),
            Payload::empty(),
        ]);
        assert_eq!(payload.concat(), "123");
    }

    #[test]
    fn test_accessors() {
        assert!(Payload::empty().is_empty_list());
        assert!(!Payload::text("").is_empty_list());
        assert_eq!(Payload::text("x").as_text(), Some("x"));
        assert_eq!(Payload::empty().as_list(), Some(&[][..]));
    }

    #[test]
    fn test_into_owned_outlives_source() {
        let owned = {
            let source = String::from("abc");
            Payload::list([Payload::text(&source[..1])]).into_owned()
        };
        assert_eq!(owned, Payload::list([Payload::text("a")]));
    }
}
