//! Simplification of payload trees for display.
//!
//! Raw payloads mirror the grammar's shape, so a single digit matched three
//! rules deep shows up as `[[["1"]]]`. Prettifying unwraps lists that hold a
//! single item and drops empty lists, bottom-up:
//!
//! - `["1"]` becomes `"1"`
//! - `[[], "1", "2"]` becomes `["1", "2"]`
//! - `[["foo", "bar"]]` becomes `["foo", "bar"]`
//!
//! The result is stable: prettifying it again changes nothing.

use crate::payload::Payload;

impl<'src> Payload<'src> {
    /// Return a simplified copy of this payload
    pub fn prettify(&self) -> Payload<'src> {
        match self {
            Payload::Text(_) => self.clone(),
            Payload::List(items) => prettify_list(items),
        }
    }
}

fn prettify_list<'src>(items: &[Payload<'src>]) -> Payload<'src> {
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        // Lift single element: ["1"] => "1"
        let item = match item {
            Payload::List(inner) if inner.len() == 1 => &inner[0],
            _ => item,
        };

        match item {
            Payload::Text(_) => result.push(item.clone()),
            Payload::List(inner) if inner.is_empty() => {}
            Payload::List(inner) => {
                let pretty = prettify_list(inner);
                // A list of nothing but empties simplifies to empty; drop that too
                if !pretty.is_empty_list() {
                    result.push(pretty);
                }
            }
        }
    }

    if result.len() == 1 {
        result.swap_remove(0)
    } else {
        Payload::List(result)
    }
}
