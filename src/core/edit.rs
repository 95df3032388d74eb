//! Purpose: Pointer-addressed reads and edits over parsed documents.
//! Exports: `get`, `set`, `remove`, `SetOutcome`.
//! Role: In-memory mutation layer between the CLI and serde_json values.
//! Invariants: Pointers use RFC 6901 syntax (`/a/b`, `~0`/`~1` escapes).
//! Invariants: `set` creates missing intermediate objects; it never creates
//! array elements other than an append at the final token.
//! Invariants: Key order of untouched entries is preserved.

use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};

/// Reports what `set` did besides the assignment itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SetOutcome {
    /// Intermediate objects created because a pointer segment was absent.
    pub created_parents: usize,
}

pub fn get<'a>(doc: &'a Value, pointer: &str) -> Result<Option<&'a Value>, Error> {
    parse_pointer(pointer)?;
    Ok(doc.pointer(pointer))
}

/// Assigns `new_value` at `pointer`, creating missing intermediate objects
/// along the way. The empty pointer replaces the whole document. The final
/// token may be `-` or the current length to append to an array.
pub fn set(doc: &mut Value, pointer: &str, new_value: Value) -> Result<SetOutcome, Error> {
    let tokens = parse_pointer(pointer)?;
    let Some((last, parents)) = tokens.split_last() else {
        *doc = new_value;
        return Ok(SetOutcome::default());
    };

    let mut created_parents = 0;
    let mut current = doc;
    for token in parents {
        current = match current {
            Value::Object(map) => {
                if !map.contains_key(token.as_str()) {
                    created_parents += 1;
                }
                map.entry(token.clone())
                    .or_insert_with(|| Value::Object(Map::new()))
            }
            Value::Array(items) => {
                let index = array_index(token, pointer)?;
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or_else(|| out_of_bounds(index, len, pointer))?
            }
            _ => return Err(non_container(pointer)),
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), new_value);
        }
        Value::Array(items) => {
            if last == "-" {
                items.push(new_value);
            } else {
                let index = array_index(last, pointer)?;
                if index > items.len() {
                    return Err(out_of_bounds(index, items.len(), pointer));
                }
                if index == items.len() {
                    items.push(new_value);
                } else {
                    items[index] = new_value;
                }
            }
        }
        _ => return Err(non_container(pointer)),
    }

    Ok(SetOutcome { created_parents })
}

/// Removes and returns the value at `pointer`. Removing the document root is
/// refused; replacing it is `set`'s job.
pub fn remove(doc: &mut Value, pointer: &str) -> Result<Value, Error> {
    let tokens = parse_pointer(pointer)?;
    let Some((last, parents)) = tokens.split_last() else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("refusing to remove the document root")
            .with_hint("Use `set <file> \"\" <json>` to replace the whole document."));
    };

    let mut current = doc;
    for token in parents {
        current = match current {
            Value::Object(map) => map
                .get_mut(token.as_str())
                .ok_or_else(|| not_found(pointer))?,
            Value::Array(items) => {
                let index = array_index(token, pointer)?;
                items.get_mut(index).ok_or_else(|| not_found(pointer))?
            }
            _ => return Err(non_container(pointer)),
        };
    }

    match current {
        Value::Object(map) => map
            .shift_remove(last.as_str())
            .ok_or_else(|| not_found(pointer)),
        Value::Array(items) => {
            let index = array_index(last, pointer)?;
            if index < items.len() {
                Ok(items.remove(index))
            } else {
                Err(not_found(pointer))
            }
        }
        _ => Err(non_container(pointer)),
    }
}

fn parse_pointer(pointer: &str) -> Result<Vec<String>, Error> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("invalid JSON pointer")
            .with_pointer(pointer)
            .with_hint("Pointers start with '/', e.g. /compilerOptions/baseUrl."));
    };
    Ok(rest.split('/').map(unescape_token).collect())
}

// RFC 6901 order: ~1 first, then ~0, so "~01" decodes to "~1" not "/".
fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

fn array_index(token: &str, pointer: &str) -> Result<usize, Error> {
    token.parse::<usize>().map_err(|_| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("array index `{token}` is not an unsigned integer"))
            .with_pointer(pointer)
    })
}

fn out_of_bounds(index: usize, len: usize, pointer: &str) -> Error {
    Error::new(ErrorKind::Usage)
        .with_message(format!("array index {index} out of bounds (length {len})"))
        .with_pointer(pointer)
}

fn non_container(pointer: &str) -> Error {
    Error::new(ErrorKind::Usage)
        .with_message("pointer traverses a non-container value")
        .with_pointer(pointer)
}

fn not_found(pointer: &str) -> Error {
    Error::new(ErrorKind::NotFound)
        .with_message("no value at pointer")
        .with_pointer(pointer)
}
