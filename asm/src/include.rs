//! `!include` expansion.
//!
//! Replaces every `!include <file>` node with the parsed content of
//! the named file (relative to the working directory) before assembly,
//! so the encoder itself never touches the filesystem. An included
//! list assembles as a sub-routine block.

use serde_yaml::Value;
use std::fs;

use crate::error::Error;

pub fn expand(node: Value) -> Result<Value, Error> {
    match node {
        Value::Tagged(tagged) => {
            if tagged.tag.to_string() != "!include" {
                return Err(Error::BadInclude(tagged.tag.to_string()));
            }
            let path = match &tagged.value {
                Value::String(path) => path.clone(),
                _ => return Err(Error::BadInclude("string argument expected".to_string())),
            };
            let text =
                fs::read_to_string(&path).map_err(|err| Error::FileOpen(path.clone(), err))?;
            let doc: Value = serde_yaml::from_str(&text)?;
            expand(doc)
        }
        Value::Sequence(seq) => Ok(Value::Sequence(
            seq.into_iter().map(expand).collect::<Result<_, _>>()?,
        )),
        Value::Mapping(map) => {
            let mut out = serde_yaml::Mapping::new();
            for (key, value) in map {
                out.insert(key, expand(value)?);
            }
            Ok(Value::Mapping(out))
        }
        other => Ok(other),
    }
}
