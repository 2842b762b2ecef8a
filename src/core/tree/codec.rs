//! JSON encoding of translation trees.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::{Node, PLURAL_OTHER, Plural, Translation, Tree, TreeError};

impl Tree {
    /// Decode a tree from a parsed JSON value. The root must be an object.
    pub fn from_json(value: Value) -> Result<Self, TreeError> {
        match value {
            Value::Object(map) => decode_object(map, ""),
            other => Err(TreeError::InvalidValue {
                key: String::new(),
                reason: format!("expected an object at the root, found {}", kind(&other)),
            }),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, node)| (key.clone(), node.to_json()))
                .collect(),
        )
    }
}

impl Node {
    pub fn to_json(&self) -> Value {
        match self {
            Node::Leaf(Translation::Text(text)) => Value::String(text.clone()),
            Node::Leaf(Translation::Plural(plural)) => Value::Object(
                plural
                    .forms()
                    .map(|(form, text)| (form.to_string(), Value::String(text.to_string())))
                    .collect(),
            ),
            Node::Subtree(tree) => tree.to_json(),
        }
    }
}

fn decode_object(map: Map<String, Value>, parent: &str) -> Result<Tree, TreeError> {
    let mut tree = Tree::new();
    for (key, value) in map {
        let full_key = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };
        let node = decode_node(value, &full_key)?;
        tree.entries.insert(key, node);
    }
    Ok(tree)
}

fn decode_node(value: Value, full_key: &str) -> Result<Node, TreeError> {
    match value {
        Value::String(text) => Ok(Node::text(text)),
        Value::Object(map) if map.contains_key(PLURAL_OTHER) => {
            let mut forms = IndexMap::with_capacity(map.len());
            for (form, text) in map {
                match text {
                    Value::String(text) => {
                        forms.insert(form, text);
                    }
                    other => {
                        return Err(TreeError::InvalidValue {
                            key: full_key.to_string(),
                            reason: format!(
                                "plural form \"{form}\" must be a string, found {}",
                                kind(&other)
                            ),
                        });
                    }
                }
            }
            Plural::from_forms(forms)
                .map(Node::plural)
                .ok_or_else(|| TreeError::InvalidValue {
                    key: full_key.to_string(),
                    reason: "plural record without \"other\"".to_string(),
                })
        }
        Value::Object(map) => decode_object(map, full_key).map(Node::Subtree),
        other => Err(TreeError::InvalidValue {
            key: full_key.to_string(),
            reason: format!("expected a string or an object, found {}", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(Translation::Text(text)) => serializer.serialize_str(text),
            Node::Leaf(Translation::Plural(plural)) => {
                let mut map = serializer.serialize_map(None)?;
                for (form, text) in plural.forms() {
                    map.serialize_entry(form, text)?;
                }
                map.end()
            }
            Node::Subtree(tree) => tree.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Tree::from_json(value).map_err(de::Error::custom)
    }
}
