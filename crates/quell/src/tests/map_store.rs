//! An in-memory map-backed store used as the test backend.
//!
//! Resolution walks plain JSON values: objects become selections, anything
//! else is a scalar. This mirrors the shape production backends take
//! without any of their I/O.

use crate::resolve::Field;
use crate::resolve::ResolveContext;
use crate::resolve::ResolveError;
use crate::resolve::Selection;
use crate::resolve::Store;
use crate::resolve::Value;
use indexmap::IndexMap;

/// A store over a fixed map of root names to JSON values.
pub struct MapStore {
    data: IndexMap<String, Value>,
}

/// Builds a [`MapStore`] from a `serde_json::json!` object literal.
///
/// # Panics
///
/// Panics if `value` is not a JSON object; test fixtures always are.
pub fn map_store(value: Value) -> MapStore {
    let Value::Object(object) = value else {
        panic!("map_store fixture requires a JSON object, got {value}");
    };
    MapStore {
        data: object.into_iter().collect(),
    }
}

impl Store for MapStore {
    fn query(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError> {
        match self.data.get(ctx.name) {
            Some(value) => Ok(Box::new(MapField {
                value: value.clone(),
            })),
            None => Err(ResolveError::FieldNotFound {
                name: ctx.name.to_string(),
            }),
        }
    }
}

/// A resolved value; scalar or composite depending on its JSON shape.
struct MapField {
    value: Value,
}

impl Field for MapField {
    fn value(&self) -> Result<Value, ResolveError> {
        Ok(self.value.clone())
    }

    fn selection(&self) -> Result<Box<dyn Selection>, ResolveError> {
        match &self.value {
            Value::Object(map) => Ok(Box::new(MapSelection { data: map.clone() })),
            _ => Err(ResolveError::NotImplemented),
        }
    }
}

/// The nested resolver over a JSON object's entries.
struct MapSelection {
    data: serde_json::Map<String, Value>,
}

impl Selection for MapSelection {
    fn query(&self, ctx: &ResolveContext<'_>) -> Result<Box<dyn Field>, ResolveError> {
        match self.data.get(ctx.name) {
            Some(value) => Ok(Box::new(MapField {
                value: value.clone(),
            })),
            None => Err(ResolveError::FieldNotFound {
                name: ctx.name.to_string(),
            }),
        }
    }
}
