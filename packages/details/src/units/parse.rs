//! Validating construction of provision trees from parsed YAML.

use serde_yaml_ng::{Mapping, Value};

use super::Unit;
use crate::error::{MalformedUnitError, UnitErrorReason};

/// Where the walk currently is, for error reporting.
struct Location<'a> {
    position: String,
    parent_item: Option<&'a str>,
}

impl Location<'_> {
    fn fail(&self, item: Option<&str>, reason: UnitErrorReason) -> MalformedUnitError {
        MalformedUnitError {
            position: self.position.clone(),
            near: item.or(self.parent_item).map(str::to_string),
            reason,
        }
    }
}

/// Parse the root sequence. A null root is an empty tree.
pub(super) fn parse_root(value: &Value) -> Result<Vec<Unit>, MalformedUnitError> {
    let root = Location {
        position: "units".to_string(),
        parent_item: None,
    };
    parse_units(value, &root)
}

fn parse_units(value: &Value, at: &Location<'_>) -> Result<Vec<Unit>, MalformedUnitError> {
    let nodes = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(nodes) => nodes,
        _ => return Err(at.fail(None, UnitErrorReason::UnitsNotASequence)),
    };

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let here = Location {
                position: format!("{}[{index}]", at.position),
                parent_item: at.parent_item,
            };
            parse_unit(node, &here)
        })
        .collect()
}

fn parse_unit(value: &Value, at: &Location<'_>) -> Result<Unit, MalformedUnitError> {
    let Value::Mapping(node) = value else {
        return Err(at.fail(None, UnitErrorReason::NotAMapping));
    };

    let item = match field(node, "item") {
        Some(Value::Null) | None => None,
        Some(raw) => match scalar_text(raw) {
            Some(text) => Some(text),
            None => {
                return Err(at.fail(
                    None,
                    UnitErrorReason::InvalidField {
                        field: "item".to_string(),
                    },
                ))
            }
        },
    };
    let Some(item) = item.filter(|text| !text.trim().is_empty()) else {
        return Err(at.fail(None, UnitErrorReason::MissingItem));
    };

    let caption = optional_text(node, "caption", &item, at)?;
    let content = optional_text(node, "content", &item, at)?;

    // Children are built before their parent.
    let units = match field(node, "units") {
        None => Vec::new(),
        Some(children) => {
            let below = Location {
                position: format!("{}.units", at.position),
                parent_item: Some(&item),
            };
            parse_units(children, &below)
                .map_err(|mut err| {
                    if err.position == below.position {
                        err.position.clone_from(&at.position);
                        err.near = Some(item.clone());
                    }
                    err
                })?
        }
    };

    let mut unit = Unit::branch(item.trim(), content, units);
    unit.caption = caption;
    Ok(unit)
}

fn field<'v>(node: &'v Mapping, key: &str) -> Option<&'v Value> {
    node.get(key)
}

/// Render a scalar as text; numbers are common for item labels.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn optional_text(
    node: &Mapping,
    key: &str,
    item: &str,
    at: &Location<'_>,
) -> Result<Option<String>, MalformedUnitError> {
    match field(node, key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => scalar_text(raw).map(Some).ok_or_else(|| {
            at.fail(
                Some(item),
                UnitErrorReason::InvalidField {
                    field: key.to_string(),
                },
            )
        }),
    }
}
