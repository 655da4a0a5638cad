use serde_json::{Map, Value};
use tracing::warn;
use crate::decoder::defect::{DefectKind, JsonType, SoftDefect};
use crate::decoder::error::DecodeError;
use crate::decoder::rules::{Coercion, FieldRule, OnMismatch, OnMissing};

static NULL: Value = Value::Null;

/// A scalar type a field can decode into.
pub trait FieldValue: Sized + Default {
    const EXPECTED: &'static str;

    fn exact(value: &Value) -> Option<Self>;

    fn coerce(_value: &Value, _coercion: Coercion) -> Option<Self> {
        None
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn exact(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "string";

    fn exact(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "number";

    fn exact(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn exact(value: &Value) -> Option<Self> {
        integral(value)
    }

    fn coerce(value: &Value, coercion: Coercion) -> Option<Self> {
        coerce_integer(value, coercion)
    }
}

impl FieldValue for i32 {
    const EXPECTED: &'static str = "integer";

    fn exact(value: &Value) -> Option<Self> {
        integral(value).and_then(|n| i32::try_from(n).ok())
    }

    fn coerce(value: &Value, coercion: Coercion) -> Option<Self> {
        coerce_integer(value, coercion).and_then(|n| i32::try_from(n).ok())
    }
}

fn in_i64_range(n: f64) -> bool {
    n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64
}

/// Integers, including floats with no fractional part (`4.0`).
fn integral(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && in_i64_range(*n))
            .map(|n| n as i64)
    })
}

fn coerce_integer(value: &Value, coercion: Coercion) -> Option<i64> {
    match coercion {
        Coercion::None => None,
        Coercion::DigitString => value.as_str().and_then(|s| s.parse().ok()),
        Coercion::TruncateDecimal => value
            .as_f64()
            .map(f64::trunc)
            .filter(|n| in_i64_range(*n))
            .map(|n| n as i64),
    }
}

/// Reads the fields of one JSON object according to their [`FieldRule`]s,
/// collecting soft defects as it goes.
pub struct FieldReader<'a, 'd> {
    object: &'a Map<String, Value>,
    path: String,
    defects: &'d mut Vec<SoftDefect>,
}

impl<'a, 'd> FieldReader<'a, 'd> {
    pub fn from_value(
        value: &'a Value,
        path: impl Into<String>,
        defects: &'d mut Vec<SoftDefect>,
    ) -> Result<Self, DecodeError> {
        let path = path.into();
        match value.as_object() {
            Some(object) => Ok(Self {
                object,
                path,
                defects,
            }),
            None => Err(DecodeError::NotAnObject {
                path: if path.is_empty() { "document".to_string() } else { path },
                found: JsonType::of(value),
            }),
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// `null` is treated the same as a missing key.
    fn lookup(&self, rule: &FieldRule) -> Option<&'a Value> {
        self.object.get(rule.key).filter(|value| !value.is_null())
    }

    /// Keys present in the object that none of `rules` reads.
    pub fn unknown_keys(&self, rules: &[FieldRule]) -> Vec<&'a str> {
        self.object
            .keys()
            .map(String::as_str)
            .filter(|key| !rules.iter().any(|rule| rule.key == *key))
            .collect()
    }

    fn record(&mut self, path: String, kind: DefectKind) {
        warn!("Soft defect decoding {}: {}", path, kind);
        self.defects.push(SoftDefect { path, kind });
    }

    pub fn read<T: FieldValue>(&mut self, rule: &FieldRule) -> Result<Option<T>, DecodeError> {
        let path = self.field_path(rule.key);
        // A present `null` under a defaulting mismatch policy is a bad value,
        // not a missing key.
        let present_null = rule.on_mismatch == OnMismatch::Default
            && self.object.get(rule.key).map_or(false, Value::is_null);
        let value = match self.lookup(rule) {
            Some(value) => value,
            None if present_null => &NULL,
            None => {
                return match rule.on_missing {
                    OnMissing::Absent => Ok(None),
                    OnMissing::Default => Ok(Some(T::default())),
                    OnMissing::Fail => Err(DecodeError::MissingField { path }),
                };
            }
        };

        if let Some(exact) = T::exact(value) {
            return Ok(Some(exact));
        }

        let found = JsonType::of(value);
        if let Some(coerced) = T::coerce(value, rule.coercion) {
            self.record(path, DefectKind::Coerced { from: found });
            return Ok(Some(coerced));
        }

        match rule.on_mismatch {
            OnMismatch::Fail => Err(DecodeError::InvalidField {
                path,
                expected: T::EXPECTED,
                found,
            }),
            on_mismatch => {
                self.record(
                    path,
                    DefectKind::Mismatched {
                        expected: T::EXPECTED,
                        found,
                    },
                );
                Ok((on_mismatch == OnMismatch::Default).then(T::default))
            }
        }
    }

    /// For rules that never yield `None` (defaulted or required).
    pub fn value<T: FieldValue>(&mut self, rule: &FieldRule) -> Result<T, DecodeError> {
        Ok(self.read(rule)?.unwrap_or_default())
    }

    pub fn object(&self, rule: &FieldRule) -> Result<&'a Value, DecodeError> {
        let path = self.field_path(rule.key);
        match self.lookup(rule) {
            Some(value) if value.is_object() => Ok(value),
            Some(value) => Err(DecodeError::NotAnObject {
                path,
                found: JsonType::of(value),
            }),
            None => Err(DecodeError::MissingObject { path }),
        }
    }

    /// Decodes an array field element by element. A single bad element sends
    /// the whole field down the rule's mismatch policy.
    pub fn list<T, F>(&mut self, rule: &FieldRule, decode_item: F) -> Result<Option<Vec<T>>, DecodeError>
    where
        F: Fn(&Value, String, &mut Vec<SoftDefect>) -> Result<T, DecodeError>,
    {
        let path = self.field_path(rule.key);
        let Some(value) = self.lookup(rule) else {
            return match rule.on_missing {
                OnMissing::Absent => Ok(None),
                OnMissing::Default => Ok(Some(Vec::new())),
                OnMissing::Fail => Err(DecodeError::MissingField { path }),
            };
        };

        let Some(elements) = value.as_array() else {
            let found = JsonType::of(value);
            return self.reject_list(rule, path, found, DefectKind::Mismatched {
                expected: "array",
                found,
            });
        };

        let mut items = Vec::with_capacity(elements.len());
        let mut item_defects = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            match decode_item(element, format!("{}[{}]", path, index), &mut item_defects) {
                Ok(item) => items.push(item),
                Err(e) => {
                    return self.reject_list(rule, path, JsonType::Array, DefectKind::InvalidElement {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.defects.append(&mut item_defects);
        Ok(Some(items))
    }

    fn reject_list<T>(
        &mut self,
        rule: &FieldRule,
        path: String,
        found: JsonType,
        kind: DefectKind,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        match rule.on_mismatch {
            OnMismatch::Fail => Err(DecodeError::InvalidField {
                path,
                expected: "array",
                found,
            }),
            OnMismatch::Absent => {
                self.record(path, kind);
                Ok(None)
            }
            OnMismatch::Default => {
                self.record(path, kind);
                Ok(Some(Vec::new()))
            }
        }
    }
}
