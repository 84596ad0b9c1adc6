//! Literal rendering.

use std::fmt::Write as _;

use linqdsl_model::Constant;
use serde_json::Value;

use super::LinqSerializer;
use crate::error::SerializeResult;

impl LinqSerializer {
    /// Render a constant.
    ///
    /// String values are wrapped in double quotes without escaping embedded
    /// quotes or control characters.
    pub(super) fn visit_constant(&mut self, constant: &Constant) -> SerializeResult<()> {
        match constant {
            Constant::String(s) => {
                self.out.push('"');
                self.out.push_str(s);
                self.out.push('"');
            }
            Constant::Integer(n) => write!(self.out, "{n}")?,
            // Debug keeps the decimal point on integral values (`1.0`).
            Constant::Float(x) if x.is_finite() => write!(self.out, "{x:?}")?,
            Constant::Boolean(b) => write!(self.out, "{b}")?,
            other => self.visit_default_constant(other)?,
        }
        Ok(())
    }

    /// Default literal rule: `null`, or a bound parameter reference.
    fn visit_default_constant(&mut self, constant: &Constant) -> SerializeResult<()> {
        let value = match constant {
            Constant::Null => {
                self.out.push_str("null");
                return Ok(());
            }
            Constant::Float(x) => Value::String(x.to_string()),
            Constant::Other(value) => value.clone(),
            Constant::String(s) => Value::String(s.clone()),
            Constant::Integer(n) => Value::from(*n),
            Constant::Boolean(b) => Value::Bool(*b),
        };
        let label = self.bind(value);
        write!(self.out, "${label}")?;
        Ok(())
    }

    /// Bind `value` and return its label; equal values share one label.
    fn bind(&mut self, value: Value) -> String {
        let key = value.to_string();
        if let Some(label) = self.labels.get(&key) {
            return label.clone();
        }
        let label = format!("{}{}", self.config.parameter_prefix, self.params.len() + 1);
        self.labels.insert(key, label.clone());
        self.params.insert(label.clone(), value);
        label
    }
}
