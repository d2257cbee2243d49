use std::collections::HashMap;
use std::fmt;

/// A constant value: what a `let` declaration or a constant expression
/// produces.
///
/// Integers and floats stay distinct so that `x + 1` with an integer `x` is
/// emitted without a decimal point.
///
/// # Examples
///
/// ```
/// use letcfg::Value;
///
/// assert_eq!(Value::Integer(8080).to_string(), "8080");
/// assert_eq!(Value::Float(3.14).to_string(), "3.14");
/// assert_eq!(Value::Float(2.0).to_string(), "2.0");
/// assert_eq!(Value::String("localhost".into()).to_string(), "localhost");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer number
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string (declared with double quotes, stored without them)
    String(String),
}

impl Value {
    /// Get as float, for numeric values
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::String(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::String(_))
    }

    /// Convert to a JSON value, used when dumping the constants table
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", format_float(*n)),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

/// Renders a float so it always reads as a float: `3.14` stays `3.14`, a
/// whole `2.0` keeps its `.0`.
///
/// Magnitudes of `1e16` and above, or below `1e-4`, switch to exponent form
/// with a signed two-digit exponent (`1e+16`, `1.5e-07`). Non-finite values
/// print as `inf`, `-inf` and `nan`.
///
/// # Examples
///
/// ```
/// use letcfg::value::format_float;
///
/// assert_eq!(format_float(8080.0), "8080.0");
/// assert_eq!(format_float(0.0001), "0.0001");
/// assert_eq!(format_float(0.00001), "1e-05");
/// assert_eq!(format_float(1.5e16), "1.5e+16");
/// assert_eq!(format_float(f64::NAN), "nan");
/// ```
pub fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return n.to_string();
    }

    let scientific = format!("{:e}", n);
    if let Some((mantissa, exponent)) = scientific.split_once('e')
        && let Ok(exponent) = exponent.parse::<i32>()
        && !(-4..16).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let text = n.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// The constants table, filled by `let` declarations in input order.
///
/// Re-declaring a name replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constants {
    values: HashMap<String, Value>,
}

impl Constants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a constant, returning the value it replaced.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object of all constants, keys sorted for deterministic output
    pub fn to_json(&self) -> serde_json::Value {
        let mut names: Vec<_> = self.values.keys().collect();
        names.sort();

        let object = names
            .into_iter()
            .map(|name| (name.clone(), self.values[name].to_json()))
            .collect();
        serde_json::Value::Object(object)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Constants {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut constants = Constants::new();
        for (name, value) in iter {
            constants.define(name, value);
        }
        constants
    }
}
