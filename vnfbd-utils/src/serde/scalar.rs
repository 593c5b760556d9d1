//! A loosely-typed leaf value as found in experiment configurations and function descriptors.
//!
//! Descriptor files written by hand freely mix `vcpus: 2`, `vcpus: "2"` and `cpu_bw: 0.5`. Every
//! such value ends up as a string in the generated descriptor, so the textual form matters: it
//! follows the conventions of the tooling that produced the input files (`2.0` for integral
//! floats, `True`/`False` for booleans and `None` for null).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    #[default]
    Null,
}

impl Scalar {
    /// Whether the value counts as set. Zero, the empty string, `false` and null do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Null => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) if x.is_nan() => f.write_str("nan"),
            Scalar::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
            }
            Scalar::Float(x) if *x != 0.0 && !(1e-4..1e16).contains(&x.abs()) => {
                write_exponent(f, *x)
            }
            Scalar::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Null => f.write_str("None"),
        }
    }
}

/// Write `x` in exponent notation with a signed exponent of at least two digits, e.g. `1e+16`
/// or `2.5e-05`.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let repr = format!("{x:e}");
    let (mantissa, exp) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}
