//! Tokenizer for dump commands.
//!
//! The grammar is deliberately permissive: the input is split on whitespace,
//! tokens of the form `name=value` (non-empty name and value) become option
//! entries, and everything else is silently dropped. Parsing is total; it
//! never fails.

use std::collections::HashMap;
use std::fmt;

/// A parsed option value, coerced from its textual form.
///
/// Coercion priority per token: exact `true`/`false`, then integer, then
/// float, then the raw string.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Integer view. A float with no fractional part counts as an integer,
    /// mirroring how the command language treats `10.0` and `10` alike.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            OptionValue::Float(x) if x.fract() == 0.0 && x.is_finite() => Some(*x as i64),
            _ => None,
        }
    }

    /// Float view, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(x) => Some(*x),
            OptionValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionValue::Bool(flag) => write!(f, "{flag}"),
            OptionValue::Int(n) => write!(f, "{n}"),
            // Keep the decimal point the user typed: 2.0 stays "2.0".
            OptionValue::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// The options extracted from one command line. Built fresh per invocation.
#[derive(Debug, Clone, Default)]
pub struct ParsedOptions {
    entries: HashMap<String, OptionValue>,
}

impl ParsedOptions {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a command line into options. Last occurrence of a name wins.
pub fn parse(input: &str) -> ParsedOptions {
    let mut entries = HashMap::new();
    for token in input.split_whitespace() {
        let Some((name, value)) = token.split_once('=') else {
            continue;
        };
        if name.is_empty() || value.is_empty() {
            continue;
        }
        entries.insert(name.to_string(), coerce(value));
    }
    ParsedOptions { entries }
}

fn coerce(raw: &str) -> OptionValue {
    match raw {
        "true" => return OptionValue::Bool(true),
        "false" => return OptionValue::Bool(false),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        return OptionValue::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return OptionValue::Float(x);
    }
    OptionValue::Str(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip_typed_options() {
        let options = parse("unicode=9.0 shuffle=true max=10 join=false");
        assert_eq!(options.len(), 4);
        assert_eq!(options.get("unicode"), Some(&OptionValue::Float(9.0)));
        assert_eq!(options.get("shuffle"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get("max"), Some(&OptionValue::Int(10)));
        assert_eq!(options.get("join"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn last_occurrence_wins() {
        let options = parse("max=5 max=10");
        assert_eq!(options.get("max"), Some(&OptionValue::Int(10)));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn malformed_tokens_are_dropped() {
        let options = parse("foo bar=");
        assert!(options.is_empty());

        let options = parse("=value plain --flag");
        assert!(options.is_empty());
    }

    #[test]
    fn coercion_priority() {
        assert_eq!(coerce("true"), OptionValue::Bool(true));
        assert_eq!(coerce("false"), OptionValue::Bool(false));
        assert_eq!(coerce("-3"), OptionValue::Int(-3));
        assert_eq!(coerce("10"), OptionValue::Int(10));
        assert_eq!(coerce("9.0"), OptionValue::Float(9.0));
        assert_eq!(coerce("True"), OptionValue::Str("True".to_string()));
        assert_eq!(coerce("10x"), OptionValue::Str("10x".to_string()));
    }

    #[test]
    fn float_display_keeps_decimal_point() {
        assert_eq!(coerce("2.0").to_string(), "2.0");
        assert_eq!(coerce("2.5").to_string(), "2.5");
        assert_eq!(coerce("7").to_string(), "7");
    }

    #[test]
    fn whitespace_variants() {
        let options = parse("  max=1\t\tjoin=true\n");
        assert_eq!(options.len(), 2);
    }

    proptest! {
        #[test]
        fn parse_is_total(input in ".{0,64}") {
            let _ = parse(&input);
        }

        #[test]
        fn well_formed_tokens_always_land(name in "[a-z]{1,8}", value in "[a-z0-9.]{1,8}") {
            let options = parse(&format!("{name}={value}"));
            prop_assert!(options.get(&name).is_some());
        }

        #[test]
        fn integers_coerce_to_int(n in any::<i64>()) {
            prop_assert_eq!(coerce(&n.to_string()), OptionValue::Int(n));
        }
    }
}
