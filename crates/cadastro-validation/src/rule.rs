//! Rule values
//!
//! A `Rule` is a declarative, serializable description of one constraint on
//! a field value. Schemas hold ordered lists of them; `check` evaluates one.

use serde::{Deserialize, Serialize};

use crate::email::validate_email_shape;
use crate::string::{
    validate_exact_length, validate_max_length, validate_min_length, validate_required,
};

/// Outcome of checking one rule against one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(message) => Some(message.as_str()),
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(message) => Err(message),
        }
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(message) => Verdict::Fail(message),
        }
    }
}

/// One constraint on a string field, carrying the message shown on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    ExactLength { len: usize, message: String },
    EmailShape { message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Rule::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn exact_length(len: usize, message: impl Into<String>) -> Self {
        Rule::ExactLength {
            len,
            message: message.into(),
        }
    }

    pub fn email_shape(message: impl Into<String>) -> Self {
        Rule::EmailShape {
            message: message.into(),
        }
    }

    /// Message reported when this rule fails
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::ExactLength { message, .. }
            | Rule::EmailShape { message } => message,
        }
    }

    /// Check `value` against this rule. Never mutates the input.
    pub fn check(&self, value: &str) -> Verdict {
        let result = match self {
            Rule::Required { message } => validate_required(value, message),
            Rule::MinLength { min, message } => validate_min_length(value, *min, message),
            Rule::MaxLength { max, message } => validate_max_length(value, *max, message),
            Rule::ExactLength { len, message } => validate_exact_length(value, *len, message),
            Rule::EmailShape { message } => validate_email_shape(value, message),
        };
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rule::required("req"), "", Some("req"))]
    #[case(Rule::required("req"), "a", None)]
    #[case(Rule::min_length(1, "min"), "", Some("min"))]
    #[case(Rule::min_length(1, "min"), "x", None)]
    #[case(Rule::max_length(2, "max"), "PER", Some("max"))]
    #[case(Rule::max_length(2, "max"), "P", None)]
    #[case(Rule::exact_length(2, "len"), "P", Some("len"))]
    #[case(Rule::exact_length(2, "len"), "PE", None)]
    #[case(Rule::email_shape("mail"), "not-an-email", Some("mail"))]
    #[case(Rule::email_shape("mail"), "a@b.com", None)]
    fn test_rule_check(#[case] rule: Rule, #[case] value: &str, #[case] failure: Option<&str>) {
        assert_eq!(rule.check(value).message(), failure);
    }

    #[test]
    fn test_message_accessor() {
        assert_eq!(Rule::exact_length(2, "Use 2 letras").message(), "Use 2 letras");
        assert_eq!(Rule::email_shape("Email inválido").message(), "Email inválido");
    }

    #[test]
    fn test_verdict_into_result() {
        assert_eq!(Verdict::Pass.into_result(), Ok(()));
        assert_eq!(Verdict::Fail("x".into()).into_result(), Err("x".to_string()));
        assert!(Verdict::from(Ok(())).is_pass());
    }

    #[test]
    fn test_rule_serializes_with_kind_tag() {
        let json = serde_json::to_value(Rule::exact_length(2, "Use 2 letras")).unwrap();
        assert_eq!(json["kind"], "exact_length");
        assert_eq!(json["len"], 2);

        let back: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(back, Rule::exact_length(2, "Use 2 letras"));
    }
}
