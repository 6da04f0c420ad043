//! Parser for degree-day field names
//!
//! Accepts exactly `(hdd|cdd)\(<digits>[.<digits>]\)`, case-insensitive,
//! with no surrounding whitespace.

use crate::fields::error::{FieldError, FieldResult};
use crate::fields::{DegreeDayField, DegreeDayKind};
use std::iter::Peekable;
use std::str::Chars;

/// Degree-day field parser
pub struct FieldParser<'a> {
    chars: Peekable<Chars<'a>>,
    original: &'a str,
    position: usize,
}

impl<'a> FieldParser<'a> {
    /// Create a new parser
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            original: input,
            position: 0,
        }
    }

    /// Parse a field name
    pub fn parse(field: &str) -> FieldResult<DegreeDayField> {
        FieldParser::new(field).parse_field()
    }

    fn parse_field(&mut self) -> FieldResult<DegreeDayField> {
        let kind = self.parse_kind()?;
        self.expect('(')?;
        let base = self.parse_base_temperature()?;
        self.expect(')')?;

        if self.chars.peek().is_some() {
            return Err(self.error("Trailing characters after ')'"));
        }

        let base_temperature =
            base.parse::<f64>()
                .map_err(|_| FieldError::InvalidBaseTemperature {
                    field: self.original.to_string(),
                    value: base.clone(),
                })?;

        Ok(DegreeDayField {
            kind,
            base_temperature,
            name: self.original.to_string(),
        })
    }

    /// Parse the three-letter prefix
    fn parse_kind(&mut self) -> FieldResult<DegreeDayKind> {
        let mut prefix = String::with_capacity(3);

        for _ in 0..3 {
            match self.chars.next() {
                Some(c) if c.is_ascii_alphabetic() => {
                    prefix.push(c.to_ascii_lowercase());
                    self.position += 1;
                }
                Some(c) => {
                    return Err(self.error(format!("Expected a letter, found '{}'", c)));
                }
                None => return Err(self.error("Unexpected end of input, expected 'hdd' or 'cdd'")),
            }
        }

        match prefix.as_str() {
            "hdd" => Ok(DegreeDayKind::Heating),
            "cdd" => Ok(DegreeDayKind::Cooling),
            _ => Err(FieldError::malformed(
                self.original,
                0,
                format!("Unknown degree-day kind '{}'", prefix),
            )),
        }
    }

    /// Parse `digits[.digits]`
    fn parse_base_temperature(&mut self) -> FieldResult<String> {
        let mut literal = self.take_digits();
        if literal.is_empty() {
            return Err(self.error("Expected base temperature digits"));
        }

        if self.chars.peek() == Some(&'.') {
            self.chars.next();
            self.position += 1;
            literal.push('.');

            let fraction = self.take_digits();
            if fraction.is_empty() {
                return Err(self.error("Expected digits after '.'"));
            }
            literal.push_str(&fraction);
        }

        Ok(literal)
    }

    fn take_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.chars.next();
                self.position += 1;
            } else {
                break;
            }
        }
        digits
    }

    fn expect(&mut self, expected: char) -> FieldResult<()> {
        match self.chars.next() {
            Some(c) if c == expected => {
                self.position += 1;
                Ok(())
            }
            Some(c) => Err(self.error(format!("Expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("Unexpected end of input, expected '{}'", expected))),
        }
    }

    fn error(&self, message: impl Into<String>) -> FieldError {
        FieldError::malformed(self.original, self.position, message)
    }
}
