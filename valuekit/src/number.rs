//! Floating-point parsing with an explicit number format.
//!
//! Nothing here looks at the process locale. The caller passes a
//! [`NumberFormat`] describing separators and symbols, and
//! [`NumberFormat::INVARIANT`] gives the culture-neutral one.
//!
//! Accepted shape, in order:
//!
//! - optional whitespace, sign (or an opening parenthesis) and currency symbol
//! - integer digits, with group separators after the first digit
//! - optional decimal separator and fraction digits
//! - optional exponent: `e` or `E`, optional sign, digits
//! - optional whitespace, sign (or the closing parenthesis) and currency symbol
//!
//! The infinity and NaN symbols may stand in for the digits. The accepted
//! text is rewritten to Rust's float literal syntax and handed to
//! [`str::parse`], which rounds correctly. Magnitudes beyond the target type
//! become infinities.

use std::{borrow::Cow, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{NumberFormatError, Result};

/// Separators and symbols used when reading a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberFormat {
    pub decimal_separator: Cow<'static, str>,
    /// May be empty to disallow grouping.
    pub group_separator: Cow<'static, str>,
    pub positive_sign: Cow<'static, str>,
    pub negative_sign: Cow<'static, str>,
    /// May be empty to disallow a currency symbol.
    pub currency_symbol: Cow<'static, str>,
    pub infinity_symbol: Cow<'static, str>,
    pub nan_symbol: Cow<'static, str>,
}

impl NumberFormat {
    /// Culture-neutral format: `1,234.5e-3`, `¤` as currency.
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: Cow::Borrowed("."),
        group_separator: Cow::Borrowed(","),
        positive_sign: Cow::Borrowed("+"),
        negative_sign: Cow::Borrowed("-"),
        currency_symbol: Cow::Borrowed("¤"),
        infinity_symbol: Cow::Borrowed("Infinity"),
        nan_symbol: Cow::Borrowed("NaN"),
    };

    /// Replaces the decimal separator.
    pub fn with_decimal_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Replaces the group separator. An empty separator disables grouping.
    pub fn with_group_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Replaces the currency symbol. An empty symbol disables it.
    pub fn with_currency_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Checks that the format can be parsed unambiguously.
    pub fn validate(&self) -> Result<()> {
        if self.decimal_separator.is_empty() {
            return Err(NumberFormatError::InvalidFormat("decimal separator is empty"));
        }
        if self.decimal_separator == self.group_separator {
            return Err(NumberFormatError::InvalidFormat(
                "decimal and group separators are the same",
            ));
        }
        if self.positive_sign.is_empty() || self.negative_sign.is_empty() {
            return Err(NumberFormatError::InvalidFormat("sign symbol is empty"));
        }
        if self.positive_sign == self.negative_sign {
            return Err(NumberFormatError::InvalidFormat(
                "positive and negative signs are the same",
            ));
        }
        if self.infinity_symbol.is_empty() || self.nan_symbol.is_empty() {
            return Err(NumberFormatError::InvalidFormat("special value symbol is empty"));
        }

        let symbols = [
            &self.decimal_separator,
            &self.group_separator,
            &self.positive_sign,
            &self.negative_sign,
        ];
        if symbols.iter().any(|symbol| symbol.contains(clashes_with_digits)) {
            return Err(NumberFormatError::InvalidFormat(
                "separator or sign contains a digit or exponent marker",
            ));
        }
        if self.currency_symbol.contains(|c: char| c.is_ascii_digit())
            || self.currency_symbol.starts_with(['e', 'E'])
        {
            return Err(NumberFormatError::InvalidFormat(
                "currency symbol contains a digit or starts with an exponent marker",
            ));
        }

        let separators = [&self.decimal_separator, &self.group_separator];
        let affixes = [&self.positive_sign, &self.negative_sign, &self.currency_symbol];
        for separator in separators.iter().filter(|s| !s.is_empty()) {
            if affixes.iter().any(|affix| affix == separator) {
                return Err(NumberFormatError::InvalidFormat(
                    "separator is the same as a sign or the currency symbol",
                ));
            }
        }
        if !self.currency_symbol.is_empty()
            && (self.currency_symbol == self.positive_sign
                || self.currency_symbol == self.negative_sign)
        {
            return Err(NumberFormatError::InvalidFormat(
                "currency symbol is the same as a sign",
            ));
        }
        Ok(())
    }
}

fn clashes_with_digits(c: char) -> bool {
    c.is_ascii_digit() || c == 'e' || c == 'E'
}

/// Tab through carriage return, and space. Unicode spaces are not skipped.
fn is_number_whitespace(c: char) -> bool {
    matches!(c, '\t'..='\r' | ' ')
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Parses a single-precision number.
///
/// # Errors
///
/// Returns an error if `s` does not match `format` or `format` is invalid.
pub fn parse_f32(s: &str, format: &NumberFormat) -> Result<f32> {
    parse_with(s, format)
}

/// Parses a double-precision number.
pub fn parse_f64(s: &str, format: &NumberFormat) -> Result<f64> {
    parse_with(s, format)
}

/// Parses a single-precision number, yielding `(false, 0.0)` on failure.
pub fn try_parse_f32(s: &str, format: &NumberFormat) -> (bool, f32) {
    try_parse_with(s, format)
}

/// Parses a double-precision number, yielding `(false, 0.0)` on failure.
pub fn try_parse_f64(s: &str, format: &NumberFormat) -> (bool, f64) {
    try_parse_with(s, format)
}

fn try_parse_with<T: FromStr + Default>(s: &str, format: &NumberFormat) -> (bool, T) {
    match parse_with(s, format) {
        Ok(value) => (true, value),
        Err(e) => {
            trace!("rejected number {:?}: {}", s, e);
            (false, T::default())
        }
    }
}

fn parse_with<T: FromStr>(s: &str, format: &NumberFormat) -> Result<T> {
    format.validate()?;
    let literal = to_literal(s, format)?;
    literal
        .parse()
        .map_err(|_| NumberFormatError::Unrepresentable(literal))
}

/// Rewrites `s` into Rust float literal syntax.
fn to_literal(s: &str, format: &NumberFormat) -> Result<String> {
    if s.trim_matches(is_number_whitespace).is_empty() {
        return Err(NumberFormatError::Empty);
    }

    let mut cursor = Cursor::new(s);
    let mut affixes = Affixes::default();
    affixes.scan(&mut cursor, format, false);

    let (magnitude, nan) = if cursor.eat_ignore_case(&format.infinity_symbol) {
        ("inf".to_string(), false)
    } else if cursor.eat_ignore_case(&format.nan_symbol) {
        ("NaN".to_string(), true)
    } else {
        let mantissa = scan_mantissa(&mut cursor, format)?;
        let exponent = scan_exponent(&mut cursor, format)?;
        (format!("{mantissa}e{exponent}"), false)
    };

    affixes.scan(&mut cursor, format, true);
    if affixes.open_parenthesis && !affixes.close_parenthesis {
        return Err(NumberFormatError::UnbalancedParenthesis);
    }
    if let Some(ch) = cursor.peek() {
        return Err(NumberFormatError::InvalidCharacter {
            position: cursor.position(),
            ch,
        });
    }

    // NaN carries no sign.
    if affixes.negative() && !nan {
        Ok(format!("-{magnitude}"))
    } else {
        Ok(magnitude)
    }
}

fn scan_mantissa(cursor: &mut Cursor<'_>, format: &NumberFormat) -> Result<String> {
    let mut integer = String::new();
    loop {
        if let Some(digit) = cursor.eat_digit() {
            integer.push(digit);
        } else if integer.is_empty() || !cursor.eat(&format.group_separator) {
            break;
        }
    }

    let mut fraction = String::new();
    if cursor.eat(&format.decimal_separator) {
        while let Some(digit) = cursor.eat_digit() {
            fraction.push(digit);
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return Err(match cursor.peek() {
            Some(ch) => NumberFormatError::InvalidCharacter {
                position: cursor.position(),
                ch,
            },
            None => NumberFormatError::MissingDigits,
        });
    }

    if integer.is_empty() {
        integer.push('0');
    }
    if fraction.is_empty() {
        fraction.push('0');
    }
    Ok(format!("{integer}.{fraction}"))
}

fn scan_exponent(cursor: &mut Cursor<'_>, format: &NumberFormat) -> Result<String> {
    if !cursor.eat("e") && !cursor.eat("E") {
        return Ok("0".to_string());
    }

    let mut exponent = String::new();
    if cursor.eat(&format.negative_sign) {
        exponent.push('-');
    } else {
        cursor.eat(&format.positive_sign);
    }

    let start = exponent.len();
    while let Some(digit) = cursor.eat_digit() {
        exponent.push(digit);
    }
    if exponent.len() == start {
        return Err(NumberFormatError::MissingExponentDigits {
            position: cursor.position(),
        });
    }
    Ok(exponent)
}

/// Signs, parentheses and currency symbols seen around the digits.
#[derive(Default)]
struct Affixes {
    sign: Option<bool>,
    open_parenthesis: bool,
    close_parenthesis: bool,
    currency: bool,
}

impl Affixes {
    fn negative(&self) -> bool {
        self.sign == Some(true) || self.open_parenthesis
    }

    fn scan(&mut self, cursor: &mut Cursor<'_>, format: &NumberFormat, trailing: bool) {
        loop {
            cursor.skip_whitespace();
            let signable = self.sign.is_none() && !self.open_parenthesis;
            if signable && cursor.eat(&format.negative_sign) {
                self.sign = Some(true);
            } else if signable && cursor.eat(&format.positive_sign) {
                self.sign = Some(false);
            } else if !trailing && signable && cursor.eat("(") {
                self.open_parenthesis = true;
            } else if trailing
                && self.open_parenthesis
                && !self.close_parenthesis
                && cursor.eat(")")
            {
                self.close_parenthesis = true;
            } else if !self.currency && cursor.eat(&format.currency_symbol) {
                self.currency = true;
            } else {
                break;
            }
        }
    }
}

struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character index of the cursor, for error reporting.
    fn position(&self) -> usize {
        self.text[..self.offset].chars().count()
    }

    fn eat(&mut self, token: &str) -> bool {
        if !token.is_empty() && self.rest().starts_with(token) {
            self.offset += token.len();
            true
        } else {
            false
        }
    }

    fn eat_ignore_case(&mut self, token: &str) -> bool {
        let rest = self.rest();
        match rest.get(..token.len()) {
            Some(head) if !token.is_empty() && head.eq_ignore_ascii_case(token) => {
                self.offset += token.len();
                true
            }
            _ => false,
        }
    }

    fn eat_digit(&mut self) -> Option<char> {
        let ch = self.peek().filter(char::is_ascii_digit)?;
        self.offset += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start_matches(is_number_whitespace).len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> NumberFormat {
        NumberFormat::INVARIANT
            .with_decimal_separator(",")
            .with_group_separator(".")
            .with_currency_symbol("€")
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(parse_f32("0.123", &NumberFormat::INVARIANT).unwrap(), 0.123f32);
        assert_eq!(parse_f64("0.123", &NumberFormat::INVARIANT).unwrap(), 0.123f64);
    }

    #[test]
    fn test_decimal_separator_comes_from_format() {
        assert_eq!(parse_f32("0,123", &german()).unwrap(), 0.123f32);
        assert_eq!(parse_f64("1.234,5", &german()).unwrap(), 1234.5);
        // Under the invariant format the comma only groups digits.
        assert_eq!(parse_f32("0,123", &NumberFormat::INVARIANT).unwrap(), 123.0);
    }

    #[test]
    fn test_full_grammar() {
        let inv = NumberFormat::INVARIANT;
        assert_eq!(parse_f64("  -1,234.5e-2 ", &inv).unwrap(), -12.345);
        assert_eq!(parse_f64("+.5", &inv).unwrap(), 0.5);
        assert_eq!(parse_f64("5.", &inv).unwrap(), 5.0);
        assert_eq!(parse_f64("1E3", &inv).unwrap(), 1000.0);
        assert_eq!(parse_f64("2e+2", &inv).unwrap(), 200.0);
        assert_eq!(parse_f64("(42)", &inv).unwrap(), -42.0);
        assert_eq!(parse_f64("42-", &inv).unwrap(), -42.0);
        assert_eq!(parse_f64("¤3.50", &inv).unwrap(), 3.5);
        assert_eq!(parse_f64("-3.50 ¤", &inv).unwrap(), -3.5);
        assert_eq!(parse_f64("1,,2", &inv).unwrap(), 12.0);
        assert_eq!(parse_f64("12 € -", &german()).unwrap(), -12.0);
    }

    #[test]
    fn test_special_values() {
        let inv = NumberFormat::INVARIANT;
        assert_eq!(parse_f32("Infinity", &inv).unwrap(), f32::INFINITY);
        assert_eq!(parse_f32("-infinity", &inv).unwrap(), f32::NEG_INFINITY);
        assert!(parse_f64("NaN", &inv).unwrap().is_nan());
        assert_eq!(parse_f32("1e39", &inv).unwrap(), f32::INFINITY);
        assert_eq!(parse_f32("-1e39", &inv).unwrap(), f32::NEG_INFINITY);
        // Rust's own spellings are not part of the format.
        assert!(parse_f32("inf", &inv).is_err());
    }

    #[test]
    fn test_rejections() {
        let inv = NumberFormat::INVARIANT;
        assert_eq!(parse_f32("", &inv), Err(NumberFormatError::Empty));
        assert_eq!(parse_f32("   ", &inv), Err(NumberFormatError::Empty));
        assert_eq!(parse_f32(".", &inv), Err(NumberFormatError::MissingDigits));
        assert_eq!(
            parse_f32("abc", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 0, ch: 'a' })
        );
        assert_eq!(
            parse_f32(",5", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 0, ch: ',' })
        );
        assert_eq!(
            parse_f32("1.2.3", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 3, ch: '.' })
        );
        assert_eq!(
            parse_f32("--5", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 1, ch: '-' })
        );
        assert_eq!(
            parse_f32("1e", &inv),
            Err(NumberFormatError::MissingExponentDigits { position: 2 })
        );
        assert_eq!(parse_f32("(5", &inv), Err(NumberFormatError::UnbalancedParenthesis));
        assert!(parse_f32("5)", &inv).is_err());
        assert!(parse_f32("(-5)", &inv).is_err());
    }

    #[test]
    fn test_try_parse() {
        let inv = NumberFormat::INVARIANT;
        assert_eq!(try_parse_f32("0.123", &inv), (true, 0.123));
        assert_eq!(try_parse_f32("garbage", &inv), (false, 0.0));
        assert_eq!(try_parse_f64("", &inv), (false, 0.0));
    }

    #[test]
    fn test_invalid_format() {
        let clash = NumberFormat::INVARIANT.with_group_separator(".");
        assert!(matches!(
            parse_f32("1.5", &clash),
            Err(NumberFormatError::InvalidFormat(_))
        ));
        assert!(NumberFormat::INVARIANT.validate().is_ok());
        assert!(german().validate().is_ok());
        assert!(NumberFormat::INVARIANT.with_decimal_separator("").validate().is_err());
    }

    #[test]
    fn test_ambiguous_formats_are_rejected() {
        let inv = NumberFormat::INVARIANT;
        let ambiguous = [
            inv.clone().with_decimal_separator("e"),
            inv.clone().with_decimal_separator("0"),
            inv.clone().with_group_separator("E"),
            inv.clone().with_group_separator("1"),
            NumberFormat {
                negative_sign: Cow::Borrowed("e-"),
                ..inv.clone()
            },
            NumberFormat {
                positive_sign: Cow::Borrowed("9"),
                ..inv.clone()
            },
            inv.clone().with_currency_symbol("EUR"),
            inv.clone().with_currency_symbol("$1"),
            inv.clone().with_currency_symbol(","),
            inv.clone().with_group_separator("¤"),
            inv.clone().with_currency_symbol("-"),
        ];
        for format in ambiguous {
            assert!(
                matches!(format.validate(), Err(NumberFormatError::InvalidFormat(_))),
                "{format:?} should be rejected"
            );
            assert!(matches!(
                parse_f64("1", &format),
                Err(NumberFormatError::InvalidFormat(_))
            ));
        }

        // Letters other than the exponent marker are fine.
        assert!(inv.clone().with_currency_symbol("kr").validate().is_ok());
        assert!(inv.with_group_separator("").with_currency_symbol("").validate().is_ok());
    }

    #[test]
    fn test_only_ascii_whitespace_is_skipped() {
        let inv = NumberFormat::INVARIANT;
        assert_eq!(parse_f64("\t\n\x0b\x0c\r 1.5 \r\n", &inv).unwrap(), 1.5);
        assert_eq!(
            parse_f64("\u{a0}1", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 0, ch: '\u{a0}' })
        );
        assert_eq!(
            parse_f64("1\u{2003}", &inv),
            Err(NumberFormatError::InvalidCharacter { position: 1, ch: '\u{2003}' })
        );
        assert_ne!(parse_f64("\u{a0}", &inv), Err(NumberFormatError::Empty));
    }

    #[test]
    fn test_no_grouping() {
        let format = NumberFormat::INVARIANT.with_group_separator("");
        assert_eq!(parse_f64("1234.5", &format).unwrap(), 1234.5);
        assert!(parse_f64("1,234.5", &format).is_err());
    }
}
