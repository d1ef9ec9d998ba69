//! printf-style rendering
//!
//! Directives follow `%[index$][flags][width][.precision]conversion`.
//! Output is locale-invariant: `.` separates decimals, `,` groups thousands
//! when the `,` flag asks for it, and decimal conversions round half-up on the
//! shortest decimal form of the value, so `%.1f` of `0.25` is `0.3`.

use super::error::{LoggerError, Result};
use super::formatter::FormatArg;
use std::fmt;

const FLAGS: &[u8] = b"-#+ 0,(";
const CONVERSIONS: &str = "sSbBcCdxXofeEgGn%";

#[derive(Debug, Default)]
struct Directive {
    index: Option<usize>,
    flags: String,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn has(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }
}

/// Substitute `args` into a printf-style `format`.
///
/// Conversions: `s S b B c C d x X o f e E g G n %`. Flags: `-` (left align),
/// `0` (zero fill), `+` and space (sign of non-negative numbers), `,`
/// (grouping), `(` (negative numbers in parentheses), `#` (`0x`/`0` prefix,
/// forced decimal point). Arguments without a matching directive are ignored.
pub fn render(format: &str, args: &[FormatArg]) -> Result<String> {
    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len() + 16 * args.len());
    let mut rest = 0usize;
    let mut next_ordinary = 0usize;

    while let Some(offset) = format[rest..].find('%') {
        let start = rest + offset;
        out.push_str(&format[rest..start]);

        let (opts, cursor) = parse_directive(bytes, start + 1);
        let Some(conversion) = format[cursor..].chars().next() else {
            return Err(LoggerError::unknown_conversion("%"));
        };
        let end = cursor + conversion.len_utf8();
        let directive = &format[start..end];
        rest = end;

        if !CONVERSIONS.contains(conversion) {
            return Err(LoggerError::unknown_conversion(conversion.to_string()));
        }
        check_directive(conversion, &opts, directive)?;

        match conversion {
            '%' => out.push_str(&pad(Piece::text("%".to_string()), &opts)),
            'n' => out.push('\n'),
            _ => {
                let index = match opts.index {
                    Some(index) => index,
                    None => {
                        next_ordinary += 1;
                        next_ordinary - 1
                    }
                };
                let arg = args
                    .get(index)
                    .ok_or_else(|| LoggerError::missing_argument(directive))?;
                out.push_str(&pad(convert(conversion, arg, &opts)?, &opts));
            }
        }
    }
    out.push_str(&format[rest..]);

    Ok(out)
}

/// Parse everything between `%` and the conversion character.
fn parse_directive(bytes: &[u8], mut cursor: usize) -> (Directive, usize) {
    let mut opts = Directive::default();

    let index_end = scan_digits(bytes, cursor);
    if index_end > cursor && bytes.get(index_end) == Some(&b'$') {
        opts.index = parse_number(&bytes[cursor..index_end])
            .filter(|i| *i > 0)
            .map(|i| i - 1);
        cursor = index_end + 1;
    }

    while let Some(&flag) = bytes.get(cursor) {
        if !FLAGS.contains(&flag) {
            break;
        }
        opts.flags.push(char::from(flag));
        cursor += 1;
    }

    let width_end = scan_digits(bytes, cursor);
    if width_end > cursor {
        opts.width = parse_number(&bytes[cursor..width_end]);
        cursor = width_end;
    }

    // A `.` without digits is left in place and fails as the conversion
    if bytes.get(cursor) == Some(&b'.') {
        let precision_end = scan_digits(bytes, cursor + 1);
        if precision_end > cursor + 1 {
            opts.precision = parse_number(&bytes[cursor + 1..precision_end]);
            cursor = precision_end;
        }
    }

    (opts, cursor)
}

fn scan_digits(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}

fn parse_number(digits: &[u8]) -> Option<usize> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn check_directive(conversion: char, opts: &Directive, directive: &str) -> Result<()> {
    let allowed = match conversion {
        'd' => "-+ 0,(",
        'x' | 'X' | 'o' => "-#0",
        'f' => "-#+ 0,(",
        'e' | 'E' => "-#+ 0(",
        'g' | 'G' => "-+ 0,(",
        'n' => "",
        _ => "-",
    };
    if let Some(flag) = opts.flags.chars().find(|flag| !allowed.contains(*flag)) {
        return Err(LoggerError::flag_mismatch(flag, conversion));
    }
    if (opts.has('+') && opts.has(' ')) || (opts.has('-') && opts.has('0')) {
        return Err(LoggerError::illegal_flags(opts.flags.as_str()));
    }
    if (opts.has('-') || opts.has('0')) && opts.width.is_none() {
        return Err(LoggerError::missing_width(directive));
    }
    if let Some(precision) = opts.precision {
        if matches!(conversion, 'c' | 'C' | 'd' | 'x' | 'X' | 'o' | 'n' | '%') {
            return Err(LoggerError::illegal_precision(conversion, precision));
        }
    }
    Ok(())
}

/// Converted text split around the point where zero fill goes.
struct Piece {
    lead: String,
    body: String,
    trail: String,
    zero_fill: bool,
}

impl Piece {
    fn text(body: String) -> Self {
        Self {
            lead: String::new(),
            body,
            trail: String::new(),
            zero_fill: false,
        }
    }

    fn number(lead: &str, body: String, trail: &str) -> Self {
        Self {
            lead: lead.to_string(),
            body,
            trail: trail.to_string(),
            zero_fill: true,
        }
    }

    fn to_uppercase(self) -> Self {
        Self {
            lead: self.lead.to_uppercase(),
            body: self.body.to_uppercase(),
            trail: self.trail.to_uppercase(),
            zero_fill: self.zero_fill,
        }
    }

    fn len(&self) -> usize {
        self.lead.chars().count() + self.body.chars().count() + self.trail.chars().count()
    }
}

fn convert(conversion: char, arg: &FormatArg, opts: &Directive) -> Result<Piece> {
    let illegal = || LoggerError::illegal_conversion(conversion, arg.kind());

    let piece = match (conversion.to_ascii_lowercase(), arg) {
        ('b', _) => {
            let value = match arg {
                FormatArg::Bool(v) => *v,
                FormatArg::Null => false,
                _ => true,
            };
            Piece::text(truncate(value.to_string(), opts.precision))
        }
        ('s', _) => Piece::text(truncate(arg.to_string(), opts.precision)),
        (_, FormatArg::Null) => Piece::text("null".to_string()),
        ('c', FormatArg::Char(c)) => Piece::text(c.to_string()),
        ('c', FormatArg::Int { value, .. }) => Piece::text(code_point(*value).ok_or_else(illegal)?.to_string()),
        ('c', FormatArg::Uint(v)) => {
            let point = i64::try_from(*v).ok().and_then(code_point);
            Piece::text(point.ok_or_else(illegal)?.to_string())
        }
        ('d' | 'x' | 'o', _) => integer(conversion.to_ascii_lowercase(), arg, opts).ok_or_else(illegal)?,
        ('f' | 'e' | 'g', _) => {
            let value = arg.as_float().ok_or_else(illegal)?;
            float(conversion.to_ascii_lowercase(), value, opts)
        }
        _ => return Err(illegal()),
    };

    Ok(if conversion.is_ascii_uppercase() {
        piece.to_uppercase()
    } else {
        piece
    })
}

fn integer(conversion: char, arg: &FormatArg, opts: &Directive) -> Option<Piece> {
    if conversion == 'd' {
        let (negative, magnitude) = match arg {
            FormatArg::Int { value, .. } => (*value < 0, value.unsigned_abs()),
            FormatArg::Uint(v) => (false, *v),
            _ => return None,
        };
        let digits = magnitude.to_string();
        let digits = if opts.has(',') { group_thousands(&digits) } else { digits };
        return Some(signed(negative, digits, opts));
    }

    let raw = match arg {
        FormatArg::Int { value, bits } => twos_complement(*value, *bits),
        FormatArg::Uint(v) => *v,
        _ => return None,
    };
    let (body, prefix) = if conversion == 'o' {
        (format!("{:o}", raw), "0")
    } else {
        (format!("{:x}", raw), "0x")
    };
    let lead = if opts.has('#') { prefix } else { "" };
    Some(Piece::number(lead, body, ""))
}

fn twos_complement(value: i64, bits: u32) -> u64 {
    let raw = value as u64;
    if bits >= u64::BITS {
        raw
    } else {
        raw & ((1u64 << bits) - 1)
    }
}

fn float(conversion: char, value: FloatValue, opts: &Directive) -> Piece {
    match value {
        FloatValue::Nan => Piece::text("NaN".to_string()),
        FloatValue::Infinite { negative } => {
            let mut piece = signed(negative, "Infinity".to_string(), opts);
            piece.zero_fill = false;
            piece
        }
        FloatValue::Finite { negative, decimal } => {
            signed(negative, finite_body(conversion, decimal, opts), opts)
        }
    }
}

fn finite_body(conversion: char, mut decimal: Decimal, opts: &Directive) -> String {
    let precision = opts.precision.unwrap_or(6);

    match conversion {
        'f' => {
            decimal.round_at(decimal.point + precision as i32);
            let text = decimal.fixed(precision);
            let text = if opts.has(',') { group_thousands(&text) } else { text };
            if opts.has('#') && precision == 0 {
                text + "."
            } else {
                text
            }
        }
        'e' => {
            decimal.round_at(precision as i32 + 1);
            decimal.scientific(precision, opts.has('#'))
        }
        _ => {
            let precision = precision.max(1);
            decimal.round_at(precision as i32);
            let exponent = decimal.point - 1;
            if decimal.is_zero() || (-4..precision as i32).contains(&exponent) {
                let fraction = if decimal.is_zero() {
                    precision - 1
                } else {
                    (precision as i32 - 1 - exponent) as usize
                };
                let text = decimal.fixed(fraction);
                if opts.has(',') {
                    group_thousands(&text)
                } else {
                    text
                }
            } else {
                decimal.scientific(precision - 1, false)
            }
        }
    }
}

/// Attach the sign (or parentheses) requested by the flags.
fn signed(negative: bool, body: String, opts: &Directive) -> Piece {
    let (lead, trail) = if negative {
        if opts.has('(') {
            ("(", ")")
        } else {
            ("-", "")
        }
    } else if opts.has('+') {
        ("+", "")
    } else if opts.has(' ') {
        (" ", "")
    } else {
        ("", "")
    };
    Piece::number(lead, body, trail)
}

/// `1234567.5` becomes `1,234,567.5`; only the integer part is grouped.
fn group_thousands(text: &str) -> String {
    let (integer, fraction) = match text.find('.') {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    let mut out = String::with_capacity(text.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push_str(fraction);
    out
}

fn code_point(value: i64) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

fn pad(piece: Piece, opts: &Directive) -> String {
    let fill = opts.width.map_or(0, |width| width.saturating_sub(piece.len()));
    let Piece {
        lead, body, trail, ..
    } = &piece;

    if fill == 0 {
        format!("{}{}{}", lead, body, trail)
    } else if opts.has('-') {
        format!("{}{}{}{}", lead, body, trail, " ".repeat(fill))
    } else if opts.has('0') && piece.zero_fill {
        format!("{}{}{}{}", lead, "0".repeat(fill), body, trail)
    } else {
        format!("{}{}{}{}", " ".repeat(fill), lead, body, trail)
    }
}

/// A float argument split into sign and decimal digits
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FloatValue {
    Nan,
    Infinite { negative: bool },
    Finite { negative: bool, decimal: Decimal },
}

impl FloatValue {
    pub(crate) fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            FloatValue::Nan
        } else if value.is_infinite() {
            FloatValue::Infinite {
                negative: value < 0.0,
            }
        } else {
            FloatValue::Finite {
                negative: value.is_sign_negative(),
                decimal: Decimal::parse(&format!("{:e}", value.abs())),
            }
        }
    }

    pub(crate) fn from_f32(value: f32) -> Self {
        if value.is_nan() {
            FloatValue::Nan
        } else if value.is_infinite() {
            FloatValue::Infinite {
                negative: value < 0.0,
            }
        } else {
            FloatValue::Finite {
                negative: value.is_sign_negative(),
                decimal: Decimal::parse(&format!("{:e}", value.abs())),
            }
        }
    }
}

/// Plain decimal below 10^7 and from 10^-3 up, `d.dddE<n>` otherwise
impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatValue::Nan => f.write_str("NaN"),
            FloatValue::Infinite { negative: true } => f.write_str("-Infinity"),
            FloatValue::Infinite { negative: false } => f.write_str("Infinity"),
            FloatValue::Finite { negative, decimal } => {
                if *negative {
                    f.write_str("-")?;
                }
                f.write_str(&decimal.shortest())
            }
        }
    }
}

/// Unsigned decimal `0.d1d2d3... * 10^point`; no digits means zero.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// From the shortest round-trip `LowerExp` form, e.g. `1.25e-1`.
    fn parse(scientific: &str) -> Self {
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let mut decimal = Decimal {
            digits: mantissa
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
            point: exponent + 1,
        };
        decimal.normalize();
        decimal
    }

    fn normalize(&mut self) {
        while self.digits.first() == Some(&0) {
            self.digits.remove(0);
            self.point -= 1;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Keep the first `keep` digits, rounding half-up on the next one.
    fn round_at(&mut self, keep: i32) {
        let Ok(keep) = usize::try_from(keep) else {
            self.digits.clear();
            self.point = 0;
            return;
        };
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }
        self.normalize();
    }

    /// Digit at `position` places right of the leading digit position.
    fn digit(&self, position: i32) -> char {
        usize::try_from(position)
            .ok()
            .and_then(|i| self.digits.get(i))
            .map_or('0', |d| char::from(b'0' + d))
    }

    fn fixed(&self, fraction: usize) -> String {
        let mut out = String::new();
        if self.point <= 0 {
            out.push('0');
        } else {
            out.extend((0..self.point).map(|i| self.digit(i)));
        }
        if fraction > 0 {
            out.push('.');
            out.extend((0..fraction as i32).map(|k| self.digit(self.point + k)));
        }
        out
    }

    fn scientific(&self, fraction: usize, force_point: bool) -> String {
        let exponent = if self.is_zero() { 0 } else { self.point - 1 };
        let mut out = String::new();
        out.push(self.digit(0));
        if fraction > 0 || force_point {
            out.push('.');
        }
        out.extend((1..=fraction as i32).map(|k| self.digit(k)));
        let sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("e{}{:02}", sign, exponent.abs()));
        out
    }

    fn shortest(&self) -> String {
        if self.is_zero() {
            return "0.0".to_string();
        }
        let exponent = self.point - 1;
        if (-3..7).contains(&exponent) {
            let fraction = (self.digits.len() as i32 - self.point).max(1);
            self.fixed(fraction as usize)
        } else {
            let rest: String = (1..self.digits.len() as i32).map(|k| self.digit(k)).collect();
            let rest = if rest.is_empty() { "0".to_string() } else { rest };
            format!("{}.{}E{}", self.digit(0), rest, exponent)
        }
    }
}
