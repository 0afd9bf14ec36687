use crate::ast::{
    CurrencyWidth, DigitRange, GroupSizes, Grouping, Meta, RoundingIncrement, Token,
};
use crate::errors::PatternError;

/// Compiles a CLDR number-format pattern string into its [`Meta`] record.
///
/// Digit metadata (minimum/maximum digits, grouping, rounding increment,
/// exponent) is always taken from the positive sub-pattern; a negative
/// sub-pattern only contributes affix tokens.
pub fn compile(source: &str) -> Result<Meta, PatternError> {
    if source.is_empty() {
        return Err(PatternError::Empty);
    }

    let (positive_src, negative_src) = split_sub_patterns(source)?;
    let positive = tokenize(positive_src)?;
    let core = positive.core.as_ref().ok_or(PatternError::MissingDigits)?;
    let negative = match negative_src {
        Some(src) => {
            let tokenized = tokenize(src)?;
            if tokenized.core.is_none() {
                return Err(PatternError::MissingDigits);
            }
            Some(tokenized.tokens)
        }
        None => None,
    };

    let compiled = compile_core(core);

    let multiplier = positive
        .tokens
        .iter()
        .find_map(|token| match token {
            Token::Percent => Some(100),
            Token::PerMille => Some(1000),
            _ => None,
        })
        .unwrap_or(1);

    let scientific_rounding = if compiled.exponent_digits > 0 {
        compiled.integer_digits.min + compiled.fractional_digits.max
    } else {
        0
    };

    Ok(Meta {
        positive: positive.tokens,
        negative,
        integer_digits: compiled.integer_digits,
        fractional_digits: compiled.fractional_digits,
        significant_digits: compiled.significant_digits,
        exponent_digits: compiled.exponent_digits,
        exponent_sign: compiled.exponent_sign,
        scientific_rounding,
        multiplier,
        rounding: compiled.rounding,
        grouping: compiled.grouping,
        padding_length: if positive.pad.is_some() {
            positive.visual_len
        } else {
            0
        },
        padding_char: positive.pad.unwrap_or(' '),
    })
}

/// Splits on the first unquoted `;`. A second one is an error.
fn split_sub_patterns(source: &str) -> Result<(&str, Option<&str>), PatternError> {
    let mut in_quote = false;
    let mut split = None;
    for (idx, c) in source.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            ';' if !in_quote => {
                if split.is_some() {
                    return Err(PatternError::TooManySubPatterns);
                }
                split = Some(idx);
            }
            _ => {}
        }
    }
    match split {
        Some(idx) => Ok((&source[..idx], Some(&source[idx + 1..]))),
        None => Ok((source, None)),
    }
}

struct Tokenized {
    tokens: Vec<Token>,
    core: Option<Core>,
    pad: Option<char>,
    /// Pattern width in characters, counting quoted characters once and
    /// excluding the pad specifier. This is the pad target width.
    visual_len: usize,
}

struct Core {
    mantissa: String,
    exponent: Option<String>,
}

fn is_core_char(c: char) -> bool {
    matches!(c, '0'..='9' | '#' | '@' | ',' | '.')
}

fn tokenize(source: &str) -> Result<Tokenized, PatternError> {
    let mut tokens = Vec::new();
    let mut core: Option<Core> = None;
    let mut pad: Option<char> = None;
    let mut visual_len = 0usize;
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    fn flush(literal: &mut String, tokens: &mut Vec<Token>) {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    }

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    flush(&mut literal, &mut tokens);
                    tokens.push(Token::Quote);
                    visual_len += 1;
                    continue;
                }
                let mut content = String::new();
                loop {
                    match chars.next() {
                        Some('\'') => {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                content.push('\'');
                            } else {
                                break;
                            }
                        }
                        Some(inner) => content.push(inner),
                        None => return Err(PatternError::UnterminatedQuote),
                    }
                }
                visual_len += content.chars().count();
                flush(&mut literal, &mut tokens);
                let mut content_chars = content.chars();
                match (content_chars.next(), content_chars.next()) {
                    (Some(single), None) => tokens.push(Token::QuotedChar(single)),
                    _ => tokens.push(Token::Literal(content)),
                }
            }
            '*' => {
                if pad.is_some() {
                    return Err(PatternError::DuplicatePad);
                }
                let fill = chars.next().ok_or(PatternError::MissingPadChar)?;
                pad = Some(fill);
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Pad);
            }
            '¤' => {
                let mut count = 1;
                while chars.peek() == Some(&'¤') {
                    chars.next();
                    count += 1;
                }
                let width =
                    CurrencyWidth::from_count(count).ok_or(PatternError::CurrencyTooWide)?;
                visual_len += count;
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Currency(width));
            }
            '+' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Plus);
                visual_len += 1;
            }
            '-' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Minus);
                visual_len += 1;
            }
            '%' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Percent);
                visual_len += 1;
            }
            '‰' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::PerMille);
                visual_len += 1;
            }
            c if is_core_char(c) => {
                if core.is_some() {
                    return Err(PatternError::DuplicateDigits);
                }
                flush(&mut literal, &mut tokens);
                let mut mantissa = String::new();
                mantissa.push(c);
                while let Some(&next) = chars.peek() {
                    if is_core_char(next) {
                        mantissa.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                visual_len += mantissa.chars().count();

                let mut exponent = None;
                let mut bare_e = false;
                if chars.peek() == Some(&'E') {
                    chars.next();
                    let mut exp = String::new();
                    if chars.peek() == Some(&'+') {
                        exp.push('+');
                        chars.next();
                    }
                    while let Some(&next) = chars.peek() {
                        if matches!(next, '0'..='9' | '#') {
                            exp.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if exp.is_empty() {
                        // A bare `E` with no exponent digits is literal text.
                        bare_e = true;
                    } else {
                        visual_len += 1 + exp.chars().count();
                        exponent = Some(exp);
                    }
                }

                tokens.push(Token::Format);
                core = Some(Core { mantissa, exponent });
                if bare_e {
                    literal.push('E');
                    visual_len += 1;
                }
            }
            other => {
                literal.push(other);
                visual_len += 1;
            }
        }
    }
    flush(&mut literal, &mut tokens);

    Ok(Tokenized {
        tokens,
        core,
        pad,
        visual_len,
    })
}

struct CompiledCore {
    integer_digits: DigitRange,
    fractional_digits: DigitRange,
    significant_digits: DigitRange,
    exponent_digits: usize,
    exponent_sign: bool,
    grouping: Grouping,
    rounding: RoundingIncrement,
}

fn placeholder_count(segment: &str) -> usize {
    segment
        .chars()
        .filter(|c| matches!(c, '0'..='9' | '#' | '@'))
        .count()
}

/// Digit placeholders mapped to the digits of the rounding increment;
/// `#` and `@` stand for zero.
fn increment_digits(part: &str) -> String {
    part.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '#' | '@' => Some('0'),
            _ => None,
        })
        .collect()
}

fn compile_core(core: &Core) -> CompiledCore {
    let (int_part, frac_part) = match core.mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (core.mantissa.as_str(), ""),
    };

    let at_count = int_part.matches('@').count();
    let significant_digits = if at_count > 0 {
        let trailing = int_part
            .rsplit('@')
            .next()
            .map(|tail| tail.matches('#').count())
            .unwrap_or(0);
        DigitRange::new(at_count, at_count + trailing)
    } else {
        DigitRange::default()
    };

    let mut grouping = Grouping::default();
    let int_segments: Vec<&str> = int_part.split(',').collect();
    if int_segments.len() > 1 {
        let first = placeholder_count(int_segments[int_segments.len() - 1]);
        let rest = if int_segments.len() > 2 {
            placeholder_count(int_segments[int_segments.len() - 2])
        } else {
            first
        };
        if first > 0 {
            grouping.integer = GroupSizes {
                first,
                rest: if rest > 0 { rest } else { first },
            };
        }
    }
    let frac_segments: Vec<&str> = frac_part.split(',').collect();
    if frac_segments.len() > 1 {
        let first = placeholder_count(frac_segments[0]);
        let rest = placeholder_count(frac_segments[1]);
        if first > 0 {
            grouping.fraction = GroupSizes {
                first,
                rest: if rest > 0 { rest } else { first },
            };
        }
    }

    let int_required = int_part.chars().filter(char::is_ascii_digit).count();
    let integer_digits = if at_count > 0 {
        DigitRange::new(1, 0)
    } else if int_part.contains('#') || int_required < 2 {
        DigitRange::new(int_required, 0)
    } else {
        // Only a fixed-width integer field (two or more explicit digits and
        // nothing optional) bounds the integer side; `"0000"` truncates to
        // its own width, while a lone `"0"` never clips an overflowing
        // value.
        DigitRange::new(int_required, int_required)
    };

    let frac_required = frac_part.chars().filter(char::is_ascii_digit).count();
    let frac_optional = frac_part.matches('#').count();
    let fractional_digits = if at_count > 0 {
        DigitRange::default()
    } else {
        DigitRange::new(frac_required, frac_required + frac_optional)
    };

    let int_increment = increment_digits(int_part);
    let frac_increment = increment_digits(frac_part);
    let rounding = {
        let combined = format!("{int_increment}{frac_increment}");
        if combined.chars().any(|c| matches!(c, '1'..='9')) {
            let multiple: u64 = combined.parse().unwrap_or(0);
            RoundingIncrement::normalized(multiple, -(frac_increment.len() as i16))
        } else {
            RoundingIncrement::NONE
        }
    };

    let (exponent_digits, exponent_sign) = match &core.exponent {
        Some(exp) => {
            let zeros = exp.chars().filter(char::is_ascii_digit).count();
            (zeros.max(1), exp.starts_with('+'))
        }
        None => (0, false),
    };

    CompiledCore {
        integer_digits,
        fractional_digits,
        significant_digits,
        exponent_digits,
        exponent_sign,
        grouping,
        rounding,
    }
}
