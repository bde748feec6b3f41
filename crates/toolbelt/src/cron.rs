//! Five-field cron expression parsing and plain-English description.

use thiserror::Error;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One cron field. Mixed forms like `1-5/2` or `1,3-5` are not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPattern {
    Any,
    Step(u32),
    Value(u32),
    Range(u32, u32),
    List(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpr {
    pub minute: FieldPattern,
    pub hour: FieldPattern,
    pub day: FieldPattern,
    pub month: FieldPattern,
    pub weekday: FieldPattern,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("expected 5 fields (minute hour day month weekday), got {0}")]
    FieldCount(usize),
    #[error("invalid {field} field: {text:?}")]
    InvalidField { field: &'static str, text: String },
    #[error("{field} value {value} out of range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

struct FieldSpec {
    name: &'static str,
    min: u32,
    max: u32,
}

// Weekday 7 is accepted as an alias for Sunday.
const FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "minute", min: 0, max: 59 },
    FieldSpec { name: "hour", min: 0, max: 23 },
    FieldSpec { name: "day", min: 1, max: 31 },
    FieldSpec { name: "month", min: 1, max: 12 },
    FieldSpec { name: "weekday", min: 0, max: 7 },
];

/// Parses a five-field cron expression.
pub fn parse(expression: &str) -> Result<CronExpr, CronError> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    if parts.len() != 5 {
        return Err(CronError::FieldCount(parts.len()));
    }
    let patterns = parts
        .iter()
        .zip(&FIELDS)
        .map(|(text, spec)| parse_field(text, spec))
        .collect::<Result<Vec<FieldPattern>, CronError>>()?;
    let [minute, hour, day, month, weekday]: [FieldPattern; 5] = patterns
        .try_into()
        .map_err(|_| CronError::FieldCount(parts.len()))?;
    Ok(CronExpr {
        minute,
        hour,
        day,
        month,
        weekday,
    })
}

fn parse_field(text: &str, spec: &FieldSpec) -> Result<FieldPattern, CronError> {
    let invalid = || CronError::InvalidField {
        field: spec.name,
        text: text.to_string(),
    };

    if text == "*" {
        return Ok(FieldPattern::Any);
    }
    if let Some(step) = text.strip_prefix("*/") {
        let step: u32 = step.parse().map_err(|_| invalid())?;
        if step == 0 {
            return Err(invalid());
        }
        check_range(step, spec)?;
        return Ok(FieldPattern::Step(step));
    }
    if text.contains(',') {
        let values = text
            .split(',')
            .map(|item| parse_value(item, spec))
            .collect::<Result<Vec<u32>, CronError>>()?;
        return Ok(FieldPattern::List(values));
    }
    if let Some((low, high)) = text.split_once('-') {
        let low = parse_value(low, spec)?;
        let high = parse_value(high, spec)?;
        if low > high {
            return Err(invalid());
        }
        return Ok(FieldPattern::Range(low, high));
    }
    Ok(FieldPattern::Value(parse_value(text, spec)?))
}

fn parse_value(text: &str, spec: &FieldSpec) -> Result<u32, CronError> {
    let value: u32 = text.parse().map_err(|_| CronError::InvalidField {
        field: spec.name,
        text: text.to_string(),
    })?;
    check_range(value, spec)?;
    Ok(value)
}

fn check_range(value: u32, spec: &FieldSpec) -> Result<(), CronError> {
    if value < spec.min || value > spec.max {
        return Err(CronError::OutOfRange {
            field: spec.name,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(())
}

/// Parses and describes in one step.
pub fn describe_str(expression: &str) -> Result<String, CronError> {
    Ok(describe(&parse(expression)?))
}

/// Renders an expression as an English sentence, e.g. `0 3 * * 0` →
/// `At 03:00 on Sunday`.
pub fn describe(expr: &CronExpr) -> String {
    use FieldPattern::{Any, Step, Value};

    let time = match (&expr.minute, &expr.hour) {
        (Any, Any) => "every minute".to_string(),
        (Any, hour) => format!("every minute of {}", hour_phrase(hour)),
        (Step(n), Any) => format!("every {n} minutes"),
        (Value(0), Any) => "every hour".to_string(),
        (Value(m), Any) => format!("at minute {m} past every hour"),
        (Value(m), Value(h)) => format!("at {h:02}:{m:02}"),
        (minute, hour) => format!(
            "at {} past {}",
            minute_phrase(minute),
            hour_phrase(hour)
        ),
    };

    let mut sentence = capitalize(&time);
    if let Some(day) = day_phrase(&expr.day) {
        sentence.push(' ');
        sentence.push_str(&day);
    }
    if let Some(month) = month_phrase(&expr.month) {
        sentence.push(' ');
        sentence.push_str(&month);
    }
    if let Some(weekday) = weekday_phrase(&expr.weekday) {
        sentence.push(' ');
        sentence.push_str(&weekday);
    }
    sentence
}

fn minute_phrase(pattern: &FieldPattern) -> String {
    match pattern {
        FieldPattern::Any => "every minute".to_string(),
        FieldPattern::Step(n) => format!("every {n} minutes"),
        FieldPattern::Value(m) => format!("minute {m}"),
        FieldPattern::Range(a, b) => format!("minutes {a} through {b}"),
        FieldPattern::List(values) => format!("minutes {}", join_numbers(values)),
    }
}

fn hour_phrase(pattern: &FieldPattern) -> String {
    match pattern {
        FieldPattern::Any => "every hour".to_string(),
        FieldPattern::Step(n) => format!("every {n} hours"),
        FieldPattern::Value(h) => format!("hour {h}"),
        FieldPattern::Range(a, b) => format!("hours {a} through {b}"),
        FieldPattern::List(values) => format!("hours {}", join_numbers(values)),
    }
}

fn day_phrase(pattern: &FieldPattern) -> Option<String> {
    Some(match pattern {
        FieldPattern::Any => return None,
        FieldPattern::Step(n) => format!("every {n} days"),
        FieldPattern::Value(d) => format!("on day {d} of the month"),
        FieldPattern::Range(a, b) => format!("on days {a} through {b} of the month"),
        FieldPattern::List(values) => {
            format!("on days {} of the month", join_numbers(values))
        }
    })
}

fn month_phrase(pattern: &FieldPattern) -> Option<String> {
    let name = |n: u32| MONTHS[(n - 1) as usize].to_string();
    Some(match pattern {
        FieldPattern::Any => return None,
        FieldPattern::Step(n) => format!("every {n} months"),
        FieldPattern::Value(m) => format!("in {}", name(*m)),
        FieldPattern::Range(a, b) => format!("from {} through {}", name(*a), name(*b)),
        FieldPattern::List(values) => {
            let names: Vec<String> = values.iter().map(|m| name(*m)).collect();
            format!("in {}", join_words(&names))
        }
    })
}

fn weekday_phrase(pattern: &FieldPattern) -> Option<String> {
    let name = |n: u32| WEEKDAYS[(n % 7) as usize].to_string();
    Some(match pattern {
        FieldPattern::Any => return None,
        FieldPattern::Step(n) => format!("every {n} weekdays"),
        FieldPattern::Value(w) => format!("on {}", name(*w)),
        FieldPattern::Range(a, b) => format!("on {} through {}", name(*a), name(*b)),
        FieldPattern::List(values) => {
            let names: Vec<String> = values.iter().map(|w| name(*w)).collect();
            format!("on {}", join_words(&names))
        }
    })
}

fn join_numbers(values: &[u32]) -> String {
    let words: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    join_words(&words)
}

fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(describe_str("* * * * *").unwrap(), "Every minute");
        assert_eq!(describe_str("*/5 * * * *").unwrap(), "Every 5 minutes");
        assert_eq!(describe_str("0 * * * *").unwrap(), "Every hour");
        assert_eq!(describe_str("0 0 * * *").unwrap(), "At 00:00");
        assert_eq!(describe_str("0 3 * * 0").unwrap(), "At 03:00 on Sunday");
        assert_eq!(
            describe_str("0 0 1 * *").unwrap(),
            "At 00:00 on day 1 of the month"
        );
    }

    #[test]
    fn test_ranges_and_lists() {
        assert_eq!(
            describe_str("30 9 * * 1-5").unwrap(),
            "At 09:30 on Monday through Friday"
        );
        assert_eq!(
            describe_str("15 2 * 6 *").unwrap(),
            "At 02:15 in June"
        );
        assert_eq!(
            describe_str("0 12 1,15 * *").unwrap(),
            "At 12:00 on days 1 and 15 of the month"
        );
        assert_eq!(
            describe_str("0 8 * * 1,3,5").unwrap(),
            "At 08:00 on Monday, Wednesday and Friday"
        );
    }

    #[test]
    fn test_weekday_seven_is_sunday() {
        assert_eq!(describe_str("0 3 * * 7").unwrap(), "At 03:00 on Sunday");
    }

    #[test]
    fn test_minute_past_every_hour() {
        assert_eq!(
            describe_str("30 * * * *").unwrap(),
            "At minute 30 past every hour"
        );
    }

    #[test]
    fn test_step_hours() {
        assert_eq!(
            describe_str("0 */2 * * *").unwrap(),
            "At minute 0 past every 2 hours"
        );
    }

    #[test]
    fn test_field_count_errors() {
        assert_eq!(parse("* * * *").unwrap_err(), CronError::FieldCount(4));
        assert_eq!(parse("").unwrap_err(), CronError::FieldCount(0));
        assert_eq!(
            parse("* * * * * *").unwrap_err(),
            CronError::FieldCount(6)
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse("60 * * * *").unwrap_err(),
            CronError::OutOfRange {
                field: "minute",
                value: 60,
                min: 0,
                max: 59
            }
        );
        assert!(parse("* 24 * * *").is_err());
        assert!(parse("* * 0 * *").is_err());
        assert!(parse("* * * 13 *").is_err());
        assert!(parse("* * * * 8").is_err());
    }

    #[test]
    fn test_invalid_fields() {
        assert!(matches!(
            parse("a * * * *").unwrap_err(),
            CronError::InvalidField { field: "minute", .. }
        ));
        assert!(parse("*/0 * * * *").is_err());
        assert!(parse("5-1 * * * *").is_err());
    }

    #[test]
    fn test_parsed_shape() {
        let expr = parse("*/5 0 1,15 6 1-5").unwrap();
        assert_eq!(expr.minute, FieldPattern::Step(5));
        assert_eq!(expr.hour, FieldPattern::Value(0));
        assert_eq!(expr.day, FieldPattern::List(vec![1, 15]));
        assert_eq!(expr.month, FieldPattern::Value(6));
        assert_eq!(expr.weekday, FieldPattern::Range(1, 5));
    }
}
