//! Lexical datatypes and their JSON codecs.
//!
//! Each [`Datatype`] is identified by the IRI a property range names it by.
//! Parsing is total over JSON values: anything a datatype cannot represent
//! returns `None`, and the property decoder moves on to its next declared
//! kind.

use std::cmp::Ordering;
use std::sync::OnceLock;

use asld_vocab::model::iris;
use chrono::{DateTime, Duration, FixedOffset, SecondsFormat};
use regex::Regex;
use serde_json::Value;

use crate::iri::Iri;

/// Datatypes a property range may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Datatype {
    /// `xsd:string`.
    String,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:duration`.
    Duration,
    /// `xsd:float`.
    Float,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:anyURI`.
    AnyUri,
    /// BCP 47 language tag.
    LanguageTag,
    /// RFC 2045 media type.
    MediaType,
    /// RFC 5988 link relation.
    LinkRelation,
}

impl Datatype {
    /// Every datatype, in declaration order.
    pub const ALL: [Datatype; 10] = [
        Datatype::String,
        Datatype::Boolean,
        Datatype::DateTime,
        Datatype::Duration,
        Datatype::Float,
        Datatype::NonNegativeInteger,
        Datatype::AnyUri,
        Datatype::LanguageTag,
        Datatype::MediaType,
        Datatype::LinkRelation,
    ];

    /// Resolves a range IRI. `rdf:langString` is not a lexical datatype and
    /// returns `None`.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.iri() == iri)
    }

    /// The IRI a property range names this datatype by.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            Datatype::String => iris::XSD_STRING,
            Datatype::Boolean => iris::XSD_BOOLEAN,
            Datatype::DateTime => iris::XSD_DATETIME,
            Datatype::Duration => iris::XSD_DURATION,
            Datatype::Float => iris::XSD_FLOAT,
            Datatype::NonNegativeInteger => iris::XSD_NON_NEGATIVE_INTEGER,
            Datatype::AnyUri => iris::XSD_ANY_URI,
            Datatype::LanguageTag => iris::BCP47,
            Datatype::MediaType => iris::RFC2045,
            Datatype::LinkRelation => iris::RFC5988,
        }
    }

    /// Short display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Datatype::String => "xsd:string",
            Datatype::Boolean => "xsd:boolean",
            Datatype::DateTime => "xsd:dateTime",
            Datatype::Duration => "xsd:duration",
            Datatype::Float => "xsd:float",
            Datatype::NonNegativeInteger => "xsd:nonNegativeInteger",
            Datatype::AnyUri => "xsd:anyURI",
            Datatype::LanguageTag => "bcp47",
            Datatype::MediaType => "rfc2045",
            Datatype::LinkRelation => "rfc5988",
        }
    }
}

/// A decoded lexical value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `xsd:string`.
    String(String),
    /// `xsd:boolean`.
    Boolean(bool),
    /// `xsd:dateTime`, keeping the original offset.
    DateTime(DateTime<FixedOffset>),
    /// `xsd:duration`, normalized to an exact span.
    Duration(Duration),
    /// `xsd:float`.
    Float(f64),
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger(u64),
    /// `xsd:anyURI`. Always carries a scheme.
    AnyUri(Iri),
    /// BCP 47 language tag.
    LanguageTag(String),
    /// RFC 2045 media type.
    MediaType(String),
    /// RFC 5988 link relation.
    LinkRelation(String),
}

impl Literal {
    /// The datatype of this value.
    #[must_use]
    pub fn datatype(&self) -> Datatype {
        match self {
            Literal::String(_) => Datatype::String,
            Literal::Boolean(_) => Datatype::Boolean,
            Literal::DateTime(_) => Datatype::DateTime,
            Literal::Duration(_) => Datatype::Duration,
            Literal::Float(_) => Datatype::Float,
            Literal::NonNegativeInteger(_) => Datatype::NonNegativeInteger,
            Literal::AnyUri(_) => Datatype::AnyUri,
            Literal::LanguageTag(_) => Datatype::LanguageTag,
            Literal::MediaType(_) => Datatype::MediaType,
            Literal::LinkRelation(_) => Datatype::LinkRelation,
        }
    }

    /// Reads `value` as `datatype`. Returns `None` if it is not a valid
    /// lexical form.
    #[must_use]
    pub fn parse(datatype: Datatype, value: &Value) -> Option<Self> {
        match datatype {
            Datatype::String => value.as_str().map(|s| Literal::String(s.to_string())),
            Datatype::Boolean => parse_boolean(value).map(Literal::Boolean),
            Datatype::DateTime => value.as_str().and_then(parse_date_time).map(Literal::DateTime),
            Datatype::Duration => value.as_str().and_then(parse_duration).map(Literal::Duration),
            Datatype::Float => value.as_f64().map(Literal::Float),
            Datatype::NonNegativeInteger => {
                parse_non_negative_integer(value).map(Literal::NonNegativeInteger)
            }
            Datatype::AnyUri => value
                .as_str()
                .and_then(Iri::parse)
                .filter(Iri::has_scheme)
                .map(Literal::AnyUri),
            Datatype::LanguageTag => value
                .as_str()
                .filter(|s| language_tag_pattern().is_some_and(|re| re.is_match(s)))
                .map(|s| Literal::LanguageTag(s.to_string())),
            Datatype::MediaType => value.as_str().map(|s| Literal::MediaType(s.to_string())),
            Datatype::LinkRelation => {
                value.as_str().map(|s| Literal::LinkRelation(s.to_string()))
            }
        }
    }

    /// Writes the value in its canonical JSON form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Literal::String(s)
            | Literal::LanguageTag(s)
            | Literal::MediaType(s)
            | Literal::LinkRelation(s) => Value::String(s.clone()),
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Literal::Duration(d) => Value::String(format_duration(*d)),
            Literal::Float(f) => Value::from(*f),
            Literal::NonNegativeInteger(n) => Value::from(*n),
            Literal::AnyUri(iri) => Value::String(iri.to_string()),
        }
    }

    /// Total order: by datatype first, then by value. Date-times compare as
    /// instants, floats by IEEE total order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Literal::String(a), Literal::String(b))
            | (Literal::LanguageTag(a), Literal::LanguageTag(b))
            | (Literal::MediaType(a), Literal::MediaType(b))
            | (Literal::LinkRelation(a), Literal::LinkRelation(b)) => a.cmp(b),
            (Literal::Boolean(a), Literal::Boolean(b)) => a.cmp(b),
            (Literal::DateTime(a), Literal::DateTime(b)) => a.cmp(b),
            (Literal::Duration(a), Literal::Duration(b)) => a.cmp(b),
            (Literal::Float(a), Literal::Float(b)) => a.total_cmp(b),
            (Literal::NonNegativeInteger(a), Literal::NonNegativeInteger(b)) => a.cmp(b),
            (Literal::AnyUri(a), Literal::AnyUri(b)) => a.cmp(b),
            _ => self.datatype().cmp(&other.datatype()),
        }
    }
}

/// Booleans also arrive as the numbers `0` and `1`.
fn parse_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(x) if x == 0.0 => Some(false),
            Some(x) if x == 1.0 => Some(true),
            _ => None,
        },
        _ => None,
    }
}

fn parse_non_negative_integer(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_u64() {
        return Some(n);
    }
    let x = number.as_f64()?;
    if x < 0.0 || x.fract() != 0.0 || x > u64::MAX as f64 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = x as u64;
    Some(n)
}

/// RFC 3339, plus the seconds-less `YYYY-MM-DDTHH:MMZ` form some servers
/// emit.
fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    let normalized = match text.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => text.to_string(),
    };
    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").ok()
}

const SECONDS_PER_DAY: i64 = 86_400;
/// Years and months have no exact length; they are read as 365 and 30 days.
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

fn duration_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
            )
            .ok()
        })
        .as_ref()
}

fn language_tag_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z]{1,8}(?:-[A-Za-z0-9]{1,8})*$").ok())
        .as_ref()
}

fn parse_duration(text: &str) -> Option<Duration> {
    let caps = duration_pattern()?.captures(text)?;
    // "P" and "PT" alone name no components.
    if caps.iter().skip(2).all(|c| c.is_none()) || text.ends_with('T') {
        return None;
    }
    let int = |i: usize| -> Option<i64> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse::<i64>().ok())
    };
    let days = int(2)?
        .checked_mul(DAYS_PER_YEAR)?
        .checked_add(int(3)?.checked_mul(DAYS_PER_MONTH)?)?
        .checked_add(int(4)?)?;
    let whole_seconds = days
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(int(5)?.checked_mul(3_600)?)?
        .checked_add(int(6)?.checked_mul(60)?)?;
    let seconds: f64 = caps.get(7).map_or(Ok(0.0), |m| m.as_str().parse()).ok()?;
    #[allow(clippy::cast_possible_truncation)]
    let millis = whole_seconds
        .checked_mul(1_000)?
        .checked_add((seconds * 1_000.0).round() as i64)?;
    let span = Duration::try_milliseconds(millis)?;
    Some(if caps.get(1).is_some() { -span } else { span })
}

/// Canonical form: days, hours, minutes and seconds, never years or months.
fn format_duration(d: Duration) -> String {
    let negative = d < Duration::zero();
    let mut millis = d.num_milliseconds().unsigned_abs();
    let days = millis / (SECONDS_PER_DAY as u64 * 1_000);
    millis %= SECONDS_PER_DAY as u64 * 1_000;
    let hours = millis / 3_600_000;
    millis %= 3_600_000;
    let minutes = millis / 60_000;
    millis %= 60_000;
    let seconds = millis / 1_000;
    let fraction = millis % 1_000;

    let mut out = String::from(if negative { "-P" } else { "P" });
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || fraction > 0 || days == 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if fraction > 0 {
            let frac = format!("{fraction:03}");
            out.push_str(&format!("{seconds}.{}S", frac.trim_end_matches('0')));
        } else if seconds > 0 || (hours == 0 && minutes == 0) {
            out.push_str(&format!("{seconds}S"));
        }
    }
    out
}
