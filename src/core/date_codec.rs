use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::clock::{Clock, SystemClock};
use crate::core::instant::Instant;
use crate::error::{NavError, NavResult};

/// Abbreviated English day names, Sunday first, matching the page's output.
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display-only zone label. The page always prints this literal, whatever
/// zone actually produced the instant.
const DISPLAY_ZONE: &str = "HST";

/// Units accepted by the relative form (`"<n> <unit> ago"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    /// Seconds per unit. A month is a fixed 30 days and a year a fixed
    /// 365, matching the format's own vagueness rather than the calendar.
    #[must_use]
    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
            Self::Weeks => 604_800,
            Self::Months => 2_592_000,
            Self::Years => 31_536_000,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sec" | "secs" => Some(Self::Seconds),
            "min" | "mins" => Some(Self::Minutes),
            "hour" | "hours" => Some(Self::Hours),
            "day" | "days" => Some(Self::Days),
            "week" | "weeks" => Some(Self::Weeks),
            "month" | "months" => Some(Self::Months),
            "year" | "years" => Some(Self::Years),
            _ => None,
        }
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let index = match name.to_ascii_lowercase().as_str() {
        "jan" | "january" => 0,
        "feb" | "february" => 1,
        "mar" | "march" => 2,
        "apr" | "april" => 3,
        "may" => 4,
        "jun" | "june" => 5,
        "jul" | "july" => 6,
        "aug" | "august" => 7,
        "sep" | "september" => 8,
        "oct" | "october" => 9,
        "nov" | "november" => 10,
        "dec" | "december" => 11,
        _ => return None,
    };
    Some(index)
}

/// How the decoder treats names it cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unrecognized unit or month names are reported as errors.
    #[default]
    Strict,
    /// Compatibility with the original page script: an unrecognized unit
    /// leaves the amount in raw seconds, an unrecognized month falls back
    /// to January. The result is well-formed but may be nonsense, which is
    /// what callers of the original have always tolerated.
    Legacy,
}

/// Fields of the absolute form, e.g. `"Wed May  5 10:52:26 HST 2010"`.
///
/// Parsed positionally from the final (year) token leftward. The zone token
/// is filler and never captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteFields {
    /// Carried along but never checked against the computed weekday.
    pub weekday_token: String,
    pub month0: u32,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub year: i32,
}

/// One of the three textual date encodings the page produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSpec {
    Now,
    Relative { amount: i64, unit: DurationUnit },
    Absolute(AbsoluteFields),
}

impl DateSpec {
    /// Parses one of the three supported encodings.
    ///
    /// Splitting is on single spaces, so the double space the page sometimes
    /// emits between weekday and month shows up as an empty token; the month
    /// is then one position further left of the year.
    pub fn parse(text: &str, mode: ParseMode) -> NavResult<Self> {
        let tokens: SmallVec<[&str; 8]> = text.split(' ').collect();

        if tokens.first() == Some(&"now") {
            return Ok(Self::Now);
        }

        if tokens.len() > 2 && tokens[2].eq_ignore_ascii_case("ago") {
            return Self::parse_relative(&tokens, mode, text);
        }

        Self::parse_absolute(&tokens, mode, text)
    }

    fn parse_relative(tokens: &[&str], mode: ParseMode, text: &str) -> NavResult<Self> {
        let amount: i64 = tokens[0]
            .parse()
            .map_err(|_| NavError::MalformedDate(text.to_owned()))?;

        let unit_name = tokens[1].to_ascii_lowercase();
        let unit = match (DurationUnit::from_name(&unit_name), mode) {
            (Some(unit), _) => unit,
            (None, ParseMode::Strict) => return Err(NavError::UnknownUnit(unit_name)),
            (None, ParseMode::Legacy) => DurationUnit::Seconds,
        };

        Ok(Self::Relative { amount, unit })
    }

    fn parse_absolute(tokens: &[&str], mode: ParseMode, text: &str) -> NavResult<Self> {
        let malformed = || NavError::MalformedDate(text.to_owned());

        if tokens.len() < 5 {
            return Err(malformed());
        }
        let last = tokens.len() - 1;

        // Double-space artifact: an empty token where the month should be
        // means the month sits one further left.
        let month_token = if tokens[last - 4].is_empty() {
            last.checked_sub(5)
                .and_then(|index| tokens.get(index))
                .copied()
                .ok_or_else(malformed)?
        } else {
            tokens[last - 4]
        };

        let month0 = match (month_from_name(month_token), mode) {
            (Some(month0), _) => month0,
            (None, ParseMode::Strict) => {
                return Err(NavError::UnknownMonth(month_token.to_owned()));
            }
            (None, ParseMode::Legacy) => 0,
        };

        let day: i64 = tokens[last - 3].parse().map_err(|_| malformed())?;

        let mut time_of_day = tokens[last - 2].split(':');
        let mut next_field = || -> NavResult<i64> {
            time_of_day
                .next()
                .and_then(|field| field.parse().ok())
                .ok_or_else(malformed)
        };
        let hour = next_field()?;
        let minute = next_field()?;
        let second = next_field()?;

        let year: i32 = tokens[last].parse().map_err(|_| malformed())?;

        Ok(Self::Absolute(AbsoluteFields {
            weekday_token: tokens[0].to_owned(),
            month0,
            day,
            hour,
            minute,
            second,
            year,
        }))
    }

    /// Resolves the spec against `clock`'s current instant.
    pub fn resolve(&self, clock: &dyn Clock) -> NavResult<Instant> {
        match self {
            Self::Now => Ok(Instant::from_naive(clock.now())),
            Self::Relative { amount, unit } => {
                let seconds = amount
                    .checked_mul(unit.seconds())
                    .ok_or_else(|| NavError::DateOutOfRange(format!("{amount} x {unit:?}")))?;
                Instant::from_naive(clock.now()).minus_seconds(seconds)
            }
            Self::Absolute(fields) => Instant::from_fields(
                fields.year,
                fields.month0,
                fields.day,
                fields.hour,
                fields.minute,
                fields.second,
            ),
        }
    }
}

/// Bidirectional converter between [`Instant`] and the page's textual date
/// formats.
#[derive(Debug, Clone, Copy)]
pub struct DateCodec<C> {
    clock: C,
    mode: ParseMode,
}

impl DateCodec<SystemClock> {
    /// Codec on the wall clock with strict parsing.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> DateCodec<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            mode: ParseMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn decode(&self, text: &str) -> NavResult<Instant> {
        DateSpec::parse(text, self.mode)?.resolve(&self.clock)
    }

    /// Renders an instant as `"<Wk> <Mon> <D> <H>:<Mi>:<S> HST <YYYY>"`.
    ///
    /// Numeric fields are unpadded, matching the page's native
    /// number-to-string output, and the zone label is the fixed display
    /// literal; no zone conversion happens here.
    #[must_use]
    pub fn encode(&self, instant: Instant) -> String {
        format!(
            "{} {} {} {}:{}:{} {DISPLAY_ZONE} {}",
            WEEKDAY_NAMES[instant.weekday0() as usize],
            MONTH_NAMES[instant.month0() as usize],
            instant.day(),
            instant.hour(),
            instant.minute(),
            instant.second(),
            instant.year(),
        )
    }
}
