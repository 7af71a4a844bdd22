//! Normalization of raw field text shared by every page template.

use chrono::{Days, NaiveDate};
use url::Url;

use crate::errors::{CrawlError, Result};

/// VND per USD used to bring USD salaries into the VND denomination.
pub const USD_TO_VND: f64 = 24000.0;

const USD: &str = "USD";

/// Salary texts meaning "negotiable". The site uses both tone-mark placements.
const NEGOTIABLE: [&str; 2] = ["Thoả thuận", "Thỏa thuận"];

const NO_EXPERIENCE: &str = "Không yêu cầu kinh nghiệm";

const ABOVE: &str = "Trên";
const UP_TO: &str = "Tới";
const UNDER: &str = "Dưới";

/// Parses a salary text into a (min, max) range in millions of VND.
///
/// Recognized shapes, after `,` thousands separators are dropped:
/// - `Thoả thuận` (negotiable): neither bound
/// - `<min> - <max> <unit>`: both bounds
/// - `Trên <min> <unit>` (above): min only
/// - `Tới <max> <unit>` (up to): max only
///
/// A `USD` unit converts each bound with [`USD_TO_VND`], rescaled to millions.
///
/// ```
/// # use core_tcv::extract::fields::parse_salary;
/// assert_eq!(parse_salary("15 - 20 triệu").unwrap(), (Some(15.0), Some(20.0)));
/// assert_eq!(parse_salary("1,000 - 2,000 USD").unwrap(), (Some(24.0), Some(48.0)));
/// ```
pub fn parse_salary(text: &str) -> Result<(Option<f64>, Option<f64>)> {
    let text = text.trim();
    if NEGOTIABLE.contains(&text) {
        return Ok((None, None));
    }

    let invalid = || CrawlError::InvalidField {
        field: "salary",
        value: text.to_string(),
    };
    // Whole non-negative amounts only; `NaN`, `inf` and `-5` are invalid.
    let amount = |token: &str| token.parse::<u64>().map(|n| n as f64).map_err(|_| invalid());

    let cleaned = text.replace(',', "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let (min, max) = match tokens.as_slice() {
        [min, "-", max, ..] => (Some(amount(min)?), Some(amount(max)?)),
        [ABOVE, min, ..] => (Some(amount(min)?), None),
        [UP_TO, max, ..] => (None, Some(amount(max)?)),
        _ => return Err(invalid()),
    };

    if tokens.last() == Some(&USD) {
        let to_million_vnd = |usd: f64| usd * USD_TO_VND / 1_000_000.0;
        return Ok((min.map(to_million_vnd), max.map(to_million_vnd)));
    }
    Ok((min, max))
}

/// Parses a required-experience text into a (min, max) range of years.
///
/// - `Không yêu cầu kinh nghiệm` (none required): `(0, 0)`
/// - `<n> năm`: exactly `n`
/// - `Trên <n> năm` (above): min only
/// - `Dưới <n> năm` (under): max only
///
/// Anything else yields neither bound.
pub fn parse_experience(text: &str) -> (Option<i32>, Option<i32>) {
    let text = text.trim();
    if text == NO_EXPERIENCE {
        return (Some(0), Some(0));
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let first = tokens.first().copied();
    let first_years = first.and_then(years);
    let second_years = tokens.get(1).copied().and_then(years);

    match (first, first_years, second_years) {
        (_, Some(n), _) => (Some(n), Some(n)),
        (Some(ABOVE), None, Some(n)) => (Some(n), None),
        (Some(UNDER), None, Some(n)) => (None, Some(n)),
        _ => (None, None),
    }
}

fn years(token: &str) -> Option<i32> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Parses the `dd/mm/yyyy` date that ends a deadline label,
/// e.g. `Hạn nộp hồ sơ: 30/11/2024`.
pub fn parse_deadline(text: &str) -> Result<NaiveDate> {
    let invalid = || CrawlError::InvalidField {
        field: "due_date",
        value: text.trim().to_string(),
    };
    let date = text.split_whitespace().last().ok_or_else(invalid)?;
    NaiveDate::parse_from_str(date, "%d/%m/%Y").map_err(|_| invalid())
}

/// `today` plus the remaining-days count shown on the page. The count must be
/// a non-negative integer.
pub fn due_in_days(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    let invalid = || CrawlError::InvalidField {
        field: "due_date",
        value: text.trim().to_string(),
    };
    let days: u64 = text.trim().parse().map_err(|_| invalid())?;
    today.checked_add_days(Days::new(days)).ok_or_else(invalid)
}

/// City from the diamond layout's address line, e.g. `- Hà Nội : Tầng 5, ...`.
///
/// Drops the two leading characters and everything from the character before
/// the first `:`. A `:` in first position has no character before it, so the
/// end bound wraps to the line's last character instead. Tied to the current
/// address markup.
pub fn diamond_city(raw: &str) -> Result<String> {
    let chars: Vec<char> = raw.chars().collect();
    let colon = chars.iter().position(|&c| c == ':').ok_or_else(|| CrawlError::InvalidField {
        field: "job_city",
        value: raw.trim().to_string(),
    })?;
    let end = match colon {
        0 => chars.len() - 1,
        n => n - 1,
    };
    let city: String = chars
        .get(2..end)
        .map(|slice| slice.iter().collect())
        .unwrap_or_default();
    Ok(city.trim().to_string())
}

/// File stem of the URL's last path segment: `.../123456.html` gives `123456`.
fn file_stem(url: &Url) -> &str {
    let segment = url.path_segments().and_then(|segments| segments.last()).unwrap_or("");
    segment.split('.').next().unwrap_or("")
}

/// Job id of a `/viec-lam/...` URL: the file stem as an integer.
pub fn normal_job_id(url: &Url) -> Result<i64> {
    let stem = file_stem(url);
    stem.parse().map_err(|_| CrawlError::InvalidField {
        field: "job_id",
        value: url.to_string(),
    })
}

/// Job id of a `/brand/...` URL: the last `-` token of the file stem without
/// its one-letter prefix, `...-j123456.html` gives `123456`.
pub fn brand_job_id(url: &Url) -> Result<i64> {
    let token = file_stem(url).rsplit('-').next().unwrap_or("");
    let mut chars = token.chars();
    chars.next();
    chars.as_str().parse().map_err(|_| CrawlError::InvalidField {
        field: "job_id",
        value: url.to_string(),
    })
}
