use serde::{Deserialize, Serialize};

/// One corpus entry. The URL is the document identity; everything else is
/// display material.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
}

// The scraped VOA articles carry month names in Amharic. They are mapped to
// their English equivalents on ingest so the dates can be parsed uniformly.
const AMHARIC_MONTHS: [(&str, u32); 12] = [
    ("ጃንዩወሪ", 1),
    ("ፌብሩወሪ", 2),
    ("ማርች", 3),
    ("ኤፕሪል", 4),
    ("ሜይ", 5),
    ("ጁን", 6),
    ("ጁላይ", 7),
    ("ኦገስት", 8),
    ("ሴፕቴምበር", 9),
    ("ኦክቶበር", 10),
    ("ኖቬምበር", 11),
    ("ዲሴምበር", 12),
];

const ENGLISH_MONTHS: [(&str, u32); 12] = [
    ("January", 1),
    ("February", 2),
    ("March", 3),
    ("April", 4),
    ("May", 5),
    ("June", 6),
    ("July", 7),
    ("August", 8),
    ("September", 9),
    ("October", 10),
    ("November", 11),
    ("December", 12),
];

/// Convert a scraped date like "ጃንዩወሪ 5, 2024" or "January 5, 2024" into
/// ISO "2024-01-05". Returns None when the string does not fit the
/// "<month> <day>, <year>" shape; callers keep the raw text in that case.
pub fn convert_scraped_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (month_text, rest) = trimmed.split_once(' ')?;

    let month = AMHARIC_MONTHS
        .iter()
        .chain(ENGLISH_MONTHS.iter())
        .find(|(name, _)| *name == month_text)
        .map(|(_, number)| *number)?;

    let (day_text, year_text) = rest.split_once(',')?;
    let day: u32 = day_text.trim().parse().ok()?;
    let year: i32 = year_text.trim().parse().ok()?;

    if !(1..=31).contains(&day) {
        return None;
    }

    Some(format!("{:04}-{:02}-{:02}", year, month, day))
}

impl Document {
    /// Normalize the date field in place, leaving unparseable text as-is.
    pub fn normalize_date(&mut self) {
        if let Some(iso) = convert_scraped_date(&self.date) {
            self.date = iso;
        }
    }
}
