use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::NormalizeError;

static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("comment pattern is valid"));

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(\w+) "([^"]+)"\]"#).expect("tag pattern is valid"));

const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Start/end metadata pulled from a game's movetext
#[derive(Debug, Clone, PartialEq)]
pub struct GameTags {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl GameTags {
    pub fn start_datetime(&self) -> Result<NaiveDateTime, NormalizeError> {
        parse_datetime(&self.start_date, &self.start_time)
    }

    pub fn end_datetime(&self) -> Result<NaiveDateTime, NormalizeError> {
        parse_datetime(&self.end_date, &self.end_time)
    }

    /// Seconds between start and end, negative if the tags disagree
    pub fn duration_seconds(&self) -> Result<i64, NormalizeError> {
        let elapsed = self.end_datetime()? - self.start_datetime()?;
        Ok(elapsed.num_seconds())
    }
}

/// Flatten newlines and drop `{...}` comment annotations
pub fn clean_movetext(pgn: &str) -> String {
    let flattened = pgn.replace('\n', " ");
    COMMENT_REGEX.replace_all(&flattened, "").into_owned()
}

pub fn extract_tags(movetext: &str) -> Result<GameTags, NormalizeError> {
    Ok(GameTags {
        start_time: find_tag(movetext, "StartTime")?,
        end_time: find_tag(movetext, "EndTime")?,
        start_date: normalize_date(&find_tag(movetext, "Date")?),
        end_date: normalize_date(&find_tag(movetext, "EndDate")?),
    })
}

fn find_tag(movetext: &str, name: &'static str) -> Result<String, NormalizeError> {
    TAG_REGEX
        .captures_iter(movetext)
        .find(|captures| &captures[1] == name)
        .map(|captures| captures[2].to_string())
        .ok_or(NormalizeError::MissingTag(name))
}

fn normalize_date(date: &str) -> String {
    date.replace('.', "/")
}

fn parse_datetime(date: &str, time: &str) -> Result<NaiveDateTime, NormalizeError> {
    let raw = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
        .map_err(|e| NormalizeError::malformed(format!("invalid timestamp '{}': {}", raw, e)))
}
