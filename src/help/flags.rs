//! Raw flag text parsing.
//!
//! Flag text is what the user typed into the flags column, e.g. `-v, --verbose`.
//! Tokens are separated by commas or whitespace.
use anyhow::{anyhow, Result};

/// Short and long names recovered from a descriptor's flag text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagNames {
    pub short: Option<char>,
    pub long: Option<String>,
    pub short_aliases: Vec<char>,
    pub long_aliases: Vec<String>,
}

impl FlagNames {
    /// Every spelling this argument answers to, with dashes.
    pub fn spellings(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.extend(self.short.iter().map(|c| format!("-{c}")));
        out.extend(self.short_aliases.iter().map(|c| format!("-{c}")));
        out.extend(self.long.iter().map(|l| format!("--{l}")));
        out.extend(self.long_aliases.iter().map(|l| format!("--{l}")));
        out
    }

    /// Preferred human-facing name: long if present, else short.
    pub fn primary(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::new(),
        }
    }
}

pub fn parse_flags(text: &str) -> Result<FlagNames> {
    let mut names = FlagNames::default();
    let tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for token in tokens {
        if let Some(long) = token.strip_prefix("--") {
            let long = parse_long(token, long)?;
            if names.long.is_none() {
                names.long = Some(long);
            } else {
                names.long_aliases.push(long);
            }
        } else if let Some(short) = token.strip_prefix('-') {
            let short = parse_short(token, short)?;
            if names.short.is_none() {
                names.short = Some(short);
            } else {
                names.short_aliases.push(short);
            }
        } else {
            return Err(anyhow!("flag `{token}` must start with '-'"));
        }
    }
    if names.short.is_none() && names.long.is_none() {
        return Err(anyhow!("no flags found in `{}`", text.trim()));
    }
    Ok(names)
}

fn parse_long(token: &str, long: &str) -> Result<String> {
    if long.is_empty() {
        return Err(anyhow!("flag `{token}` is missing a name"));
    }
    if long.starts_with('-') {
        return Err(anyhow!("flag `{token}` has too many leading dashes"));
    }
    if long.contains('=') {
        return Err(anyhow!("flag `{token}` must not contain '='"));
    }
    Ok(long.to_string())
}

fn parse_short(token: &str, short: &str) -> Result<char> {
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(anyhow!("flag `{token}` is missing a name")),
        (Some(c), None) if c != '=' => Ok(c),
        (Some(_), None) => Err(anyhow!("flag `{token}` is not a valid short flag")),
        (Some(_), Some(_)) => Err(anyhow!(
            "short flag `{token}` must be a single character (use `--` for long flags)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long() {
        let names = parse_flags("-v, --verbose").expect("parse");
        assert_eq!(names.short, Some('v'));
        assert_eq!(names.long.as_deref(), Some("verbose"));
        assert!(names.short_aliases.is_empty());
        assert!(names.long_aliases.is_empty());
        assert_eq!(names.primary(), "verbose");
    }

    #[test]
    fn extra_names_become_aliases() {
        let names = parse_flags("--color --colour -c -C").expect("parse");
        assert_eq!(names.long.as_deref(), Some("color"));
        assert_eq!(names.long_aliases, vec!["colour".to_string()]);
        assert_eq!(names.short, Some('c'));
        assert_eq!(names.short_aliases, vec!['C']);
        assert_eq!(names.spellings(), vec!["-c", "-C", "--color", "--colour"]);
    }

    #[test]
    fn short_only_uses_short_as_primary() {
        let names = parse_flags(" -q ").expect("parse");
        assert_eq!(names.long, None);
        assert_eq!(names.primary(), "q");
    }

    #[test]
    fn rejects_missing_dash() {
        let err = parse_flags("verbose").expect_err("no dash");
        assert!(err.to_string().contains("must start with '-'"));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(parse_flags("-").is_err());
        assert!(parse_flags("--").is_err());
        assert!(parse_flags("---x").is_err());
        assert!(parse_flags("--out=FILE").is_err());
        let err = parse_flags("-vx").expect_err("multi-char short");
        assert!(err.to_string().contains("single character"));
    }

    #[test]
    fn rejects_separator_only_text() {
        assert!(parse_flags(" , ").is_err());
    }
}
