//! Default-substitution helpers.
//!
//! An empty string counts as "not supplied" everywhere: forms submit `""` for
//! untouched inputs, and storage rows written by older clients hold `""`
//! where they meant `NULL`.

/// The value, or `default` when it is missing or empty.
pub fn text_or(value: Option<&str>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

/// The value, or `None` when it is missing or empty.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Owned variant of [`non_empty`].
pub fn non_empty_owned(value: Option<&str>) -> Option<String> {
    non_empty(value).map(str::to_string)
}

/// First candidate that is present and non-empty, left to right.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().find_map(non_empty)
}

/// Join note lines with `\n`; an absent list gives `""`.
pub fn join_lines(lines: Option<&[String]>) -> String {
    lines.map(|l| l.join("\n")).unwrap_or_default()
}
