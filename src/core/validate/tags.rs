use regex::Regex;

/// Whether `value` contains a `<tag>...</tag>`, `<tag>` or `<tag/>` marker.
pub fn has_tag(value: &str, tag: &str) -> Result<bool, regex::Error> {
    let tag = regex::escape(tag);
    let pattern = Regex::new(&format!(r"(<{tag}>(.*?)</{tag}>|<{tag}>|<{tag}\s*/>)"))?;
    Ok(pattern.is_match(value))
}
