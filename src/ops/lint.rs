//! Linting of the canonical translation file.

use crate::{
    core::parsers::json::TranslationFile,
    issues::{Issue, Rule},
    rules::{HardcodedWords, check_hardcoded_words, check_key_charset, check_key_equals_value},
};

/// Rules `lint` can run.
pub const LINT_RULES: [Rule; 3] = [Rule::KeyCharset, Rule::KeyEqualsValue, Rule::HardcodedWord];

/// Run `rules` over every leaf of `file`. Issues come back sorted.
///
/// The hardcoded-word rule only reports anything when `words` is non-empty.
pub fn lint(
    file: &TranslationFile,
    separator: &str,
    rules: &[Rule],
    words: &HardcodedWords,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            Rule::KeyCharset => {
                let found = check_key_charset(file, separator);
                issues.extend(found.into_iter().map(Issue::KeyCharset));
            }
            Rule::KeyEqualsValue => {
                let found = check_key_equals_value(file, separator);
                issues.extend(found.into_iter().map(Issue::KeyEqualsValue));
            }
            Rule::HardcodedWord => {
                let found = check_hardcoded_words(file, separator, words);
                issues.extend(found.into_iter().map(Issue::HardcodedWord));
            }
            Rule::InvalidCall | Rule::ParseError => {}
        }
    }

    issues.sort();
    issues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::issues::{Report, ReportLocation};

    fn line(issue: &Issue) -> usize {
        match issue.location() {
            ReportLocation::Message(ctx) => ctx.line(),
            _ => 0,
        }
    }

    fn file(content: &str) -> TranslationFile {
        TranslationFile::parse("en_EN.json", content.to_string()).unwrap()
    }

    #[test]
    fn test_lint_reports_in_file_order() {
        let file = file(
            "{\n    \"greeting\": \"greeting\",\n    \"foo bar\": \"Foo\",\n    \"ok\": \"Fine\"\n}\n",
        );
        let issues = lint(&file, "|", &LINT_RULES, &HardcodedWords::default());
        let found: Vec<(Rule, String, usize)> = issues
            .iter()
            .map(|i| (i.rule(), i.message(), line(i)))
            .collect();
        assert_eq!(
            found,
            [
                (Rule::KeyEqualsValue, "greeting".to_string(), 2),
                (Rule::KeyCharset, "foo bar".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_lint_selected_rules_only() {
        let file = file(r#"{"greeting": "greeting", "foo bar": "Foo"}"#);
        let issues = lint(&file, "|", &[Rule::KeyCharset], &HardcodedWords::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), Rule::KeyCharset);
    }

    #[test]
    fn test_clean_file_has_no_issues() {
        let file = file(r#"{"room": {"title": "Room"}, "files": {"one": "A file", "other": "Files"}}"#);
        assert!(lint(&file, "|", &LINT_RULES, &HardcodedWords::default()).is_empty());
    }
}
