//! Placeholder substitution.

/// Replace every occurrence of each placeholder key with its value.
///
/// Keys are applied in the given order, each over the output of the previous
/// one. Overlapping keys (one a substring of another) are the caller's
/// concern. Empty keys are skipped.
///
/// # Examples
/// ```
/// use table_translator::substitute;
///
/// assert_eq!(substitute("Welcome back, :user", &[(":user", "Ada")]), "Welcome back, Ada");
/// ```
#[must_use]
pub fn substitute(text: &str, values: &[(&str, &str)]) -> String {
    values.iter().filter(|(key, _)| !key.is_empty()).fold(
        text.to_string(),
        |acc, &(key, value)| {
            if acc.contains(key) { acc.replace(key, value) } else { acc }
        },
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::single("Welcome back, :user", &[(":user", "Ada")], "Welcome back, Ada")]
    #[case::all_occurrences(":n + :n", &[(":n", "1")], "1 + 1")]
    #[case::multiple_keys(
        ":greeting, :name!",
        &[(":greeting", "Hello"), (":name", "Grace")],
        "Hello, Grace!"
    )]
    #[case::no_match("Hi there", &[(":name", "Ada")], "Hi there")]
    #[case::empty_values("Hi :name", &[], "Hi :name")]
    #[case::empty_key("Hi :name", &[("", "x")], "Hi :name")]
    #[case::empty_value("Hi :name", &[(":name", "")], "Hi ")]
    #[case::non_ascii("こんにちは、:user さん", &[(":user", "太郎")], "こんにちは、太郎 さん")]
    fn substitute_cases(
        #[case] text: &str,
        #[case] values: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        assert_eq!(substitute(text, values), expected);
    }

    /// 順番通りに適用されるため、後のキーは前の置換結果にも作用する
    #[rstest]
    fn substitute_applies_keys_in_order() {
        let result = substitute(":a", &[(":a", ":b"), (":b", "done")]);

        assert_eq!(result, "done");
    }
}
