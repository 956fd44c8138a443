/// Join the present class names with single spaces.
///
/// `None` and empty entries are skipped, so conditional classes can be
/// written inline: `class_names([Some("card"), active.then_some("is-active")])`.
pub fn class_names<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
