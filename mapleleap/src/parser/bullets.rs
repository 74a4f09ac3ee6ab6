//! Markdown bullet-list extraction shared by the deep-dive subsections.

/// Returns the bullet items among `lines`, in order.
///
/// A bullet is a line whose trimmed form starts with `*` or `-`; that one marker and the
/// whitespace after it are removed. Non-bullet lines are skipped.
pub(crate) fn bullet_items<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('*')
                .or_else(|| line.strip_prefix('-'))
                .map(|rest| rest.trim().to_string())
        })
        .collect()
}
