//! Shared utility functions.

/// Turn a file stem into a page title.
///
/// A leading `YYYY-MM-DD-` post date is dropped, then words split on `-`
/// and `_` are capitalized.
/// "2021-03-04-getting-started" -> "Getting Started"
pub fn title_from_stem(stem: &str) -> String {
    strip_date_prefix(stem)
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_date_prefix(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    let is_date = bytes.len() > 11
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
        && bytes[10] == b'-';
    if is_date { &stem[11..] } else { stem }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_stem() {
        assert_eq!(title_from_stem("getting-started"), "Getting Started");
        assert_eq!(title_from_stem("installation"), "Installation");
        assert_eq!(title_from_stem("api_reference"), "Api Reference");
        assert_eq!(title_from_stem("README"), "README");
    }

    #[test]
    fn test_post_dates_are_dropped() {
        assert_eq!(title_from_stem("2021-03-04-side-nav"), "Side Nav");
        assert_eq!(title_from_stem("2021-03-04"), "2021 03 04");
        assert_eq!(title_from_stem("2021-3-4-short"), "2021 3 4 Short");
    }
}
