use crate::application::ports::util::SlugGenerator;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Lower-case `input`, keep ASCII letters and digits, and turn every run of
/// whitespace or hyphens into a single `-`. Anything else is dropped without
/// leaving a separator, so `"Más"` becomes `"ms"`. The result never starts or
/// ends with a hyphen and never contains two in a row.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}
