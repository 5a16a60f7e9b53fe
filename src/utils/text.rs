use unicode_segmentation::UnicodeSegmentation;

/// Display width of `s`, counted in grapheme clusters
#[inline]
pub fn width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Left-align `s` within `width` columns
pub fn pad_right(s: &str, width: usize) -> String {
    let w = self::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}
