/// Picks the section the viewport is currently in.
///
/// `offsets` are in page order; `None` marks a section whose region is not
/// mounted. Sections are scanned from last to first and the first one whose
/// top is at or above `scroll_y + navbar_offset` wins.
pub fn detect_section<K, I>(offsets: I, scroll_y: f32, navbar_offset: f32) -> Option<K>
where
    I: IntoIterator<Item = (K, Option<f32>)>,
    I::IntoIter: DoubleEndedIterator,
{
    let probe = scroll_y + navbar_offset;

    offsets
        .into_iter()
        .rev()
        .find_map(|(key, top)| match top {
            Some(top) if top <= probe => Some(key),
            _ => None,
        })
}
