//! Destination keys for generated segments.

/// Split a file name into stem and extension. Names without a dot, with a
/// leading dot only (`.hidden`) or a trailing dot have no extension.
pub fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    let pos = file_name.rfind('.')?;
    if pos == 0 || pos + 1 == file_name.len() {
        return None;
    }
    Some((&file_name[..pos], &file_name[pos + 1..]))
}

/// Key for segment `index` of `source_key`: `dir/stem_part{index}.ext`.
///
/// Only the final path component is touched, so extension-like text elsewhere in
/// the key survives. Keys whose file name has no extension get the suffix
/// appended.
pub fn segment_key(source_key: &str, index: u32) -> String {
    let (dir, name) = match source_key.rfind('/') {
        Some(pos) => source_key.split_at(pos + 1),
        None => ("", source_key),
    };

    match split_extension(name) {
        Some((stem, ext)) => format!("{}{}_part{}.{}", dir, stem, index, ext),
        None => format!("{}_part{}", source_key, index),
    }
}
