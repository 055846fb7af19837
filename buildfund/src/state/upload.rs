use buildfund_core::FileHandle;

/// Split typed or pasted text into file handles.
///
/// Items are separated by newlines or commas. Each item is trimmed and one
/// pair of matching surrounding quotes is removed. Empty items are dropped.
pub fn parse_file_list(text: &str) -> Vec<FileHandle> {
    text.split(['\n', ','])
        .map(str::trim)
        .map(strip_quotes)
        .filter(|item| !item.is_empty())
        .map(FileHandle::new)
        .collect()
}

fn strip_quotes(item: &str) -> &str {
    for quote in ['"', '\''] {
        if item.len() >= 2 && item.starts_with(quote) && item.ends_with(quote) {
            return &item[1..item.len() - 1];
        }
    }
    item
}
