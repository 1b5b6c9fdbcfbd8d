use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::collections::BTreeSet;

/// Every string shown with `Tj` on page 1, decoded as WinAnsi (bullets become '•').
pub fn shown_text(doc: &LopdfDocument) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&1).copied() else {
        return Vec::new();
    };
    let Ok(content) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&content) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok())
        .map(|bytes| {
            bytes
                .iter()
                .map(|&b| if b == 0x95 { '•' } else { b as char })
                .collect()
        })
        .collect()
}

/// All shown text joined with spaces, for substring checks across wrapped lines.
pub fn joined_text(doc: &LopdfDocument) -> String {
    shown_text(doc).join(" ")
}

/// BaseFont names referenced from the first page's resources.
pub fn font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    let Some(page_id) = doc.get_pages().get(&1).copied() else {
        return fonts;
    };
    let resources = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"Resources"))
        .and_then(|r| r.as_reference())
        .and_then(|id| doc.get_dictionary(id));
    let Ok(font_dict) = resources.and_then(|r| r.get(b"Font")).and_then(|f| f.as_dict()) else {
        return fonts;
    };
    for (_, font) in font_dict.iter() {
        let font = match font.as_reference() {
            Ok(id) => doc.get_dictionary(id).ok(),
            Err(_) => font.as_dict().ok(),
        };
        if let Some(name) = font
            .and_then(|f| f.get(b"BaseFont").ok())
            .and_then(|n| n.as_name().ok())
        {
            fonts.insert(String::from_utf8_lossy(name).to_string());
        }
    }
    fonts
}

/// Number of image XObjects drawn on page 1.
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .filter(|s| {
            s.dict
                .get(b"Subtype")
                .and_then(|v| v.as_name())
                .is_ok_and(|n| n == b"Image")
        })
        .count()
}
