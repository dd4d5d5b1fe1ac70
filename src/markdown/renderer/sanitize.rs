use ammonia::Builder;

/// Sanitize rendered page HTML against ammonia's allow-list.
///
/// Heading anchors rely on `id`, math spans on `data-` attributes, so both
/// survive on any allowed tag together with `class`.
pub fn sanitize_html(html: &str) -> String {
    Builder::default()
        .add_generic_attributes(&["id", "class"])
        .add_generic_attribute_prefixes(&["data-"])
        .clean(html)
        .to_string()
}
