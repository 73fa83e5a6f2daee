use roxmltree::Document;

use super::model::RawRecord;

/// Lazily yield the sleep records directly under the document root, in
/// document order.
///
/// An element is a candidate when its tag is `Record`; it is kept when its
/// `type` attribute ends with `type_suffix`. Everything else is dropped
/// silently – that is filtering, not a failure.
pub fn sleep_records<'a>(
    doc: &'a Document<'a>,
    type_suffix: &'a str,
) -> impl Iterator<Item = RawRecord<'a>> + 'a {
    doc.root_element()
        .children()
        .filter(|node| node.is_element() && node.has_tag_name("Record"))
        .map(RawRecord::from_node)
        .filter(move |raw| is_sleep_type(raw.record_type, type_suffix))
}

/// Whether a record type names a sleep-analysis sample.
pub fn is_sleep_type(record_type: &str, type_suffix: &str) -> bool {
    record_type.ends_with(type_suffix)
}
