use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use super::decode::TransportError;
use crate::domain::OutboundMessage;

/// Form field carrying the queue document.
pub const XML_FIELD: &str = "xml";

const ROOT: &str = "queue";
const ENTRY: &str = "sms";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Messages collected for one `xml_queue` submission.
///
/// Entries are kept as structured values and serialized only on submission.
pub struct MessageQueue {
    entries: Vec<OutboundMessage>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: OutboundMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[OutboundMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize as `<queue><sms>…</sms>…</queue>` with sanitized field values.
    pub fn to_document(&self) -> Result<String, TransportError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer
            .create_element(ROOT)
            .write_inner_content(|writer| {
                for entry in &self.entries {
                    writer.create_element(ENTRY).write_inner_content(|writer| {
                        for (name, value) in entry.fields() {
                            writer
                                .create_element(name)
                                .write_text_content(BytesText::from_escaped(encode_value(
                                    &value,
                                )))?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

/// Drop C0 control characters other than tab, LF and CR, then escape XML
/// special characters including both quote kinds.
pub fn encode_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\t' | '\n' | '\r' => encoded.push(ch),
            '\u{0}'..='\u{1f}' => {}
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#039;"),
            _ => encoded.push(ch),
        }
    }
    encoded
}
