use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected XML structure: {0}")]
    Structure(#[from] quick_xml::DeError),

    #[error("failed to write XML: {0}")]
    Write(#[from] std::io::Error),

    #[error("XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("document has no root element")]
    MissingRoot,

    #[error("content outside the root element")]
    ContentOutsideRoot,

    #[error("document ends inside an element")]
    Unclosed,

    #[error("response is not an XML document")]
    NotXml,

    #[error("inbox item has an invalid time: {0}")]
    InvalidTime(#[from] crate::domain::ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A response body after decoding.
pub enum Decoded {
    /// Well-formed document, re-serialized.
    Xml(String),
    /// Anything else, verbatim.
    Raw(String),
}

impl Decoded {
    pub fn into_string(self) -> String {
        match self {
            Self::Xml(body) | Self::Raw(body) => body,
        }
    }

    /// Borrow the document, failing for a raw body.
    pub fn xml(&self) -> Result<&str, TransportError> {
        match self {
            Self::Xml(body) => Ok(body),
            Self::Raw(_) => Err(TransportError::NotXml),
        }
    }
}

/// Decode a response body: a well-formed document becomes [`Decoded::Xml`],
/// everything else is kept as [`Decoded::Raw`].
pub fn decode(body: &str) -> Decoded {
    match canonicalize(body) {
        Ok(xml) => Decoded::Xml(xml),
        Err(err) => {
            tracing::debug!(error = %err, "response body is not XML, keeping it raw");
            Decoded::Raw(body.to_owned())
        }
    }
}

fn canonicalize(body: &str) -> Result<String, TransportError> {
    let mut reader = Reader::from_str(body);
    let mut writer = Writer::new(Vec::new());
    let mut depth = 0usize;
    let mut has_root = false;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(_) => {
                if depth == 0 {
                    if has_root {
                        return Err(TransportError::ContentOutsideRoot);
                    }
                    has_root = true;
                }
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) if depth == 0 => {
                if has_root {
                    return Err(TransportError::ContentOutsideRoot);
                }
                has_root = true;
            }
            Event::Text(text) if depth == 0 => {
                if text.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                return Err(TransportError::ContentOutsideRoot);
            }
            Event::CData(_) if depth == 0 => return Err(TransportError::ContentOutsideRoot),
            _ => {}
        }
        writer.write_event(event)?;
    }

    if !has_root {
        return Err(TransportError::MissingRoot);
    }
    if depth != 0 {
        return Err(TransportError::Unclosed);
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    err: Option<i32>,
}

/// Read the `err` field of a document; `None` when the root has no `err` child.
pub fn error_code(xml: &str) -> Result<Option<ErrorCode>, TransportError> {
    let envelope: Envelope = quick_xml::de::from_str(xml)?;
    Ok(envelope.err.map(ErrorCode::new))
}

/// Deserialize a document into an action-specific response struct.
pub fn parse<T: DeserializeOwned>(xml: &str) -> Result<T, TransportError> {
    Ok(quick_xml::de::from_str(xml)?)
}
