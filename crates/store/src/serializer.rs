//! Document serialization

use crate::{DocumentFile, Result};
use doc_model::StructuredContent;

/// Serialize content to the bytes of a `.dvk` file
pub fn serialize_document(content: &StructuredContent) -> Result<Vec<u8>> {
    let file = DocumentFile::new(content.clone());
    let json = serde_json::to_vec_pretty(&file)?;
    Ok(json)
}

/// Deserialize content from the text of a `.dvk` file
///
/// Files written by the web editor hold a bare delta without a header;
/// those are accepted as well.
pub fn deserialize_document(text: &str) -> Result<StructuredContent> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    if value.get("header").is_none() {
        let content: StructuredContent = serde_json::from_value(value)?;
        content.validate()?;
        return Ok(content);
    }

    let file: DocumentFile = serde_json::from_value(value)?;
    file.header.validate()?;
    file.content.validate()?;

    Ok(file.content)
}
