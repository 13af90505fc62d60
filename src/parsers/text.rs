use crate::models::{ContentBlock, MessageContent};

/// Extract the user-visible text of a message
///
/// A plain string is returned trimmed. For a block sequence, the text of every
/// `text` block is joined with a single space and the result trimmed; all other
/// block kinds are ignored. Any other content shape yields an empty string.
pub fn extract_text_from_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.trim().to_string(),
        MessageContent::Blocks(blocks) => extract_text_from_blocks(blocks),
        MessageContent::Other(_) => String::new(),
    }
}

/// Block-sequence form of [`extract_text_from_content`]
pub fn extract_text_from_blocks(blocks: &[ContentBlock]) -> String {
    let text_parts: Vec<&str> = blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Thinking { .. }
            | ContentBlock::ToolCall { .. }
            | ContentBlock::Image { .. }
            | ContentBlock::Unknown { .. } => None,
        })
        .collect();

    text_parts.join(" ").trim().to_string()
}
