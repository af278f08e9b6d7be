use serde_json::{Value, json};

pub struct Prompt {
    pub name: &'static str,
    pub description: &'static str,
    lines: &'static [&'static str],
}

impl Prompt {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub const READ_AND_NAVIGATE: Prompt = Prompt {
    name: "read-and-navigate",
    description: "Guide for reading document content and navigating the structure",
    lines: &[
        "You are a Google Docs content assistant.",
        "",
        "Reading documents:",
        "1. **Get document** - gdoc_get returns full content structure with indices",
        "2. **Body content** - document.body.content contains paragraphs, tables, sections",
        "3. **Text** - paragraph.elements[].textRun.content has the actual text",
        "4. **Headers/Footers** - document.headers/footers keyed by ID",
        "5. **Named ranges** - document.namedRanges for bookmarked sections",
        "",
        "Index system:",
        "- Every character has an index position (0-based)",
        "- Body content starts at index 1",
        "- Use gdoc_get to find exact indices before editing",
        "- Indices change after insertions/deletions",
        "",
        "Tips:",
        "- Always gdoc_get first to get current indices",
        "- When making multiple edits, work from end to start (higher indices first)",
        "- Use segment_id to target headers/footers instead of body",
    ],
};

pub const WRITE_AND_FORMAT: Prompt = Prompt {
    name: "write-and-format",
    description: "Guide for writing content, formatting text, and managing document structure",
    lines: &[
        "You are a Google Docs formatting assistant.",
        "",
        "Writing content:",
        "1. **Insert text** - gdoc_insert_text at a specific index",
        "2. **Delete content** - gdoc_delete_content with start/end indices",
        "3. **Replace text** - gdoc_replace_all_text for find & replace",
        "4. **Insert image** - gdoc_insert_inline_image with a public URL",
        "5. **Page breaks** - gdoc_insert_page_break",
        "",
        "Formatting:",
        "1. **Text style** - gdoc_update_text_style: bold, italic, font, colors, links",
        "2. **Paragraph style** - gdoc_update_paragraph_style: alignment, spacing, headings",
        "3. **Lists** - gdoc_create_bullets / gdoc_delete_bullets",
        "",
        "Document structure:",
        "1. **Tables** - gdoc_insert_table, then add/delete rows and columns",
        "2. **Headers/Footers** - gdoc_create_header/footer, then insert text with segment_id",
        "3. **Sections** - gdoc_insert_section_break for multi-section layouts",
        "4. **Named ranges** - gdoc_create_named_range to bookmark content",
        "",
        "Important: When editing, process changes from END to START of document.",
        "This prevents index shifts from invalidating subsequent operations.",
    ],
};

pub const PROMPTS: [&Prompt; 2] = [&READ_AND_NAVIGATE, &WRITE_AND_FORMAT];

pub fn prompt_definitions() -> Vec<Value> {
    PROMPTS
        .iter()
        .map(|prompt| {
            json!({
                "name": prompt.name,
                "description": prompt.description,
                "arguments": []
            })
        })
        .collect()
}

/// `prompts/get` result for a known prompt name.
pub fn get_prompt(name: &str) -> Option<Value> {
    let prompt = PROMPTS.iter().find(|prompt| prompt.name == name)?;
    Some(json!({
        "description": prompt.description,
        "messages": [{
            "role": "user",
            "content": {"type": "text", "text": prompt.text()}
        }]
    }))
}
