use pulldown_cmark::{CowStr, Event, Options, Parser, html};

/// Service for rendering entry Markdown to HTML fragments
pub struct MarkdownService;

impl MarkdownService {
    pub fn new() -> Self {
        Self
    }

    /// Render Markdown to an HTML fragment. Pure and deterministic; raw HTML
    /// embedded in the source is downgraded to literal text so stored entries
    /// cannot inject markup into the page.
    pub fn render(&self, content: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(content, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => {
                Event::Text(CowStr::from(raw.into_string()))
            }
            other => other,
        });

        let mut output = String::new();
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}
