//! Literal placeholder substitution. A template is plain text; each of the
//! four tokens below is replaced wherever it appears, and nothing else is
//! interpreted.

use crate::page::Page;

pub const TITLE: &str = "{{TITULO_FRASE}}";
pub const PHRASE: &str = "{{FRASE_CONTENIDO}}";
pub const PREV_LINK: &str = "{{LINK_ANTERIOR}}";
pub const NEXT_LINK: &str = "{{LINK_SIGUIENTE}}";

/// A loaded template. The source is kept verbatim and rendered once per page.
#[derive(Clone, Debug)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: String) -> Self {
        Template { source }
    }

    /// Renders `page`. Tokens are replaced in order (title, phrase, previous
    /// link, next link); the phrase is inserted unescaped.
    pub fn render(&self, page: &Page, title_prefix: &str) -> String {
        self.source
            .replace(TITLE, &format!("{}{}", title_prefix, page.phrase))
            .replace(PHRASE, page.phrase)
            .replace(PREV_LINK, &page.prev)
            .replace(NEXT_LINK, &page.next)
    }
}
