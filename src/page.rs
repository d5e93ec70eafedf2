//! Lays out the sequence of output pages: one [`Page`] per phrase, each
//! carrying its own file name and the links to its neighbours.

use crate::slug::{slugify, truncate};

/// An output HTML file, prior to templating.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<'a> {
    /// The 1-based position of the phrase.
    pub index: usize,

    /// The phrase itself, verbatim.
    pub phrase: &'a str,

    /// The file name (not path) the page is written to.
    pub file_name: String,

    /// The previous page's file name, or the index link for the first page.
    pub prev: String,

    /// The next page's file name, or the index link for the last page.
    pub next: String,
}

/// Builds the file name for the phrase at 1-based position `index`:
/// `{index}-{slug}.html`, with the slug cut to `max_slug_length` characters.
pub fn file_name(index: usize, phrase: &str, max_slug_length: usize) -> String {
    format!("{}-{}.html", index, truncate(&slugify(phrase), max_slug_length))
}

/// Creates the [`Page`]s for `phrases`. File names are computed once up front
/// and the neighbour links are then looked up by position; the first page's
/// `prev` and the last page's `next` fall back to `index_link`.
pub fn pages<'a, S: AsRef<str>>(
    phrases: &'a [S],
    index_link: &str,
    max_slug_length: usize,
) -> Vec<Page<'a>> {
    let file_names: Vec<String> = phrases
        .iter()
        .enumerate()
        .map(|(i, phrase)| file_name(i + 1, phrase.as_ref(), max_slug_length))
        .collect();

    phrases
        .iter()
        .enumerate()
        .map(|(i, phrase)| Page {
            index: i + 1,
            phrase: phrase.as_ref(),
            file_name: file_names[i].clone(),
            prev: match i < 1 {
                true => index_link.to_owned(),
                false => file_names[i - 1].clone(),
            },
            next: match i + 1 >= phrases.len() {
                true => index_link.to_owned(),
                false => file_names[i + 1].clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    const INDEX: &str = "../index.html";

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(1, "Have you ever lied?", 60), "1-have-you-ever-lied.html");
        assert_eq!(file_name(7, "¿?", 60), "7-.html");
    }

    #[test]
    fn test_file_name_truncates_slug() {
        let phrase = "word ".repeat(30);
        let name = file_name(3, &phrase, 60);
        let slug = name
            .strip_prefix("3-")
            .and_then(|s| s.strip_suffix(".html"))
            .unwrap();
        assert_eq!(slug.len(), 60);
        assert!(slugify(&phrase).starts_with(slug));
    }

    #[test]
    fn test_pages_two_phrases() {
        let phrases = ["Have you ever lied?", "¿Fuiste infiel?"];
        let pages = pages(&phrases, INDEX, 60);
        assert_eq!(
            pages,
            vec![
                Page {
                    index: 1,
                    phrase: "Have you ever lied?",
                    file_name: "1-have-you-ever-lied.html".to_owned(),
                    prev: INDEX.to_owned(),
                    next: "2-fuiste-infiel.html".to_owned(),
                },
                Page {
                    index: 2,
                    phrase: "¿Fuiste infiel?",
                    file_name: "2-fuiste-infiel.html".to_owned(),
                    prev: "1-have-you-ever-lied.html".to_owned(),
                    next: INDEX.to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_pages_single_phrase_links_to_index_both_ways() {
        let pages = pages(&["solo"], INDEX, 60);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].prev, INDEX);
        assert_eq!(pages[0].next, INDEX);
    }

    #[test]
    fn test_pages_interior_links_match_neighbour_file_names() {
        let phrases: Vec<String> = (0..6).map(|i| format!("Phrase número {}", i)).collect();
        let pages = pages(phrases.as_slice(), INDEX, 60);
        for i in 1..phrases.len() - 1 {
            assert_eq!(pages[i].prev, file_name(i, &phrases[i - 1], 60));
            assert_eq!(pages[i].next, file_name(i + 2, &phrases[i + 1], 60));
        }
        let indices: Vec<usize> = pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn test_pages_links_use_truncated_slugs() {
        let long = "a".repeat(100);
        let phrases = ["short", long.as_str(), "tail"];
        let pages = pages(&phrases, INDEX, 60);
        let expected = format!("2-{}.html", "a".repeat(60));
        assert_eq!(pages[1].file_name, expected);
        assert_eq!(pages[0].next, expected);
        assert_eq!(pages[2].prev, expected);
    }

    #[test]
    fn test_pages_empty() {
        let phrases: [&str; 0] = [];
        assert!(pages(&phrases, INDEX, 60).is_empty());
    }
}
