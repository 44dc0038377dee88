//! Main text extraction

use super::tree::PageTree;
use super::ExtractError;
use crate::text::collapse_whitespace;

/// Elements whose content never counts as article text
pub const NOISE_TAGS: &[&str] = &[
    "script", "style", "head", "nav", "footer", "iframe", "img", "meta", "sidebar", "header",
    "video",
];

/// Visible body text with noise elements stripped and whitespace collapsed.
///
/// Errors if the tree has no `body` or cannot be queried.
pub fn extract_main_content<T: PageTree + ?Sized>(tree: &T) -> Result<String, ExtractError> {
    let text = tree.visible_text("body", NOISE_TAGS)?;
    Ok(collapse_whitespace(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::HtmlTree;
    use std::collections::HashMap;

    #[test]
    fn test_strips_noise_and_collapses_whitespace() {
        let tree = HtmlTree::parse(
            r#"<html><head><title>Ignored</title></head><body>
                <header>Site header</header>
                <nav><a href="/">Home</a></nav>
                <article>
                    <h1>Big   story</h1>
                    <p>First
                       paragraph.</p>
                    <script>track()</script><style>p{}</style>
                    <iframe src="ad"></iframe>
                    <video>fallback</video>
                    <p>Second paragraph.</p>
                </article>
                <sidebar>Related links</sidebar>
                <footer>Copyright</footer>
            </body></html>"#,
        );

        assert_eq!(
            extract_main_content(&tree).unwrap(),
            "Big story First paragraph. Second paragraph."
        );
    }

    #[test]
    fn test_empty_body() {
        let tree = HtmlTree::parse("<html><body>   </body></html>");
        assert_eq!(extract_main_content(&tree).unwrap(), "");
    }

    /// A tree with no body at all, as a broken document would produce
    struct Headless;

    impl PageTree for Headless {
        fn first_attr(&self, _: &str, _: &str) -> Result<Option<String>, ExtractError> {
            Ok(None)
        }
        fn text_of(&self, _: &str) -> Result<String, ExtractError> {
            Ok(String::new())
        }
        fn attributes_of(&self, _: &str) -> Result<Vec<HashMap<String, String>>, ExtractError> {
            Ok(vec![])
        }
        fn visible_text(&self, root: &str, _: &[&str]) -> Result<String, ExtractError> {
            Err(ExtractError::MissingRoot(root.to_string()))
        }
    }

    #[test]
    fn test_malformed_tree_propagates() {
        assert!(matches!(
            extract_main_content(&Headless),
            Err(ExtractError::MissingRoot(root)) if root == "body"
        ));
    }
}
