use std::path::Path;
use liquid::{Parser, Template};
use log::debug;
use serde::Serialize;

use crate::markdown::RenderedPage;
use crate::pages::{page_url, Page};
use crate::utils::error::{WikiError, WikiResult};
use crate::utils::fs;

const VIEW_TEMPLATE: &str = include_str!("../../templates/view.html");
const EDIT_TEMPLATE: &str = include_str!("../../templates/edit.html");
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Entry of the page index
#[derive(Debug, Serialize)]
struct IndexEntry<'a> {
    title: &'a str,
    url: String,
}

/// Page layouts rendered with Liquid
pub struct LayoutRenderer {
    view: Template,
    edit: Template,
    index: Template,
}

impl LayoutRenderer {
    /// Compile the layouts, preferring `<templates_dir>/<name>.html` over
    /// the built-in ones
    pub fn new(templates_dir: Option<&Path>) -> WikiResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| WikiError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        Ok(LayoutRenderer {
            view: load_template(&parser, templates_dir, "view", VIEW_TEMPLATE)?,
            edit: load_template(&parser, templates_dir, "edit", EDIT_TEMPLATE)?,
            index: load_template(&parser, templates_dir, "index", INDEX_TEMPLATE)?,
        })
    }

    /// Render a page for reading
    pub fn render_view(&self, page: &Page, rendered: &RenderedPage) -> WikiResult<String> {
        let globals = liquid::object!({
            "page": {
                "title": page.title.as_str(),
                "content": rendered.html.as_str(),
                "toc": rendered.toc.as_str(),
                "edit_url": page_url("edit", &page.title),
            }
        });

        render(&self.view, "view", &globals)
    }

    /// Render the edit form of a page
    pub fn render_edit(&self, page: &Page) -> WikiResult<String> {
        let globals = liquid::object!({
            "page": {
                "title": page.title.as_str(),
                "body": page.body.as_str(),
                "save_url": page_url("save", &page.title),
                "view_url": page_url("view", &page.title),
            }
        });

        render(&self.edit, "edit", &globals)
    }

    /// Render the list of all pages
    pub fn render_index(&self, titles: &[String]) -> WikiResult<String> {
        let entries: Vec<IndexEntry> = titles
            .iter()
            .map(|title| IndexEntry { title, url: page_url("view", title) })
            .collect();

        let globals = liquid::object!({ "pages": entries });

        render(&self.index, "index", &globals)
    }
}

/// Parse a layout, from the templates directory when it has one
fn load_template(
    parser: &Parser,
    templates_dir: Option<&Path>,
    name: &str,
    builtin: &str,
) -> WikiResult<Template> {
    let custom = match templates_dir {
        Some(dir) => fs::read_optional(dir.join(format!("{}.html", name)))?,
        None => None,
    };

    if custom.is_some() {
        debug!("Using custom {} layout", name);
    }

    parser
        .parse(custom.as_deref().unwrap_or(builtin))
        .map_err(|e| WikiError::Template(format!("Failed to parse layout {}: {}", name, e)))
}

fn render(template: &Template, name: &str, globals: &liquid::Object) -> WikiResult<String> {
    template
        .render(globals)
        .map_err(|e| WikiError::Template(format!("Failed to render layout {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(html: &str, toc: &str) -> RenderedPage {
        RenderedPage { html: html.to_string(), toc: toc.to_string() }
    }

    #[test]
    fn test_view_layout() {
        let layouts = LayoutRenderer::new(None).unwrap();
        let page = Page::new("Front<Page>", "ignored");

        let html = layouts
            .render_view(&page, &rendered("<p>body</p>", "<ol>\n<li>x</li>\n</ol>\n"))
            .unwrap();

        assert!(html.contains("<title>Front&lt;Page&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<aside class=\"toc\">"));
        assert!(html.contains("href=\"/edit/Front%3CPage%3E\""));
    }

    #[test]
    fn test_view_without_toc() {
        let layouts = LayoutRenderer::new(None).unwrap();
        let html = layouts.render_view(&Page::empty("Plain"), &rendered("<p>x</p>", "")).unwrap();
        assert!(!html.contains("<aside"));
    }

    #[test]
    fn test_edit_layout_escapes_body() {
        let layouts = LayoutRenderer::new(None).unwrap();
        let html = layouts.render_edit(&Page::new("notes/a", "</textarea><b>")).unwrap();

        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;"));
        assert!(html.contains("action=\"/save/notes/a\""));
    }

    #[test]
    fn test_index_layout() {
        let layouts = LayoutRenderer::new(None).unwrap();

        let html = layouts.render_index(&["FrontPage".to_string(), "notes/rust".to_string()]).unwrap();
        assert!(html.contains("<a href=\"/view/FrontPage\">FrontPage</a>"));
        assert!(html.contains("<a href=\"/view/notes/rust\">notes/rust</a>"));

        let empty = layouts.render_index(&[]).unwrap();
        assert!(empty.contains("No pages yet."));
    }

    #[test]
    fn test_custom_templates_override_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write_file(dir.path().join("view.html"), "custom {{ page.title }}").unwrap();

        let layouts = LayoutRenderer::new(Some(dir.path())).unwrap();
        let html = layouts.render_view(&Page::empty("Home"), &rendered("", "")).unwrap();
        assert_eq!(html, "custom Home");

        // layouts missing from the directory fall back to the built-in ones
        assert!(layouts.render_index(&[]).unwrap().contains("All pages"));
    }

    #[test]
    fn test_broken_custom_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::write_file(dir.path().join("edit.html"), "{% if %}").unwrap();

        match LayoutRenderer::new(Some(dir.path())) {
            Err(WikiError::Template(msg)) => assert!(msg.contains("edit")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("broken layout was accepted"),
        }
    }
}
