//! Element lookup helpers over a parsed page.
//!
//! Every lookup that the templates rely on fails with
//! [`CrawlError::StructuralParse`] naming the selector, so a layout change
//! surfaces as a clear error instead of an empty field.

use scraper::{ElementRef, Selector};

use crate::errors::{CrawlError, Result};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| CrawlError::InvalidSelector(css.to_string()))
}

/// First descendant of `scope` matching `css`.
pub(crate) fn find<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let selector = selector(css)?;
    scope
        .select(&selector)
        .next()
        .ok_or_else(|| CrawlError::StructuralParse(css.to_string()))
}

/// Every descendant of `scope` matching `css`, in document order. May be empty.
pub(crate) fn find_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// Element at `index` of a `find_all` result.
pub(crate) fn nth<'a>(elements: &[ElementRef<'a>], index: usize, css: &str) -> Result<ElementRef<'a>> {
    elements
        .get(index)
        .copied()
        .ok_or_else(|| CrawlError::StructuralParse(format!("{} (#{})", css, index + 1)))
}

pub(crate) fn last<'a>(elements: &[ElementRef<'a>], css: &str) -> Result<ElementRef<'a>> {
    elements
        .last()
        .copied()
        .ok_or_else(|| CrawlError::StructuralParse(css.to_string()))
}

/// All descendant text, untouched.
pub(crate) fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// All descendant text with surrounding whitespace removed.
pub(crate) fn text(element: ElementRef<'_>) -> String {
    raw_text(element).trim().to_string()
}
