use scraper::{ElementRef, Selector};

/// Absence of an element is an explicit outcome, not a panic: callers decide
/// per call whether a missing anchor is fatal for the run or merely skips a
/// row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("no element matching `{selector}`")]
    NotFound { selector: String },
    #[error("invalid selector `{selector}`")]
    BadSelector { selector: String },
}

/// First descendant of `scope` matching a CSS selector.
pub fn find_tag<'a>(scope: ElementRef<'a>, selector: &str) -> Result<ElementRef<'a>, LocateError> {
    let parsed = parse_selector(selector)?;
    scope
        .select(&parsed)
        .next()
        .ok_or_else(|| LocateError::NotFound {
            selector: selector.to_string(),
        })
}

/// All descendants of `scope` matching a CSS selector. An empty result is not
/// an error; only a malformed selector is.
pub fn select_all<'a>(
    scope: ElementRef<'a>,
    selector: &str,
) -> Result<Vec<ElementRef<'a>>, LocateError> {
    let parsed = parse_selector(selector)?;
    Ok(scope.select(&parsed).collect())
}

fn parse_selector(selector: &str) -> Result<Selector, LocateError> {
    Selector::parse(selector).map_err(|_| LocateError::BadSelector {
        selector: selector.to_string(),
    })
}

/// Concatenated text content of an element, as rendered.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
