//! Domain-specific assertion macros for folio harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! piece of state that was wrong.

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Assert the pages and ellipsis flag of a `PaginationWindow`.
///
/// ```rust
/// assert_window!(PaginationWindow::compute(5, 10), [3, 4, 5, 6, 7], ellipsis);
/// assert_window!(PaginationWindow::compute(9, 10), [6, 7, 8, 9, 10], no_ellipsis);
/// ```
#[macro_export]
macro_rules! assert_window {
    ($window:expr, [$($page:expr),* $(,)?], ellipsis) => {
        $crate::assert_window!(@check $window, vec![$($page),*], true)
    };
    ($window:expr, [$($page:expr),* $(,)?], no_ellipsis) => {
        $crate::assert_window!(@check $window, vec![$($page),*], false)
    };
    (@check $window:expr, $pages:expr, $show_last:expr) => {{
        let window: folio_core::PaginationWindow = $window;
        let expected: Vec<u32> = $pages;
        pretty_assertions::assert_eq!(
            window.pages, expected,
            "window pages for current={} total={}", window.current, window.total
        );
        pretty_assertions::assert_eq!(
            window.show_last, $show_last,
            "ellipsis flag for current={} total={}", window.current, window.total
        );
    }};
}

// ---------------------------------------------------------------------------
// Fetch state
// ---------------------------------------------------------------------------

/// Assert a `FetchState` is `Success` with exactly these article titles, in
/// order.
#[macro_export]
macro_rules! assert_titles {
    ($state:expr, [$($title:expr),* $(,)?]) => {{
        let state: &folio_core::FetchState = $state;
        match state {
            folio_core::FetchState::Success { articles, .. } => {
                let actual: Vec<&str> = articles.iter().map(|a| a.title()).collect();
                let expected: Vec<&str> = vec![$($title),*];
                pretty_assertions::assert_eq!(actual, expected, "article titles");
            }
            other => panic!("assert_titles! failed: expected Success, got {:?}", other),
        }
    }};
}

/// Assert a `FetchState` is `Error` carrying exactly `message`.
#[macro_export]
macro_rules! assert_error_message {
    ($state:expr, $message:expr) => {{
        let state: &folio_core::FetchState = $state;
        match state {
            folio_core::FetchState::Error { message } => {
                pretty_assertions::assert_eq!(message.as_str(), $message);
            }
            other => panic!("assert_error_message! failed: expected Error, got {:?}", other),
        }
    }};
}
