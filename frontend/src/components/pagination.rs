//! Page-window math and the pagination control that renders it.

use yew::prelude::*;

/// Concrete page numbers shown before the window starts eliding pages.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One rendered unit of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    /// Placeholder for a run of pages that is not shown.
    Ellipsis,
}

/// Compute the markers to render for `current_page` out of `total_pages`.
///
/// Returns an empty window when `total_pages <= 1`, meaning the control
/// should not be rendered at all. Otherwise the first and last page are
/// always present, at most two ellipses appear and the window never holds
/// more than seven markers.
///
/// `current_page` is 1-based and must lie in `1..=total_pages`. This is
/// asserted in debug builds only; out-of-range input is never clamped.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    debug_assert!(
        total_pages == 0 || (1..=total_pages).contains(&current_page),
        "current page {current_page} outside 1..={total_pages}"
    );

    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageMarker::Number).collect();
    }

    if current_page <= 3 {
        vec![
            PageMarker::Number(1),
            PageMarker::Number(2),
            PageMarker::Number(3),
            PageMarker::Number(4),
            PageMarker::Ellipsis,
            PageMarker::Number(total_pages),
        ]
    } else if current_page >= total_pages - 2 {
        vec![
            PageMarker::Number(1),
            PageMarker::Ellipsis,
            PageMarker::Number(total_pages - 3),
            PageMarker::Number(total_pages - 2),
            PageMarker::Number(total_pages - 1),
            PageMarker::Number(total_pages),
        ]
    } else {
        vec![
            PageMarker::Number(1),
            PageMarker::Ellipsis,
            PageMarker::Number(current_page - 1),
            PageMarker::Number(current_page),
            PageMarker::Number(current_page + 1),
            PageMarker::Ellipsis,
            PageMarker::Number(total_pages),
        ]
    }
}

/// Targets of the previous/next controls. `None` means the control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageNav {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            prev: (current_page > 1).then(|| current_page - 1),
            next: (current_page < total_pages).then(|| current_page + 1),
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev.is_some()
    }

    pub fn next_enabled(&self) -> bool {
        self.next.is_some()
    }
}

/// Page requested by activating `marker`. Ellipses are not interactive.
pub fn marker_target(marker: PageMarker) -> Option<usize> {
    match marker {
        PageMarker::Number(page) => Some(page),
        PageMarker::Ellipsis => None,
    }
}

/// Forward an activated control's target to the page-change handler.
/// Disabled controls carry no target and emit nothing.
fn request_page(target: Option<usize>, on_page_change: &Callback<usize>) {
    if let Some(page) = target {
        on_page_change.emit(page);
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let PaginationProps { current_page, total_pages, on_page_change } = props;

    let markers = page_window(*current_page, *total_pages);
    if markers.is_empty() {
        return html! {};
    }
    let nav = PageNav::new(*current_page, *total_pages);

    let go_to = |target: Option<usize>| {
        let on_page_change = on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            request_page(target, &on_page_change);
        })
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="page-step"
                disabled={!nav.prev_enabled()}
                onclick={go_to(nav.prev)}
            >
                {"← Prev"}
            </button>
            {
                markers.into_iter().map(|marker| match marker {
                    PageMarker::Number(page) => {
                        let is_current = page == *current_page;
                        html! {
                            <button
                                class={classes!("page-number", is_current.then_some("active"))}
                                aria-current={is_current.then_some("page")}
                                onclick={go_to(marker_target(marker))}
                            >
                                {page.to_string()}
                            </button>
                        }
                    }
                    PageMarker::Ellipsis => html! {
                        <span class="page-ellipsis" aria-hidden="true">{"…"}</span>
                    },
                }).collect::<Html>()
            }
            <button
                class="page-step"
                disabled={!nav.next_enabled()}
                onclick={go_to(nav.next)}
            >
                {"Next →"}
            </button>
            <style>
                {r#"
                    .pagination {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 3rem 0 1rem;
                        flex-wrap: nowrap;
                    }
                    .pagination button {
                        min-width: 2.5rem;
                        height: 2.5rem;
                        padding: 0 0.8rem;
                        border-radius: 8px;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        background: rgba(30, 30, 30, 0.8);
                        color: #ccc;
                        font-size: 0.95rem;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .pagination button:hover:not(:disabled) {
                        border-color: rgba(30, 144, 255, 0.6);
                        color: #fff;
                    }
                    .pagination button:disabled {
                        opacity: 0.4;
                        cursor: not-allowed;
                    }
                    .pagination .page-number.active {
                        background: #1E90FF;
                        border-color: #1E90FF;
                        color: #fff;
                    }
                    .page-ellipsis {
                        color: #777;
                        padding: 0 0.25rem;
                        user-select: none;
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Number};

    #[test]
    fn no_window_for_single_or_zero_pages() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(1, 1).is_empty());
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(
            page_window(3, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
        assert_eq!(page_window(2, 2), vec![Number(1), Number(2)]);
    }

    #[test]
    fn near_start_elides_the_tail() {
        let expected = vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)];
        assert_eq!(page_window(1, 10), expected);
        assert_eq!(page_window(3, 10), expected);
    }

    #[test]
    fn near_end_elides_the_head() {
        let expected = vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)];
        assert_eq!(page_window(10, 10), expected);
        assert_eq!(page_window(8, 10), expected);
    }

    #[test]
    fn middle_shows_neighbours_between_two_ellipses() {
        assert_eq!(
            page_window(5, 10),
            vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn six_pages_switch_straight_from_start_to_end_branch() {
        assert_eq!(
            page_window(3, 6),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(6)]
        );
        assert_eq!(
            page_window(4, 6),
            vec![Number(1), Ellipsis, Number(3), Number(4), Number(5), Number(6)]
        );
    }

    #[test]
    fn window_shape_holds_for_every_valid_page() {
        for total in (MAX_VISIBLE_PAGES + 1)..=40 {
            for current in 1..=total {
                let window = page_window(current, total);
                let ellipses = window.iter().filter(|m| **m == Ellipsis).count();

                assert_eq!(window.first(), Some(&Number(1)), "({current}, {total})");
                assert_eq!(window.last(), Some(&Number(total)), "({current}, {total})");
                assert!(window.contains(&Number(current)), "({current}, {total})");
                assert!(ellipses <= 2, "({current}, {total})");
                assert!(window.len() <= 7, "({current}, {total})");
            }
        }
    }

    #[test]
    fn numbers_are_strictly_increasing() {
        for current in 1..=25 {
            let numbers: Vec<usize> = page_window(current, 25)
                .into_iter()
                .filter_map(|m| match m {
                    Number(n) => Some(n),
                    Ellipsis => None,
                })
                .collect();
            assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn same_input_gives_same_window() {
        assert_eq!(page_window(7, 19), page_window(7, 19));
    }

    #[test]
    fn prev_and_next_follow_the_edges() {
        let first = PageNav::new(1, 10);
        assert!(!first.prev_enabled());
        assert_eq!(first.next, Some(2));

        let middle = PageNav::new(5, 10);
        assert_eq!(middle.prev, Some(4));
        assert_eq!(middle.next, Some(6));

        let last = PageNav::new(10, 10);
        assert_eq!(last.prev, Some(9));
        assert!(!last.next_enabled());
    }

    #[test]
    fn only_number_markers_request_a_page() {
        let targets: Vec<Option<usize>> = page_window(5, 10).into_iter().map(marker_target).collect();
        assert_eq!(
            targets,
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn activated_controls_emit_their_page() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let requested = Rc::new(RefCell::new(Vec::new()));
        let on_page_change = {
            let requested = requested.clone();
            Callback::from(move |page: usize| requested.borrow_mut().push(page))
        };

        let nav = PageNav::new(1, 10);
        request_page(nav.prev, &on_page_change);
        request_page(nav.next, &on_page_change);
        for marker in page_window(1, 10) {
            request_page(marker_target(marker), &on_page_change);
        }

        let nav = PageNav::new(10, 10);
        request_page(nav.prev, &on_page_change);
        request_page(nav.next, &on_page_change);

        assert_eq!(*requested.borrow(), vec![2, 1, 2, 3, 4, 10, 9]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_page_is_a_caller_bug() {
        page_window(11, 10);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside")]
    fn page_zero_is_a_caller_bug() {
        page_window(0, 10);
    }
}
