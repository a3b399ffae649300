//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"categories--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
