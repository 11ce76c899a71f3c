//! Previous / Next pagination controls shared by every list view.

use leptos::prelude::*;

use crate::net::types::Pagination;

/// Pager row. Hidden entirely for single-page result sets; Previous is
/// disabled on the first page and Next on the last.
#[component]
pub fn PaginationControls(pagination: Pagination, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || { pagination.total_pages > 1 }>
            <div class="pagination">
                <button
                    class="btn btn--outline"
                    disabled=!pagination.has_prev()
                    on:click=move |_| on_page.run(pagination.page - 1)
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {format!("Page {} of {}", pagination.page, pagination.total_pages)}
                </span>
                <button
                    class="btn btn--outline"
                    disabled=!pagination.has_next()
                    on:click=move |_| on_page.run(pagination.page + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
