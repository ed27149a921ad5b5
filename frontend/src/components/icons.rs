use leptos::*;

/// Shown while an item is closed; CSS hides it under `.is-open`.
#[component]
pub fn PlusIcon() -> impl IntoView {
    view! {
        <svg class="icon-plus" width="16" height="16" viewBox="0 0 16 16" fill="none"
             xmlns="http://www.w3.org/2000/svg">
            <path d="M8 3.5V12.5M3.5 8H12.5" stroke="currentColor" stroke-width="2"
                  stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn MinusIcon() -> impl IntoView {
    view! {
        <svg class="icon-minus" width="16" height="16" viewBox="0 0 16 16" fill="none"
             xmlns="http://www.w3.org/2000/svg">
            <path d="M3.5 8H12.5" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        </svg>
    }
}
