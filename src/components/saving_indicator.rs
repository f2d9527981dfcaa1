//! Saving Indicator
//!
//! Cloud icon shown while any write is in flight.

use leptos::prelude::*;

#[component]
pub fn SavingIndicator(#[prop(into)] saving: Signal<bool>) -> impl IntoView {
    view! {
        <div class="saving-indicator">
            <Show when=move || saving.get()>
                <svg data-testid="saving" class="saving-icon" viewBox="0 0 20 20">
                    <path d="M16.88 9.1A4 4 0 0 1 16 17H5a5 5 0 0 1-1-9.9V7a3 3 0 0 1 4.52-2.59A4.98 4.98 0 0 1 17 8c0 .38-.04.74-.12 1.1z" />
                </svg>
            </Show>
        </div>
    }
}
