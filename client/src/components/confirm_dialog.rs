//! Modal yes/no confirmation used before destructive actions: deletes and
//! saves that move a record to another owner.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Label of the confirming button; "Delete" when unset.
    #[prop(optional, into)]
    confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_owned());
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
