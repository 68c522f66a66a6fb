//! Gift Form Component
//!
//! Add/edit dialog of the admin page. Text fields live in a signal, the
//! image is read from the file input only when the form is submitted.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::{submit_gift, GiftEditor, GiftForm};
use crate::context::use_app_context;
use crate::models::GRADES;

/// Gift add/edit modal
///
/// # Arguments
/// * `editor` - Mode and initial field values
/// * `on_cancel` - Closes the dialog without saving
/// * `on_saved` - Runs after the server accepted the gift
#[component]
pub fn GiftFormModal(
    editor: GiftEditor,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let mode = editor.mode;
    let form = RwSignal::new(editor.form);
    let (saving, set_saving) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let fields: GiftForm = form.get_untracked();
        if fields.name.trim().is_empty() {
            return;
        }
        let image = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let payload = fields.to_payload(image);
        let api = ctx.api();
        let token = ctx.token();

        set_saving.set(true);
        spawn_local(async move {
            let outcome = submit_gift(&api, &token, mode, &payload).await;
            set_saving.set(false);
            if outcome.close_dialog {
                on_saved.run(());
            }
        });
    };

    view! {
        <div class="admin-modal modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{mode.title()}</h2>
                </div>
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <div class="form-groups">
                        <div class="form-group">
                            <label>"Имя:"</label>
                            <input
                                name="name"
                                required
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Детали:"</label>
                            <textarea
                                name="details"
                                prop:value=move || form.with(|f| f.details.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.details = value);
                                }
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label>"Ссылка:"</label>
                            <input
                                name="link"
                                prop:value=move || form.with(|f| f.link.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.link = value);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Грейд:"</label>
                            <select
                                name="grade"
                                prop:value=move || form.with(|f| f.grade.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.grade = value);
                                }
                            >
                                {GRADES.iter().map(|grade| view! {
                                    <option
                                        value=*grade
                                        selected=move || form.with(|f| f.grade == *grade)
                                    >
                                        {*grade}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group checkbox-group">
                            <label>"Забонирован:"</label>
                            <input
                                type="checkbox"
                                name="reserved"
                                prop:checked=move || form.with(|f| f.reserved)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.reserved = checked);
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Картинка:"</label>
                            <input type="file" accept="image/*" node_ref=file_input style="font-size: 11px" />
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="form-button" on:click=move |_| on_cancel.run(())>
                            "Отмена"
                        </button>
                        <button type="submit" class="form-button" disabled=move || saving.get()>
                            {mode.submit_label()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
