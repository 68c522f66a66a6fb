//! Admin Gift Management
//!
//! Form state and submit/delete flows for the admin page. Admin mutations
//! never patch the local list; the caller re-fetches when told to.

use crate::api::{GiftPayload, WishlistApi};
use crate::error::ApiResult;
use crate::models::{Gift, DEFAULT_GRADE};

pub const DELETE_PROMPT: &str = "Вы уверены, что хотите удалить этот подарок?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(u32),
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Добавить",
            FormMode::Edit(_) => "Редактировать",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Добавить",
            FormMode::Edit(_) => "Сохранить",
        }
    }

    pub fn gift_id(self) -> Option<u32> {
        match self {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// Text fields of the gift form (the image lives in the file input)
#[derive(Debug, Clone, PartialEq)]
pub struct GiftForm {
    pub name: String,
    pub details: String,
    pub link: String,
    pub grade: String,
    pub reserved: bool,
}

impl Default for GiftForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            details: String::new(),
            link: String::new(),
            grade: DEFAULT_GRADE.to_string(),
            reserved: false,
        }
    }
}

impl GiftForm {
    pub fn from_gift(gift: &Gift) -> Self {
        Self {
            name: gift.name.clone(),
            details: gift.details.clone().unwrap_or_default(),
            link: gift.link.clone().unwrap_or_default(),
            grade: gift.grade.clone(),
            reserved: gift.reserved,
        }
    }

    /// Multipart body in backend field order
    pub fn to_payload(&self, image: Option<web_sys::File>) -> GiftPayload {
        GiftPayload {
            fields: vec![
                ("name", self.name.clone()),
                ("details", self.details.clone()),
                ("link", self.link.clone()),
                ("grade", self.grade.clone()),
                ("reserved", self.reserved.to_string()),
            ],
            image,
        }
    }
}

/// Open form dialog
#[derive(Debug, Clone, PartialEq)]
pub struct GiftEditor {
    pub mode: FormMode,
    pub form: GiftForm,
}

impl GiftEditor {
    pub fn add() -> Self {
        Self { mode: FormMode::Add, form: GiftForm::default() }
    }

    pub fn edit(gift: &Gift) -> Self {
        Self { mode: FormMode::Edit(gift.id), form: GiftForm::from_gift(gift) }
    }
}

/// What the page should do after an admin request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminOutcome {
    pub close_dialog: bool,
    pub refetch: bool,
}

/// Delete confirmation dialog; at most one delete is in flight
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteDialog {
    target: Option<Gift>,
    removing: bool,
}

impl DeleteDialog {
    pub fn open(&mut self, gift: Gift) {
        if !self.removing {
            self.target = Some(gift);
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_removing(&self) -> bool {
        self.removing
    }

    /// Confirm; returns the id to delete once, `None` while a delete is running
    pub fn begin(&mut self) -> Option<u32> {
        if self.removing {
            return None;
        }
        let gift_id = self.target.as_ref()?.id;
        self.removing = true;
        Some(gift_id)
    }

    /// The cancel button does nothing while the request runs
    pub fn cancel(&mut self) {
        if !self.removing {
            self.target = None;
        }
    }

    pub fn finish(&mut self, outcome: AdminOutcome) {
        self.removing = false;
        if outcome.close_dialog {
            self.target = None;
        }
    }
}

/// Create or update a gift. The form stays open on failure.
pub async fn submit_gift<A>(api: &A, token: &str, mode: FormMode, payload: &GiftPayload) -> AdminOutcome
where
    A: WishlistApi + ?Sized,
{
    match api.save_gift(token, mode.gift_id(), payload).await {
        Ok(()) => AdminOutcome { close_dialog: true, refetch: true },
        Err(err) => {
            log::error!(target: "AdminPage", "saving gift ({:?}) failed: {}", mode, err);
            AdminOutcome { close_dialog: false, refetch: false }
        }
    }
}

/// Delete a gift. The dialog closes whatever the result; the list is
/// re-fetched whenever the server answered.
pub async fn delete_gift<A>(api: &A, token: &str, gift_id: u32) -> AdminOutcome
where
    A: WishlistApi + ?Sized,
{
    let result: ApiResult<()> = api.delete_gift(token, gift_id).await;
    let refetch = match &result {
        Ok(()) => true,
        Err(err) => {
            log::error!(target: "AdminPage", "deleting gift {} failed: {}", gift_id, err);
            err.server_answered()
        }
    };
    AdminOutcome { close_dialog: true, refetch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MockApi};
    use crate::error::ApiError;
    use crate::models::sample_gift;
    use futures::executor::block_on;

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_create_sends_multipart_and_refetches() {
        let api = MockApi::default();
        let mut editor = GiftEditor::add();
        editor.form.name = "Telescope".into();
        editor.form.grade = "rare".into();

        let payload = editor.form.to_payload(None);
        let outcome = block_on(submit_gift(&api, "admin", editor.mode, &payload));

        assert_eq!(outcome, AdminOutcome { close_dialog: true, refetch: true });
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, Endpoint::CreateGift);
        assert_eq!(calls[0].endpoint.method(), "POST");
        assert_eq!(calls[0].endpoint.path(), "/api/gifts/");
        assert_eq!(field(&calls[0].fields, "name"), Some("Telescope"));
        assert_eq!(field(&calls[0].fields, "grade"), Some("rare"));
        assert_eq!(field(&calls[0].fields, "reserved"), Some("false"));
        assert!(!calls[0].has_image);
    }

    #[test]
    fn test_edit_prefills_and_puts() {
        let api = MockApi::default();
        let mut gift = sample_gift(4, "Lamp", true);
        gift.details = Some("warm light".into());
        gift.grade = "epic".into();

        let editor = GiftEditor::edit(&gift);
        assert_eq!(editor.form.name, "Lamp");
        assert_eq!(editor.form.details, "warm light");
        assert_eq!(editor.form.link, "");
        assert!(editor.form.reserved);

        let payload = editor.form.to_payload(None);
        assert_eq!(payload.field("grade"), Some("epic"));
        block_on(submit_gift(&api, "admin", editor.mode, &payload));

        let call = &api.calls()[0];
        assert_eq!(call.endpoint, Endpoint::UpdateGift(4));
        assert_eq!(call.endpoint.method(), "PUT");
        assert_eq!(field(&call.fields, "reserved"), Some("true"));
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let api = MockApi { save: Err(ApiError::Status { status: 422 }), ..MockApi::default() };
        let payload = GiftForm::default().to_payload(None);

        let outcome = block_on(submit_gift(&api, "admin", FormMode::Add, &payload));

        assert_eq!(outcome, AdminOutcome { close_dialog: false, refetch: false });
    }

    #[test]
    fn test_delete_issues_request_and_closes() {
        let api = MockApi::default();

        let outcome = block_on(delete_gift(&api, "admin", 7));

        assert_eq!(outcome, AdminOutcome { close_dialog: true, refetch: true });
        let call = &api.calls()[0];
        assert_eq!(call.endpoint, Endpoint::DeleteGift(7));
        assert_eq!(call.endpoint.method(), "DELETE");
        assert_eq!(call.endpoint.path(), "/api/gifts/7");
    }

    #[test]
    fn test_delete_closes_even_when_rejected() {
        let api = MockApi { delete: Err(ApiError::Status { status: 404 }), ..MockApi::default() };
        let outcome = block_on(delete_gift(&api, "admin", 7));
        assert!(outcome.close_dialog);
        assert!(outcome.refetch);

        let api = MockApi { delete: Err(ApiError::Network("offline".into())), ..MockApi::default() };
        let outcome = block_on(delete_gift(&api, "admin", 7));
        assert_eq!(outcome, AdminOutcome { close_dialog: true, refetch: false });
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(FormMode::Add.title(), "Добавить");
        assert_eq!(FormMode::Edit(1).title(), "Редактировать");
        assert_eq!(FormMode::Edit(1).submit_label(), "Сохранить");
        assert_eq!(FormMode::Edit(3).gift_id(), Some(3));
    }

    #[test]
    fn test_delete_dialog_confirms_once() {
        let api = MockApi::default();
        let mut dialog = DeleteDialog::default();
        dialog.open(sample_gift(7, "Lamp", false));

        let first = dialog.begin();
        // double click on the confirm button
        assert_eq!(dialog.begin(), None);
        dialog.cancel();
        assert!(dialog.is_open());
        assert!(dialog.is_removing());

        let outcome = block_on(delete_gift(&api, "admin", first.unwrap()));
        dialog.finish(outcome);

        assert_eq!(api.endpoints(), vec![Endpoint::DeleteGift(7)]);
        assert!(!dialog.is_open());
        assert!(!dialog.is_removing());
    }

    #[test]
    fn test_delete_dialog_without_target() {
        let mut dialog = DeleteDialog::default();
        assert_eq!(dialog.begin(), None);
        dialog.open(sample_gift(1, "a", false));
        dialog.cancel();
        assert!(!dialog.is_open());
    }
}
