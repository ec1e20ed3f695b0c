use uuid::Uuid;

use crate::backend::records::{delete_record, insert_record, update_record};
use crate::backend::Backend;
use crate::common::EditorError;
use crate::models::{Draft, Record, Session};

/// Only an explicit `confirm=yes` from the confirmation page deletes.
pub fn delete_confirmed(confirm: Option<&str>) -> bool {
    confirm.map(str::trim) == Some("yes")
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    Created(R),
    Updated(R),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeleteOutcome {
    NeedsConfirmation,
    Deleted,
}

/// Create/edit form state for one table.
///
/// `Create` starts with an empty draft and inserts on submit; `Edit`
/// holds the selected row's id and updates it. A successful submit or a
/// cancel returns to `Create`. A failed submit keeps mode and draft so
/// the form can be shown again.
#[derive(Debug, Clone)]
pub struct EntityEditor<R: Record> {
    mode: EditorMode,
    draft: R::Draft,
}

impl<R: Record> Default for EntityEditor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EntityEditor<R> {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Create,
            draft: R::Draft::default(),
        }
    }

    /// Rebuilds the editor from a submitted form: `id` selects edit mode.
    pub fn from_form(id: Option<Uuid>, draft: R::Draft) -> Self {
        Self {
            mode: id.map_or(EditorMode::Create, EditorMode::Edit),
            draft,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        match self.mode {
            EditorMode::Edit(id) => Some(id),
            EditorMode::Create => None,
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    pub fn select(&mut self, row: &R) {
        self.mode = EditorMode::Edit(row.id());
        self.draft = row.to_draft();
    }

    pub fn cancel(&mut self) {
        self.mode = EditorMode::Create;
        self.draft = R::Draft::default();
    }

    /// Validates, then inserts or updates. Nothing is sent when the draft
    /// is invalid or there is no session.
    pub async fn submit(
        &mut self,
        backend: &dyn Backend,
        session: Option<&Session>,
    ) -> Result<SubmitOutcome<R>, EditorError> {
        self.draft.validate()?;
        let session = session.ok_or(EditorError::NotAuthenticated)?;
        let token = Some(session.access_token.as_str());

        let outcome = match self.mode {
            EditorMode::Create => SubmitOutcome::Created(
                insert_record::<R>(backend, token, &self.draft, session.user.id).await?,
            ),
            EditorMode::Edit(id) => {
                SubmitOutcome::Updated(update_record::<R>(backend, token, id, &self.draft).await?)
            }
        };

        self.cancel();
        Ok(outcome)
    }

    pub async fn delete(
        &mut self,
        backend: &dyn Backend,
        session: Option<&Session>,
        id: Uuid,
        confirmed: bool,
    ) -> Result<DeleteOutcome, EditorError> {
        if !confirmed {
            return Ok(DeleteOutcome::NeedsConfirmation);
        }
        let session = session.ok_or(EditorError::NotAuthenticated)?;

        delete_record::<R>(backend, Some(session.access_token.as_str()), id).await?;

        if self.editing_id() == Some(id) {
            self.cancel();
        }
        Ok(DeleteOutcome::Deleted)
    }
}
