//! Reservation Flow
//!
//! select -> confirm -> commit, one gift at a time. A 409 from the server
//! parks the flow in `Conflict` until the page is reloaded.

use crate::api::{ReservationAction, WishlistApi};
use crate::error::ApiError;
use crate::models::Gift;

pub const RESERVE_PROMPT: &str = "Вы уверены, что хотите выбрать этот предмет?";
pub const UNRESERVE_PROMPT: &str = "Вы уверены, что хотите снять бронь с этого предмета?";
pub const CONFLICT_MESSAGE: &str = "Кто-то другой уже изменил статус этого подарка";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReservationState {
    #[default]
    Idle,
    /// Waiting for the user to confirm
    Confirming(Gift),
    /// Toggle sent, waiting for the server
    Submitting(Gift),
    /// Server rejected a stale toggle; only a reload leaves this state
    Conflict { gift_id: u32 },
}

/// What the server said about a commit
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Applied { gift_id: u32, reserved: bool },
    Conflict { gift_id: u32 },
    Failed { gift_id: u32, error: ApiError },
}

impl CommitOutcome {
    pub fn gift_id(&self) -> u32 {
        match self {
            CommitOutcome::Applied { gift_id, .. }
            | CommitOutcome::Conflict { gift_id }
            | CommitOutcome::Failed { gift_id, .. } => *gift_id,
        }
    }
}

/// Local change to make after a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedPatch {
    pub gift_id: u32,
    pub reserved: bool,
}

/// Side effect the view must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    Reload,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationFlow {
    state: ReservationState,
}

impl ReservationFlow {
    #[cfg(test)]
    pub fn state(&self) -> &ReservationState {
        &self.state
    }

    /// Start confirming a gift. Ignored while a toggle is in flight or a
    /// conflict is shown.
    pub fn select(&mut self, gift: Gift) -> bool {
        if matches!(self.state, ReservationState::Submitting(_) | ReservationState::Conflict { .. }) {
            return false;
        }
        self.state = ReservationState::Confirming(gift);
        true
    }

    /// Close the prompt. Only a prompt that has not been confirmed can be closed.
    pub fn cancel(&mut self) {
        if matches!(self.state, ReservationState::Confirming(_)) {
            self.state = ReservationState::Idle;
        }
    }

    /// Confirm the pending gift. Returns it once; repeated confirms while the
    /// request is in flight get `None`.
    pub fn begin_commit(&mut self) -> Option<Gift> {
        match std::mem::take(&mut self.state) {
            ReservationState::Confirming(gift) => {
                self.state = ReservationState::Submitting(gift.clone());
                Some(gift)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Gift whose prompt is on screen, confirmed or not
    pub fn pending(&self) -> Option<&Gift> {
        match &self.state {
            ReservationState::Confirming(gift) | ReservationState::Submitting(gift) => Some(gift),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ReservationState::Submitting(_))
    }

    /// Confirmation wording for the pending gift
    pub fn prompt(&self) -> Option<&'static str> {
        self.pending().map(|gift| if gift.reserved { UNRESERVE_PROMPT } else { RESERVE_PROMPT })
    }

    pub fn in_conflict(&self) -> bool {
        matches!(self.state, ReservationState::Conflict { .. })
    }

    /// Fold a commit outcome into the flow; returns the local patch to apply.
    ///
    /// The in-flight state is only cleared when it belongs to the committed
    /// gift, so a late answer never touches a newer selection.
    pub fn resolve(&mut self, outcome: &CommitOutcome) -> Option<ReservedPatch> {
        let gift_id = outcome.gift_id();
        let owns_state = matches!(&self.state, ReservationState::Submitting(gift) if gift.id == gift_id);
        match outcome {
            CommitOutcome::Applied { gift_id, reserved } => {
                if owns_state {
                    self.state = ReservationState::Idle;
                }
                Some(ReservedPatch { gift_id: *gift_id, reserved: *reserved })
            }
            CommitOutcome::Conflict { gift_id } => {
                self.state = ReservationState::Conflict { gift_id: *gift_id };
                None
            }
            CommitOutcome::Failed { .. } => {
                if owns_state {
                    self.state = ReservationState::Idle;
                }
                None
            }
        }
    }

    /// The conflict dialog's only action
    pub fn acknowledge_conflict(&self) -> Option<PageEffect> {
        self.in_conflict().then_some(PageEffect::Reload)
    }
}

/// Send the toggle for `gift` to the server
pub async fn commit<A>(api: &A, token: &str, gift: &Gift) -> CommitOutcome
where
    A: WishlistApi + ?Sized,
{
    let action = ReservationAction::toggle_from(gift.reserved);
    match api.set_reservation(token, gift.id, action).await {
        Ok(()) => CommitOutcome::Applied { gift_id: gift.id, reserved: action.resulting_state() },
        Err(ApiError::Conflict) => {
            log::info!(target: "Wishlist", "gift {} changed by someone else", gift.id);
            CommitOutcome::Conflict { gift_id: gift.id }
        }
        Err(err) => {
            log::error!(target: "Wishlist", "{} of gift {} failed: {}", action.as_str(), gift.id, err);
            CommitOutcome::Failed { gift_id: gift.id, error: err }
        }
    }
}
