//! Endpoint Table
//!
//! Paths and methods of the backend routes.

/// Direction of a reservation toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    Reserve,
    Unreserve,
}

impl ReservationAction {
    /// The action that flips the current state
    pub fn toggle_from(reserved: bool) -> Self {
        if reserved {
            ReservationAction::Unreserve
        } else {
            ReservationAction::Reserve
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationAction::Reserve => "reserve",
            ReservationAction::Unreserve => "unreserve",
        }
    }

    /// Value of `reserved` after the action succeeds
    pub fn resulting_state(&self) -> bool {
        matches!(self, ReservationAction::Reserve)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Auth,
    GetInfo,
    Reservation { gift_id: u32, action: ReservationAction },
    CreateGift,
    UpdateGift(u32),
    DeleteGift(u32),
}

impl Endpoint {
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::UpdateGift(_) => "PUT",
            Endpoint::DeleteGift(_) => "DELETE",
            _ => "POST",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Auth => "/api/auth".to_string(),
            Endpoint::GetInfo => "/api/get_info".to_string(),
            Endpoint::Reservation { gift_id, action } => format!("/api/gifts/{}/{}", gift_id, action.as_str()),
            // trailing slash is part of the backend route
            Endpoint::CreateGift => "/api/gifts/".to_string(),
            Endpoint::UpdateGift(id) | Endpoint::DeleteGift(id) => format!("/api/gifts/{}", id),
        }
    }

    /// Endpoint for saving a gift form
    pub fn save_gift(gift_id: Option<u32>) -> Self {
        match gift_id {
            Some(id) => Endpoint::UpdateGift(id),
            None => Endpoint::CreateGift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_methods() {
        let cases = [
            (Endpoint::Auth, "POST", "/api/auth"),
            (Endpoint::GetInfo, "POST", "/api/get_info"),
            (
                Endpoint::Reservation { gift_id: 3, action: ReservationAction::Reserve },
                "POST",
                "/api/gifts/3/reserve",
            ),
            (
                Endpoint::Reservation { gift_id: 3, action: ReservationAction::Unreserve },
                "POST",
                "/api/gifts/3/unreserve",
            ),
            (Endpoint::CreateGift, "POST", "/api/gifts/"),
            (Endpoint::UpdateGift(5), "PUT", "/api/gifts/5"),
            (Endpoint::DeleteGift(7), "DELETE", "/api/gifts/7"),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method);
            assert_eq!(endpoint.path(), path);
        }
    }

    #[test]
    fn test_toggle_action() {
        assert_eq!(ReservationAction::toggle_from(false), ReservationAction::Reserve);
        assert_eq!(ReservationAction::toggle_from(true), ReservationAction::Unreserve);
        assert!(ReservationAction::Reserve.resulting_state());
        assert!(!ReservationAction::Unreserve.resulting_state());
    }

    #[test]
    fn test_save_gift_endpoint() {
        assert_eq!(Endpoint::save_gift(None), Endpoint::CreateGift);
        assert_eq!(Endpoint::save_gift(Some(2)), Endpoint::UpdateGift(2));
    }
}
