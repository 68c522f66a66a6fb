//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Serialize};

/// Grade options offered by the admin form
pub const GRADES: &[&str] = &["common", "rare", "epic", "legendary"];

pub const DEFAULT_GRADE: &str = "common";

/// Gift data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub reserved: bool,
    #[serde(default = "default_grade")]
    pub grade: String,
}

fn default_grade() -> String {
    DEFAULT_GRADE.to_string()
}

impl Gift {
    /// CSS class for the image frame glow
    pub fn grade_class(&self) -> String {
        format!("gift-img-container grade_{}", self.grade)
    }

    /// Image URL, `None` when the gift has no picture
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

/// Body of `POST /api/get_info`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventInfo {
    pub gifts: Vec<Gift>,
    #[serde(default)]
    pub place_info: String,
    #[serde(default)]
    pub dress_code_info: String,
}

/// Body of `POST /api/auth`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Flip the reservation flag of one gift, leaving the rest untouched.
/// Returns false if the id is not in the list.
pub fn patch_reserved(gifts: &mut [Gift], id: u32, reserved: bool) -> bool {
    match gifts.iter_mut().find(|gift| gift.id == id) {
        Some(gift) => {
            gift.reserved = reserved;
            true
        }
        None => false,
    }
}

#[cfg(test)]
pub(crate) fn sample_gift(id: u32, name: &str, reserved: bool) -> Gift {
    Gift {
        id,
        name: name.to_string(),
        details: None,
        link: None,
        image: None,
        reserved,
        grade: DEFAULT_GRADE.to_string(),
    }
}
