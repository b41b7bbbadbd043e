//! Screen navigation
//!
//! Which screen is visible is a single tagged value, and every way of moving
//! between screens funnels through [`navigate`]. The account detail screen
//! carries its account id in the variant, so a detail view without a selection
//! cannot be represented.

use crate::models::AccountId;

/// The visible screen
///
/// Session-only state; never persisted or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Card row plus recent activity feed
    #[default]
    Overview,
    /// Single account with its filtered feed
    Account(AccountId),
    /// Profile card; `back` remembers the detail screen to return to
    Profile { back: Option<AccountId> },
}

impl View {
    /// Account id shown on the current screen, if any
    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            Self::Account(id) => Some(id),
            Self::Overview | Self::Profile { .. } => None,
        }
    }

    pub fn is_overview(&self) -> bool {
        matches!(self, Self::Overview)
    }

    pub fn is_profile(&self) -> bool {
        matches!(self, Self::Profile { .. })
    }
}

/// A navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Open the detail screen for an account
    SelectAccount(AccountId),
    /// Leave the current screen
    Back,
    /// Open the profile screen
    OpenProfile,
}

/// Apply a navigation request to the current screen
///
/// Total over every (screen, request) pair. Backing out of the profile
/// returns to the detail screen it was opened from, if there was one;
/// backing out of the overview stays put.
pub fn navigate(view: View, nav: Nav) -> View {
    match (view, nav) {
        (_, Nav::SelectAccount(id)) => View::Account(id),
        (View::Overview, Nav::Back) => View::Overview,
        (View::Account(_), Nav::Back) => View::Overview,
        (View::Profile { back: Some(id) }, Nav::Back) => View::Account(id),
        (View::Profile { back: None }, Nav::Back) => View::Overview,
        (View::Overview, Nav::OpenProfile) => View::Profile { back: None },
        (View::Account(id), Nav::OpenProfile) => View::Profile { back: Some(id) },
        (profile @ View::Profile { .. }, Nav::OpenProfile) => profile,
    }
}
