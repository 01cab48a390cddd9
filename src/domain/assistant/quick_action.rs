//! Quick-action buttons offered before the first exchange.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::knowledge::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Destinations,
    Itinerary,
    Marketplace,
    Application,
    Faq,
}

impl QuickAction {
    pub const ALL: [QuickAction; 5] = [
        QuickAction::Destinations,
        QuickAction::Itinerary,
        QuickAction::Marketplace,
        QuickAction::Application,
        QuickAction::Faq,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::Destinations => "destinations",
            QuickAction::Itinerary => "itinerary",
            QuickAction::Marketplace => "marketplace",
            QuickAction::Application => "application",
            QuickAction::Faq => "faq",
        }
    }

    /// Button text, also echoed as the user's message.
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Destinations => "Popular Destinations",
            QuickAction::Itinerary => "Plan Itinerary",
            QuickAction::Marketplace => "Local Products",
            QuickAction::Application => "Apply for Tourism",
            QuickAction::Faq => "FAQs",
        }
    }

    /// Topic answered by this action, if it maps to one.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            QuickAction::Destinations => Some(Topic::Destinations),
            QuickAction::Itinerary => Some(Topic::Itinerary),
            QuickAction::Marketplace => Some(Topic::Marketplace),
            QuickAction::Application | QuickAction::Faq => None,
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for QuickAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickAction::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| ValidationError::invalid_format("action", format!("unknown quick action '{}'", s)))
    }
}
