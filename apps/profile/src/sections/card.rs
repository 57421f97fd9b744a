use serde::Serialize;

/// Colour bucket for proficiency badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Success,
    Primary,
    Warning,
    Error,
    Neutral,
}

impl BadgeTier {
    /// expert/native > advanced/fluent > intermediate > beginner/basic;
    /// anything else is neutral. Case-insensitive.
    pub fn from_proficiency(proficiency: &str) -> Self {
        match proficiency.trim().to_lowercase().as_str() {
            "expert" | "native" => BadgeTier::Success,
            "advanced" | "fluent" => BadgeTier::Primary,
            "intermediate" => BadgeTier::Warning,
            "beginner" | "basic" => BadgeTier::Error,
            _ => BadgeTier::Neutral,
        }
    }

    /// Key into the UI colour palette.
    pub fn color_key(self) -> &'static str {
        match self {
            BadgeTier::Success => "success",
            BadgeTier::Primary => "primary",
            BadgeTier::Warning => "warning",
            BadgeTier::Error => "error",
            BadgeTier::Neutral => "textSecondary",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            BadgeTier::Success => "#34C759",
            BadgeTier::Primary => "#007AFF",
            BadgeTier::Warning => "#FF9500",
            BadgeTier::Error => "#FF3B30",
            BadgeTier::Neutral => "#8E8E93",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub tier: BadgeTier,
}

impl Badge {
    pub fn proficiency(text: &str) -> Self {
        Badge {
            text: text.to_string(),
            tier: BadgeTier::from_proficiency(text),
        }
    }
}

/// Generic summary card for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Extra lines under the subtitle ("Duration: ...", "Email: ...").
    pub details: Vec<String>,
    pub badge: Option<Badge>,
    pub icon: &'static str,
}

impl Card {
    pub fn new(title: &str, icon: &'static str) -> Self {
        Card {
            title: title.to_string(),
            subtitle: None,
            description: None,
            details: Vec::new(),
            badge: None,
            icon,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = non_empty(subtitle.into());
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.and_then(|d| non_empty(d.to_string()));
        self
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Adds `"{label}: {value}"` only when `value` is present and non-blank.
    pub fn optional_detail(self, label: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.detail(format!("{label}: {v}")),
            None => self,
        }
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_ref().map(|b| b.text.as_str())
    }

    pub fn badge_color_key(&self) -> Option<&'static str> {
        self.badge.as_ref().map(|b| b.tier.color_key())
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
