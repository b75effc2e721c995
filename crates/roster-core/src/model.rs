//! Domain types for influencer profile records
//!
//! Field names follow Rust conventions; serde renames map them onto the
//! wire names used by the collection API (camelCase plus a handful of
//! legacy snake_case keys like `user_name`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag carried by every audience-by-country entry.
pub const COUNTRY_CATEGORY: &str = "country";

/// One influencer profile as stored by the remote collection API.
///
/// `id` and the timestamps are server-assigned; they are skipped on
/// serialization when unset so a freshly drafted record POSTs cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Public username. Wire name `user_name`.
    #[serde(rename = "user_name", default)]
    pub handle: String,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(rename = "categoryInstagram", default)]
    pub instagram_category: String,

    #[serde(rename = "categoryYouTube", default)]
    pub youtube_category: String,

    #[serde(rename = "instagramData", default)]
    pub instagram: PlatformProfile,

    #[serde(rename = "youtubeData", default)]
    pub youtube: PlatformProfile,

    #[serde(rename = "averageLikes", default)]
    pub average_likes: f64,

    #[serde(rename = "averageViews", default)]
    pub average_views: f64,

    #[serde(rename = "averageComments", default)]
    pub average_comments: f64,

    #[serde(rename = "averageEngagement", default)]
    pub average_engagement: f64,

    /// Profile image URL.
    #[serde(default)]
    pub image: String,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Influencer {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            handle: String::new(),
            gender: Gender::default(),
            language: String::new(),
            city: String::new(),
            state: String::new(),
            instagram_category: String::new(),
            youtube_category: String::new(),
            instagram: PlatformProfile::default(),
            youtube: PlatformProfile::default(),
            average_likes: 0.0,
            average_views: 0.0,
            average_comments: 0.0,
            average_engagement: 0.0,
            image: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Influencer {
    /// Blank draft for the create form. Distribution lists start empty;
    /// validation blocks submit until each has at least one entry.
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Per-network analytics sub-document (Instagram or YouTube).
///
/// Both sub-documents share this shape; `link` is only populated for
/// YouTube and is skipped on serialization when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformProfile {
    #[serde(default)]
    pub followers: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(rename = "genderDistribution", default)]
    pub gender_distribution: Vec<GenderShare>,

    #[serde(rename = "ageDistribution", default)]
    pub age_distribution: Vec<AgeShare>,

    #[serde(rename = "audienceByCountry", default)]
    pub audience_by_country: Vec<CountryShare>,

    #[serde(rename = "collaborationCharges", default)]
    pub collaboration_charges: CollaborationCharges,
}

impl PlatformProfile {
    /// Number of entries in one distribution list.
    pub fn list_len(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Gender => self.gender_distribution.len(),
            ListKind::Age => self.age_distribution.len(),
            ListKind::Country => self.audience_by_country.len(),
        }
    }

    /// Append a blank entry to the end of one distribution list.
    pub fn push_blank(&mut self, kind: ListKind) {
        match kind {
            ListKind::Gender => self.gender_distribution.push(GenderShare::default()),
            ListKind::Age => self.age_distribution.push(AgeShare::default()),
            ListKind::Country => self.audience_by_country.push(CountryShare::default()),
        }
    }

    /// Replace parts of the entry at `index` without disturbing its
    /// neighbours. Returns false when the index is out of bounds.
    pub fn update_entry(&mut self, kind: ListKind, index: usize, patch: EntryPatch) -> bool {
        match kind {
            ListKind::Gender => {
                let Some(entry) = self.gender_distribution.get_mut(index) else {
                    return false;
                };
                if let Some(label) = patch.label {
                    entry.gender = label;
                }
                if let Some(value) = patch.value {
                    entry.distribution = value;
                }
            }
            ListKind::Age => {
                let Some(entry) = self.age_distribution.get_mut(index) else {
                    return false;
                };
                if let Some(label) = patch.label {
                    entry.age = label;
                }
                if let Some(value) = patch.value {
                    entry.value = value;
                }
            }
            ListKind::Country => {
                let Some(entry) = self.audience_by_country.get_mut(index) else {
                    return false;
                };
                if let Some(label) = patch.label {
                    entry.name = label;
                }
                if let Some(value) = patch.value {
                    entry.value = value;
                }
            }
        }
        true
    }

    /// Remove the entry at `index`, re-indexing the remainder contiguously.
    ///
    /// Refused (returns false) when the index is out of bounds or the list
    /// holds a single entry: every distribution list must stay non-empty
    /// once populated.
    pub fn remove_entry(&mut self, kind: ListKind, index: usize) -> bool {
        if self.list_len(kind) <= 1 || index >= self.list_len(kind) {
            return false;
        }
        match kind {
            ListKind::Gender => {
                self.gender_distribution.remove(index);
            }
            ListKind::Age => {
                self.age_distribution.remove(index);
            }
            ListKind::Country => {
                self.audience_by_country.remove(index);
            }
        }
        true
    }
}

/// One gender-distribution entry: share of audience per gender label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderShare {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub gender: String,

    /// Percentage in [0, 100].
    #[serde(default)]
    pub distribution: f64,
}

impl GenderShare {
    pub fn new(gender: impl Into<String>, distribution: f64) -> Self {
        Self {
            id: None,
            gender: gender.into(),
            distribution,
        }
    }
}

/// One age-bracket distribution entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeShare {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub age: String,

    /// Percentage in [0, 100].
    #[serde(default)]
    pub value: f64,
}

impl AgeShare {
    pub fn new(age: impl Into<String>, value: f64) -> Self {
        Self {
            id: None,
            age: age.into(),
            value,
        }
    }
}

/// One audience-by-country entry. `category` is always the literal
/// `"country"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub name: String,

    /// Percentage in [0, 100].
    #[serde(default)]
    pub value: f64,
}

impl Default for CountryShare {
    fn default() -> Self {
        Self {
            id: None,
            category: COUNTRY_CATEGORY.to_string(),
            name: String::new(),
            value: 0.0,
        }
    }
}

impl CountryShare {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            ..Self::default()
        }
    }
}

/// Four fixed price points per platform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollaborationCharges {
    #[serde(default)]
    pub reel: f64,

    #[serde(default)]
    pub story: f64,

    #[serde(default)]
    pub post: f64,

    #[serde(rename = "oneMonthDigitalRights", default)]
    pub one_month_digital_rights: f64,
}

/// Influencer gender. The API enumerates exactly these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Cycle to the other value (form affordance).
    pub fn toggled(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse the wire spelling. Returns None for anything outside the
    /// enumerated set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which platform sub-document a list operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    YouTube,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        }
    }
}

/// Which distribution list a list operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Gender,
    Age,
    Country,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Gender => "Gender distribution",
            ListKind::Age => "Age distribution",
            ListKind::Country => "Audience by country",
        }
    }
}

/// Partial update for one distribution entry. `None` fields keep the
/// entry's current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub label: Option<String>,
    pub value: Option<f64>,
}

impl EntryPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: None,
        }
    }

    pub fn value(value: f64) -> Self {
        Self {
            label: None,
            value: Some(value),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// List ordering
// ─────────────────────────────────────────────────────────────────

/// Sort column for the collection list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    Handle,
    City,
    #[default]
    CreatedAt,
    Engagement,
}

impl SortKey {
    /// Wire value for the `sortBy` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Handle => "user_name",
            SortKey::City => "city",
            SortKey::CreatedAt => "createdAt",
            SortKey::Engagement => "averageEngagement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Handle => "Username",
            SortKey::City => "City",
            SortKey::CreatedAt => "Created",
            SortKey::Engagement => "Engagement",
        }
    }
}

/// Sort direction for the collection list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Wire value for the `sortOrder` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Indicator glyph for table headers.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Caller identity injected at startup. Gates mutating affordances in the
/// UI; this client performs no authentication itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Viewer,
}

impl Role {
    pub fn can_mutate(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Viewer => "viewer",
        }
    }
}
