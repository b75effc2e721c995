//! Typed partial updates over the record shape
//!
//! Two concerns live here:
//!
//! - [`InfluencerPatch`] / [`PlatformPatch`] / [`ChargesPatch`]: in-memory
//!   merge helpers. `apply` recurses into nested sub-documents and only
//!   touches the fields that are `Some`, so sibling keys survive nested
//!   edits.
//! - [`UpdatePayload`]: the wire body for `PATCH /influencers/{id}`. The
//!   endpoint accepts a restricted field whitelist as a flat JSON object
//!   with Mongo-style dotted keys (`"instagramData.followers"`). Instagram
//!   distribution arrays and both platforms' audience-by-country lists are
//!   deliberately outside the whitelist.

use serde::Serialize;

use crate::model::{AgeShare, Gender, GenderShare, Influencer, PlatformProfile};

/// Partial update over [`Influencer`]. `None` fields keep their current
/// value when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfluencerPatch {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub gender: Option<Gender>,
    pub language: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub instagram_category: Option<String>,
    pub youtube_category: Option<String>,
    pub instagram: Option<PlatformPatch>,
    pub youtube: Option<PlatformPatch>,
    pub average_likes: Option<f64>,
    pub average_views: Option<f64>,
    pub average_comments: Option<f64>,
    pub average_engagement: Option<f64>,
    pub image: Option<String>,
}

impl InfluencerPatch {
    /// Merge this patch into `record`, recursing into the platform
    /// sub-documents so untouched sibling fields are preserved.
    pub fn apply(self, record: &mut Influencer) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(handle) = self.handle {
            record.handle = handle;
        }
        if let Some(gender) = self.gender {
            record.gender = gender;
        }
        if let Some(language) = self.language {
            record.language = language;
        }
        if let Some(city) = self.city {
            record.city = city;
        }
        if let Some(state) = self.state {
            record.state = state;
        }
        if let Some(category) = self.instagram_category {
            record.instagram_category = category;
        }
        if let Some(category) = self.youtube_category {
            record.youtube_category = category;
        }
        if let Some(patch) = self.instagram {
            patch.apply(&mut record.instagram);
        }
        if let Some(patch) = self.youtube {
            patch.apply(&mut record.youtube);
        }
        if let Some(likes) = self.average_likes {
            record.average_likes = likes;
        }
        if let Some(views) = self.average_views {
            record.average_views = views;
        }
        if let Some(comments) = self.average_comments {
            record.average_comments = comments;
        }
        if let Some(engagement) = self.average_engagement {
            record.average_engagement = engagement;
        }
        if let Some(image) = self.image {
            record.image = image;
        }
    }
}

/// Partial update over [`PlatformProfile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformPatch {
    pub followers: Option<u64>,
    pub link: Option<String>,
    pub gender_distribution: Option<Vec<GenderShare>>,
    pub age_distribution: Option<Vec<AgeShare>>,
    pub collaboration_charges: Option<ChargesPatch>,
}

impl PlatformPatch {
    pub fn apply(self, profile: &mut PlatformProfile) {
        if let Some(followers) = self.followers {
            profile.followers = followers;
        }
        if let Some(link) = self.link {
            profile.link = Some(link);
        }
        if let Some(list) = self.gender_distribution {
            profile.gender_distribution = list;
        }
        if let Some(list) = self.age_distribution {
            profile.age_distribution = list;
        }
        if let Some(charges) = self.collaboration_charges {
            charges.apply(&mut profile.collaboration_charges);
        }
    }
}

/// Partial update over the collaboration charge set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargesPatch {
    pub reel: Option<f64>,
    pub story: Option<f64>,
    pub post: Option<f64>,
    pub one_month_digital_rights: Option<f64>,
}

impl ChargesPatch {
    pub fn apply(self, charges: &mut crate::model::CollaborationCharges) {
        if let Some(reel) = self.reel {
            charges.reel = reel;
        }
        if let Some(story) = self.story {
            charges.story = story;
        }
        if let Some(post) = self.post {
            charges.post = post;
        }
        if let Some(rights) = self.one_month_digital_rights {
            charges.one_month_digital_rights = rights;
        }
    }
}

/// Wire body for `PATCH /influencers/{id}`.
///
/// Built from the full draft but carrying only the whitelisted fields.
/// Serializes to a flat object; nested fields use dotted keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    pub name: String,

    pub user_name: String,

    pub gender: Gender,

    pub language: String,

    pub city: String,

    pub state: String,

    #[serde(rename = "categoryInstagram")]
    pub instagram_category: String,

    #[serde(rename = "categoryYouTube")]
    pub youtube_category: String,

    #[serde(rename = "averageLikes")]
    pub average_likes: f64,

    #[serde(rename = "averageViews")]
    pub average_views: f64,

    #[serde(rename = "averageComments")]
    pub average_comments: f64,

    #[serde(rename = "averageEngagement")]
    pub average_engagement: f64,

    pub image: String,

    #[serde(rename = "instagramData.followers")]
    pub instagram_followers: u64,

    #[serde(rename = "youtubeData.followers")]
    pub youtube_followers: u64,

    #[serde(rename = "youtubeData.link", skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,

    #[serde(rename = "youtubeData.genderDistribution")]
    pub youtube_gender_distribution: Vec<GenderShare>,

    #[serde(rename = "youtubeData.ageDistribution")]
    pub youtube_age_distribution: Vec<AgeShare>,
}

impl UpdatePayload {
    /// Project a draft onto the PATCH whitelist. Everything outside the
    /// whitelist (Instagram distribution arrays, audience-by-country on
    /// either platform, charges) is dropped here no matter what the draft
    /// holds.
    pub fn from_draft(draft: &Influencer) -> Self {
        Self {
            name: draft.name.clone(),
            user_name: draft.handle.clone(),
            gender: draft.gender,
            language: draft.language.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            instagram_category: draft.instagram_category.clone(),
            youtube_category: draft.youtube_category.clone(),
            average_likes: draft.average_likes,
            average_views: draft.average_views,
            average_comments: draft.average_comments,
            average_engagement: draft.average_engagement,
            image: draft.image.clone(),
            instagram_followers: draft.instagram.followers,
            youtube_followers: draft.youtube.followers,
            youtube_link: draft.youtube.link.clone(),
            youtube_gender_distribution: draft.youtube.gender_distribution.clone(),
            youtube_age_distribution: draft.youtube.age_distribution.clone(),
        }
    }
}
