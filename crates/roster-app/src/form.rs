//! Form field enumeration.
//!
//! Builds the flat list of editable fields for the current draft, used by
//! both the editor handlers (for committing edits) and the form widget
//! (for rendering). Rows for distribution entries are generated per entry,
//! so the list grows and shrinks as entries are added and removed.
//!
//! Committed edits are applied through the typed patch helpers rather than
//! by poking draft fields directly, so every write path shares the same
//! sibling-preserving merge.

use roster_core::{
    ChargesPatch, EntryPatch, Influencer, InfluencerPatch, ListKind, Platform, PlatformPatch,
    PlatformProfile,
};

use crate::state::ListTarget;

/// One editable row in the form.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Wire field path, matching what validation reports
    /// (`instagramData.genderDistribution[0].gender`).
    pub path: String,

    /// Row label.
    pub label: String,

    /// Current value, rendered as text.
    pub value: String,

    /// Section heading the row falls under.
    pub section: &'static str,

    pub kind: FieldKind,
}

impl FormField {
    fn new(path: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            value: String::new(),
            section: "",
            kind,
        }
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn section(mut self, section: &'static str) -> Self {
        self.section = section;
        self
    }

    /// Rows a text buffer can be committed into. Toggle and heading rows
    /// are handled by dedicated keys instead.
    pub fn is_editable(&self) -> bool {
        !matches!(self.kind, FieldKind::GenderToggle | FieldKind::ListHeading(_))
    }
}

/// What committing a buffer into a row does.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free-text scalar.
    Text(TextField),
    /// Decimal aggregate metric.
    Number(NumberField),
    /// Whole-number follower count.
    Followers(Platform),
    /// Enumerated gender; Enter toggles the value in place.
    GenderToggle,
    /// One price point.
    Charge(Platform, ChargeField),
    /// Distribution list heading. Not editable; entries are appended here
    /// when the list is empty.
    ListHeading(ListTarget),
    /// Label half of one distribution entry.
    EntryLabel(ListTarget, usize),
    /// Percentage half of one distribution entry.
    EntryValue(ListTarget, usize),
}

impl FieldKind {
    /// The list an add/remove key press targets from this row, with the
    /// entry index when the row is inside the list.
    pub fn list_target(&self) -> Option<(ListTarget, Option<usize>)> {
        match self {
            FieldKind::ListHeading(target) => Some((*target, None)),
            FieldKind::EntryLabel(target, index) | FieldKind::EntryValue(target, index) => {
                Some((*target, Some(*index)))
            }
            _ => None,
        }
    }
}

/// Free-text scalar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Handle,
    Language,
    City,
    State,
    InstagramCategory,
    YouTubeCategory,
    Image,
    YouTubeLink,
}

/// Decimal aggregate metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    AverageLikes,
    AverageViews,
    AverageComments,
    AverageEngagement,
}

impl NumberField {
    fn parse_error(&self) -> &'static str {
        match self {
            NumberField::AverageLikes => "Average likes must be positive!",
            NumberField::AverageViews => "Average views must be positive!",
            NumberField::AverageComments => "Average comments must be positive!",
            NumberField::AverageEngagement => "Average engagement must be positive!",
        }
    }
}

/// The four price points of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeField {
    Reel,
    Story,
    Post,
    DigitalRights,
}

impl ChargeField {
    fn leaf(&self) -> &'static str {
        match self {
            ChargeField::Reel => "reel",
            ChargeField::Story => "story",
            ChargeField::Post => "post",
            ChargeField::DigitalRights => "oneMonthDigitalRights",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ChargeField::Reel => "Reel Charge",
            ChargeField::Story => "Story Charge",
            ChargeField::Post => "Post Charge",
            ChargeField::DigitalRights => "Digital Rights Charge",
        }
    }

    fn parse_error(&self) -> &'static str {
        match self {
            ChargeField::Reel => "Reel charge must be positive!",
            ChargeField::Story => "Story charge must be positive!",
            ChargeField::Post => "Post charge must be positive!",
            ChargeField::DigitalRights => "Digital rights charge must be positive!",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field list
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the field rows for the current draft.
pub fn fields(draft: &Influencer) -> Vec<FormField> {
    let mut rows = vec![
        FormField::new("name", "Name", FieldKind::Text(TextField::Name))
            .value(&draft.name)
            .section("Profile"),
        FormField::new("user_name", "Username", FieldKind::Text(TextField::Handle))
            .value(&draft.handle)
            .section("Profile"),
        FormField::new("gender", "Gender", FieldKind::GenderToggle)
            .value(draft.gender.as_str())
            .section("Profile"),
        FormField::new("language", "Language", FieldKind::Text(TextField::Language))
            .value(&draft.language)
            .section("Profile"),
        FormField::new("city", "City", FieldKind::Text(TextField::City))
            .value(&draft.city)
            .section("Profile"),
        FormField::new("state", "State", FieldKind::Text(TextField::State))
            .value(&draft.state)
            .section("Profile"),
        FormField::new(
            "categoryInstagram",
            "Instagram Category",
            FieldKind::Text(TextField::InstagramCategory),
        )
        .value(&draft.instagram_category)
        .section("Profile"),
        FormField::new(
            "categoryYouTube",
            "YouTube Category",
            FieldKind::Text(TextField::YouTubeCategory),
        )
        .value(&draft.youtube_category)
        .section("Profile"),
        FormField::new("image", "Image URL", FieldKind::Text(TextField::Image))
            .value(&draft.image)
            .section("Profile"),
        FormField::new(
            "averageLikes",
            "Average Likes",
            FieldKind::Number(NumberField::AverageLikes),
        )
        .value(fmt_number(draft.average_likes))
        .section("Profile"),
        FormField::new(
            "averageViews",
            "Average Views",
            FieldKind::Number(NumberField::AverageViews),
        )
        .value(fmt_number(draft.average_views))
        .section("Profile"),
        FormField::new(
            "averageComments",
            "Average Comments",
            FieldKind::Number(NumberField::AverageComments),
        )
        .value(fmt_number(draft.average_comments))
        .section("Profile"),
        FormField::new(
            "averageEngagement",
            "Average Engagement",
            FieldKind::Number(NumberField::AverageEngagement),
        )
        .value(fmt_number(draft.average_engagement))
        .section("Profile"),
    ];

    platform_rows(&mut rows, Platform::Instagram, &draft.instagram);
    platform_rows(&mut rows, Platform::YouTube, &draft.youtube);
    rows
}

fn platform_rows(rows: &mut Vec<FormField>, platform: Platform, profile: &PlatformProfile) {
    let prefix = wire_prefix(platform);
    let section: &'static str = platform.label();

    rows.push(
        FormField::new(
            format!("{prefix}.followers"),
            "Followers",
            FieldKind::Followers(platform),
        )
        .value(profile.followers.to_string())
        .section(section),
    );

    if platform == Platform::YouTube {
        rows.push(
            FormField::new(
                format!("{prefix}.link"),
                "Channel Link",
                FieldKind::Text(TextField::YouTubeLink),
            )
            .value(profile.link.as_deref().unwrap_or(""))
            .section(section),
        );
    }

    for kind in [ListKind::Gender, ListKind::Age, ListKind::Country] {
        list_rows(rows, platform, kind, profile, section);
    }

    let charges = &profile.collaboration_charges;
    for (field, value) in [
        (ChargeField::Reel, charges.reel),
        (ChargeField::Story, charges.story),
        (ChargeField::Post, charges.post),
        (ChargeField::DigitalRights, charges.one_month_digital_rights),
    ] {
        rows.push(
            FormField::new(
                format!("{prefix}.collaborationCharges.{}", field.leaf()),
                field.label(),
                FieldKind::Charge(platform, field),
            )
            .value(fmt_number(value))
            .section(section),
        );
    }
}

/// Wire path of a distribution list heading, e.g.
/// `instagramData.genderDistribution`. Entry rows extend it with an index,
/// so it doubles as the prefix for scoping their validation errors.
pub fn list_path(target: ListTarget) -> String {
    format!("{}.{}", wire_prefix(target.platform), wire_list(target.kind))
}

fn list_rows(
    rows: &mut Vec<FormField>,
    platform: Platform,
    kind: ListKind,
    profile: &PlatformProfile,
    section: &'static str,
) {
    let target = ListTarget::new(platform, kind);
    let prefix = wire_prefix(platform);
    let list = wire_list(kind);
    let count = profile.list_len(kind);

    rows.push(
        FormField::new(
            list_path(target),
            kind.label(),
            FieldKind::ListHeading(target),
        )
        .value(match count {
            0 => "no entries".to_string(),
            1 => "1 entry".to_string(),
            n => format!("{n} entries"),
        })
        .section(section),
    );

    for index in 0..count {
        let (label_name, label_value, value_name) = entry_row_names(kind, index);
        let (label, value) = entry_parts(profile, kind, index);
        rows.push(
            FormField::new(
                format!("{prefix}.{list}[{index}].{}", entry_label_leaf(kind)),
                label_name,
                FieldKind::EntryLabel(target, index),
            )
            .value(label)
            .section(section),
        );
        rows.push(
            FormField::new(
                format!("{prefix}.{list}[{index}].{value_name}"),
                label_value,
                FieldKind::EntryValue(target, index),
            )
            .value(fmt_number(value))
            .section(section),
        );
    }
}

fn entry_row_names(kind: ListKind, index: usize) -> (String, String, &'static str) {
    let n = index + 1;
    match kind {
        ListKind::Gender => (format!("  Gender #{n}"), format!("  Share #{n} (%)"), "distribution"),
        ListKind::Age => (format!("  Bracket #{n}"), format!("  Share #{n} (%)"), "value"),
        ListKind::Country => (format!("  Country #{n}"), format!("  Share #{n} (%)"), "value"),
    }
}

fn entry_parts(profile: &PlatformProfile, kind: ListKind, index: usize) -> (String, f64) {
    match kind {
        ListKind::Gender => {
            let entry = &profile.gender_distribution[index];
            (entry.gender.clone(), entry.distribution)
        }
        ListKind::Age => {
            let entry = &profile.age_distribution[index];
            (entry.age.clone(), entry.value)
        }
        ListKind::Country => {
            let entry = &profile.audience_by_country[index];
            (entry.name.clone(), entry.value)
        }
    }
}

fn wire_prefix(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => "instagramData",
        Platform::YouTube => "youtubeData",
    }
}

fn wire_list(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Gender => "genderDistribution",
        ListKind::Age => "ageDistribution",
        ListKind::Country => "audienceByCountry",
    }
}

fn entry_label_leaf(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Gender => "gender",
        ListKind::Age => "age",
        ListKind::Country => "name",
    }
}

fn fmt_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit application
// ─────────────────────────────────────────────────────────────────────────────

/// Commit an edit buffer into the draft through the row's field kind.
///
/// Returns the parse error message when the buffer does not fit the field
/// type; range and requiredness rules stay with submit-time validation.
pub fn apply_commit(draft: &mut Influencer, kind: &FieldKind, input: &str) -> Result<(), String> {
    match kind {
        FieldKind::Text(field) => {
            text_patch(*field, input).apply(draft);
            Ok(())
        }
        FieldKind::Number(field) => {
            let value = parse_decimal(input, field.parse_error())?;
            number_patch(*field, value).apply(draft);
            Ok(())
        }
        FieldKind::Followers(platform) => {
            let value: u64 = input
                .trim()
                .parse()
                .map_err(|_| "Followers must be positive!".to_string())?;
            platform_patch(
                *platform,
                PlatformPatch {
                    followers: Some(value),
                    ..PlatformPatch::default()
                },
            )
            .apply(draft);
            Ok(())
        }
        FieldKind::Charge(platform, field) => {
            let value = parse_decimal(input, field.parse_error())?;
            platform_patch(
                *platform,
                PlatformPatch {
                    collaboration_charges: Some(charge_patch(*field, value)),
                    ..PlatformPatch::default()
                },
            )
            .apply(draft);
            Ok(())
        }
        FieldKind::EntryLabel(target, index) => {
            profile_mut(draft, target.platform).update_entry(
                target.kind,
                *index,
                EntryPatch::label(input),
            );
            Ok(())
        }
        FieldKind::EntryValue(target, index) => {
            let value = parse_decimal(input, entry_value_error(target.kind))?;
            profile_mut(draft, target.platform).update_entry(
                target.kind,
                *index,
                EntryPatch::value(value),
            );
            Ok(())
        }
        // Toggled or structural rows never commit a buffer.
        FieldKind::GenderToggle | FieldKind::ListHeading(_) => Ok(()),
    }
}

/// Flip the draft's gender value.
pub fn toggle_gender(draft: &mut Influencer) {
    InfluencerPatch {
        gender: Some(draft.gender.toggled()),
        ..InfluencerPatch::default()
    }
    .apply(draft);
}

/// Append a blank entry to one distribution list.
pub fn add_entry(draft: &mut Influencer, target: ListTarget) {
    profile_mut(draft, target.platform).push_blank(target.kind);
}

/// Remove one distribution entry. Refused when it is the last entry or the
/// index is out of bounds.
pub fn remove_entry(draft: &mut Influencer, target: ListTarget, index: usize) -> bool {
    profile_mut(draft, target.platform).remove_entry(target.kind, index)
}

fn entry_value_error(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Gender => "Distribution must be between 0-100!",
        ListKind::Age | ListKind::Country => "Value must be between 0-100!",
    }
}

fn parse_decimal(input: &str, message: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| message.to_string())
}

fn text_patch(field: TextField, input: &str) -> InfluencerPatch {
    let value = Some(input.to_string());
    match field {
        TextField::Name => InfluencerPatch {
            name: value,
            ..InfluencerPatch::default()
        },
        TextField::Handle => InfluencerPatch {
            handle: value,
            ..InfluencerPatch::default()
        },
        TextField::Language => InfluencerPatch {
            language: value,
            ..InfluencerPatch::default()
        },
        TextField::City => InfluencerPatch {
            city: value,
            ..InfluencerPatch::default()
        },
        TextField::State => InfluencerPatch {
            state: value,
            ..InfluencerPatch::default()
        },
        TextField::InstagramCategory => InfluencerPatch {
            instagram_category: value,
            ..InfluencerPatch::default()
        },
        TextField::YouTubeCategory => InfluencerPatch {
            youtube_category: value,
            ..InfluencerPatch::default()
        },
        TextField::Image => InfluencerPatch {
            image: value,
            ..InfluencerPatch::default()
        },
        TextField::YouTubeLink => InfluencerPatch {
            youtube: Some(PlatformPatch {
                link: value,
                ..PlatformPatch::default()
            }),
            ..InfluencerPatch::default()
        },
    }
}

fn number_patch(field: NumberField, value: f64) -> InfluencerPatch {
    let value = Some(value);
    match field {
        NumberField::AverageLikes => InfluencerPatch {
            average_likes: value,
            ..InfluencerPatch::default()
        },
        NumberField::AverageViews => InfluencerPatch {
            average_views: value,
            ..InfluencerPatch::default()
        },
        NumberField::AverageComments => InfluencerPatch {
            average_comments: value,
            ..InfluencerPatch::default()
        },
        NumberField::AverageEngagement => InfluencerPatch {
            average_engagement: value,
            ..InfluencerPatch::default()
        },
    }
}

fn platform_patch(platform: Platform, patch: PlatformPatch) -> InfluencerPatch {
    match platform {
        Platform::Instagram => InfluencerPatch {
            instagram: Some(patch),
            ..InfluencerPatch::default()
        },
        Platform::YouTube => InfluencerPatch {
            youtube: Some(patch),
            ..InfluencerPatch::default()
        },
    }
}

fn charge_patch(field: ChargeField, value: f64) -> ChargesPatch {
    let value = Some(value);
    match field {
        ChargeField::Reel => ChargesPatch {
            reel: value,
            ..ChargesPatch::default()
        },
        ChargeField::Story => ChargesPatch {
            story: value,
            ..ChargesPatch::default()
        },
        ChargeField::Post => ChargesPatch {
            post: value,
            ..ChargesPatch::default()
        },
        ChargeField::DigitalRights => ChargesPatch {
            one_month_digital_rights: value,
            ..ChargesPatch::default()
        },
    }
}

fn profile_mut(draft: &mut Influencer, platform: Platform) -> &mut PlatformProfile {
    match platform {
        Platform::Instagram => &mut draft.instagram,
        Platform::YouTube => &mut draft.youtube,
    }
}
