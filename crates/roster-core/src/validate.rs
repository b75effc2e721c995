//! Declarative draft validation
//!
//! Pure function from a draft record to a list of field-path/message
//! pairs. Paths use the wire field names with positional indices
//! (`youtubeData.genderDistribution[1].distribution`) so they line up with
//! what the API reports. No form binding, no I/O.

use crate::model::{Influencer, PlatformProfile, COUNTRY_CATEGORY};

/// One schema violation, addressed by wire field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a draft against the submission schema. Returns one error per
/// offending field path; an empty result means the draft may be submitted.
pub fn validate(draft: &Influencer) -> Vec<FieldError> {
    let mut errors = Vec::new();

    require_non_empty(&mut errors, "name", &draft.name, "Name is required!");
    require_non_empty(
        &mut errors,
        "categoryInstagram",
        &draft.instagram_category,
        "Instagram category is required!",
    );
    require_non_empty(
        &mut errors,
        "categoryYouTube",
        &draft.youtube_category,
        "YouTube category is required!",
    );
    require_non_empty(&mut errors, "user_name", &draft.handle, "Username is required!");
    require_non_empty(&mut errors, "city", &draft.city, "City is required!");
    require_non_empty(&mut errors, "state", &draft.state, "State is required!");
    require_non_empty(&mut errors, "language", &draft.language, "Language is required!");

    validate_platform(&mut errors, "instagramData", &draft.instagram);
    validate_platform(&mut errors, "youtubeData", &draft.youtube);

    // The YouTube link is required and must parse as a URL; Instagram has
    // no link field in the schema.
    let link = draft.youtube.link.as_deref().unwrap_or("");
    require_url(
        &mut errors,
        "youtubeData.link",
        link,
        "Valid YouTube URL is required!",
    );

    require_min(
        &mut errors,
        "averageLikes",
        draft.average_likes,
        "Average likes must be positive!",
    );
    require_min(
        &mut errors,
        "averageViews",
        draft.average_views,
        "Average views must be positive!",
    );
    require_min(
        &mut errors,
        "averageComments",
        draft.average_comments,
        "Average comments must be positive!",
    );
    require_min(
        &mut errors,
        "averageEngagement",
        draft.average_engagement,
        "Average engagement must be positive!",
    );
    require_url(&mut errors, "image", &draft.image, "Valid image URL is required!");

    errors
}

fn validate_platform(errors: &mut Vec<FieldError>, prefix: &str, profile: &PlatformProfile) {
    if profile.gender_distribution.is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.genderDistribution"),
            "At least one gender distribution is required!",
        ));
    }
    for (i, entry) in profile.gender_distribution.iter().enumerate() {
        require_non_empty(
            errors,
            format!("{prefix}.genderDistribution[{i}].gender"),
            &entry.gender,
            "Gender is required!",
        );
        require_percentage(
            errors,
            format!("{prefix}.genderDistribution[{i}].distribution"),
            entry.distribution,
            "Distribution must be between 0-100!",
        );
    }

    if profile.age_distribution.is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.ageDistribution"),
            "At least one age distribution is required!",
        ));
    }
    for (i, entry) in profile.age_distribution.iter().enumerate() {
        require_non_empty(
            errors,
            format!("{prefix}.ageDistribution[{i}].age"),
            &entry.age,
            "Age range is required!",
        );
        require_percentage(
            errors,
            format!("{prefix}.ageDistribution[{i}].value"),
            entry.value,
            "Value must be between 0-100!",
        );
    }

    if profile.audience_by_country.is_empty() {
        errors.push(FieldError::new(
            format!("{prefix}.audienceByCountry"),
            "At least one country is required!",
        ));
    }
    for (i, entry) in profile.audience_by_country.iter().enumerate() {
        if entry.category != COUNTRY_CATEGORY {
            errors.push(FieldError::new(
                format!("{prefix}.audienceByCountry[{i}].category"),
                "Country category is invalid!",
            ));
        }
        require_non_empty(
            errors,
            format!("{prefix}.audienceByCountry[{i}].name"),
            &entry.name,
            "Country name is required!",
        );
        require_percentage(
            errors,
            format!("{prefix}.audienceByCountry[{i}].value"),
            entry.value,
            "Value must be between 0-100!",
        );
    }

    let charges = &profile.collaboration_charges;
    require_min(
        errors,
        format!("{prefix}.collaborationCharges.reel"),
        charges.reel,
        "Reel charge must be positive!",
    );
    require_min(
        errors,
        format!("{prefix}.collaborationCharges.story"),
        charges.story,
        "Story charge must be positive!",
    );
    require_min(
        errors,
        format!("{prefix}.collaborationCharges.post"),
        charges.post,
        "Post charge must be positive!",
    );
    require_min(
        errors,
        format!("{prefix}.collaborationCharges.oneMonthDigitalRights"),
        charges.one_month_digital_rights,
        "Digital rights charge must be positive!",
    );
}

fn require_non_empty(
    errors: &mut Vec<FieldError>,
    path: impl Into<String>,
    value: &str,
    message: &str,
) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, message));
    }
}

fn require_min(errors: &mut Vec<FieldError>, path: impl Into<String>, value: f64, message: &str) {
    if value < 0.0 {
        errors.push(FieldError::new(path, message));
    }
}

fn require_percentage(
    errors: &mut Vec<FieldError>,
    path: impl Into<String>,
    value: f64,
    message: &str,
) {
    if !(0.0..=100.0).contains(&value) {
        errors.push(FieldError::new(path, message));
    }
}

fn require_url(errors: &mut Vec<FieldError>, path: impl Into<String>, value: &str, message: &str) {
    if url::Url::parse(value).is_err() {
        errors.push(FieldError::new(path, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AgeShare, CountryShare, GenderShare, Influencer};

    /// A draft that satisfies every rule.
    fn valid_draft() -> Influencer {
        let mut draft = Influencer::blank();
        draft.name = "Asha Rao".to_string();
        draft.handle = "asha.codes".to_string();
        draft.city = "Pune".to_string();
        draft.state = "Maharashtra".to_string();
        draft.language = "Hindi".to_string();
        draft.instagram_category = "Tech".to_string();
        draft.youtube_category = "Education".to_string();
        draft.image = "https://cdn.example.com/asha.jpg".to_string();

        for profile in [&mut draft.instagram, &mut draft.youtube] {
            profile.gender_distribution = vec![GenderShare::new("Female", 58.0)];
            profile.age_distribution = vec![AgeShare::new("18-24", 61.0)];
            profile.audience_by_country = vec![CountryShare::new("India", 90.0)];
        }
        draft.youtube.link = Some("https://youtube.com/@asha".to_string());
        draft
    }

    fn message_at<'a>(errors: &'a [FieldError], path: &str) -> Option<&'a str> {
        errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    #[test]
    fn test_valid_draft_produces_no_errors() {
        assert_eq!(validate(&valid_draft()), Vec::new());
    }

    #[test]
    fn test_required_strings_report_exact_messages() {
        let errors = validate(&Influencer::blank());

        assert_eq!(message_at(&errors, "name"), Some("Name is required!"));
        assert_eq!(message_at(&errors, "user_name"), Some("Username is required!"));
        assert_eq!(message_at(&errors, "city"), Some("City is required!"));
        assert_eq!(message_at(&errors, "state"), Some("State is required!"));
        assert_eq!(message_at(&errors, "language"), Some("Language is required!"));
        assert_eq!(
            message_at(&errors, "categoryInstagram"),
            Some("Instagram category is required!")
        );
        assert_eq!(
            message_at(&errors, "categoryYouTube"),
            Some("YouTube category is required!")
        );
    }

    #[test]
    fn test_whitespace_only_string_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validate(&draft);
        assert_eq!(message_at(&errors, "name"), Some("Name is required!"));
    }

    #[test]
    fn test_empty_distribution_lists_report_list_level_errors() {
        let errors = validate(&Influencer::blank());

        assert_eq!(
            message_at(&errors, "instagramData.genderDistribution"),
            Some("At least one gender distribution is required!")
        );
        assert_eq!(
            message_at(&errors, "instagramData.ageDistribution"),
            Some("At least one age distribution is required!")
        );
        assert_eq!(
            message_at(&errors, "youtubeData.audienceByCountry"),
            Some("At least one country is required!")
        );
    }

    #[test]
    fn test_out_of_range_percentage_is_flagged_per_entry() {
        let mut draft = valid_draft();
        draft.youtube.gender_distribution = vec![
            GenderShare::new("Female", 58.0),
            GenderShare::new("Male", 142.0),
        ];
        let errors = validate(&draft);

        assert_eq!(
            message_at(&errors, "youtubeData.genderDistribution[1].distribution"),
            Some("Distribution must be between 0-100!")
        );
        assert!(message_at(&errors, "youtubeData.genderDistribution[0].distribution").is_none());
    }

    #[test]
    fn test_negative_percentage_is_flagged() {
        let mut draft = valid_draft();
        draft.instagram.age_distribution[0].value = -1.0;
        let errors = validate(&draft);
        assert_eq!(
            message_at(&errors, "instagramData.ageDistribution[0].value"),
            Some("Value must be between 0-100!")
        );
    }

    #[test]
    fn test_blank_entry_labels_are_flagged() {
        let mut draft = valid_draft();
        draft.instagram.gender_distribution[0].gender = String::new();
        draft.youtube.age_distribution[0].age = String::new();
        draft.youtube.audience_by_country[0].name = String::new();
        let errors = validate(&draft);

        assert_eq!(
            message_at(&errors, "instagramData.genderDistribution[0].gender"),
            Some("Gender is required!")
        );
        assert_eq!(
            message_at(&errors, "youtubeData.ageDistribution[0].age"),
            Some("Age range is required!")
        );
        assert_eq!(
            message_at(&errors, "youtubeData.audienceByCountry[0].name"),
            Some("Country name is required!")
        );
    }

    #[test]
    fn test_negative_charges_and_aggregates_are_flagged() {
        let mut draft = valid_draft();
        draft.instagram.collaboration_charges.reel = -100.0;
        draft.youtube.collaboration_charges.one_month_digital_rights = -1.0;
        draft.average_engagement = -0.5;
        let errors = validate(&draft);

        assert_eq!(
            message_at(&errors, "instagramData.collaborationCharges.reel"),
            Some("Reel charge must be positive!")
        );
        assert_eq!(
            message_at(&errors, "youtubeData.collaborationCharges.oneMonthDigitalRights"),
            Some("Digital rights charge must be positive!")
        );
        assert_eq!(
            message_at(&errors, "averageEngagement"),
            Some("Average engagement must be positive!")
        );
    }

    #[test]
    fn test_url_fields_must_parse() {
        let mut draft = valid_draft();
        draft.image = "not a url".to_string();
        draft.youtube.link = Some("also not a url".to_string());
        let errors = validate(&draft);

        assert_eq!(message_at(&errors, "image"), Some("Valid image URL is required!"));
        assert_eq!(
            message_at(&errors, "youtubeData.link"),
            Some("Valid YouTube URL is required!")
        );
    }

    #[test]
    fn test_missing_youtube_link_is_an_error() {
        let mut draft = valid_draft();
        draft.youtube.link = None;
        let errors = validate(&draft);
        assert_eq!(
            message_at(&errors, "youtubeData.link"),
            Some("Valid YouTube URL is required!")
        );
    }

    #[test]
    fn test_foreign_country_category_is_flagged() {
        let mut draft = valid_draft();
        draft.instagram.audience_by_country[0].category = "region".to_string();
        let errors = validate(&draft);
        assert_eq!(
            message_at(&errors, "instagramData.audienceByCountry[0].category"),
            Some("Country category is invalid!")
        );
    }

    #[test]
    fn test_boundary_percentages_are_accepted() {
        let mut draft = valid_draft();
        draft.instagram.gender_distribution[0].distribution = 0.0;
        draft.youtube.gender_distribution[0].distribution = 100.0;
        assert_eq!(validate(&draft), Vec::new());
    }

    #[test]
    fn test_percentages_need_not_sum_to_100() {
        let mut draft = valid_draft();
        draft.instagram.gender_distribution = vec![
            GenderShare::new("Male", 80.0),
            GenderShare::new("Female", 80.0),
        ];
        assert_eq!(validate(&draft), Vec::new());
    }
}
