//! Lifestyle questionnaire answers and their validation.

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult};

pub const AGE_RANGE: (u8, u8) = (18, 100);
pub const CAFFEINE_RANGE: (u8, u8) = (0, 10);

macro_rules! answer_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const OPTIONS: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn parse(field: &str, value: &str) -> ApiResult<Self> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(ApiError::validation(
                        field,
                        format!("'{}' is not one of {}", other, Self::OPTIONS.join(", ")),
                    )),
                }
            }
        }
    };
}

answer_enum!(Sex {
    Male => "male",
    Female => "female",
    Other => "other",
});

answer_enum!(ActivityLevel {
    Sedentary => "sedentary",
    Light => "light",
    Moderate => "moderate",
    Active => "active",
    VeryActive => "very_active",
});

answer_enum!(DietType {
    Omnivore => "omnivore",
    Vegetarian => "vegetarian",
    Vegan => "vegan",
    Pescatarian => "pescatarian",
    Keto => "keto",
    Other => "other",
});

answer_enum!(AlcoholFrequency {
    Never => "never",
    Rare => "rare",
    Occasional => "occasional",
    Moderate => "moderate",
    Frequent => "frequent",
});

pub const DIGESTIVE_ISSUE_OPTIONS: &[&str] =
    &["bloating", "gas", "diarrhea", "constipation", "heartburn", "none"];
pub const HEALTH_GOAL_OPTIONS: &[&str] =
    &["weight_loss", "weight_gain", "energy", "sleep", "digestion", "muscle", "general"];
pub const SUPPLEMENT_OPTIONS: &[&str] =
    &["vitamin_d", "vitamin_b12", "iron", "omega_3", "methylfolate", "none"];
pub const ALLERGY_OPTIONS: &[&str] = &["dairy", "gluten", "nuts", "shellfish", "soy", "eggs", "none"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub age: u8,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    pub alcohol_frequency: AlcoholFrequency,
    pub caffeine_cups_per_day: u8,
    #[serde(default)]
    pub digestive_issues: Vec<String>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub current_supplements: Vec<String>,
    #[serde(default)]
    pub known_allergies: Vec<String>,
}

/// Untrusted submission as it arrives from a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnswers {
    pub age: Option<i64>,
    pub sex: Option<String>,
    pub activity_level: Option<String>,
    pub diet_type: Option<String>,
    pub alcohol_frequency: Option<String>,
    pub caffeine_cups_per_day: Option<i64>,
    #[serde(default)]
    pub digestive_issues: Vec<String>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub current_supplements: Vec<String>,
    #[serde(default)]
    pub known_allergies: Vec<String>,
}

fn required<T>(field: &str, value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::validation(field, "is required"))
}

fn in_range(field: &str, value: i64, (min, max): (u8, u8)) -> ApiResult<u8> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ApiError::validation(
            field,
            format!("{} is outside {}-{}", value, min, max),
        ));
    }
    Ok(value as u8)
}

/// Lower-cases, snake-cases and de-duplicates a multi-select answer; "none" is dropped.
pub fn normalize_set(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let item = value
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '-'], "_");
        if item.is_empty() || item == "none" || out.contains(&item) {
            continue;
        }
        out.push(item);
    }
    out
}

impl RawAnswers {
    pub fn validate(self) -> ApiResult<QuestionnaireAnswers> {
        let age = in_range("age", required("age", self.age)?, AGE_RANGE)?;
        let caffeine = in_range(
            "caffeine_cups_per_day",
            self.caffeine_cups_per_day.unwrap_or(0),
            CAFFEINE_RANGE,
        )?;
        Ok(QuestionnaireAnswers {
            age,
            sex: Sex::parse("sex", &required("sex", self.sex)?)?,
            activity_level: ActivityLevel::parse(
                "activity_level",
                &required("activity_level", self.activity_level)?,
            )?,
            diet_type: DietType::parse("diet_type", &required("diet_type", self.diet_type)?)?,
            alcohol_frequency: AlcoholFrequency::parse(
                "alcohol_frequency",
                &required("alcohol_frequency", self.alcohol_frequency)?,
            )?,
            caffeine_cups_per_day: caffeine,
            digestive_issues: normalize_set(&self.digestive_issues),
            health_goals: normalize_set(&self.health_goals),
            current_supplements: normalize_set(&self.current_supplements),
            known_allergies: normalize_set(&self.known_allergies),
        })
    }
}

impl QuestionnaireAnswers {
    /// Parses and validates a JSON submission.
    pub fn from_json(text: &str) -> ApiResult<Self> {
        let raw: RawAnswers = serde_json::from_str(text)
            .map_err(|e| ApiError::validation("answers", e.to_string()))?;
        raw.validate()
    }

    /// Re-checks ranges on an already typed value, e.g. one built in code.
    pub fn validated(mut self) -> ApiResult<Self> {
        in_range("age", i64::from(self.age), AGE_RANGE)?;
        in_range(
            "caffeine_cups_per_day",
            i64::from(self.caffeine_cups_per_day),
            CAFFEINE_RANGE,
        )?;
        self.digestive_issues = normalize_set(&self.digestive_issues);
        self.health_goals = normalize_set(&self.health_goals);
        self.current_supplements = normalize_set(&self.current_supplements);
        self.known_allergies = normalize_set(&self.known_allergies);
        Ok(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Number,
    Select,
    Multiselect,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

/// Form description for UIs rendering the questionnaire.
pub fn template() -> Vec<TemplateField> {
    let number = |name, label, (min, max): (u8, u8)| TemplateField {
        name,
        kind: FieldKind::Number,
        label,
        min: Some(min),
        max: Some(max),
        options: &[],
    };
    let choice = |name, kind, label, options| TemplateField {
        name,
        kind,
        label,
        min: None,
        max: None,
        options,
    };
    vec![
        number("age", "Age", AGE_RANGE),
        choice("sex", FieldKind::Select, "Biological Sex", Sex::OPTIONS),
        choice("activity_level", FieldKind::Select, "Activity Level", ActivityLevel::OPTIONS),
        choice("diet_type", FieldKind::Select, "Diet Type", DietType::OPTIONS),
        choice("alcohol_frequency", FieldKind::Select, "Alcohol", AlcoholFrequency::OPTIONS),
        number("caffeine_cups_per_day", "Caffeine (cups/day)", CAFFEINE_RANGE),
        choice("digestive_issues", FieldKind::Multiselect, "Digestive Issues", DIGESTIVE_ISSUE_OPTIONS),
        choice("health_goals", FieldKind::Multiselect, "Health Goals", HEALTH_GOAL_OPTIONS),
        choice("current_supplements", FieldKind::Multiselect, "Supplements", SUPPLEMENT_OPTIONS),
        choice("known_allergies", FieldKind::Multiselect, "Allergies", ALLERGY_OPTIONS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "age": 34, "sex": "female", "activity_level": "Moderate", "diet_type": "vegan",
        "alcohol_frequency": "rare", "caffeine_cups_per_day": 3,
        "digestive_issues": ["Bloating", "none", "bloating"],
        "current_supplements": ["Vitamin D"]
    }"#;

    #[test]
    fn parses_and_normalizes() {
        let answers = QuestionnaireAnswers::from_json(VALID).unwrap();
        assert_eq!(answers.age, 34);
        assert_eq!(answers.activity_level, ActivityLevel::Moderate);
        assert_eq!(answers.diet_type, DietType::Vegan);
        assert_eq!(answers.digestive_issues, vec!["bloating".to_string()]);
        assert_eq!(answers.current_supplements, vec!["vitamin_d".to_string()]);
        assert!(answers.health_goals.is_empty());
    }

    #[test]
    fn rejects_out_of_range_age() {
        let text = VALID.replace("\"age\": 34", "\"age\": 17");
        match QuestionnaireAnswers::from_json(&text) {
            Err(ApiError::Validation { field, .. }) => assert_eq!(field, "age"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_caffeine() {
        let text = VALID.replace("\"caffeine_cups_per_day\": 3", "\"caffeine_cups_per_day\": 11");
        match QuestionnaireAnswers::from_json(&text) {
            Err(ApiError::Validation { field, .. }) => assert_eq!(field, "caffeine_cups_per_day"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_option() {
        let text = VALID.replace("\"vegan\"", "\"carnivore\"");
        match QuestionnaireAnswers::from_json(&text) {
            Err(ApiError::Validation { field, message }) => {
                assert_eq!(field, "diet_type");
                assert!(message.contains("omnivore"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_missing_field() {
        let text = VALID.replace("\"sex\": \"female\",", "");
        assert!(matches!(
            QuestionnaireAnswers::from_json(&text),
            Err(ApiError::Validation { .. })
        ));
    }

    #[test]
    fn template_lists_every_field() {
        let fields = template();
        assert_eq!(fields.len(), 10);
        let diet = fields.iter().find(|f| f.name == "diet_type").unwrap();
        assert!(diet.options.contains(&"pescatarian"));
    }
}
