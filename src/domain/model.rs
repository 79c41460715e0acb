use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub description: String,
    pub tags: Vec<String>,
}

impl Course {
    pub fn new(description: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 第一個標籤按慣例為課程名稱
    pub fn name(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// 第二個標籤按慣例為專業方向
    pub fn specialization(&self) -> Option<&str> {
        self.tags.get(1).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    First,
    Second,
    Third,
    Fourth,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::First, Level::Second, Level::Third, Level::Fourth];

    pub fn label(self) -> &'static str {
        match self {
            Level::First => "1st Year",
            Level::Second => "2nd Year",
            Level::Third => "3rd Year",
            Level::Fourth => "4th Year",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One academic year's courses split into the four level buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearGroup {
    #[serde(rename = "1st Year")]
    pub first_year: Vec<Course>,
    #[serde(rename = "2nd Year")]
    pub second_year: Vec<Course>,
    #[serde(rename = "3rd Year")]
    pub third_year: Vec<Course>,
    #[serde(rename = "4th Year")]
    pub fourth_year: Vec<Course>,
}

impl YearGroup {
    pub fn level(&self, level: Level) -> &[Course] {
        match level {
            Level::First => &self.first_year,
            Level::Second => &self.second_year,
            Level::Third => &self.third_year,
            Level::Fourth => &self.fourth_year,
        }
    }

    /// Level lists in "1st Year".."4th Year" order.
    pub fn levels(&self) -> impl Iterator<Item = (Level, &[Course])> + '_ {
        Level::ALL.into_iter().map(move |level| (level, self.level(level)))
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.levels().flat_map(|(_, courses)| courses.iter())
    }

    pub fn course_count(&self) -> usize {
        self.levels().map(|(_, courses)| courses.len()).sum()
    }
}

/// The full static catalog. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    year_groups: Vec<YearGroup>,
}

impl Catalog {
    pub fn new(year_groups: Vec<YearGroup>) -> Self {
        Self { year_groups }
    }

    pub fn year_groups(&self) -> &[YearGroup] {
        &self.year_groups
    }

    pub fn course_count(&self) -> usize {
        self.year_groups.iter().map(YearGroup::course_count).sum()
    }
}

/// Name/specialization pair derived from a course's first two tags.
/// Missing values are left out of the JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl From<&Course> for CourseDetail {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name().map(str::to_string),
            specialization: course.specialization().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_group_uses_level_labels() {
        let json = r#"{
            "1st Year": [{"description": "Intro", "tags": ["BSIS", "Database"]}],
            "2nd Year": [],
            "3rd Year": [],
            "4th Year": [{"description": "Capstone", "tags": []}]
        }"#;

        let group: YearGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.first_year.len(), 1);
        assert_eq!(group.fourth_year[0].description, "Capstone");
        assert_eq!(group.course_count(), 2);

        let labels: Vec<&str> = group.levels().map(|(level, _)| level.label()).collect();
        assert_eq!(labels, vec!["1st Year", "2nd Year", "3rd Year", "4th Year"]);
    }

    #[test]
    fn test_year_group_rejects_missing_level() {
        let json = r#"{"1st Year": [], "2nd Year": [], "3rd Year": []}"#;
        let err = serde_json::from_str::<YearGroup>(json).unwrap_err();
        assert!(err.to_string().contains("4th Year"));
    }

    #[test]
    fn test_year_group_rejects_unknown_level() {
        let json = r#"{"1st Year": [], "2nd Year": [], "3rd Year": [], "4th Year": [], "5th Year": []}"#;
        assert!(serde_json::from_str::<YearGroup>(json).is_err());
    }

    #[test]
    fn test_course_requires_tags() {
        let json = r#"{"description": "No tags"}"#;
        assert!(serde_json::from_str::<Course>(json).is_err());
    }

    #[test]
    fn test_course_detail_omits_missing_tags() {
        let course = Course::new("Lonely", &["BSIT"]);
        let detail = CourseDetail::from(&course);

        assert_eq!(detail.name.as_deref(), Some("BSIT"));
        assert_eq!(detail.specialization, None);
        assert_eq!(serde_json::to_string(&detail).unwrap(), r#"{"name":"BSIT"}"#);
    }

    #[test]
    fn test_catalog_serializes_as_plain_array() {
        let catalog = Catalog::new(vec![YearGroup::default()]);
        let json = serde_json::to_value(&catalog).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["3rd Year"], serde_json::json!([]));
    }
}
