use crate::core::{Catalog, Result};

impl Catalog {
    /// 解析 JSON 格式的課程目錄。結構檢查（四個年級欄位、tags）由 serde 負責
    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.warn_blank_descriptions();

        tracing::debug!(
            "Parsed catalog: {} year groups, {} courses",
            catalog.year_groups().len(),
            catalog.course_count()
        );
        Ok(catalog)
    }

    fn warn_blank_descriptions(&self) {
        for (group_index, group) in self.year_groups().iter().enumerate() {
            for (level, courses) in group.levels() {
                for (course_index, course) in courses.iter().enumerate() {
                    if course.description.trim().is_empty() {
                        tracing::warn!(
                            "Course at year_groups[{}].{}[{}] has a blank description",
                            group_index,
                            level,
                            course_index
                        );
                    }
                }
            }
        }
    }
}
