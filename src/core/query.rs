use crate::core::collation::sort_by_locale;
use crate::core::{Catalog, Course, CourseDetail};

pub const BSIS: &str = "BSIS";
pub const BSIT: &str = "BSIT";

/// Tags that mark a course as backend/systems oriented.
pub const BACKEND_TAGS: [&str; 6] = [
    "Database",
    "System",
    "Software",
    "Enterprise",
    "Web",
    "Information",
];

/// All courses in catalog order: year group, then level, then position in the level list.
pub fn flatten_all(catalog: &Catalog) -> Vec<&Course> {
    catalog
        .year_groups()
        .iter()
        .flat_map(|group| group.courses())
        .collect()
}

pub fn by_program_tag<'a>(catalog: &'a Catalog, tag: &str) -> Vec<&'a Course> {
    flatten_all(catalog)
        .into_iter()
        .filter(|course| course.has_tag(tag))
        .collect()
}

pub fn is_backend(course: &Course) -> bool {
    course
        .tags
        .iter()
        .any(|tag| BACKEND_TAGS.contains(&tag.as_str()))
}

/// Backend courses sorted by description. Equal descriptions keep catalog order.
pub fn backend_courses_sorted(catalog: &Catalog) -> Vec<&Course> {
    let mut courses: Vec<&Course> = flatten_all(catalog)
        .into_iter()
        .filter(|course| is_backend(course))
        .collect();

    sort_by_locale(&mut courses, |course| course.description.as_str());
    courses
}

pub fn course_details(catalog: &Catalog) -> Vec<CourseDetail> {
    flatten_all(catalog)
        .into_iter()
        .map(|course| {
            tracing::debug!(
                "Description: {}, Tags: {}, Name: {:?}, Specialization: {:?}",
                course.description,
                course.tags.join(","),
                course.name(),
                course.specialization()
            );
            if course.tags.len() < 2 {
                tracing::warn!(
                    "Course '{}' has {} tag(s); detail will omit missing fields",
                    course.description,
                    course.tags.len()
                );
            }
            CourseDetail::from(course)
        })
        .collect()
}
