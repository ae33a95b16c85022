use interview_core::model::CategoryName;
use services::CategoryOption;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub name: CategoryName,
    pub label: String,
    pub count_label: String,
    pub selected: bool,
}

#[must_use]
pub fn map_category_options(
    options: &[CategoryOption],
    selected: &[CategoryName],
) -> Vec<CategoryOptionVm> {
    options
        .iter()
        .map(|option| CategoryOptionVm {
            name: option.name.clone(),
            label: option.name.to_string(),
            count_label: match option.question_count {
                1 => "1 question".to_string(),
                n => format!("{n} questions"),
            },
            selected: selected.contains(&option.name),
        })
        .collect()
}
