//! Built-in split templates offered during onboarding.

use crate::models::MuscleGroup;

/// A named split layout: ordered day titles plus a sensible default set of
/// training weekdays (0=Sunday..6=Saturday).
#[derive(Debug, Clone)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub day_titles: &'static [&'static str],
    pub default_weekdays: &'static [u8],
}

pub const CATALOG: &[SplitTemplate] = &[
    SplitTemplate {
        name: "Push / Pull / Legs",
        day_titles: &["Push", "Pull", "Legs"],
        default_weekdays: &[1, 3, 5],
    },
    SplitTemplate {
        name: "Upper / Lower",
        day_titles: &["Upper", "Lower"],
        default_weekdays: &[1, 4],
    },
    SplitTemplate {
        name: "Full-Body 3-Day",
        day_titles: &["Full Body"],
        default_weekdays: &[1, 3, 5],
    },
    SplitTemplate {
        name: "Arnold (PPL x2)",
        day_titles: &["Chest & Back", "Shoulders & Arms", "Legs"],
        default_weekdays: &[1, 2, 3, 4, 5, 6],
    },
];

pub fn find(name: &str) -> Option<&'static SplitTemplate> {
    CATALOG
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Muscle groups that fit a day title, used to pre-fill a new split day
/// with catalog exercises. Unrecognized titles get the whole catalog.
pub fn recommended_muscle_groups(day_title: &str) -> Vec<MuscleGroup> {
    let title = day_title.to_lowercase();

    if title.contains("push") {
        vec![MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps]
    } else if title.contains("pull") {
        vec![MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms]
    } else if title.contains("leg") {
        vec![MuscleGroup::Legs]
    } else if title.contains("chest") && title.contains("back") {
        vec![MuscleGroup::Chest, MuscleGroup::Back]
    } else if title.contains("chest") {
        vec![MuscleGroup::Chest]
    } else if title.contains("back") {
        vec![MuscleGroup::Back]
    } else if title.contains("shoulder") {
        vec![MuscleGroup::Shoulders, MuscleGroup::Biceps, MuscleGroup::Triceps]
    } else if title.contains("arm") || title.contains("bicep") || title.contains("tricep") {
        vec![MuscleGroup::Biceps, MuscleGroup::Triceps]
    } else if title.contains("core") || title.contains("ab") {
        vec![MuscleGroup::Core]
    } else if title.contains("full") {
        vec![MuscleGroup::FullBody]
    } else {
        MuscleGroup::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("upper / lower").is_some());
        assert!(find("No Such Split").is_none());
    }

    #[test]
    fn test_recommended_groups_for_common_titles() {
        assert_eq!(
            recommended_muscle_groups("Push"),
            vec![MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps]
        );
        assert_eq!(recommended_muscle_groups("Leg Day"), vec![MuscleGroup::Legs]);
        assert_eq!(
            recommended_muscle_groups("Chest & Back"),
            vec![MuscleGroup::Chest, MuscleGroup::Back]
        );
        assert_eq!(
            recommended_muscle_groups("Something Else").len(),
            MuscleGroup::ALL.len()
        );
    }

    #[test]
    fn test_catalog_templates_are_well_formed() {
        for template in CATALOG {
            assert!(!template.day_titles.is_empty());
            assert!(template.default_weekdays.iter().all(|&d| d < 7));
        }
    }
}
