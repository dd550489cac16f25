//! Filter Factory
//!
//! Constructors that capture their configuration and return a reusable
//! predicate over `Scientist`. No configuration is validated: an empty set
//! or an inverted era simply yields a predicate that is always false.

use crate::data::Scientist;
use rustc_hash::FxHashSet;

/// Inclusive birth-year range `[start_year, end_year]`
pub fn create_era_filter(start_year: i32, end_year: i32) -> impl Fn(&Scientist) -> bool + Clone {
    move |scientist: &Scientist| (start_year..=end_year).contains(&scientist.birth_year)
}

/// Nationality membership (exact string match)
pub fn create_nationality_filter<I, S>(nationalities: I) -> impl Fn(&Scientist) -> bool + Clone
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: FxHashSet<String> = nationalities.into_iter().map(Into::into).collect();
    move |scientist: &Scientist| allowed.contains(&scientist.nationality)
}

/// Field membership in the union of all groups.
///
/// Group labels are ignored; only the fields matter.
pub fn create_field_group_filter<G, L, F, S>(groups: G) -> impl Fn(&Scientist) -> bool + Clone
where
    G: IntoIterator<Item = (L, F)>,
    F: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: FxHashSet<String> = groups
        .into_iter()
        .flat_map(|(_label, members)| members.into_iter().map(Into::into))
        .collect();
    move |scientist: &Scientist| fields.contains(&scientist.field)
}

/// Scientists passing `predicate`, in input order
pub fn apply_filter<P>(scientists: &[Scientist], predicate: P) -> Vec<Scientist>
where
    P: Fn(&Scientist) -> bool,
{
    scientists.iter().filter(|s| predicate(*s)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScientistData;
    use std::collections::HashMap;

    fn names(scientists: &[Scientist]) -> Vec<&str> {
        scientists.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_era_filter_inclusive() {
        let data = ScientistData::sample();
        let early = apply_filter(&data.scientists, create_era_filter(1900, 1915));
        assert_eq!(
            names(&early),
            vec![
                "Linus Pauling",
                "Barbara McClintock",
                "Dorothy Hodgkin",
                "Chien-Shiung Wu",
                "Rita Levi-Montalcini",
            ]
        );

        // Both ends inclusive
        let exact = apply_filter(&data.scientists, create_era_filter(1867, 1867));
        assert_eq!(names(&exact), vec!["Marie Curie"]);
    }

    #[test]
    fn test_inverted_era_matches_nothing() {
        let data = ScientistData::sample();
        assert!(apply_filter(&data.scientists, create_era_filter(1950, 1900)).is_empty());
    }

    #[test]
    fn test_nationality_filter() {
        let data = ScientistData::sample();
        let filter = create_nationality_filter(["American", "British"]);
        let selected = apply_filter(&data.scientists, &filter);

        assert_eq!(selected.len(), 7);
        assert!(selected
            .iter()
            .all(|s| s.nationality == "American" || s.nationality == "British"));
        assert_eq!(selected[0].name, "Linus Pauling");

        let none = create_nationality_filter(Vec::<String>::new());
        assert!(apply_filter(&data.scientists, none).is_empty());
    }

    #[test]
    fn test_field_group_filter() {
        let data = ScientistData::sample();
        let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
        groups.insert("life", vec!["Biology"]);
        groups.insert("formal", vec!["Mathematics"]);

        let selected = apply_filter(&data.scientists, create_field_group_filter(groups));
        assert_eq!(selected.len(), 5);
        assert!(selected.iter().all(|s| s.field == "Biology" || s.field == "Mathematics"));
    }

    #[test]
    fn test_empty_field_groups_match_nothing() {
        let data = ScientistData::sample();

        let no_groups: HashMap<&str, Vec<&str>> = HashMap::new();
        assert!(apply_filter(&data.scientists, create_field_group_filter(no_groups)).is_empty());

        let mut hollow: HashMap<&str, Vec<&str>> = HashMap::new();
        hollow.insert("life", Vec::new());
        hollow.insert("formal", Vec::new());
        assert!(apply_filter(&data.scientists, create_field_group_filter(hollow)).is_empty());
    }

    #[test]
    fn test_field_under_two_labels() {
        let data = ScientistData::sample();
        let groups = vec![
            ("physical", vec!["Physics"]),
            ("nobel_core", vec!["Physics", "Chemistry"]),
        ];

        let selected = apply_filter(&data.scientists, create_field_group_filter(groups));
        assert_eq!(selected.len(), 7);
        assert_eq!(selected.iter().filter(|s| s.field == "Physics").count(), 4);
        assert_eq!(names(&selected)[0], "Marie Curie");
    }

    #[test]
    fn test_filter_is_reusable() {
        let data = ScientistData::sample();
        let filter = create_era_filter(1910, 1930);
        let first = apply_filter(&data.scientists, filter.clone());
        let second = apply_filter(&data.scientists, filter);
        assert_eq!(first, second);
    }
}
