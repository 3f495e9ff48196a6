use super::*;

#[test]
fn all_category_admits_everything() {
    assert_eq!(by_category(Category::All).len(), PROJECTS.len());
}

#[test]
fn category_filter_keeps_only_matching_projects() {
    let web = by_category(Category::WebApplication);
    assert_eq!(web.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4, 5]);
    assert!(web.iter().all(|p| p.category == Category::WebApplication));
}

#[test]
fn every_filter_but_all_matches_at_least_one_project() {
    for category in Category::FILTERS {
        assert!(!by_category(category).is_empty(), "{} has no projects", category.label());
    }
}

#[test]
fn latest_returns_flagged_projects_in_order() {
    let ids = latest().iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn project_ids_are_unique() {
    let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn category_labels_are_distinct() {
    let labels = Category::FILTERS.map(Category::label);
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn default_category_is_all() {
    assert_eq!(Category::default(), Category::All);
    assert!(Category::All.admits(Category::Website));
    assert!(!Category::MobileApp.admits(Category::Website));
}
