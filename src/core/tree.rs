use std::collections::HashSet;

use crate::core::models::Folder;

/// A folder paired with its nesting depth (number of ancestors).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFolder<'a> {
    pub folder: &'a Folder,
    pub depth: usize,
}

/// Flatten the forest in pre-order: each parent is immediately followed by
/// its children, in their given order.
pub fn flatten(forest: &[Folder]) -> Vec<FlatFolder<'_>> {
    fn walk<'a>(folders: &'a [Folder], depth: usize, out: &mut Vec<FlatFolder<'a>>) {
        for folder in folders {
            out.push(FlatFolder { folder, depth });
            walk(&folder.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(forest, 0, &mut out);
    out
}

/// Find a folder anywhere in the forest by its exact composite id.
pub fn find<'a>(forest: &'a [Folder], id: &str) -> Option<&'a Folder> {
    for folder in forest {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find(&folder.children, id) {
            return Some(found);
        }
    }
    None
}

/// Report structural problems in the forest: duplicate ids and children whose
/// id is not `parent/segment`. An empty result means the forest is well formed.
pub fn check(forest: &[Folder]) -> Vec<String> {
    fn walk(
        folders: &[Folder],
        parent: Option<&str>,
        seen: &mut HashSet<String>,
        problems: &mut Vec<String>,
    ) {
        for folder in folders {
            if !seen.insert(folder.id.clone()) {
                problems.push(format!("duplicate folder id {:?}", folder.id));
            }
            if let Some(parent) = parent {
                let extends_by_one = folder
                    .id
                    .strip_prefix(parent)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .is_some_and(|segment| !segment.is_empty() && !segment.contains('/'));
                if !extends_by_one {
                    problems.push(format!(
                        "folder {:?} is not a direct child path of {:?}",
                        folder.id, parent
                    ));
                }
            }
            walk(&folder.children, Some(&folder.id), seen, problems);
        }
    }

    let mut seen = HashSet::new();
    let mut problems = Vec::new();
    walk(forest, None, &mut seen, &mut problems);
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;
    use crate::core::models::FolderIcon;

    fn sample() -> Vec<Folder> {
        vec![
            Folder::new("a", "A", FolderIcon::Folder).with_children(vec![
                Folder::new("a/b", "B", FolderIcon::Folder).with_children(vec![Folder::new(
                    "a/b/c",
                    "C",
                    FolderIcon::Folder,
                )]),
                Folder::new("a/d", "D", FolderIcon::Folder),
            ]),
            Folder::new("e", "E", FolderIcon::Folder),
        ]
    }

    #[test]
    fn flatten_is_preorder_with_depth() {
        let forest = sample();
        let flat: Vec<(&str, usize)> = flatten(&forest)
            .iter()
            .map(|f| (f.folder.id.as_str(), f.depth))
            .collect();
        assert_eq!(
            flat,
            vec![("a", 0), ("a/b", 1), ("a/b/c", 2), ("a/d", 1), ("e", 0)]
        );
    }

    #[test]
    fn flatten_empty_forest() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn flatten_visits_every_folder_once_and_child_depth_follows_parent() {
        let forest = fixtures::folders();
        let flat = flatten(&forest);

        let ids: HashSet<&str> = flat.iter().map(|f| f.folder.id.as_str()).collect();
        assert_eq!(ids.len(), flat.len());
        assert_eq!(flat.len(), 7);

        for (i, entry) in flat.iter().enumerate() {
            for child in &entry.folder.children {
                let child_entry = flat[i + 1..]
                    .iter()
                    .find(|f| f.folder.id == child.id)
                    .unwrap();
                assert_eq!(child_entry.depth, entry.depth + 1);
            }
        }
    }

    #[test]
    fn find_searches_nested_folders() {
        let forest = sample();
        assert_eq!(find(&forest, "a/b/c").map(|f| f.name.as_str()), Some("C"));
        assert_eq!(find(&forest, "e").map(|f| f.name.as_str()), Some("E"));
        assert!(find(&forest, "a/x").is_none());
        assert!(find(&forest, "").is_none());
    }

    #[test]
    fn find_reaches_children_that_do_not_extend_parent_id() {
        let forest = vec![Folder::new("work", "Work", FolderIcon::Folder)
            .with_children(vec![Folder::new("reports", "Reports", FolderIcon::File)])];

        let flat: Vec<&str> = flatten(&forest).iter().map(|f| f.folder.id.as_str()).collect();
        assert_eq!(flat, vec!["work", "reports"]);

        let found = find(&forest, "reports").unwrap();
        assert_eq!(found.name, "Reports");
        assert_eq!(found.icon, FolderIcon::File);
    }

    #[test]
    fn check_accepts_builtin_fixture() {
        assert!(check(&fixtures::folders()).is_empty());
    }

    #[test]
    fn check_reports_duplicates_and_bad_children() {
        let forest = vec![
            Folder::new("a", "A", FolderIcon::Folder).with_children(vec![
                Folder::new("b", "B", FolderIcon::Folder),
                Folder::new("a/x/y", "Y", FolderIcon::Folder),
            ]),
            Folder::new("a", "A again", FolderIcon::Folder),
        ];
        let problems = check(&forest);
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().any(|p| p.contains("duplicate")));
    }
}
