use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::{
    ext::LabelExt,
    folder::{DEFAULT_ROOT_NAME, FolderTree, TreeError},
};

const ROOT_KEY: &str = "root";
const FILES_KEY: &str = "files";
const FOLDERS_KEY: &str = "folders";

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

fn is_null(value: &Yaml) -> bool {
    matches!(value, Yaml::Value(Scalar::Null))
}

/// Text of a scalar entry. Plain YAML numbers and booleans are names too.
fn scalar_text<'a>(value: &'a Yaml) -> Option<Cow<'a, str>> {
    if let Some(text) = value.as_str() {
        return Some(Cow::Borrowed(text));
    }
    match value {
        Yaml::Value(Scalar::Integer(number)) => Some(Cow::Owned(number.to_string())),
        Yaml::Value(Scalar::FloatingPoint(number)) => Some(Cow::Owned(number.to_string())),
        Yaml::Value(Scalar::Boolean(flag)) => Some(Cow::Owned(flag.to_string())),
        _ => None,
    }
}

/// Keys of `body` that are not in `known`, rendered for diagnostics.
fn unknown_keys(body: &LinkedHashMap<Yaml, Yaml>, known: &[&str]) -> Vec<String> {
    body.keys()
        .filter(|key| {
            scalar_text(key).is_none_or(|text| !known.contains(&text.as_ref()))
        })
        .map(|key| match scalar_text(key) {
            Some(text) => text.into_owned(),
            None => format!("{key:?}"),
        })
        .collect()
}

fn warn_unknown_keys(body: &LinkedHashMap<Yaml, Yaml>, known: &[&str], folder: &str) {
    for key in unknown_keys(body, known) {
        warn!("Ignoring unknown key '{}' in seed folder '{}'", key, folder);
    }
}

/// Parsed seed document: an optional root name plus the root's contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Seed {
    root: Option<String>,
    body: FolderSeed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FolderSeed {
    files: Vec<String>,
    folders: Vec<(String, FolderSeed)>,
}

impl Seed {
    pub async fn read(path: &Path) -> Result<Self, SeedError> {
        debug!("Reading seed file: {}", path.display());
        let bytes = compio::fs::read(path)
            .await
            .context(ReadSnafu { path })?;
        debug!("Successfully read seed file: {} bytes", bytes.len());
        let contents = String::from_utf8(bytes).context(EncodingSnafu { path })?;
        contents.as_str().try_into()
    }

    pub fn root_name(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Builds a tree from this seed.
    ///
    /// `root_override` wins over the seed's own root name, which wins over
    /// [`DEFAULT_ROOT_NAME`]. Folders go through the same checks as
    /// interactive insertion.
    pub fn build(&self, root_override: Option<&str>) -> Result<FolderTree, SeedError> {
        let root_name = root_override
            .or(self.root_name())
            .unwrap_or(DEFAULT_ROOT_NAME);
        let mut tree = FolderTree::new(root_name);
        Self::populate(&mut tree, root_name, &self.body)?;
        debug!(
            "Seeded tree '{}' with {} files",
            root_name,
            tree.root().count_files()
        );
        Ok(tree)
    }

    fn populate(tree: &mut FolderTree, folder: &str, body: &FolderSeed) -> Result<(), SeedError> {
        for file in &body.files {
            tree.add_file(folder, file.as_str()).context(TreeSnafu)?;
        }
        for (name, child) in &body.folders {
            tree.add_subfolder_checked(folder, name).context(TreeSnafu)?;
            Self::populate(tree, name, child)?;
        }
        Ok(())
    }

    fn parse_label(value: &Yaml, folder: &str) -> Result<String, SeedError> {
        let raw = scalar_text(value).context(InvalidEntrySnafu { folder })?;
        raw.as_label()
            .map(str::to_string)
            .context(EmptyLabelSnafu { folder })
    }

    fn parse_files(
        body: &LinkedHashMap<Yaml, Yaml>,
        folder: &str,
    ) -> Result<Vec<String>, SeedError> {
        let Some(files) = body.get(&key(FILES_KEY)) else {
            return Ok(Vec::new());
        };
        if is_null(files) {
            return Ok(Vec::new());
        }
        files
            .as_sequence()
            .context(FilesNotSequenceSnafu { folder })?
            .iter()
            .map(|file| Self::parse_label(file, folder))
            .collect()
    }

    fn parse_folders(
        body: &LinkedHashMap<Yaml, Yaml>,
        folder: &str,
    ) -> Result<Vec<(String, FolderSeed)>, SeedError> {
        let Some(folders) = body.get(&key(FOLDERS_KEY)) else {
            return Ok(Vec::new());
        };
        if is_null(folders) {
            return Ok(Vec::new());
        }
        folders
            .as_mapping()
            .context(FoldersNotMapSnafu { folder })?
            .iter()
            .map(|(name, child)| {
                let name = Self::parse_label(name, folder)?;
                let child = Self::parse_body(child, &name)?;
                Ok((name, child))
            })
            .collect()
    }

    fn parse_body(value: &Yaml, folder: &str) -> Result<FolderSeed, SeedError> {
        if is_null(value) {
            return Ok(FolderSeed::default());
        }
        let body = value.as_mapping().context(InvalidEntrySnafu { folder })?;
        warn_unknown_keys(body, &[FILES_KEY, FOLDERS_KEY], folder);
        Ok(FolderSeed {
            files: Self::parse_files(body, folder)?,
            folders: Self::parse_folders(body, folder)?,
        })
    }
}

impl TryFrom<&str> for Seed {
    type Error = SeedError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedSeedSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let root = match top_level.get(&key(ROOT_KEY)) {
            Some(value) => Some(Self::parse_label(value, ROOT_KEY)?),
            None => None,
        };
        let folder = root.as_deref().unwrap_or(DEFAULT_ROOT_NAME);
        warn_unknown_keys(top_level, &[ROOT_KEY, FILES_KEY, FOLDERS_KEY], folder);
        let body = FolderSeed {
            files: Self::parse_files(top_level, folder)?,
            folders: Self::parse_folders(top_level, folder)?,
        };

        Ok(Seed { root, body })
    }
}

#[derive(Debug, Snafu)]
pub enum SeedError {
    #[snafu(display("Failed to read the seed file: {}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Seed file is not valid UTF-8: {}", path.display()))]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the seed file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted seed file"))]
    MalformedSeed,
    #[snafu(display("Top level of seed should be a map"))]
    TopLevelNotMap,
    #[snafu(display("'folders' of '{}' should be a map", folder))]
    FoldersNotMap { folder: String },
    #[snafu(display("'files' of '{}' should be a list", folder))]
    FilesNotSequence { folder: String },
    #[snafu(display("Invalid entry in folder '{}'", folder))]
    InvalidEntry { folder: String },
    #[snafu(display("Blank name in folder '{}'", folder))]
    EmptyLabel { folder: String },
    #[snafu(display("Seed violates the tree rules"))]
    TreeError { source: TreeError },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::*;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::folder::{Folder, MAX_DEPTH};

    fn parse(contents: &str) -> Result<Seed, SeedError> {
        contents.try_into()
    }

    #[test]
    fn seed_builds_tree_in_document_order() {
        let seed = parse(
            r#"
root: projects
files: [readme.txt]
folders:
  web:
    files: [index.html, app.js]
    folders:
      assets: {}
  api:
    files: [main.rs]
"#,
        )
        .unwrap();
        let tree = seed.build(None).unwrap();

        assert_eq!(tree.root().name(), "projects");
        assert_eq!(tree.root().files(), ["readme.txt"]);
        let names: Vec<_> = tree.root().subfolders().iter().map(Folder::name).collect();
        assert_eq!(names, ["web", "api"]);
        assert_eq!(tree.depth_of("assets"), Some(2));
        assert_eq!(tree.root().count_files(), 4);
    }

    #[rstest]
    #[case(None, "projects")]
    #[case(Some("override"), "override")]
    fn root_override_wins(#[case] root_override: Option<&str>, #[case] expected: &str) {
        let seed = parse("root: projects").unwrap();
        let tree = seed.build(root_override).unwrap();
        assert_eq!(tree.root().name(), expected);
    }

    #[test]
    fn seed_without_root_uses_default_name() {
        let tree = parse("files: [a.txt]").unwrap().build(None).unwrap();
        assert_eq!(tree.root().name(), DEFAULT_ROOT_NAME);
        assert_eq!(tree.root().count_files(), 1);
    }

    #[test]
    fn null_folder_body_is_empty_folder() {
        let tree = parse("folders:\n  empty: ~\n").unwrap().build(None).unwrap();
        assert!(tree.exists("empty"));
    }

    #[test]
    fn seed_with_duplicate_names_is_rejected() {
        let seed = parse(
            r#"
folders:
  a:
    folders:
      shared: {}
  b:
    folders:
      shared: {}
"#,
        )
        .unwrap();
        assert!(matches!(
            seed.build(None),
            Err(SeedError::TreeError {
                source: TreeError::NameTaken { .. }
            })
        ));
    }

    #[test]
    fn seed_deeper_than_max_depth_is_rejected() {
        let seed =
            parse("folders: {a: {folders: {b: {folders: {c: {folders: {d: {}}}}}}}}").unwrap();
        match seed.build(None) {
            Err(SeedError::TreeError {
                source: TreeError::DepthExceeded { depth, max, .. },
            }) => {
                assert_eq!(depth, MAX_DEPTH + 1);
                assert_eq!(max, MAX_DEPTH);
            }
            other => panic!("expected depth error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("invalid: yaml: content: [unclosed")]
    fn seed_returns_error_on_invalid_yaml(#[case] contents: &str) {
        assert!(matches!(parse(contents), Err(SeedError::ParseError { .. })));
    }

    #[test]
    fn seed_returns_error_on_empty_file() {
        assert!(matches!(parse(""), Err(SeedError::MalformedSeed)));
    }

    #[rstest]
    #[case("- item1\n- item2")]
    #[case("just a string")]
    fn seed_returns_error_when_top_level_is_not_map(#[case] contents: &str) {
        assert!(matches!(parse(contents), Err(SeedError::TopLevelNotMap)));
    }

    #[test]
    fn seed_returns_error_when_folders_is_list() {
        assert!(matches!(
            parse("folders:\n  - a\n  - b"),
            Err(SeedError::FoldersNotMap { .. })
        ));
    }

    #[test]
    fn seed_returns_error_when_files_is_map() {
        assert!(matches!(
            parse("files:\n  a: b"),
            Err(SeedError::FilesNotSequence { .. })
        ));
    }

    #[rstest]
    #[case("files: ['  ']")]
    #[case("folders:\n  '': {}")]
    #[case("root: '   '")]
    fn seed_rejects_blank_labels(#[case] contents: &str) {
        assert!(matches!(parse(contents), Err(SeedError::EmptyLabel { .. })));
    }

    #[rstest]
    #[case("folders:\n  2024: {}", "2024")]
    #[case("folders:\n  1.5:\n    files: [x.txt]", "1.5")]
    #[case("folders:\n  true: {}", "true")]
    fn seed_accepts_numeric_folder_names(#[case] contents: &str, #[case] name: &str) {
        let tree = parse(contents).unwrap().build(None).unwrap();
        assert!(tree.exists(name));
    }

    #[rstest]
    #[case("files: [2024, 1.5, false]", &["2024", "1.5", "false"])]
    #[case("files:\n  - 7\n  - notes.txt", &["7", "notes.txt"])]
    fn seed_accepts_numeric_file_names(#[case] contents: &str, #[case] expected: &[&str]) {
        let tree = parse(contents).unwrap().build(None).unwrap();
        assert_eq!(tree.root().files(), expected);
    }

    #[test]
    fn seed_accepts_numeric_root_name() {
        let seed = parse("root: 2024").unwrap();
        assert_eq!(seed.root_name(), Some("2024"));
    }

    #[test]
    fn seed_rejects_non_string_file_entries() {
        assert!(matches!(
            parse("files:\n  - [nested]"),
            Err(SeedError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_reported() {
        let documents = Yaml::load_from_str("root: r\nfolder:\n  a: {}\nfile: [x]\nfiles: []")
            .expect("valid yaml");
        let top_level = documents[0].as_mapping().expect("mapping");

        assert_eq!(
            unknown_keys(top_level, &[ROOT_KEY, FILES_KEY, FOLDERS_KEY]),
            ["folder", "file"]
        );
        assert_eq!(
            unknown_keys(top_level, &[FILES_KEY, FOLDERS_KEY]),
            ["root", "folder", "file"]
        );
    }

    #[test]
    fn typo_keys_do_not_fail_parsing() {
        let tree = parse("folder:\n  a: {}\nfolders:\n  b:\n    file: [x.txt]")
            .unwrap()
            .build(None)
            .unwrap();
        assert!(!tree.exists("a"));
        assert!(tree.exists("b"));
        assert_eq!(tree.root().count_files(), 0);
    }

    #[compio::test]
    async fn seed_reads_from_disk() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "root: disk\nfolders:\n  a:\n    files: [x.txt]")
            .expect("Failed to write seed");

        let seed = Seed::read(file.path()).await.expect("Failed to read seed");
        let tree = seed.build(None).unwrap();

        assert_eq!(tree.root().name(), "disk");
        assert_eq!(tree.find("a").map(Folder::count_files), Ok(1));
    }

    #[compio::test]
    async fn seed_returns_error_on_nonexistent_file() {
        let result = Seed::read(Path::new("nonexistent-seed.yaml")).await;
        assert!(matches!(result, Err(SeedError::ReadError { .. })));
    }
}
