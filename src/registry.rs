use std::path::Path;
use std::sync::LazyLock;

use crate::errors::{ConvertError, ConvertResult};
use crate::format::FormatDescriptor;
use crate::parsers::{dkb, rakuten, shinsei, smbc};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(
        [dkb::formats(), rakuten::formats(), shinsei::formats(), smbc::formats()]
            .into_iter()
            .flatten()
            .collect(),
    )
});

/// The format tag of an input file: the name of its grandparent directory,
/// as in `in/<tag>/<subdir>/<file>.csv`.
pub fn format_tag(path: &Path) -> Option<&str> {
    path.parent()?.parent()?.file_name()?.to_str()
}

/// Known export formats, looked up by tag.
#[derive(Debug, Clone)]
pub struct Registry {
    formats: Vec<FormatDescriptor>,
}

impl Registry {
    pub fn new(formats: Vec<FormatDescriptor>) -> Self {
        Self { formats }
    }

    /// Every format this crate knows about.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn get(&self, tag: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|format| format.tag == tag)
    }

    /// Find the format of `path` from its directory layout.
    pub fn lookup(&self, path: &Path) -> ConvertResult<&FormatDescriptor> {
        format_tag(path)
            .and_then(|tag| self.get(tag))
            .ok_or_else(|| ConvertError::UnknownFormat(path.to_path_buf()))
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.iter().map(|format| format.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::TextEncoding;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[rstest]
    #[case("in/dkb_giro_v1/2025/jan.csv", Some("dkb_giro_v1"))]
    #[case("/data/in/smbc_v2/main/x.csv", Some("smbc_v2"))]
    #[case("smbc_v2/x.csv", None)]
    #[case("x.csv", None)]
    fn test_format_tag(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(format_tag(Path::new(path)), expected);
    }

    #[rstest]
    #[case("in/dkb_giro_v1/2025/jan.csv", "dkb_giro_v1", TextEncoding::Latin1)]
    #[case("in/dkb_cc_von_bis_v1/card/jan.csv", "dkb_cc_von_bis_v1", TextEncoding::Latin1)]
    #[case("in/rakuten_jcb_v1/card/jan.csv", "rakuten_jcb_v1", TextEncoding::ShiftJis)]
    #[case("in/shinsei_v1/old/jan.csv", "shinsei_v1", TextEncoding::Utf16)]
    #[case("in/shinsei_v3/main/jan.csv", "shinsei_v3", TextEncoding::Utf8Sig)]
    #[case("in/smbc_v1/main/jan.csv", "smbc_v1", TextEncoding::ShiftJis)]
    fn test_lookup(#[case] path: &str, #[case] tag: &str, #[case] encoding: TextEncoding) {
        let format = Registry::builtin().lookup(Path::new(path)).unwrap();
        assert_eq!(format.tag, tag);
        assert_eq!(format.encoding, encoding);
    }

    #[rstest]
    #[case("in/mizuho_v1/main/jan.csv")]
    #[case("in/2025/dkb_giro_v1/jan.csv")]
    #[case("jan.csv")]
    fn test_lookup_unknown(#[case] path: &str) {
        let result = Registry::builtin().lookup(Path::new(path));
        assert!(matches!(result, Err(ConvertError::UnknownFormat(p)) if p == PathBuf::from(path)));
    }

    #[test]
    fn test_builtin_tags_are_unique() {
        let tags: Vec<&str> = Registry::builtin().tags().collect();
        let unique: HashSet<&str> = tags.iter().copied().collect();
        assert_eq!(tags.len(), 12);
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_custom_registry() {
        let registry = Registry::new(smbc::formats());
        assert!(registry.get("smbc_v2").is_some());
        assert!(registry.get("dkb_giro_v1").is_none());
    }
}
