//! Song metadata fields and the SongBeamer header tag table
//!
//! Field names form a closed set. Each one maps to exactly one header tag of
//! the `.sng` format. Tags are case-sensitive (`copyright` is written as `(c)`).
//!
//! Format reference: <https://gitlab.com/openlp/wiki/-/wikis/Development/SongBeamer_-_Song_Data_Format>

// ─────────────────────────────────────────────────────────────────────────────
// Field Names
// ─────────────────────────────────────────────────────────────────────────────

/// Internal identifier of a song metadata field.
///
/// Variant order is the order header lines are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum FieldName {
    Title,
    Author,
    Melody,
    Translation,
    Copyright,
    NatCopyright,
    Rights,
    AddCopyrightInfo,
    Ccli,
    Editor,
    Bible,
    Categories,
    Keywords,
    QuickFind,
    ChurchSongId,
    Comment,
    Comments,
    Chords,
    Key,
    VerseOrder,
    Songbook,
    LangCount,
    Lang,
    Tempo,
    OTitle,
    BackgroundImage,
    Font,
    FontSize,
    TextAlign,
    TitleAlign,
    Version,
}

/// One row of the field table.
struct FieldSpec {
    field: FieldName,
    name: &'static str,
    tag: &'static str,
    label: &'static str,
}

const fn spec(
    field: FieldName,
    name: &'static str,
    tag: &'static str,
    label: &'static str,
) -> FieldSpec {
    FieldSpec {
        field,
        name,
        tag,
        label,
    }
}

/// Indexed by `FieldName as usize`.
static FIELD_TABLE: [FieldSpec; FieldName::COUNT] = [
    spec(FieldName::Title, "title", "Title", "Title:"),
    spec(FieldName::Author, "author", "Author", "Author:"),
    spec(FieldName::Melody, "melody", "Melody", "Melody:"),
    spec(FieldName::Translation, "translation", "Translation", "Translation:"),
    spec(FieldName::Copyright, "copyright", "(c)", "Copyright information:"),
    spec(
        FieldName::NatCopyright,
        "natCopyright",
        "NatCopyright",
        "National copyright information:",
    ),
    spec(FieldName::Rights, "rights", "Rights", "Additional rights:"),
    spec(
        FieldName::AddCopyrightInfo,
        "addCopyrightInfo",
        "AddCopyrightInfo",
        "Additional copyright information:",
    ),
    spec(FieldName::Ccli, "ccli", "CCLI", "CCLI:"),
    spec(FieldName::Editor, "editor", "Editor", "Editor:"),
    spec(FieldName::Bible, "bible", "Bible", "Bible:"),
    spec(FieldName::Categories, "categories", "Categories", "Categories:"),
    spec(FieldName::Keywords, "keywords", "Keywords", "Keywords:"),
    spec(FieldName::QuickFind, "quickFind", "QuickFind", "Quick find:"),
    spec(
        FieldName::ChurchSongId,
        "churchSongId",
        "ChurchSongID",
        "internal ID:",
    ),
    spec(FieldName::Comment, "comment", "Comment", "Comment:"),
    spec(FieldName::Comments, "comments", "Comments", "Comments:"),
    spec(FieldName::Chords, "chords", "Chords", "Chords"),
    spec(FieldName::Key, "key", "Key", "Key:"),
    spec(FieldName::VerseOrder, "verseOrder", "VerseOrder", "Verse order:"),
    spec(FieldName::Songbook, "songbook", "Songbook", "Songbook:"),
    spec(FieldName::LangCount, "langCount", "LangCount", "Language count:"),
    spec(FieldName::Lang, "lang", "Lang", "Language:"),
    spec(FieldName::Tempo, "tempo", "Tempo", "Tempo:"),
    spec(FieldName::OTitle, "oTitle", "OTitle", "Original title:"),
    spec(
        FieldName::BackgroundImage,
        "backgroundImage",
        "BackgroundImage",
        "Background image:",
    ),
    spec(FieldName::Font, "font", "Font", "Font:"),
    spec(FieldName::FontSize, "fontSize", "FontSize", "Font size:"),
    spec(FieldName::TextAlign, "textAlign", "TextAlign", "Text alignment:"),
    spec(FieldName::TitleAlign, "titleAlign", "TitleAlign", "Title alignment:"),
    spec(FieldName::Version, "version", "Version", "Version:"),
];

impl FieldName {
    /// Number of known fields.
    pub const COUNT: usize = 31;

    /// All fields in output order.
    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::Title,
        FieldName::Author,
        FieldName::Melody,
        FieldName::Translation,
        FieldName::Copyright,
        FieldName::NatCopyright,
        FieldName::Rights,
        FieldName::AddCopyrightInfo,
        FieldName::Ccli,
        FieldName::Editor,
        FieldName::Bible,
        FieldName::Categories,
        FieldName::Keywords,
        FieldName::QuickFind,
        FieldName::ChurchSongId,
        FieldName::Comment,
        FieldName::Comments,
        FieldName::Chords,
        FieldName::Key,
        FieldName::VerseOrder,
        FieldName::Songbook,
        FieldName::LangCount,
        FieldName::Lang,
        FieldName::Tempo,
        FieldName::OTitle,
        FieldName::BackgroundImage,
        FieldName::Font,
        FieldName::FontSize,
        FieldName::TextAlign,
        FieldName::TitleAlign,
        FieldName::Version,
    ];

    fn spec(self) -> &'static FieldSpec {
        let spec = &FIELD_TABLE[self as usize];
        debug_assert_eq!(spec.field, self, "field table row out of order");
        spec
    }

    /// Internal identifier, e.g. `churchSongId`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// SongBeamer header tag, e.g. `ChurchSongID`.
    pub fn tag(self) -> &'static str {
        self.spec().tag
    }

    /// Form label shown next to the input.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Look up a field by its internal identifier (case-sensitive).
    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.field)
    }
}

/// Map an internal field name to its header tag.
///
/// Returns `None` for names outside the known set.
#[cfg(test)]
pub fn header_tag(name: &str) -> Option<&'static str> {
    FieldName::from_name(name).map(FieldName::tag)
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata Fields
// ─────────────────────────────────────────────────────────────────────────────

/// A single metadata entry of the song form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    pub name: FieldName,
    pub label: &'static str,
    pub value: String,
}

impl MetadataField {
    /// Create an empty field.
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.label(),
            value: String::new(),
        }
    }

    /// Whether the value is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// The ordered list of metadata fields of one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMetadata {
    fields: Vec<MetadataField>,
}

impl SongMetadata {
    /// Format version written into new songs.
    pub const DEFAULT_VERSION: &'static str = "3";

    /// Create the initial form: every field empty except `Version`.
    pub fn new() -> Self {
        let mut metadata = Self::empty();
        metadata.set(FieldName::Version, Self::DEFAULT_VERSION);
        metadata
    }

    /// Create a form with every field empty.
    pub fn empty() -> Self {
        Self {
            fields: FieldName::ALL.iter().copied().map(MetadataField::new).collect(),
        }
    }

    pub fn fields(&self) -> &[MetadataField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [MetadataField] {
        &mut self.fields
    }

    /// Current value of a field.
    pub fn get(&self, name: FieldName) -> &str {
        &self.fields[name as usize].value
    }

    /// Replace the value of a field.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields[name as usize].value = value.into();
    }
}

impl Default for SongMetadata {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, spec) in FIELD_TABLE.iter().enumerate() {
            assert_eq!(spec.field as usize, index, "row {} out of place", spec.name);
        }
        for (index, field) in FieldName::ALL.iter().enumerate() {
            assert_eq!(*field as usize, index);
        }
    }

    #[test]
    fn test_header_tag_for_every_name() {
        let expected = [
            ("title", "Title"),
            ("author", "Author"),
            ("melody", "Melody"),
            ("translation", "Translation"),
            ("copyright", "(c)"),
            ("natCopyright", "NatCopyright"),
            ("rights", "Rights"),
            ("addCopyrightInfo", "AddCopyrightInfo"),
            ("ccli", "CCLI"),
            ("editor", "Editor"),
            ("bible", "Bible"),
            ("categories", "Categories"),
            ("keywords", "Keywords"),
            ("quickFind", "QuickFind"),
            ("churchSongId", "ChurchSongID"),
            ("comment", "Comment"),
            ("comments", "Comments"),
            ("chords", "Chords"),
            ("key", "Key"),
            ("verseOrder", "VerseOrder"),
            ("songbook", "Songbook"),
            ("langCount", "LangCount"),
            ("lang", "Lang"),
            ("tempo", "Tempo"),
            ("oTitle", "OTitle"),
            ("backgroundImage", "BackgroundImage"),
            ("font", "Font"),
            ("fontSize", "FontSize"),
            ("textAlign", "TextAlign"),
            ("titleAlign", "TitleAlign"),
            ("version", "Version"),
        ];
        assert_eq!(expected.len(), FieldName::COUNT);

        for (field, (name, tag)) in FieldName::ALL.iter().zip(expected) {
            assert_eq!(field.name(), name);
            assert_eq!(header_tag(name), Some(tag), "wrong tag for {}", name);
        }
    }

    #[test]
    fn test_copyright_tag_is_not_capitalized_word() {
        assert_eq!(header_tag("copyright"), Some("(c)"));
        assert_ne!(header_tag("copyright"), Some("Copyright"));
    }

    #[test]
    fn test_header_tag_unknown_names() {
        assert_eq!(header_tag(""), None);
        assert_eq!(header_tag("Title"), None);
        assert_eq!(header_tag("CHURCHSONGID"), None);
        assert_eq!(header_tag("publisher"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = FieldName::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FieldName::COUNT);

        let mut tags: Vec<_> = FieldName::ALL.iter().map(|f| f.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), FieldName::COUNT);
    }

    #[test]
    fn test_from_name_roundtrip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_new_metadata_defaults() {
        let metadata = SongMetadata::new();
        assert_eq!(metadata.fields().len(), FieldName::COUNT);
        assert_eq!(metadata.get(FieldName::Version), "3");
        assert_eq!(metadata.get(FieldName::Title), "");
        assert!(SongMetadata::empty()
            .fields()
            .iter()
            .all(MetadataField::is_blank));
    }

    #[test]
    fn test_labels_follow_fields() {
        let metadata = SongMetadata::empty();
        assert_eq!(metadata.fields()[0].label, "Title:");
        assert_eq!(
            metadata.fields()[FieldName::ChurchSongId as usize].label,
            "internal ID:"
        );
    }

    #[test]
    fn test_whitespace_value_is_blank() {
        let mut field = MetadataField::new(FieldName::Author);
        field.value = "  \t ".to_string();
        assert!(field.is_blank());
        field.value = " x ".to_string();
        assert!(!field.is_blank());
    }
}
