#![forbid(unsafe_code)]

//! Maven `pom.xml` descriptor
//!
//! The document is kept as its original text. Loading walks it once with a
//! namespace-resolving reader to validate it and to record the byte span of
//! the project version. Rewriting splices new text into that span, so every
//! other byte of the file survives untouched.

use super::Descriptor;
use crate::error::DescriptorError;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::fs;
use std::path::{Path, PathBuf};

/// Namespace of Maven POM 4.0.0 documents
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// File name looked up inside a project directory
pub const POM_FILE_NAME: &str = "pom.xml";

const VERSION_TAG: &[u8] = b"version";

const BOM: char = '\u{feff}';

/// Resolve the descriptor file for a project path
///
/// A directory resolves to `<dir>/pom.xml`. Any other existing file is taken
/// as the descriptor itself. Paths that do not exist are treated as project
/// directories so the later read reports the missing `pom.xml`.
pub fn resolve_descriptor_path(project: &Path) -> PathBuf {
    if project.is_file() {
        project.to_path_buf()
    } else {
        project.join(POM_FILE_NAME)
    }
}

/// Location of the version field inside the document text
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionField {
    /// Byte offset where the replaceable span starts
    start: usize,
    /// Byte offset one past the replaceable span
    end: usize,
    /// Unescaped text content
    text: String,
    /// Set for `<version/>`: the span covers the whole tag and holds the
    /// tag content needed to rebuild it as a start/end pair
    empty_tag: Option<EmptyTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EmptyTag {
    /// Everything between `<` and `/>`, attributes included
    content: String,
    /// Qualified element name, prefix included
    name: String,
}

/// A parsed `pom.xml`
#[derive(Debug, Clone)]
pub struct PomDocument {
    path: PathBuf,
    source: String,
    field: Option<VersionField>,
}

impl PomDocument {
    /// Parse a document from text
    ///
    /// `path` is only used for error messages.
    pub fn parse(
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let path = path.into();
        let source = source.into();
        let field = locate_version(&path, &source)?;
        Ok(PomDocument {
            path,
            source,
            field,
        })
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document text, including any pending version change
    pub fn source(&self) -> &str {
        &self.source
    }

    fn field_missing(&self) -> DescriptorError {
        DescriptorError::FieldMissing {
            path: self.path.clone(),
        }
    }
}

impl Descriptor for PomDocument {
    fn load(path: &Path) -> Result<Self, DescriptorError> {
        let source = fs::read_to_string(path).map_err(|e| with_path(path, e))?;
        Self::parse(path, source)
    }

    fn version_text(&self) -> Result<&str, DescriptorError> {
        self.field
            .as_ref()
            .map(|field| field.text.as_str())
            .ok_or_else(|| self.field_missing())
    }

    fn set_version_text(&mut self, text: &str) -> Result<(), DescriptorError> {
        let field = self.field.take().ok_or_else(|| self.field_missing())?;
        let escaped = escape(text);

        let (replacement, content_start) = match &field.empty_tag {
            Some(tag) => {
                let open = format!("<{}>", tag.content.trim_end());
                let replacement = format!("{}{}</{}>", open, escaped, tag.name);
                (replacement, field.start + open.len())
            }
            None => (escaped.to_string(), field.start),
        };

        self.source.replace_range(field.start..field.end, &replacement);

        self.field = Some(VersionField {
            start: content_start,
            end: content_start + escaped.len(),
            text: text.to_string(),
            empty_tag: None,
        });
        Ok(())
    }

    fn write(&self, path: &Path) -> Result<(), DescriptorError> {
        fs::write(path, &self.source).map_err(|e| with_path(path, e))?;
        Ok(())
    }
}

/// Walk the whole document and find the first POM-namespaced `version`
/// element that is a direct child of the root
fn locate_version(path: &Path, source: &str) -> Result<Option<VersionField>, DescriptorError> {
    // The reader swallows a byte-order mark, so positions are taken over the
    // text after it and shifted back into `source`.
    let offset = if source.starts_with(BOM) { BOM.len_utf8() } else { 0 };
    let mut reader = NsReader::from_str(&source[offset..]);
    let mut depth = 0usize;
    let mut found: Option<VersionField> = None;
    // Content start and accumulated text of the version element being read
    let mut open: Option<(usize, String)> = None;

    loop {
        let before = reader.buffer_position() as usize + offset;
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| xml_error(path, before, e))?;
        let in_pom_namespace = matches!(
            ns,
            ResolveResult::Bound(Namespace(uri)) if uri == POM_NAMESPACE.as_bytes()
        );

        match event {
            Event::Start(e) => {
                depth += 1;
                if found.is_none()
                    && open.is_none()
                    && depth == 2
                    && in_pom_namespace
                    && e.local_name().as_ref() == VERSION_TAG
                {
                    open = Some((reader.buffer_position() as usize + offset, String::new()));
                }
            }
            Event::Empty(e) => {
                if found.is_none()
                    && open.is_none()
                    && depth == 1
                    && in_pom_namespace
                    && e.local_name().as_ref() == VERSION_TAG
                {
                    found = Some(VersionField {
                        start: before,
                        end: reader.buffer_position() as usize + offset,
                        text: String::new(),
                        empty_tag: Some(EmptyTag {
                            content: String::from_utf8_lossy(&e).into_owned(),
                            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        }),
                    });
                }
            }
            Event::Text(t) if depth == 2 => {
                if let Some((_, text)) = open.as_mut() {
                    let unescaped = t.unescape().map_err(|e| xml_error(path, before, e))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(c) if depth == 2 => {
                if let Some((_, text)) = open.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2
                    && let Some((start, text)) = open.take()
                {
                    found = Some(VersionField {
                        start,
                        end: before,
                        text,
                        empty_tag: None,
                    });
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DescriptorError::Xml {
            path: path.to_path_buf(),
            message: "unexpected end of document".to_string(),
        });
    }

    Ok(found)
}

fn with_path(path: &Path, err: std::io::Error) -> std::io::Error {
    std::io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

fn xml_error(path: &Path, position: usize, err: impl std::fmt::Display) -> DescriptorError {
    DescriptorError::Xml {
        path: path.to_path_buf(),
        message: format!("{} (near byte {})", err, position),
    }
}
