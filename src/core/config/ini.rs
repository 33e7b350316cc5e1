//! INI document model.
//!
//! Reads and writes the `key = value` section format of the configuration
//! file. Keys are case-insensitive (stored lowercased), section names are
//! case-sensitive, and every named section inherits missing keys from
//! `[DEFAULT]`. Comments are accepted on read and dropped on write.

use crate::core::constants::DEFAULT_SECTION;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    defaults: Option<Section>,
    sections: Vec<Section>,
}

impl IniDocument {
    /// Parse file content.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` on an option outside any section, a line without
    /// delimiter, or a duplicated section or key.
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = Self::default();
        // (section index or None for DEFAULT, key) of the last option, for
        // continuation lines.
        let mut current: Option<Option<usize>> = None;
        let mut last_key: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.is_empty() {
                last_key = None;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                if let (Some(target), Some(key)) = (current, &last_key) {
                    let section = doc.section_at_mut(target);
                    if let Some(entry) = section.entries.iter_mut().find(|(k, _)| k == key) {
                        entry.1.push('\n');
                        entry.1.push_str(trimmed);
                        continue;
                    }
                }
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
                let name = &trimmed[1..trimmed.len() - 1];
                last_key = None;
                if name == DEFAULT_SECTION {
                    if doc.defaults.is_some() {
                        return Err(duplicate(line_no, "section", name));
                    }
                    doc.defaults = Some(Section::new(name));
                    current = Some(None);
                } else {
                    if doc.position(name).is_some() {
                        return Err(duplicate(line_no, "section", name));
                    }
                    doc.sections.push(Section::new(name));
                    current = Some(Some(doc.sections.len() - 1));
                }
                continue;
            }

            let Some(target) = current else {
                return Err(ConfigError::Parse {
                    line: line_no,
                    reason: "option outside of any section".to_string(),
                }
                .into());
            };
            let Some(split) = line.find(|c: char| c == '=' || c == ':') else {
                return Err(ConfigError::Parse {
                    line: line_no,
                    reason: format!("expected 'key = value', got '{}'", trimmed),
                }
                .into());
            };

            let key = line[..split].trim().to_lowercase();
            let value = line[split + 1..].trim_start().to_string();
            if key.is_empty() {
                return Err(ConfigError::Parse {
                    line: line_no,
                    reason: "empty key".to_string(),
                }
                .into());
            }

            let section = doc.section_at_mut(target);
            if section.get(&key).is_some() {
                return Err(duplicate(line_no, "key", &key));
            }
            section.entries.push((key.clone(), value));
            last_key = Some(key);
        }

        Ok(doc)
    }

    /// Render the document.
    ///
    /// `[DEFAULT]` comes first, then sections in insertion order; each
    /// section ends with a blank line. Multi-line values continue on lines
    /// indented with a tab.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in self.defaults.iter().chain(self.sections.iter()) {
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(&value.replace('\n', "\n\t"));
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Named sections, in file order. `[DEFAULT]` is not listed.
    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    /// Whether `name` can be read: any listed section, and `DEFAULT` always.
    pub fn has_section(&self, name: &str) -> bool {
        name == DEFAULT_SECTION || self.position(name).is_some()
    }

    /// Value of `key` in `section`, falling back to `[DEFAULT]`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        let own = if section == DEFAULT_SECTION {
            None
        } else {
            self.position(section)
                .and_then(|i| self.sections[i].get(&key))
        };
        own.or_else(|| self.defaults.as_ref().and_then(|d| d.get(&key)))
    }

    /// Set `key` in `section`, creating the section when missing. An existing
    /// key keeps its position.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let key = key.to_lowercase();
        let target = self.ensure_section(section);
        let section = self.section_at_mut(target);
        match section.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => section.entries.push((key, value.to_string())),
        }
    }

    /// Add an empty named section. Returns false if it already exists.
    pub fn add_section(&mut self, name: &str) -> bool {
        if self.has_section(name) {
            return false;
        }
        self.sections.push(Section::new(name));
        true
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    fn ensure_section(&mut self, name: &str) -> Option<usize> {
        if name == DEFAULT_SECTION {
            if self.defaults.is_none() {
                self.defaults = Some(Section::new(DEFAULT_SECTION));
            }
            return None;
        }
        match self.position(name) {
            Some(i) => Some(i),
            None => {
                self.sections.push(Section::new(name));
                Some(self.sections.len() - 1)
            }
        }
    }

    fn section_at_mut(&mut self, target: Option<usize>) -> &mut Section {
        match target {
            Some(i) => &mut self.sections[i],
            None => self
                .defaults
                .get_or_insert_with(|| Section::new(DEFAULT_SECTION)),
        }
    }
}

fn duplicate(line: usize, what: &str, name: &str) -> crate::error::Error {
    ConfigError::Parse {
        line,
        reason: format!("duplicate {} '{}'", what, name),
    }
    .into()
}
