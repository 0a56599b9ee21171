use crate::error::FieldError;
use std::fmt;
use std::str::FromStr;

/// Page section the host reports as currently in view. Each section may own
/// a reference texture whose dark pixels become particle anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Section::ALL
            .into_iter()
            .find(|sec| sec.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FieldError::UnknownSection(s.to_string()))
    }
}
