use std::fmt;

use serde::Deserialize;
use url::Url;

use super::AppError;

/// A remote repository identified by its clone URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct RepositoryRef {
    /// The URL exactly as written, validated but never normalized.
    raw: String,
}

impl RepositoryRef {
    /// Parse a clone URL. Only absolute URLs are accepted.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Url::parse(raw).map_err(|e| AppError::InvalidRepositoryUrl {
            url: raw.to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { raw: raw.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Local directory name a clone of this repository lands in.
    ///
    /// `https://github.com/a/360-kurt.git` gives `360-kurt`; a final segment
    /// without an extension is returned unchanged.
    pub fn directory_name(&self) -> &str {
        directory_name(&self.raw)
    }
}

impl TryFrom<String> for RepositoryRef {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Substring after the last `/`, minus a trailing `.<extension>`.
///
/// Only the last extension goes: `a.b.git` gives `a.b`, the folder `git clone`
/// creates, not the `a` a cut at the first dot would give.
pub fn directory_name(link: &str) -> &str {
    let segment = match link.rfind('/') {
        Some(idx) => &link[idx + 1..],
        None => link,
    };
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}

/// A named, ordered list of repositories synced together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryGroup {
    pub name: String,
    #[serde(default)]
    pub repositories: Vec<RepositoryRef>,
}

/// All repository groups, in sync order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RepositoryManifest {
    #[serde(rename = "group", default)]
    pub groups: Vec<RepositoryGroup>,
}

const STUDENT_REPOSITORIES: &[&str] = &[
    "https://github.com/KurtDankovich/360-kurt-dankovich.git",
    "https://github.com/BryanGabe00/360-bryan-gabe",
    "https://github.com/RichGol/360-richard-goluszka",
    "https://github.com/mcclint50/360-colin-mcclintic.git",
    "https://github.com/JuanMoncada23/360-juan-moncada.git",
    "https://github.com/BrennanP01/360-brennan-price.git",
    "https://github.com/mrodriguezdelcorral/360-Maria-Rodriguez.git",
];

const SPRINT_3_TEAM_REPOSITORIES: &[&str] = &[
    "https://github.com/mcclint50/360-Mongooses.git",
    "https://github.com/BrennanP01/360-gloriousKenobis.git",
    "https://github.com/JuanMoncada23/360-RedDragons.git",
];

const SPRINT_4_TEAM_REPOSITORIES: &[&str] = &[
    // Mongooses
    "https://github.com/mcclint50/360-Mongooses.git",
    // RedDragons
    "https://github.com/BryanGabe00/QuizMaster.git",
    // GloriousKenobis
    "https://github.com/BrennanP01/360-gloriousKenobis.git",
];

impl RepositoryManifest {
    /// The course's hard-coded student and team repositories.
    pub fn builtin() -> Result<Self, AppError> {
        let sections = [
            ("Student Repositories", STUDENT_REPOSITORIES),
            ("Sprint 3 Team Repositories", SPRINT_3_TEAM_REPOSITORIES),
            ("Sprint 4 Team Repositories", SPRINT_4_TEAM_REPOSITORIES),
        ];

        let groups = sections
            .into_iter()
            .map(|(name, links)| -> Result<RepositoryGroup, AppError> {
                let repositories = links
                    .iter()
                    .map(|link| RepositoryRef::parse(link))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RepositoryGroup { name: name.to_string(), repositories })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    pub fn repository_count(&self) -> usize {
        self.groups.iter().map(|group| group.repositories.len()).sum()
    }
}
