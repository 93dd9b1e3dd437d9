//! Target audience value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidAudienceError;

/// All available audiences
pub const ALL_AUDIENCES: &[Audience] = &[Audience::General, Audience::Youth];

/// Congregation the sermon is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    General,
    Youth,
}

impl Audience {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::General => "Umum - Dewasa dan keluarga",
            Self::Youth => "Pemuda - Remaja dan dewasa muda",
        }
    }

    /// Get the audience description injected into the prompt
    pub const fn description(&self) -> &'static str {
        match self {
            Self::General => "Dewasa dan keluarga dari semua usia dalam jemaat gereja umum. Perlu aplikasi praktis yang relevan dengan kehidupan sehari-hari, pekerjaan, keluarga, dan masyarakat.",
            Self::Youth => "Remaja dan dewasa muda, usia 13-25 tahun. Perlu aplikasi yang relevan dengan kehidupan sekolah/kampus, pencarian identitas, hubungan dengan teman sebaya, dan penggunaan teknologi.",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Youth => "youth",
        }
    }
}

impl FromStr for Audience {
    type Err = InvalidAudienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "youth" => Ok(Self::Youth),
            _ => Err(InvalidAudienceError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
