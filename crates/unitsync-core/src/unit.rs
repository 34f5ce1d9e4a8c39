use std::fmt;

use anyhow::{anyhow, Result};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Service,
    Socket,
    Timer,
    Path,
    Target,
}

impl UnitKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "service" => Some(Self::Service),
            "socket" => Some(Self::Socket),
            "timer" => Some(Self::Timer),
            "path" => Some(Self::Path),
            "target" => Some(Self::Target),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Socket => "socket",
            Self::Timer => "timer",
            Self::Path => "path",
            Self::Target => "target",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReference {
    name: String,
    kind: UnitKind,
}

impl UnitReference {
    pub fn new(name: &str, kind: UnitKind) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(anyhow!("unit name must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            kind,
        })
    }

    pub fn parse(value: &str) -> Result<Self> {
        let Some((name, kind_token)) = value.rsplit_once('.') else {
            return Err(anyhow!(
                "unit reference '{value}' is missing a kind suffix (expected name.kind)"
            ));
        };
        if name.trim().is_empty() {
            return Err(anyhow!("unit reference '{value}' has an empty name"));
        }
        let Some(kind) = UnitKind::parse(kind_token) else {
            return Err(anyhow!(
                "unit reference '{value}' has unknown kind '{kind_token}'"
            ));
        };
        Self::new(name, kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn unit_file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.as_str())
    }
}

impl fmt::Display for UnitReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.kind.as_str())
    }
}

impl Serialize for UnitReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.unit_file_name())
    }
}

impl<'de> Deserialize<'de> for UnitReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
