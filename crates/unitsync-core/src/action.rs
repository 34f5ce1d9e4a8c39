#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Configure,
    Install,
    Upgrade,
    Remove,
    Deconfigure,
    Purge,
}

impl LifecycleAction {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "configure" => Some(Self::Configure),
            "install" => Some(Self::Install),
            "upgrade" => Some(Self::Upgrade),
            "remove" => Some(Self::Remove),
            "deconfigure" => Some(Self::Deconfigure),
            "purge" => Some(Self::Purge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::Install => "install",
            Self::Upgrade => "upgrade",
            Self::Remove => "remove",
            Self::Deconfigure => "deconfigure",
            Self::Purge => "purge",
        }
    }

    pub fn changes_unit_state(&self) -> bool {
        matches!(self, Self::Remove | Self::Purge)
    }
}
