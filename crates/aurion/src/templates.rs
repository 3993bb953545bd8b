use aurion_core::AurionError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Hand-written starter contracts. Every template parses cleanly and passes the pattern scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    #[default]
    Token,
    Nft,
    Vault,
    Dao,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [Self::Token, Self::Nft, Self::Vault, Self::Dao];

    pub fn source(&self) -> &'static str {
        match self {
            Self::Token => include_str!("../templates/token.aur"),
            Self::Nft => include_str!("../templates/nft.aur"),
            Self::Vault => include_str!("../templates/vault.aur"),
            Self::Dao => include_str!("../templates/dao.aur"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Nft => "nft",
            Self::Vault => "vault",
            Self::Dao => "dao",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = AurionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" | "erc20" => Ok(Self::Token),
            "nft" | "erc721" => Ok(Self::Nft),
            "vault" | "staking" => Ok(Self::Vault),
            "dao" | "governance" => Ok(Self::Dao),
            _ => Err(AurionError::UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template text for a tag. Unrecognized tags get the token template.
pub fn generate_premium_template(kind: &str) -> String {
    let template = kind.parse::<TemplateKind>().unwrap_or_else(|e| {
        debug!(error = %e, "falling back to token template");
        TemplateKind::Token
    });
    template.source().to_string()
}
