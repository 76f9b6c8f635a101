use serde::{Deserialize, Serialize};

/// Category the service uses for emails that need action.
pub const PRODUCTIVE_CATEGORY: &str = "Produtivo";

/// Classification payload returned by `POST /analysis`, displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,
    pub category: String,
    #[serde(alias = "detail")]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Danger,
}

impl AnalysisResult {
    pub fn badge_style(&self) -> BadgeStyle {
        if self.category == PRODUCTIVE_CATEGORY {
            BadgeStyle::Primary
        } else {
            BadgeStyle::Danger
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: &str) -> AnalysisResult {
        AnalysisResult { success: true, category: category.into(), details: String::new(), message: None }
    }

    #[test]
    fn only_produtivo_gets_primary_badge() {
        assert_eq!(result("Produtivo").badge_style(), BadgeStyle::Primary);
        assert_eq!(result("Improdutivo").badge_style(), BadgeStyle::Danger);
        assert_eq!(result("produtivo").badge_style(), BadgeStyle::Danger);
        assert_eq!(result("").badge_style(), BadgeStyle::Danger);
    }

    #[test]
    fn decodes_service_payload() {
        let json = r#"{"success":true,"category":"Produtivo","details":"looks fine","message":"ok"}"#;
        let parsed: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category, "Produtivo");
        assert_eq!(parsed.details, "looks fine");
        assert_eq!(parsed.message.as_deref(), Some("ok"));
    }

    #[test]
    fn accepts_detail_alias_and_missing_optionals() {
        let json = r#"{"category":"Improdutivo","detail":"sem acao"}"#;
        let parsed: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.details, "sem acao");
        assert_eq!(parsed.message, None);
    }
}
