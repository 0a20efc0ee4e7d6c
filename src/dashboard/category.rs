use serde::{Deserialize, Serialize};

/// Closed classification for expenses; anything unrecognized buckets into
/// [`ExpenseCategory::SemCategoria`] rather than raising.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    #[serde(rename = "INSUMOS")]
    Insumos,
    #[serde(rename = "FIXAS")]
    Fixas,
    #[serde(rename = "VARIÁVEIS")]
    Variaveis,
    #[serde(rename = "ATRASADOS")]
    Atrasados,
    #[serde(rename = "RETIRADAS")]
    Retiradas,
    #[serde(rename = "SEM_CATEGORIA")]
    SemCategoria,
}

impl ExpenseCategory {
    /// Normalizes a free-text category. Total function: empty, missing, and
    /// unknown inputs all land in `SemCategoria`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ExpenseCategory::SemCategoria;
        };
        match raw.trim().to_uppercase().as_str() {
            "INSUMOS" => ExpenseCategory::Insumos,
            "FIXAS" => ExpenseCategory::Fixas,
            // The backend holds both spellings; treat the accentless form
            // as the same bucket.
            "VARIÁVEIS" | "VARIAVEIS" => ExpenseCategory::Variaveis,
            "ATRASADOS" => ExpenseCategory::Atrasados,
            "RETIRADAS" => ExpenseCategory::Retiradas,
            _ => ExpenseCategory::SemCategoria,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Insumos => "INSUMOS",
            ExpenseCategory::Fixas => "FIXAS",
            ExpenseCategory::Variaveis => "VARIÁVEIS",
            ExpenseCategory::Atrasados => "ATRASADOS",
            ExpenseCategory::Retiradas => "RETIRADAS",
            ExpenseCategory::SemCategoria => "SEM_CATEGORIA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_accentless_forms_match() {
        assert_eq!(ExpenseCategory::parse(Some("insumos")), ExpenseCategory::Insumos);
        assert_eq!(
            ExpenseCategory::parse(Some("variaveis")),
            ExpenseCategory::Variaveis
        );
        assert_eq!(
            ExpenseCategory::parse(Some(" VARIÁVEIS ")),
            ExpenseCategory::Variaveis
        );
    }

    #[test]
    fn unknown_missing_and_empty_bucket_into_sem_categoria() {
        assert_eq!(ExpenseCategory::parse(Some("outros")), ExpenseCategory::SemCategoria);
        assert_eq!(ExpenseCategory::parse(Some("")), ExpenseCategory::SemCategoria);
        assert_eq!(ExpenseCategory::parse(None), ExpenseCategory::SemCategoria);
    }
}
