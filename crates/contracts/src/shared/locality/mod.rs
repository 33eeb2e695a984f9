//! Records of the government locality service (IBGE `localidades` API).
//!
//! Only the fields the address form reads are declared; everything else
//! in the response is ignored by serde.

use serde::{Deserialize, Serialize};

/// Элемент ответа `GET estados`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UfResponse {
    pub sigla: String,
}

/// Элемент ответа `GET estados/{uf}/municipios`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityResponse {
    pub nome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_response_ignores_nested_fields() {
        let json = r#"[
            {"id":35,"sigla":"SP","nome":"São Paulo","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}},
            {"id":33,"sigla":"RJ","nome":"Rio de Janeiro","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}
        ]"#;
        let ufs: Vec<UfResponse> = serde_json::from_str(json).unwrap();
        let siglas: Vec<&str> = ufs.iter().map(|u| u.sigla.as_str()).collect();
        assert_eq!(siglas, vec!["SP", "RJ"]);
    }

    #[test]
    fn test_city_response() {
        let json = r#"[{"id":3509502,"nome":"Campinas"},{"id":3550308,"nome":"São Paulo"}]"#;
        let cities: Vec<CityResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(cities[0].nome, "Campinas");
        assert_eq!(cities[1].nome, "São Paulo");
    }
}
